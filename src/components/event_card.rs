//! Card for an event in sidebars and hotel pages.

#[cfg(test)]
#[path = "event_card_test.rs"]
mod event_card_test;

use leptos::prelude::*;

use crate::net::types::Event;

/// Price label: `"Free"` for zero, `"LKR <n>"` otherwise.
#[must_use]
pub fn price_label(price: f64) -> String {
    if price > 0.0 {
        format!("LKR {price}")
    } else {
        "Free".to_owned()
    }
}

/// A compact event card. When `on_details` is provided, a "View Details"
/// button hands the event id back to the caller.
#[component]
pub fn EventCard(
    event: Event,
    #[prop(into, optional)] on_details: Option<Callback<String>>,
) -> impl IntoView {
    let id = event.id.clone();
    let venue = event.location.venue.clone();
    let start_time = event.start_time.clone();

    view! {
        <div class="event-card">
            <h5 class="event-card__title">{event.title.clone()}</h5>

            <Show when={
                let venue = venue.clone();
                move || !venue.is_empty()
            }>
                <div class="event-card__row">
                    <span class="event-card__icon">"📍"</span>
                    <span>{venue.clone()}</span>
                </div>
            </Show>

            <Show when={
                let start_time = start_time.clone();
                move || !start_time.is_empty()
            }>
                <div class="event-card__row">
                    <span class="event-card__icon">"🕐"</span>
                    <span>{start_time.clone()}</span>
                </div>
            </Show>

            <div class="event-card__row event-card__price">
                {price_label(event.price)}
            </div>

            {on_details.map(|callback| {
                view! {
                    <button
                        class="btn btn--primary event-card__details"
                        on:click=move |_| callback.run(id.clone())
                    >
                        "View Details"
                    </button>
                }
            })}
        </div>
    }
}
