//! Combined event + hotel detail modal.
//!
//! Driven by a shared `RwSignal<Option<String>>` holding the selected event
//! id. Each id change starts a ticketed fetch through [`DetailState`];
//! responses for superseded ids are discarded, so rapid navigation between
//! events never shows a bundle for an id that is no longer selected.

use leptos::prelude::*;

use crate::components::event_card::price_label;
use crate::net::api::ApiClient;
use crate::net::types::{Event, Hotel};
use crate::state::detail::{DetailPhase, DetailState};

/// Modal showing the aggregated bundle for `selected`; closed when `None`.
#[component]
pub fn EventHotelDetailsModal(selected: RwSignal<Option<String>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let detail = RwSignal::new(DetailState::default());

    Effect::new(move |_| {
        match selected.get() {
            Some(event_id) => {
                let ticket = detail.try_update(DetailState::begin).unwrap_or_default();
                #[cfg(feature = "csr")]
                {
                    let api = api.clone();
                    leptos::task::spawn_local(async move {
                        let outcome = api.event_details(&event_id).await;
                        // try_update: discard silently if the modal is gone.
                        let _ = detail.try_update(|state| state.finish(ticket, outcome));
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&api, event_id, ticket);
                }
            }
            None => {
                let _ = detail.try_update(|state| {
                    state.reset();
                });
            }
        }
    });

    let close = move |_| selected.set(None);

    view! {
        <Show when=move || selected.get().is_some()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <header class="modal__header">
                        <div>
                            <h2>
                                {move || match detail.get().phase {
                                    DetailPhase::Ready(bundle) => bundle.event.title,
                                    _ => "Loading...".to_owned(),
                                }}
                            </h2>
                            <p class="modal__subtitle">
                                {move || match detail.get().phase {
                                    DetailPhase::Ready(bundle) => bundle.event.date,
                                    _ => String::new(),
                                }}
                            </p>
                        </div>
                        <button class="modal__close" on:click=close>"✕"</button>
                    </header>

                    <div class="modal__body">
                        {move || match detail.get().phase {
                            DetailPhase::Idle | DetailPhase::Loading => view! {
                                <div class="modal__spinner">
                                    <div class="spinner"></div>
                                </div>
                            }
                            .into_any(),
                            DetailPhase::Failed => view! {
                                <p class="modal__empty">"No data found"</p>
                            }
                            .into_any(),
                            DetailPhase::Ready(bundle) => view! {
                                <EventSection event=bundle.event.clone()/>
                                {bundle
                                    .hotel
                                    .map(|hotel| view! { <HotelSection hotel=hotel/> })}
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn EventSection(event: Event) -> impl IntoView {
    let has_times = !event.start_time.is_empty() && !event.end_time.is_empty();
    let times = format!("{} - {}", event.start_time, event.end_time);
    let description = if event.description.is_empty() {
        "No description available".to_owned()
    } else {
        event.description.clone()
    };

    view! {
        {event.image_url.clone().map(|url| {
            view! { <img class="modal__image" src=url alt=event.title.clone()/> }
        })}

        <section class="modal__section">
            <h3>"Event Details"</h3>
            <p>{description}</p>
            <div class="modal__meta">
                <Show when=move || has_times>
                    <span>"🕐 " {times.clone()}</span>
                </Show>
                <span>{price_label(event.price)}</span>
            </div>
        </section>

        <section class="modal__section">
            <h3>"Event Location"</h3>
            <p class="modal__venue">{event.location.venue.clone()}</p>
            <p class="modal__muted">
                {format!("{}, {}", event.location.city, event.location.region)}
            </p>
        </section>
    }
}

#[component]
fn HotelSection(hotel: Hotel) -> impl IntoView {
    let directions = format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&format!(
            "{}, {}, {}",
            hotel.location.address, hotel.location.city, hotel.location.region
        ))
    );

    view! {
        <section class="modal__section">
            <h3>"Hotel Information"</h3>
            {hotel.image_url.clone().map(|url| {
                view! { <img class="modal__image" src=url alt=hotel.name.clone()/> }
            })}
            <p class="modal__venue">{hotel.name.clone()}</p>
            <p class="modal__muted">{hotel.description.clone()}</p>

            <div class="modal__contact">
                <p>{hotel.location.address.clone()}</p>
                <p>{format!("{}, {}", hotel.location.city, hotel.location.region)}</p>
                {hotel.phone.clone().map(|phone| {
                    let href = format!("tel:{phone}");
                    view! { <a href=href>{phone}</a> }
                })}
                {hotel.email.clone().map(|email| {
                    let href = format!("mailto:{email}");
                    view! { <a href=href>{email}</a> }
                })}
            </div>

            <div class="modal__links">
                {hotel.website_url.clone().map(|url| {
                    view! {
                        <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                            "Website"
                        </a>
                    }
                })}
                {hotel.booking_url.clone().map(|url| {
                    view! {
                        <a class="btn btn--success" href=url target="_blank" rel="noopener noreferrer">
                            "Book"
                        </a>
                    }
                })}
                <a class="btn" href=directions target="_blank" rel="noopener noreferrer">
                    "Directions"
                </a>
            </div>
        </section>
    }
}
