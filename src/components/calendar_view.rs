//! Month-grid event calendar.
//!
//! Fetches its own events snapshot (every consumer re-fetches; there is no
//! shared cache), buckets them per day, and opens a day panel listing that
//! day's events. "View Full Details" hands off to the event+hotel modal.

#[cfg(test)]
#[path = "calendar_view_test.rs"]
mod calendar_view_test;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::components::event_card::price_label;
use crate::components::event_hotel_details_modal::EventHotelDetailsModal;
use crate::net::api::ApiClient;
use crate::net::types::{Event, EventFilters};
use crate::util::calendar::{self, Month};

/// Events whose calendar day equals `day`, in fetch order.
#[must_use]
pub fn events_on(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| calendar::event_day(&event.date) == Some(day))
        .cloned()
        .collect()
}

/// The calendar section of the home page.
#[component]
pub fn CalendarView() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let month = RwSignal::new(
        calendar::today().map_or(Month { year: 2026, month: 1 }, Month::of),
    );
    let selected_day = RwSignal::new(None::<NaiveDate>);
    let selected_event = RwSignal::new(None::<String>);

    let events = LocalResource::new(move || {
        let api = api.clone();
        async move { api.events(&EventFilters::default()).await }
    });
    let loaded = move || {
        events
            .get()
            .map(|outcome| outcome.unwrap_or_default())
            .unwrap_or_default()
    };

    view! {
        <div class="calendar">
            <header class="calendar__toolbar">
                <div class="calendar__nav">
                    <button class="btn" on:click=move |_| month.update(|m| *m = m.prev())>
                        "‹"
                    </button>
                    <button class="btn" on:click=move |_| month.update(|m| *m = m.next())>
                        "›"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| {
                            if let Some(today) = calendar::today() {
                                month.set(Month::of(today));
                            }
                        }
                    >
                        "Today"
                    </button>
                </div>
                <h3 class="calendar__title">{move || month.get().title()}</h3>
            </header>

            <Suspense fallback=move || {
                view! {
                    <div class="calendar__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }>
                {move || {
                    let all = loaded();
                    let grid = calendar::month_grid(month.get());
                    view! {
                        <div class="calendar__grid">
                            {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                                .into_iter()
                                .map(|name| view! { <div class="calendar__weekday">{name}</div> })
                                .collect::<Vec<_>>()}
                            {grid
                                .into_iter()
                                .flatten()
                                .map(|cell| day_cell(cell, &all, selected_day))
                                .collect::<Vec<_>>()}
                        </div>
                    }
                }}
            </Suspense>

            <Show when=move || selected_day.get().is_some()>
                <div class="day-panel-backdrop" on:click=move |_| selected_day.set(None)>
                    <aside class="day-panel" on:click=move |ev| ev.stop_propagation()>
                        <header class="day-panel__header">
                            <div>
                                <h3>
                                    {move || {
                                        selected_day.get().map(calendar::long_date).unwrap_or_default()
                                    }}
                                </h3>
                                <p>
                                    {move || {
                                        let count = selected_day
                                            .get()
                                            .map(|day| events_on(&loaded(), day).len())
                                            .unwrap_or_default();
                                        format!("{count} event(s)")
                                    }}
                                </p>
                            </div>
                            <button class="modal__close" on:click=move |_| selected_day.set(None)>
                                "✕"
                            </button>
                        </header>

                        <div class="day-panel__list">
                            {move || {
                                let day_events = selected_day
                                    .get()
                                    .map(|day| events_on(&loaded(), day))
                                    .unwrap_or_default();
                                day_events
                                    .into_iter()
                                    .map(|event| {
                                        let id = event.id.clone();
                                        view! {
                                            <div class="day-panel__event">
                                                <h4>{event.title.clone()}</h4>
                                                <Show when={
                                                    let venue = event.location.venue.clone();
                                                    move || !venue.is_empty()
                                                }>
                                                    <p class="modal__muted">
                                                        {event.location.venue.clone()}
                                                    </p>
                                                </Show>
                                                <div class="day-panel__meta">
                                                    <Show when={
                                                        let start = event.start_time.clone();
                                                        move || !start.is_empty()
                                                    }>
                                                        <span>{event.start_time.clone()}</span>
                                                    </Show>
                                                    <span class="event-card__price">
                                                        {price_label(event.price)}
                                                    </span>
                                                </div>
                                                <button
                                                    class="btn btn--primary day-panel__details"
                                                    on:click=move |_| {
                                                        selected_event.set(Some(id.clone()));
                                                    }
                                                >
                                                    "View Full Details"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </aside>
                </div>
            </Show>

            <EventHotelDetailsModal selected=selected_event/>
        </div>
    }
}

/// One grid cell; clickable when the day has events.
fn day_cell(
    cell: Option<NaiveDate>,
    events: &[Event],
    selected_day: RwSignal<Option<NaiveDate>>,
) -> impl IntoView + use<> {
    match cell {
        None => view! { <div class="calendar__cell calendar__cell--blank"></div> }.into_any(),
        Some(day) => {
            let day_events = events_on(events, day);
            let has_events = !day_events.is_empty();
            let class = if has_events {
                "calendar__cell calendar__cell--active"
            } else {
                "calendar__cell"
            };
            view! {
                <div
                    class=class
                    on:click=move |_| {
                        if has_events {
                            selected_day.set(Some(day));
                        }
                    }
                >
                    <span class="calendar__daynum">{day.day()}</span>
                    {day_events
                        .into_iter()
                        .take(2)
                        .map(|event| {
                            view! { <div class="calendar__chip">{event.title}</div> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
    }
}
