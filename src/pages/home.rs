//! Public landing page: hero, search and city filters, the event calendar,
//! and a "Popular Events" sidebar. Event cards open the combined
//! event+hotel detail modal.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::calendar_view::CalendarView;
use crate::components::chat_bot::ChatBot;
use crate::components::event_card::EventCard;
use crate::components::event_hotel_details_modal::EventHotelDetailsModal;
use crate::components::footer::Footer;
use crate::net::api::ApiClient;
use crate::net::types::{Event, EventFilters};

/// Events matching the search term (title or city, case-insensitive) and
/// the selected city chip (`"all"` disables the chip filter).
#[must_use]
pub fn filter_events(events: &[Event], search: &str, city: &str) -> Vec<Event> {
    let needle = search.to_lowercase();
    events
        .iter()
        .filter(|event| {
            let matches_search = needle.is_empty()
                || event.title.to_lowercase().contains(&needle)
                || event.location.city.to_lowercase().contains(&needle);
            let matches_city = city == "all" || event.location.city == city;
            matches_search && matches_city
        })
        .cloned()
        .collect()
}

/// Distinct cities across the loaded events, in first-seen order.
#[must_use]
pub fn cities_of(events: &[Event]) -> Vec<String> {
    let mut cities = Vec::new();
    for event in events {
        let city = &event.location.city;
        if !city.is_empty() && !cities.iter().any(|known| known == city) {
            cities.push(city.clone());
        }
    }
    cities
}

/// The public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let search = RwSignal::new(String::new());
    let selected_city = RwSignal::new("all".to_owned());
    let show_filters = RwSignal::new(false);
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
    let filtered = move || filter_events(&loaded(), &search.get(), &selected_city.get());

    let scroll_to_calendar = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(section) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id("calendar-section"))
            {
                section.scroll_into_view();
            }
        }
    };

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Sri Lanka Event Calendar"</h1>
                <p>
                    "Explore hotel events, cultural festivals, and unforgettable \
                     experiences across Sri Lanka."
                </p>
                <div class="hero__actions">
                    <a class="btn" href="tel:+94112345678">"📞 Call"</a>
                    <a class="btn" href="mailto:info@srilankaevents.lk">"✉ Email"</a>
                    <button class="btn btn--accent" on:click=scroll_to_calendar>
                        "📅 View Calendar"
                    </button>
                </div>
            </section>

            <section class="search-panel">
                <div class="search-panel__row">
                    <input
                        class="search-panel__input"
                        type="text"
                        placeholder="Search events or cities..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=move |_| show_filters.update(|open| *open = !*open)>
                        "Filters"
                    </button>
                </div>

                <Show when=move || show_filters.get()>
                    <div class="search-panel__filters">
                        <div class="search-panel__filters-head">
                            <h3>"Filter by City"</h3>
                            <button class="modal__close" on:click=move |_| show_filters.set(false)>
                                "✕"
                            </button>
                        </div>
                        <div class="search-panel__chips">
                            {move || {
                                let mut chips = vec!["all".to_owned()];
                                chips.extend(cities_of(&loaded()));
                                chips
                                    .into_iter()
                                    .map(|city| {
                                        let label = if city == "all" {
                                            "All Cities".to_owned()
                                        } else {
                                            city.clone()
                                        };
                                        let chip = city.clone();
                                        view! {
                                            <button
                                                class=move || {
                                                    if selected_city.get() == chip {
                                                        "chip chip--active"
                                                    } else {
                                                        "chip"
                                                    }
                                                }
                                                on:click=move |_| selected_city.set(city.clone())
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                </Show>
            </section>

            <main class="home__main">
                <section id="calendar-section" class="home__calendar">
                    <h2>"📅 Event Calendar"</h2>
                    <CalendarView/>
                </section>

                <aside class="home__sidebar">
                    <h3>"🔥 Popular Events"</h3>
                    {move || {
                        if events.get().is_none() {
                            view! { <p class="home__muted">"Loading events..."</p> }.into_any()
                        } else {
                            let top: Vec<Event> = filtered().into_iter().take(3).collect();
                            if top.is_empty() {
                                view! { <p class="home__muted">"No events found"</p> }.into_any()
                            } else {
                                top.into_iter()
                                    .map(|event| {
                                        view! {
                                            <EventCard
                                                event=event
                                                on_details=Callback::new(move |id| {
                                                    selected_event.set(Some(id));
                                                })
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }
                    }}
                </aside>
            </main>

            <EventHotelDetailsModal selected=selected_event/>
            <ChatBot/>
            <Footer/>
        </div>
    }
}
