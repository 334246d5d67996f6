//! Owner dashboard: summary stats plus hotels with their events.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::Event;
use crate::state::session::Session;

/// Bucket events by their hotel id.
#[must_use]
pub fn group_events_by_hotel(events: &[Event]) -> HashMap<String, Vec<Event>> {
    let mut grouped: HashMap<String, Vec<Event>> = HashMap::new();
    for event in events {
        grouped
            .entry(event.hotel_id.id().to_owned())
            .or_default()
            .push(event.clone());
    }
    grouped
}

/// Dashboard page at `/admin/dashboard`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();

    let hotels = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_hotels().await }
        }
    });
    let events = LocalResource::new(move || {
        let api = api.clone();
        async move { api.my_events().await }
    });

    let loading = move || hotels.get().is_none() || events.get().is_none();
    let loaded_hotels = move || {
        hotels
            .get()
            .map(|outcome| outcome.unwrap_or_default())
            .unwrap_or_default()
    };
    let loaded_events = move || {
        events
            .get()
            .map(|outcome| outcome.unwrap_or_default())
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="home__muted">
                        {move || {
                            let name = session
                                .user()
                                .map(|user| user.name)
                                .filter(|name| !name.is_empty())
                                .unwrap_or_else(|| "Admin".to_owned());
                            format!("Welcome back, {name}!")
                        }}
                    </p>
                </div>
                <div class="dashboard__actions">
                    <a class="btn btn--primary" href="/admin/hotels/new">"+ Add Hotel"</a>
                    <a class="btn btn--success" href="/admin/events/new">"+ Add Event"</a>
                </div>
            </header>

            <Show
                when=move || !loading()
                fallback=|| {
                    view! {
                        <div class="dashboard__loading">
                            <div class="spinner"></div>
                        </div>
                    }
                }
            >
                <div class="dashboard__stats">
                    <div class="stat-card stat-card--hotels">
                        <p>"Total Hotels"</p>
                        <span>{move || loaded_hotels().len()}</span>
                    </div>
                    <div class="stat-card stat-card--events">
                        <p>"Total Events"</p>
                        <span>{move || loaded_events().len()}</span>
                    </div>
                    <div class="stat-card stat-card--published">
                        <p>"Published Events"</p>
                        <span>
                            {move || {
                                loaded_events().iter().filter(|event| event.is_published).count()
                            }}
                        </span>
                    </div>
                </div>

                <section class="dashboard__hotels">
                    <div class="dashboard__section-head">
                        <h2>
                            {move || format!("My Hotels ({})", loaded_hotels().len())}
                        </h2>
                        <a class="btn btn--primary" href="/admin/hotels/new">"+ Add New Hotel"</a>
                    </div>

                    {move || {
                        let hotel_list = loaded_hotels();
                        if hotel_list.is_empty() {
                            view! {
                                <div class="dashboard__empty">
                                    <p>"No hotels created yet"</p>
                                    <p class="home__muted">
                                        "Create your first hotel to start adding events"
                                    </p>
                                    <a class="btn btn--primary" href="/admin/hotels/new">
                                        "Create Hotel"
                                    </a>
                                </div>
                            }
                            .into_any()
                        } else {
                            let grouped = group_events_by_hotel(&loaded_events());
                            view! {
                                <div class="dashboard__grid">
                                    {hotel_list
                                        .into_iter()
                                        .map(|hotel| {
                                            let hotel_events = grouped
                                                .get(&hotel.id)
                                                .cloned()
                                                .unwrap_or_default();
                                            let edit = format!("/admin/hotels/{}", hotel.id);
                                            let add_event = format!(
                                                "/admin/events/new?hotelId={}",
                                                hotel.id
                                            );
                                            view! {
                                                <div class="hotel-tile">
                                                    {hotel.image_url.clone().map(|url| {
                                                        view! {
                                                            <img
                                                                class="hotel-tile__image"
                                                                src=url
                                                                alt=hotel.name.clone()
                                                            />
                                                        }
                                                    })}
                                                    <div class="hotel-tile__body">
                                                        <h3>{hotel.name.clone()}</h3>
                                                        <p class="home__muted">
                                                            {format!(
                                                                "{}, {}",
                                                                hotel.location.city,
                                                                hotel.location.region,
                                                            )}
                                                        </p>
                                                        <p class="hotel-tile__count">
                                                            {format!("{} event(s)", hotel_events.len())}
                                                        </p>
                                                        <ul class="hotel-tile__events">
                                                            {hotel_events
                                                                .iter()
                                                                .take(3)
                                                                .map(|event| {
                                                                    view! {
                                                                        <li>
                                                                            {event.title.clone()}
                                                                            <span class="home__muted">
                                                                                {format!(
                                                                                    " — {}",
                                                                                    event
                                                                                        .date
                                                                                        .chars()
                                                                                        .take(10)
                                                                                        .collect::<String>(),
                                                                                )}
                                                                            </span>
                                                                        </li>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                        <div class="hotel-tile__actions">
                                                            <a class="btn" href=edit>"Edit"</a>
                                                            <a class="btn btn--success" href=add_event>
                                                                "+ Event"
                                                            </a>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </section>
            </Show>
        </div>
    }
}
