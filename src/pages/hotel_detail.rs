//! Public hotel profile page: the hotel record plus its upcoming events.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::event_card::EventCard;
use crate::components::footer::Footer;
use crate::net::api::ApiClient;
use crate::net::types::{EventFilters, Hotel};
use crate::util::calendar;

/// Hotel profile page for `/hotel/:id`.
#[component]
pub fn HotelDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let hotel_id = move || params.read().get("id").unwrap_or_default();

    let hotel = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = hotel_id();
            async move { api.hotel(&id).await }
        }
    });

    let events = LocalResource::new(move || {
        let api = api.clone();
        let filters = EventFilters {
            hotel_id: Some(hotel_id()),
            from: calendar::today().map(|day| day.format("%Y-%m-%d").to_string()),
            ..EventFilters::default()
        };
        async move { api.events(&filters).await }
    });

    view! {
        <div class="hotel-page">
            <header class="hotel-page__topbar">
                <a href="/" class="hotel-page__back">"← Back to events"</a>
            </header>

            <Suspense fallback=move || {
                view! {
                    <div class="hotel-page__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }>
                {move || {
                    hotel
                        .get()
                        .map(|outcome| match outcome {
                            Ok(hotel) => view! { <HotelProfile hotel=hotel/> }.into_any(),
                            Err(_) => view! {
                                <div class="hotel-page__missing">
                                    <h2>"Hotel not found"</h2>
                                    <p>"The hotel you are looking for does not exist."</p>
                                    <a class="btn btn--primary" href="/">"Browse events"</a>
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>

            <section class="hotel-page__events">
                <h3>
                    {move || {
                        let count = events
                            .get()
                            .and_then(Result::ok)
                            .map(|list| list.len())
                            .unwrap_or_default();
                        format!("📅 Upcoming Events ({count})")
                    }}
                </h3>
                {move || {
                    events.get().map(|outcome| {
                        let list = outcome.unwrap_or_default();
                        if list.is_empty() {
                            view! {
                                <p class="home__muted">"No upcoming events for this hotel."</p>
                            }
                            .into_any()
                        } else {
                            list.into_iter()
                                .map(|event| view! { <EventCard event=event/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    })
                }}
            </section>

            <Footer/>
        </div>
    }
}

#[component]
fn HotelProfile(hotel: Hotel) -> impl IntoView {
    view! {
        <section class="hotel-page__profile">
            {hotel.image_url.clone().map(|url| {
                view! { <img class="hotel-page__image" src=url alt=hotel.name.clone()/> }
            })}
            <h2>{hotel.name.clone()}</h2>
            <p class="home__muted">{hotel.description.clone()}</p>

            <div class="hotel-page__meta">
                <p>
                    "📍 "
                    {format!("{}, {}", hotel.location.city, hotel.location.region)}
                </p>
                <Show when={
                    let address = hotel.location.address.clone();
                    move || !address.is_empty()
                }>
                    <p class="home__muted">{hotel.location.address.clone()}</p>
                </Show>
                {hotel.phone.clone().map(|phone| {
                    let href = format!("tel:{phone}");
                    view! { <a href=href>"📞 " {phone}</a> }
                })}
            </div>

            {hotel.booking_url.clone().map(|url| {
                view! {
                    <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                        "Book Now"
                    </a>
                }
            })}
        </section>
    }
}
