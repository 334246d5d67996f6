//! Create/edit form for an event. Serves `/admin/events/new` (optionally
//! preselecting a hotel via `?hotelId=`) and `/admin/events/:id`.
//!
//! An event cannot exist without a hotel: when the owner has none yet, the
//! form bounces to hotel creation. Selecting a hotel adopts its city and
//! region as the event location defaults.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::image_upload::ImageUpload;
use crate::components::toaster::show_toast;
use crate::net::api::ApiClient;
use crate::net::types::{EventDraft, Hotel};
use crate::state::toast::{ToastKind, ToastState};

/// Selectable event categories.
pub const CATEGORIES: [&str; 8] = [
    "cultural",
    "festival",
    "nightlife",
    "adventure",
    "food",
    "wellness",
    "music",
    "other",
];

/// Event form page.
#[component]
pub fn EventFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let query = use_query_map();

    let editing_id = Memo::new(move |_| params.read().get("id"));
    let draft = RwSignal::new(EventDraft::default());
    let image_url = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let prefetched = RwSignal::new(false);
    let hotels_checked = RwSignal::new(false);

    let hotels = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_hotels().await }
        }
    });
    let hotel_list = move || {
        hotels
            .get()
            .map(|outcome| outcome.unwrap_or_default())
            .unwrap_or_default()
    };

    // React to the loaded hotel list: bounce to hotel creation when the
    // owner has none, otherwise choose the default selection.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if hotels_checked.get() {
                return;
            }
            let Some(outcome) = hotels.get() else {
                return;
            };
            hotels_checked.set(true);

            match outcome {
                Ok(list) if list.is_empty() => {
                    show_toast(toasts, ToastKind::Error, "Please create a hotel profile first");
                    navigate("/admin/hotels/new", NavigateOptions::default());
                }
                Ok(list) => {
                    if draft.get_untracked().hotel_id.is_empty() {
                        let preferred = query
                            .read_untracked()
                            .get("hotelId")
                            .filter(|id| list.iter().any(|hotel| &hotel.id == id));
                        let chosen = preferred.or_else(|| list.first().map(|h| h.id.clone()));
                        if let Some(id) = chosen {
                            draft.update(|d| {
                                d.hotel_id = id.clone();
                                if let Some(hotel) = list.iter().find(|h| h.id == id) {
                                    d.adopt_hotel_location(hotel);
                                }
                            });
                        }
                    }
                }
                Err(_) => {
                    show_toast(toasts, ToastKind::Error, "Failed to load hotels");
                }
            }
        }
    });

    // Prefill when editing an existing event.
    Effect::new({
        let api = api.clone();
        move |_| {
            if prefetched.get() {
                return;
            }
            let Some(id) = editing_id.get() else {
                return;
            };
            prefetched.set(true);

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.event(&id).await {
                        Ok(event) => {
                            let prefill = EventDraft::from_event(&event);
                            let _ = image_url.try_set(prefill.image_url.clone());
                            let _ = draft.try_set(prefill);
                        }
                        Err(_) => {
                            show_toast(toasts, ToastKind::Error, "Failed to load event data");
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, id);
            }
        }
    });

    let on_hotel_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let list: Vec<Hotel> = hotel_list();
        draft.update(|d| {
            d.hotel_id = id.clone();
            if let Some(hotel) = list.iter().find(|h| h.id == id) {
                d.adopt_hotel_location(hotel);
            }
        });
    };

    let submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if draft.get_untracked().hotel_id.is_empty() {
                show_toast(toasts, ToastKind::Error, "Please select a hotel");
                return;
            }
            saving.set(true);

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let mut payload = draft.get_untracked();
                    payload.image_url = image_url.get_untracked();

                    let result = match editing_id.get_untracked() {
                        Some(id) => api
                            .update_event(&id, &payload)
                            .await
                            .map(|_| "Event updated successfully!"),
                        None => api
                            .create_event(&payload)
                            .await
                            .map(|_| "Event created successfully!"),
                    };
                    match result {
                        Ok(message) => {
                            show_toast(toasts, ToastKind::Success, message);
                            navigate("/admin/dashboard", NavigateOptions::default());
                        }
                        Err(err) => {
                            show_toast(
                                toasts,
                                ToastKind::Error,
                                err.user_message("Failed to save event"),
                            );
                            let _ = saving.try_set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &api;
                saving.set(false);
            }
        }
    };

    let cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/admin/dashboard", NavigateOptions::default())
    };

    view! {
        <div class="form-page">
            <h2>
                {move || {
                    if editing_id.get().is_some() {
                        "Edit Event"
                    } else {
                        "Create New Event"
                    }
                }}
            </h2>

            <form class="form" on:submit=submit>
                <label class="form__label">
                    "Select Hotel *"
                    <select
                        class="form__input"
                        required
                        prop:value=move || draft.get().hotel_id
                        on:change=on_hotel_change
                    >
                        <option value="">"-- Select a Hotel --"</option>
                        {move || {
                            hotel_list()
                                .into_iter()
                                .map(|hotel| {
                                    let label = format!(
                                        "{} - {}, {}",
                                        hotel.name,
                                        hotel.location.city,
                                        hotel.location.region,
                                    );
                                    view! { <option value=hotel.id.clone()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                <ImageUpload value=image_url label="Event Image"/>

                <div class="form__grid">
                    <label class="form__label">
                        "Event Title *"
                        <input
                            class="form__input"
                            type="text"
                            required
                            prop:value=move || draft.get().title
                            on:input=move |ev| {
                                draft.update(|d| d.title = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Category"
                        <select
                            class="form__input"
                            prop:value=move || draft.get().category
                            on:change=move |ev| {
                                draft.update(|d| d.category = event_target_value(&ev));
                            }
                        >
                            {CATEGORIES
                                .into_iter()
                                .map(|category| {
                                    view! { <option value=category>{category}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        rows=4
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>

                <div class="form__grid form__grid--three">
                    <label class="form__label">
                        "Date *"
                        <input
                            class="form__input"
                            type="date"
                            required
                            prop:value=move || draft.get().date
                            on:input=move |ev| {
                                draft.update(|d| d.date = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Start Time"
                        <input
                            class="form__input"
                            type="time"
                            prop:value=move || draft.get().start_time
                            on:input=move |ev| {
                                draft.update(|d| d.start_time = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "End Time"
                        <input
                            class="form__input"
                            type="time"
                            prop:value=move || draft.get().end_time
                            on:input=move |ev| {
                                draft.update(|d| d.end_time = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form__grid form__grid--three">
                    <label class="form__label">
                        "Venue *"
                        <input
                            class="form__input"
                            type="text"
                            required
                            prop:value=move || draft.get().location.venue
                            on:input=move |ev| {
                                draft.update(|d| d.location.venue = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "City *"
                        <input
                            class="form__input"
                            type="text"
                            required
                            prop:value=move || draft.get().location.city
                            on:input=move |ev| {
                                draft.update(|d| d.location.city = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Region *"
                        <input
                            class="form__input"
                            type="text"
                            required
                            placeholder="Region/Province"
                            prop:value=move || draft.get().location.region
                            on:input=move |ev| {
                                draft.update(|d| d.location.region = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form__grid">
                    <label class="form__label">
                        "Price (LKR)"
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || draft.get().price.to_string()
                            on:input=move |ev| {
                                let price = event_target_value(&ev).parse().unwrap_or(0.0);
                                draft.update(|d| d.price = price);
                            }
                        />
                        <span class="form__hint">"Enter 0 for free events"</span>
                    </label>
                    <label class="form__label form__label--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().is_published
                            on:change=move |ev| {
                                draft.update(|d| d.is_published = event_target_checked(&ev));
                            }
                        />
                        "Publish Event"
                    </label>
                </div>

                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" prop:disabled=move || saving.get()>
                        {move || {
                            if saving.get() {
                                "Saving...".to_owned()
                            } else if editing_id.get().is_some() {
                                "Update Event".to_owned()
                            } else {
                                "Create Event".to_owned()
                            }
                        }}
                    </button>
                    <button class="btn" type="button" on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
