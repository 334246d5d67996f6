//! Create/edit form for a hotel profile. The same form serves both routes:
//! `/admin/hotels/new` and `/admin/hotels/:id`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::ImageUpload;
use crate::components::toaster::show_toast;
use crate::net::api::ApiClient;
use crate::net::types::HotelDraft;
use crate::state::toast::{ToastKind, ToastState};

/// Hotel form page.
#[component]
pub fn HotelFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let editing_id = Memo::new(move |_| params.read().get("id"));
    let draft = RwSignal::new(HotelDraft::default());
    let image_url = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let prefetched = RwSignal::new(false);

    // Prefill when editing an existing hotel.
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
                    match api.my_hotel(&id).await {
                        Ok(hotel) => {
                            let prefill = HotelDraft::from_hotel(&hotel);
                            let _ = image_url.try_set(prefill.image_url.clone());
                            let _ = draft.try_set(prefill);
                        }
                        Err(_) => {
                            show_toast(toasts, ToastKind::Error, "Failed to load hotel data");
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

    let cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/admin/dashboard", NavigateOptions::default())
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut payload = draft.get_untracked();
                payload.image_url = image_url.get_untracked();

                let result = match editing_id.get_untracked() {
                    Some(id) => api.update_hotel(&id, &payload).await.map(|_| "Hotel updated successfully!"),
                    None => api.create_hotel(&payload).await.map(|_| "Hotel created successfully!"),
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
                            err.user_message("Failed to save hotel"),
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
    };

    view! {
        <div class="form-page">
            <h2>
                {move || {
                    if editing_id.get().is_some() {
                        "Edit Hotel"
                    } else {
                        "Create New Hotel"
                    }
                }}
            </h2>

            <form class="form" on:submit=submit>
                <ImageUpload value=image_url label="Hotel Image"/>

                <label class="form__label">
                    "Hotel Name *"
                    <input
                        class="form__input"
                        type="text"
                        required
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            draft.update(|d| d.name = event_target_value(&ev));
                        }
                    />
                </label>

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

                <div class="form__grid">
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

                <label class="form__label">
                    "Address"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || draft.get().location.address
                        on:input=move |ev| {
                            draft.update(|d| d.location.address = event_target_value(&ev));
                        }
                    />
                </label>

                <div class="form__grid">
                    <label class="form__label">
                        "Phone"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| {
                                draft.update(|d| d.phone = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| {
                                draft.update(|d| d.email = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form__grid">
                    <label class="form__label">
                        "Website URL"
                        <input
                            class="form__input"
                            type="url"
                            prop:value=move || draft.get().website_url
                            on:input=move |ev| {
                                draft.update(|d| d.website_url = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Booking URL"
                        <input
                            class="form__input"
                            type="url"
                            prop:value=move || draft.get().booking_url
                            on:input=move |ev| {
                                draft.update(|d| d.booking_url = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" prop:disabled=move || saving.get()>
                        {move || {
                            if saving.get() {
                                "Saving...".to_owned()
                            } else if editing_id.get().is_some() {
                                "Update Hotel".to_owned()
                            } else {
                                "Create Hotel".to_owned()
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
