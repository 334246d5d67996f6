//! Management table of the owner's hotels, with confirm-gated delete.

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::net::api::ApiClient;
use crate::state::toast::{ToastKind, ToastState};

/// Hotels list at `/admin/hotels`.
#[component]
pub fn HotelsListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let hotels = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_hotels().await }
        }
    });

    let delete = move |hotel_id: String| {
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(
                            "Delete this hotel? Its events will no longer be listed.",
                        )
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_hotel(&hotel_id).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Hotel deleted successfully");
                        hotels.refetch();
                    }
                    Err(err) => {
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            err.user_message("Failed to delete hotel"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, hotel_id);
        }
    };

    view! {
        <div class="manage">
            <header class="manage__head">
                <h2>"My Hotels"</h2>
                <a class="btn btn--primary" href="/admin/hotels/new">"Add New Hotel"</a>
            </header>

            <Suspense fallback=|| {
                view! {
                    <div class="manage__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }>
                {move || {
                    hotels.get().map(|outcome| {
                        let list = outcome.unwrap_or_default();
                        if list.is_empty() {
                            view! {
                                <p class="manage__empty">
                                    "No hotels found. Create your first hotel to get started."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <table class="manage__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"City"</th>
                                            <th>"Region"</th>
                                            <th>"Phone"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|hotel| {
                                                let delete = delete.clone();
                                                let edit = format!("/admin/hotels/{}", hotel.id);
                                                let id = hotel.id.clone();
                                                let city = or_na(&hotel.location.city);
                                                let region = or_na(&hotel.location.region);
                                                let phone = or_na(
                                                    hotel.phone.as_deref().unwrap_or(""),
                                                );
                                                view! {
                                                    <tr>
                                                        <td class="manage__name">{hotel.name.clone()}</td>
                                                        <td>{city}</td>
                                                        <td>{region}</td>
                                                        <td>{phone}</td>
                                                        <td>
                                                            <a class="manage__edit" href=edit>"Edit"</a>
                                                            " "
                                                            <button
                                                                class="manage__delete"
                                                                on:click=move |_| delete(id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_owned()
    } else {
        value.to_owned()
    }
}
