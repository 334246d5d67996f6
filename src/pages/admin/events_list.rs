//! Management grid of the owner's events, with confirm-gated delete.

use leptos::prelude::*;

use crate::components::event_card::price_label;
use crate::components::toaster::show_toast;
use crate::net::api::ApiClient;
use crate::state::toast::{ToastKind, ToastState};

/// Events list at `/admin/events`.
#[component]
pub fn EventsListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let events = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_events().await }
        }
    });

    let delete = move |event_id: String| {
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this event?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_event(&event_id).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Event deleted successfully");
                        events.refetch();
                    }
                    Err(err) => {
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            err.user_message("Failed to delete event"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, event_id);
        }
    };

    view! {
        <div class="manage">
            <header class="manage__head">
                <h2>"My Events"</h2>
                <a class="btn btn--success" href="/admin/events/new">"Create New Event"</a>
            </header>

            <Suspense fallback=|| {
                view! {
                    <div class="manage__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }>
                {move || {
                    events.get().map(|outcome| {
                        let list = outcome.unwrap_or_default();
                        if list.is_empty() {
                            view! {
                                <p class="manage__empty">
                                    "No events found. Create your first event to get started."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="manage__grid">
                                    {list
                                        .into_iter()
                                        .map(|event| {
                                            let delete = delete.clone();
                                            let edit = format!("/admin/events/{}", event.id);
                                            let id = event.id.clone();
                                            let status = if event.is_published {
                                                "Published"
                                            } else {
                                                "Draft"
                                            };
                                            view! {
                                                <div class="manage__card">
                                                    {event.image_url.clone().map(|url| {
                                                        view! {
                                                            <img
                                                                class="manage__image"
                                                                src=url
                                                                alt=event.title.clone()
                                                            />
                                                        }
                                                    })}
                                                    <h3>{event.title.clone()}</h3>
                                                    <p class="home__muted manage__desc">
                                                        {event.description.clone()}
                                                    </p>
                                                    <dl class="manage__facts">
                                                        <div>
                                                            <dt>"Date"</dt>
                                                            <dd>
                                                                {event
                                                                    .date
                                                                    .chars()
                                                                    .take(10)
                                                                    .collect::<String>()}
                                                            </dd>
                                                        </div>
                                                        <div>
                                                            <dt>"Time"</dt>
                                                            <dd>
                                                                {format!(
                                                                    "{} - {}",
                                                                    event.start_time,
                                                                    event.end_time,
                                                                )}
                                                            </dd>
                                                        </div>
                                                        <div>
                                                            <dt>"Location"</dt>
                                                            <dd>{event.location.city.clone()}</dd>
                                                        </div>
                                                        <div>
                                                            <dt>"Price"</dt>
                                                            <dd>{price_label(event.price)}</dd>
                                                        </div>
                                                        <div>
                                                            <dt>"Status"</dt>
                                                            <dd>{status}</dd>
                                                        </div>
                                                    </dl>
                                                    <div class="manage__actions">
                                                        <a class="manage__edit" href=edit>"Edit"</a>
                                                        <button
                                                            class="manage__delete"
                                                            on:click=move |_| delete(id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
