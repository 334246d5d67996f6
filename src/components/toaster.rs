//! Toast notifications.
//!
//! [`ToastState`] lives in a context signal; [`show_toast`] pushes a
//! message and schedules its dismissal. The stack renders top-right and a
//! click dismisses early.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Duration a toast stays visible.
#[cfg(feature = "csr")]
const TOAST_MILLIS: u64 = 3500;

/// Push a notification and schedule its timed dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts
        .try_update(|state| state.push(kind, message))
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MILLIS)).await;
            let _ = toasts.try_update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Fixed-position toast stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    let _ = toasts.try_update(|state| state.dismiss(&id));
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
