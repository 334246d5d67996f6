//! Admin sign-in page.
//!
//! Renders the Google Identity Services button and exchanges its credential
//! through the session controller. A missing OAuth client id is a blocking
//! configuration-error screen, not a crash.

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::config;
use crate::state::toast::{ToastKind, ToastState};

/// Login entry point for `/login`.
#[component]
pub fn LoginPage() -> impl IntoView {
    match config::google_client_id() {
        None => view! { <ConfigurationError/> }.into_any(),
        Some(client_id) => view! { <SignIn client_id=client_id/> }.into_any(),
    }
}

#[component]
fn ConfigurationError() -> impl IntoView {
    view! {
        <div class="login">
            <div class="login__card login__card--error">
                <h1>"⚠ Configuration Error"</h1>
                <p>"EVENTHAVEN_GOOGLE_CLIENT_ID is not set for this build."</p>
                <p class="home__muted">
                    "Add it to the build environment or deployment settings to \
                     enable the admin sign-in."
                </p>
            </div>
        </div>
    }
}

#[component]
fn SignIn(client_id: &'static str) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let button_host = NodeRef::<leptos::html::Div>::new();
    let mounted = RwSignal::new(false);
    let gis_failed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let session = expect_context::<crate::state::session::Session>();
        let api = expect_context::<crate::net::api::ApiClient>();
        let navigate = leptos_router::hooks::use_navigate();

        Effect::new(move |_| {
            if mounted.get() {
                return;
            }
            let Some(host) = button_host.get() else {
                return;
            };
            mounted.set(true);

            let api = api.clone();
            let navigate = navigate.clone();
            let ok = crate::util::google_identity::mount_button(
                &host,
                client_id,
                move |credential| {
                    let api = api.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match session.login(&api, &credential).await {
                            Ok(_) => {
                                show_toast(toasts, ToastKind::Success, "Welcome to EventHaven!");
                                navigate(
                                    "/admin/dashboard",
                                    leptos_router::NavigateOptions {
                                        replace: true,
                                        ..Default::default()
                                    },
                                );
                            }
                            Err(message) => {
                                show_toast(toasts, ToastKind::Error, message);
                            }
                        }
                    });
                },
            );
            gis_failed.set(!ok);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client_id, toasts, mounted);
    }

    view! {
        <div class="login">
            <div class="login__card">
                <div class="login__brand">
                    <h1>"Event" <span class="brand-accent">"Haven"</span></h1>
                    <p>"Event Management Platform"</p>
                </div>

                <h2>"Admin Portal"</h2>
                <p class="home__muted">
                    "Sign in with your Google account to manage your events"
                </p>

                <div class="login__button" node_ref=button_host></div>

                <Show when=move || gis_failed.get()>
                    <p class="login__error">
                        "Google sign-in failed to load. Reload the page and try again."
                    </p>
                </Show>

                <p class="login__terms">
                    "By signing in, you agree to EventHaven's Terms of Service and \
                     Privacy Policy"
                </p>
            </div>
        </div>
    }
}
