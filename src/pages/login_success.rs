//! OAuth redirect landing page.
//!
//! The backend's redirect flow lands here with a `token` query parameter.
//! The token is persisted, the identity behind it is fetched, and the user
//! is sent into the admin panel with a history replace. Landing here
//! without a token just bounces back to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::token;

/// Landing page for `/login-success?token=...`.
#[component]
pub fn LoginSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let handled = RwSignal::new(false);
    let session = expect_context::<crate::state::session::Session>();
    let api = expect_context::<crate::net::api::ApiClient>();

    Effect::new(move |_| {
        if handled.get() {
            return;
        }
        handled.set(true);

        match query.read_untracked().get("token") {
            Some(value) if !value.is_empty() => {
                token::save(&value);
                #[cfg(feature = "csr")]
                {
                    let api = api.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        session.refresh_user(&api).await;
                        navigate(
                            "/admin/dashboard",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&session, &api);
                }
            }
            _ => {
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="login">
            <div class="login__card">
                <div class="spinner"></div>
                <p>"Logging in with Google..."</p>
            </div>
        </div>
    }
}
