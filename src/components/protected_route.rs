//! Route guard for the admin section.
//!
//! A pure decision over session state plus a wrapper component. The chosen
//! redirect policy consults the token store as a secondary presence signal:
//! only "no resolved user AND no stored credential" redirects, so a client
//! still holding a plausible token is not bounced to login while the
//! startup resolution settles. The redirect replaces history so the back
//! button does not return to the protected page.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::token;

/// What the guard renders for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Resolution still in flight — placeholder, never a redirect.
    Loading,
    /// Settled with neither a user nor a stored credential.
    RedirectToLogin,
    /// Render the protected content.
    Allow,
}

/// Pure guard decision, re-evaluated on every render of a protected region.
#[must_use]
pub fn decide(loading: bool, has_user: bool, has_token: bool) -> GuardDecision {
    if loading {
        GuardDecision::Loading
    } else if !has_user && !has_token {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Allow
    }
}

/// Gate `children` behind the session guard.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    move || {
        let decision = decide(
            session.loading(),
            session.user().is_some(),
            token::read().is_some(),
        );
        match decision {
            GuardDecision::Loading => view! {
                <div class="route-guard__loading">
                    <div class="spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::RedirectToLogin => view! {
                <Redirect
                    path="/login"
                    options=NavigateOptions {
                        replace: true,
                        ..Default::default()
                    }
                />
            }
            .into_any(),
            GuardDecision::Allow => children().into_any(),
        }
    }
}
