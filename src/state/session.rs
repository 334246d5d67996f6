//! Session lifecycle: startup resolution and the login/logout/refresh
//! operations.
//!
//! [`Session`] is the single writer of [`AuthState`]. It is created once at
//! the application root, provided via context, and read broadly; every
//! mutation goes through its methods so the token store and the signal
//! never disagree from the UI's perspective.
//!
//! The network side is injected: the `*_with` methods take the fetch as a
//! closure, and thin `csr` wrappers bind the real [`ApiClient`]. Tests
//! drive the controller with mock fetchers and never touch a socket.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, User};
use crate::state::auth::AuthState;
use crate::util::token;

#[cfg(feature = "csr")]
use crate::net::api::ApiClient;

/// Handle to the authentication session. Cheap to copy; all copies share
/// the same underlying state.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    /// Fresh session in the unresolved state (`loading = true`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Current resolved user, if any. Reactive when read inside a tracking
    /// context.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    /// Whether the startup resolution is still in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    /// Full state snapshot (tests, diagnostics).
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Startup resolution. Runs exactly once per page load.
    ///
    /// With no stored credential this settles immediately without calling
    /// `fetch_identity` at all. With one, any failure — unauthorized or
    /// transport — clears the stored token and settles logged-out; there is
    /// no retry.
    pub async fn initialize_with<F, Fut>(&self, fetch_identity: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<User, ApiError>>,
    {
        if token::read().is_none() {
            self.settle(None);
            return;
        }
        match fetch_identity().await {
            Ok(user) => self.settle(Some(user)),
            Err(_) => {
                token::clear();
                self.settle(None);
            }
        }
    }

    /// Exchange an external credential for a signed-in session.
    ///
    /// On success the returned token and user are applied together — the
    /// store and the session never observe one without the other. On
    /// failure nothing changes and the error is reduced to a display
    /// message; no failure escapes this boundary.
    ///
    /// # Errors
    ///
    /// Returns the human-readable message for the failed exchange.
    pub async fn login_with<F, Fut>(&self, exchange: F) -> Result<User, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<LoginResponse, ApiError>>,
    {
        match exchange().await {
            Ok(LoginResponse { token, user }) => {
                token::save(&token);
                self.settle(Some(user.clone()));
                Ok(user)
            }
            Err(err) => Err(login_failure_message(&err)),
        }
    }

    /// End the session locally. Always succeeds; calling it while already
    /// signed out is a no-op.
    pub fn logout(&self) {
        token::clear();
        self.settle(None);
    }

    /// Re-fetch the identity behind the current credential. An
    /// unresolvable credential ends the session like [`Self::logout`].
    pub async fn refresh_with<F, Fut>(&self, fetch_identity: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<User, ApiError>>,
    {
        match fetch_identity().await {
            Ok(user) => self.settle(Some(user)),
            Err(_) => self.logout(),
        }
    }

    /// Spawn the one-shot startup resolution task.
    #[cfg(feature = "csr")]
    pub fn spawn_resolver(self, api: ApiClient) {
        leptos::task::spawn_local(async move {
            self.initialize_with(|| async move { api.me().await }).await;
        });
    }

    /// [`Self::login_with`] bound to the real exchange endpoint.
    ///
    /// # Errors
    ///
    /// Returns the human-readable message for the failed exchange.
    #[cfg(feature = "csr")]
    pub async fn login(&self, api: &ApiClient, credential: &str) -> Result<User, String> {
        self.login_with(|| async { api.google_login(credential).await })
            .await
    }

    /// [`Self::refresh_with`] bound to the real identity endpoint.
    #[cfg(feature = "csr")]
    pub async fn refresh_user(&self, api: &ApiClient) {
        self.refresh_with(|| async { api.me().await }).await;
    }

    fn settle(&self, user: Option<User>) {
        // try_update: a torn-down reactive graph silently discards the
        // outcome instead of panicking.
        let _ = self.state.try_update(|state| {
            state.user = user;
            state.loading = false;
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Display message for a failed login exchange: the backend's payload
/// message when it sent one, a generic fallback otherwise.
#[must_use]
pub fn login_failure_message(err: &ApiError) -> String {
    err.user_message("Login failed")
}
