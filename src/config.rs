//! Compile-time configuration.
//!
//! A CSR bundle has no runtime environment, so endpoints and client ids are
//! baked in at build time via `option_env!`. Set the variables when invoking
//! Trunk, e.g. `EVENTHAVEN_API_URL=https://api.example.com trunk build`.

/// Base URL of the backend REST API. Defaults to a same-origin `/api`
/// prefix for reverse-proxied deployments.
#[must_use]
pub const fn api_base() -> &'static str {
    match option_env!("EVENTHAVEN_API_URL") {
        Some(url) => url,
        None => "/api",
    }
}

/// Google OAuth client id for the Identity Services sign-in button.
///
/// Absence is not fatal: the login page renders a blocking
/// configuration-error screen instead of the button.
#[must_use]
pub const fn google_client_id() -> Option<&'static str> {
    option_env!("EVENTHAVEN_GOOGLE_CLIENT_ID")
}

/// Base URL of the chat assistant backend. Defaults to the API base.
#[must_use]
pub const fn chat_api_url() -> &'static str {
    match option_env!("EVENTHAVEN_CHAT_API_URL") {
        Some(url) => url,
        None => api_base(),
    }
}

/// Imgur client id for anonymous image uploads. When unset, the image
/// picker falls back to direct URL entry.
#[must_use]
pub const fn imgur_client_id() -> Option<&'static str> {
    option_env!("EVENTHAVEN_IMGUR_CLIENT_ID")
}
