//! REST client for the EventHaven backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get
//! stubs returning [`ApiError::unavailable`] so pages compile and tests can
//! drive the surrounding logic with injected fakes instead.
//!
//! TRANSPORT CONVENTIONS
//! =====================
//! Every request carries `Authorization: Bearer <token>` when the token
//! store holds a credential. A `401` response clears the stored token and
//! fires the injected unauthorized hook (session reset + redirect), so no
//! later request can go out with a credential known to be invalid. List
//! payloads are normalized through [`EventsPayload`] before leaving this
//! module.

#![allow(clippy::unused_async)]

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Event, EventDetailBundle, EventDraft, EventFilters, EventsPayload, Hotel, HotelDraft,
    IdentityResponse, LoginResponse, User,
};

#[cfg(feature = "csr")]
use super::error::error_message;
#[cfg(feature = "csr")]
use crate::util::token;

/// Shared REST client, provided once via context at the application root.
///
/// The unauthorized hook is injected at construction rather than reached
/// for via globals, so the 401 path is a plain function call that tests can
/// observe.
#[derive(Clone)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct ApiClient {
    base: String,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl ApiClient {
    /// Client with no unauthorized hook (tests, tools).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            on_unauthorized: Arc::new(|| {}),
        }
    }

    /// Client that invokes `hook` after a `401` has cleared the token store.
    #[must_use]
    pub fn with_unauthorized_hook(
        base: impl Into<String>,
        hook: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            base: base.into(),
            on_unauthorized: Arc::new(hook),
        }
    }

    // =========================
    // Events
    // =========================

    /// Public events listing, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn events(&self, filters: &EventFilters) -> Result<Vec<Event>, ApiError> {
        self.get_json::<EventsPayload>(&format!("/events{}", filters.to_query()))
            .await
            .map(EventsPayload::into_events)
    }

    /// Combined event+hotel record for the detail modal.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn event_details(&self, event_id: &str) -> Result<EventDetailBundle, ApiError> {
        self.get_json(&format!("/event-details/{}", urlencoding::encode(event_id)))
            .await
    }

    /// A single event record (admin edit prefill).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn event(&self, event_id: &str) -> Result<Event, ApiError> {
        self.get_json(&format!("/events/{}", urlencoding::encode(event_id)))
            .await
    }

    // =========================
    // Hotels (public)
    // =========================

    /// Public hotel profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn hotel(&self, hotel_id: &str) -> Result<Hotel, ApiError> {
        self.get_json(&format!("/hotels/{}", urlencoding::encode(hotel_id)))
            .await
    }

    // =========================
    // Auth
    // =========================

    /// Resolve the stored credential into a verified identity.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the credential is missing/invalid or the
    /// request fails.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json::<IdentityResponse>("/auth/me")
            .await
            .map(|response| response.user)
    }

    /// Exchange a Google Identity credential for a bearer token and user.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the exchange is rejected.
    pub async fn google_login(&self, credential: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/google", &serde_json::json!({ "credential": credential }))
            .await
    }

    // =========================
    // Owner resources
    // =========================

    /// Hotels owned by the signed-in user. A `404` means a brand-new owner
    /// with nothing yet, so it maps to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any failure other than a `404`.
    pub async fn my_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        match self.get_json("/me/hotels").await {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// One of the signed-in user's hotels.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn my_hotel(&self, hotel_id: &str) -> Result<Hotel, ApiError> {
        self.get_json(&format!("/me/hotels/{}", urlencoding::encode(hotel_id)))
            .await
    }

    /// Create a hotel profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        self.post_json("/me/hotels", draft).await
    }

    /// Update a hotel profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn update_hotel(&self, hotel_id: &str, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        self.put_json(&format!("/me/hotels/{}", urlencoding::encode(hotel_id)), draft)
            .await
    }

    /// Delete a hotel profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn delete_hotel(&self, hotel_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/me/hotels/{}", urlencoding::encode(hotel_id)))
            .await
    }

    /// Events across all of the signed-in user's hotels.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json::<EventsPayload>("/me/events")
            .await
            .map(EventsPayload::into_events)
    }

    /// Create an event.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        self.post_json("/me/events", draft).await
    }

    /// Update an event.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn update_event(&self, event_id: &str, draft: &EventDraft) -> Result<Event, ApiError> {
        self.put_json(&format!("/me/events/{}", urlencoding::encode(event_id)), draft)
            .await
    }

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request is rejected.
    pub async fn delete_event(&self, event_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/me/events/{}", urlencoding::encode(event_id)))
            .await
    }

    // =========================
    // Transport helpers
    // =========================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base);
            let response = authorized(gloo_net::http::Request::get(&url)).send().await;
            parse_body(self.check(response).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base);
            let request = authorized(gloo_net::http::Request::post(&url))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_body(self.check(request.send().await).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base);
            let request = authorized(gloo_net::http::Request::put(&url))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_body(self.check(request.send().await).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base);
            let response = authorized(gloo_net::http::Request::delete(&url)).send().await;
            self.check(response).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    /// Map transport failures and non-success statuses into [`ApiError`].
    /// The `401` arm is the token-invalidation point described in the
    /// transport conventions above.
    #[cfg(feature = "csr")]
    async fn check(
        &self,
        response: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status == 401 {
            token::clear();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                code: status,
                message: error_message(&body),
            });
        }
        Ok(response)
    }
}

#[cfg(feature = "csr")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::read() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn parse_body<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Ask the chat assistant backend for a reply. Unauthenticated and hosted
/// separately from the main API, hence not a method on [`ApiClient`].
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn send_chat_message(message: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct ChatReply {
            reply: String,
        }
        let url = format!("{}/chat", crate::config::chat_api_url());
        let request = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({ "message": message }))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status {
                code: response.status(),
                message: None,
            });
        }
        response
            .json::<ChatReply>()
            .await
            .map(|r| r.reply)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        Err(ApiError::unavailable())
    }
}
