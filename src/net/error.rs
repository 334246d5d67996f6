#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure taxonomy at the transport boundary.
///
/// Every network call resolves to one of these; nothing past the `net`
/// module ever sees a raw transport error or a panic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer credential. The transport layer has
    /// already cleared the stored token and fired the unauthorized hook by
    /// the time callers see this.
    #[error("unauthorized")]
    Unauthorized,
    /// Non-success HTTP status, with the backend's message when it sent one.
    #[error("request failed with status {code}")]
    Status { code: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error for API calls made outside the browser build.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }

    /// True for a 404, which some listing endpoints use to mean "empty".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404, .. })
    }

    /// Human-readable message for toasts: the backend payload message when
    /// present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract a display message from an error response body.
///
/// Prefers the `message` field, then `error`; `None` when the body is not
/// JSON or carries neither.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}
