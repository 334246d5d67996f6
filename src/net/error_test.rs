use super::*;

// =============================================================
// Payload message extraction
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    assert_eq!(
        error_message(r#"{"message":"m1","error":"m2"}"#),
        Some("m1".to_owned())
    );
    assert_eq!(error_message(r#"{"error":"m2"}"#), Some("m2".to_owned()));
}

#[test]
fn error_message_skips_empty_fields() {
    assert_eq!(
        error_message(r#"{"message":"","error":"fallback"}"#),
        Some("fallback".to_owned())
    );
}

#[test]
fn error_message_is_none_for_non_json_bodies() {
    assert_eq!(error_message("<html>502</html>"), None);
    assert_eq!(error_message(""), None);
}

// =============================================================
// ApiError helpers
// =============================================================

#[test]
fn user_message_prefers_payload_over_fallback() {
    let err = ApiError::Status {
        code: 422,
        message: Some("Title is required".to_owned()),
    };
    assert_eq!(err.user_message("Failed to save event"), "Title is required");
}

#[test]
fn user_message_falls_back_without_payload() {
    let bare = ApiError::Status {
        code: 500,
        message: None,
    };
    assert_eq!(bare.user_message("Failed to save event"), "Failed to save event");

    let network = ApiError::Network("connection reset".to_owned());
    assert_eq!(network.user_message("Failed to save event"), "Failed to save event");
}

#[test]
fn not_found_is_recognized() {
    assert!(ApiError::Status {
        code: 404,
        message: None
    }
    .is_not_found());
    assert!(!ApiError::Unauthorized.is_not_found());
}
