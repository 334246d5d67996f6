use super::*;

use std::cell::Cell;

use futures::executor::block_on;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Asha Perera".to_owned(),
        email: "asha@example.com".to_owned(),
        avatar: None,
    }
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn no_token_startup_settles_without_identity_call() {
    token::clear();
    let session = Session::new();
    assert!(session.snapshot().loading);

    let called = Cell::new(false);
    block_on(session.initialize_with(|| {
        called.set(true);
        async { Ok(user("u-1")) }
    }));

    assert!(!called.get(), "identity endpoint must not be hit without a token");
    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn valid_token_startup_resolves_identity() {
    token::save("t-valid");
    let session = Session::new();

    block_on(session.initialize_with(|| async { Ok(user("u-1")) }));

    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.id).as_deref(), Some("u-1"));
    token::clear();
}

#[test]
fn invalid_token_startup_clears_token_and_settles_logged_out() {
    token::save("t-expired");
    let session = Session::new();

    block_on(session.initialize_with(|| async { Err(ApiError::Unauthorized) }));

    assert!(token::read().is_none(), "the bad credential must be cleared");
    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn transport_failure_at_startup_recovers_like_unauthorized() {
    token::save("t-unreachable");
    let session = Session::new();

    block_on(session.initialize_with(|| async { Err(ApiError::Network("offline".to_owned())) }));

    assert!(token::read().is_none());
    assert!(session.snapshot().user.is_none());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_stores_token_and_user_together() {
    token::clear();
    let session = Session::new();

    let result = block_on(session.login_with(|| async {
        Ok(LoginResponse {
            token: "t1".to_owned(),
            user: user("u1"),
        })
    }));

    assert_eq!(result.map(|u| u.id).as_deref(), Ok("u1"));
    assert_eq!(token::read().as_deref(), Some("t1"));
    assert_eq!(session.user().map(|u| u.id).as_deref(), Some("u1"));
    token::clear();
}

#[test]
fn login_failure_mutates_nothing_and_carries_a_message() {
    token::save("t-old");
    let session = Session::new();
    let before = session.snapshot();

    let result = block_on(session.login_with(|| async {
        Err(ApiError::Status {
            code: 400,
            message: Some("Invalid Google credential".to_owned()),
        })
    }));

    assert_eq!(result, Err("Invalid Google credential".to_owned()));
    assert_eq!(token::read().as_deref(), Some("t-old"));
    assert_eq!(session.snapshot(), before);
    token::clear();
}

#[test]
fn login_failure_without_payload_message_uses_fallback() {
    token::clear();
    let session = Session::new();

    let result = block_on(
        session.login_with(|| async { Err(ApiError::Network("connection refused".to_owned())) }),
    );

    let message = result.expect_err("login must fail");
    assert_eq!(message, "Login failed");
    assert!(!message.is_empty());
}

// =============================================================
// Logout & refresh
// =============================================================

#[test]
fn logout_twice_is_idempotent() {
    token::save("t1");
    let session = Session::new();

    session.logout();
    session.logout();

    assert!(token::read().is_none());
    assert!(session.snapshot().user.is_none());
}

#[test]
fn refresh_success_updates_user_in_place() {
    token::save("t1");
    let session = Session::new();
    block_on(session.initialize_with(|| async { Ok(user("u-old")) }));

    block_on(session.refresh_with(|| async { Ok(user("u-new")) }));

    assert_eq!(session.user().map(|u| u.id).as_deref(), Some("u-new"));
    assert_eq!(token::read().as_deref(), Some("t1"));
    token::clear();
}

#[test]
fn refresh_failure_ends_the_session() {
    token::save("t1");
    let session = Session::new();
    block_on(session.initialize_with(|| async { Ok(user("u-1")) }));

    block_on(session.refresh_with(|| async { Err(ApiError::Unauthorized) }));

    assert!(token::read().is_none());
    assert!(session.snapshot().user.is_none());
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn login_failure_message_prefers_backend_payload() {
    let err = ApiError::Status {
        code: 403,
        message: Some("Account is not an owner".to_owned()),
    };
    assert_eq!(login_failure_message(&err), "Account is not an owner");

    let bare = ApiError::Status {
        code: 500,
        message: None,
    };
    assert_eq!(login_failure_message(&bare), "Login failed");
}
