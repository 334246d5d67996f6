use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_starts_loading() {
    // `loading` must be true until the startup resolution settles it.
    let state = AuthState::default();
    assert!(state.loading);
}
