use super::*;

// =============================================================
// Guard decision
// =============================================================

#[test]
fn loading_always_shows_the_placeholder() {
    // Never redirect while resolution is in flight, whatever else holds.
    for has_user in [false, true] {
        for has_token in [false, true] {
            assert_eq!(decide(true, has_user, has_token), GuardDecision::Loading);
        }
    }
}

#[test]
fn settled_with_no_user_and_no_token_redirects() {
    assert_eq!(decide(false, false, false), GuardDecision::RedirectToLogin);
}

#[test]
fn a_stored_token_suppresses_the_redirect() {
    // Secondary presence signal: a client still holding a plausible token
    // is not bounced while the user has not loaded yet.
    assert_eq!(decide(false, false, true), GuardDecision::Allow);
}

#[test]
fn a_resolved_user_allows_the_protected_content() {
    assert_eq!(decide(false, true, false), GuardDecision::Allow);
    assert_eq!(decide(false, true, true), GuardDecision::Allow);
}
