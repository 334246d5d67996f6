#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the resolved user and the startup loading flag.
///
/// `loading` starts `true` and settles to `false` exactly once per page
/// load, when the initial credential resolution finishes either way. Route
/// guards must not redirect while it is `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}
