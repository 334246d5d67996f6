//! Bearer credential persistence.
//!
//! The single source of truth for "is there a credential". Backed by
//! `localStorage` in the browser; the native build keeps the token in a
//! thread-local slot so session logic behaves the same under `cargo test`.
//!
//! Presence of a token does not imply validity — only a successful
//! `/auth/me` call confirms that.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "token";

#[cfg(not(feature = "csr"))]
thread_local! {
    static STORED: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Persist the credential, overwriting any prior value.
pub fn save(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// Synchronous lookup of the stored credential.
#[must_use]
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED.with(|slot| slot.borrow().clone())
    }
}

/// Remove the credential. Clearing an absent credential is not an error.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        STORED.with(|slot| *slot.borrow_mut() = None);
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
