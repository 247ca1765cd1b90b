//! Session-token persistence in browser `localStorage`.
//!
//! The token lives under one fixed key ([`AUTH_TOKEN_KEY`]) so a signed-in
//! session survives page reloads. Which backend a session uses is the host's
//! call at construction time; nothing in here sniffs the runtime environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior: outside a browser (or
//! with storage disabled) reads degrade to "no token" and writes are dropped
//! with a warning, keeping server rendering deterministic.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::rc::Rc;

/// `localStorage` key holding the session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Where the session token lives between page loads.
///
/// Implementations never fail: an unavailable backend reads as "no token"
/// and swallows writes.
pub trait TokenStore {
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// The stored token, or `None` when absent or the backend is unavailable.
    #[must_use]
    fn load(&self) -> Option<String>;

    /// Delete the stored token. Does nothing when none is stored.
    fn clear(&self);

    /// Whether a token is currently stored.
    #[must_use]
    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

/// Token store backed by the browser's per-origin `localStorage`.
///
/// Client-side (hydrate): real storage access. Server-side: every operation
/// degrades to "no token".
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.set_item(AUTH_TOKEN_KEY, token) {
                    log::warn!("failed to persist session token: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(AUTH_TOKEN_KEY).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.remove_item(AUTH_TOKEN_KEY) {
                    log::warn!("failed to remove session token: {err:?}");
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        Some(storage)
    } else {
        None
    }
}

/// In-memory token store for native hosts and tests.
///
/// Clones share one underlying slot, mirroring how every handle to
/// `localStorage` observes the same value.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Token store that never persists anything.
///
/// For contexts with no meaningful persistence, where a session should
/// simply forget its token on reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTokenStore;

impl TokenStore for NoopTokenStore {
    fn save(&self, _token: &str) {}

    fn load(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}
