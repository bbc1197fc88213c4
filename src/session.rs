//! Page-lifetime credential storage.
//!
//! Holds one token + display-username pair for the lifetime of a page. The
//! store is handed to the gate explicitly; nothing in this crate reads it
//! through a global.
//!
//! Invariants:
//! - Token and username are stored, read, and cleared as a unit. A username
//!   never survives without its token.
//! - The username is a local echo of what the user typed at login; it is
//!   display-only and never an authorization signal.

use parking_lot::Mutex;

/// The stored credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Opaque session token issued at login.
    pub token: String,
    /// Display username echo (client-supplied, not server-validated).
    pub username: Option<String>,
}

/// Tab-scoped session storage: one credential pair per page lifetime.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<Option<Credentials>>,
}

impl SessionStore {
    /// Empty store, as on a fresh page load before any login.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store token and username together (login success).
    pub fn store(&self, token: impl Into<String>, username: Option<String>) {
        *self.inner.lock() = Some(Credentials {
            token: token.into(),
            username,
        });
    }

    /// Consistent copy of the stored pair.
    pub fn snapshot(&self) -> Option<Credentials> {
        self.inner.lock().clone()
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.lock().as_ref().map(|c| c.token.clone())
    }

    /// The stored username echo, if any.
    pub fn username(&self) -> Option<String> {
        self.inner.lock().as_ref().and_then(|c| c.username.clone())
    }

    /// Remove both values (logout, or a rejected credential).
    pub fn clear(&self) {
        *self.inner.lock() = None;
    }

    /// Whether no credential pair is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_none()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
