//! Error taxonomy for the auth service client.
//!
//! Two failure classes cross the wire: a rejected credential (the service
//! answered with a non-success status and, usually, a detail message) and a
//! transport failure (the service could not be reached at all). An absent
//! credential is not an error; the gate resolves it locally as an ordinary
//! signed-out outcome.

use thiserror::Error;

/// Errors from the auth service client and flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service answered with a non-success status.
    #[error("auth service rejected the request ({status}): {detail}")]
    Rejected {
        /// HTTP status the service answered with.
        status: u16,
        /// Service-provided message, empty when the body carried none.
        detail: String,
    },

    /// The service could not be reached at the transport level.
    #[error("auth service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    /// Service-provided detail message, when one exists. Suitable for
    /// showing next to a login or registration form.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
