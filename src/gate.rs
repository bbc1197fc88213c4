//! The session gate and the login, registration, and logout flows.
//!
//! Three-state check, every transition terminal for the current page load:
//!
//! - no token → unauthenticated
//! - token + verify ok → authenticated
//! - token + verify rejected → unauthenticated, storage cleared
//! - token + service unreachable → decided by `VerifyFallback`
//!
//! There is no retry loop, no backoff, and no timeout distinct from the
//! transport default. A transport failure is logged for diagnostics only
//! and never surfaced to the user.

use tracing::{info, warn};

use crate::claims;
use crate::client::{AuthClient, VerifyOutcome};
use crate::config::{AuthConfig, VerifyFallback};
use crate::error::AuthError;
use crate::session::{Credentials, SessionStore};
use crate::view::PageView;

/// Placeholder copy for the signed-out content card.
const LOGIN_REQUIRED_MSG: &str = "Log in to see your personal area.";

/// Placeholder copy when the stored session was rejected.
const SESSION_EXPIRED_MSG: &str = "Your session has expired. Please log in again.";

/// Placeholder copy when access is denied because the service is down.
const SERVICE_UNAVAILABLE_MSG: &str =
    "Your sign-in cannot be confirmed right now. Please try again later.";

/// Gate deciding whether the current page may render protected content.
pub struct SessionGate {
    client: AuthClient,
    fallback: VerifyFallback,
}

impl SessionGate {
    /// Build a gate (and its HTTP client) from the given config.
    pub fn new(config: AuthConfig) -> anyhow::Result<Self> {
        let fallback = config.on_verify_unreachable;
        let client = AuthClient::new(config)?;
        Ok(Self { client, fallback })
    }

    /// Decide whether the page may render protected content.
    ///
    /// Reads the credential pair from the given store, checks the token
    /// against the verification endpoint, and mutates the view to match
    /// the outcome. Returns `true` when protected content may render.
    pub async fn check(&self, session: &SessionStore, view: &mut dyn PageView) -> bool {
        let Some(creds) = session.snapshot() else {
            view.show_login_required(LOGIN_REQUIRED_MSG);
            return false;
        };

        match self.client.verify(&creds.token).await {
            Ok(VerifyOutcome::Valid) => {
                view.show_signed_in(display_name(&creds).as_deref());
                true
            }
            Ok(VerifyOutcome::Rejected { status }) => {
                info!(status, "session token rejected, clearing stored credentials");
                session.clear();
                view.show_session_expired(SESSION_EXPIRED_MSG);
                false
            }
            Err(err) => {
                warn!(error = %err, "verification endpoint unreachable");
                match self.fallback {
                    // Availability first: trust the locally cached token
                    // while the service is down. Storage stays untouched.
                    VerifyFallback::AllowCached => {
                        view.show_signed_in(display_name(&creds).as_deref());
                        true
                    }
                    // Strict: deny, but keep the credentials. The token
                    // was not refuted, only unverifiable.
                    VerifyFallback::DenyAccess => {
                        view.show_login_required(SERVICE_UNAVAILABLE_MSG);
                        false
                    }
                }
            }
        }
    }

    /// Log in and store the returned token together with the typed
    /// username. A failed login leaves the store untouched.
    pub async fn login(
        &self,
        session: &SessionStore,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let token = self.client.login(username, password).await?;
        session.store(token, Some(username.to_string()));
        info!(username, "logged in");
        Ok(())
    }

    /// Create a new account. No storage side effects; the caller sends the
    /// user to the login flow afterwards.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.client.register(username, password).await?;
        info!(username, "account registered");
        Ok(())
    }

    /// Clear the stored credentials and reset the view to signed-out.
    pub fn logout(&self, session: &SessionStore, view: &mut dyn PageView) {
        session.clear();
        view.show_login_required(LOGIN_REQUIRED_MSG);
        info!("logged out");
    }
}

/// Topbar greeting source: stored username echo first, token subject claim
/// as fallback. Both are display-only.
fn display_name(creds: &Credentials) -> Option<String> {
    creds
        .username
        .clone()
        .or_else(|| claims::subject(&creds.token))
}

// ── Tests ───────────────────────────────────────────────────────────
