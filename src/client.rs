//! HTTP client for the remote auth service.
//!
//! Wire contract:
//! - `GET {base}/auth/verify?token=...`: any 2xx status means the token is
//!   still valid; no body is required
//! - `POST {base}/auth/login` with `{"username", "password"}`: a 2xx body
//!   carries `access_token`
//! - `POST {base}/auth/register` with the same body: analogous contract
//!
//! Non-success bodies carry an optional `detail` message which is surfaced
//! verbatim to the caller. There is no retry, backoff, or timeout logic
//! beyond the configured transport timeout.

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Outcome of a token verification round-trip.
///
/// A rejected token is an outcome, not an error: the gate branches on it.
/// Only transport failures land in `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The service accepted the token.
    Valid,
    /// The service answered with the given non-success status.
    Rejected {
        /// HTTP status of the rejection.
        status: u16,
    },
}

/// Request body for login and registration.
#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// Success body of a login response.
#[derive(Debug, Deserialize)]
struct LoginBody {
    access_token: String,
}

/// Failure body shared by all endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the remote auth service.
pub struct AuthClient {
    config: AuthConfig,
    http: reqwest::Client,
}

impl AuthClient {
    /// Create a new client from the given config.
    pub fn new(config: AuthConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    /// Join a path onto the service base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base(), path)
    }

    /// Check a session token against the verification endpoint.
    pub async fn verify(&self, token: &str) -> Result<VerifyOutcome, AuthError> {
        let url = format!(
            "{}?token={}",
            self.endpoint("/auth/verify"),
            urlencoding::encode(token)
        );

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(VerifyOutcome::Valid)
        } else {
            Ok(VerifyOutcome::Rejected {
                status: resp.status().as_u16(),
            })
        }
    }

    /// Exchange username + password for an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CredentialsBody { username, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(rejected(status, resp).await);
        }

        // A 2xx without the token field is still a failed login, not a
        // transport error.
        match resp.json::<LoginBody>().await {
            Ok(body) => Ok(body.access_token),
            Err(_) => Err(AuthError::Rejected {
                status: status.as_u16(),
                detail: "Login response did not contain an access token".to_string(),
            }),
        }
    }

    /// Create a new account. The service's detail message is surfaced on
    /// conflict or validation failure.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.endpoint("/auth/register"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CredentialsBody { username, password })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(rejected(status, resp).await)
        }
    }
}

/// Turn a non-success response into `AuthError::Rejected`, pulling the
/// `detail` message out of the body when there is one.
async fn rejected(status: reqwest::StatusCode, resp: reqwest::Response) -> AuthError {
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_default();

    AuthError::Rejected {
        status: status.as_u16(),
        detail,
    }
}

// ── Tests ───────────────────────────────────────────────────────────
