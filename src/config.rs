//! Auth service configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default request timeout (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Auth service base used for local development.
const DEFAULT_LOCAL_URL: &str = "http://localhost:9601";

/// Policy when the verification endpoint cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerifyFallback {
    /// Grant access based on the locally cached token. Availability of the
    /// protected page wins over strict verification while the service is
    /// down.
    #[default]
    AllowCached,
    /// Refuse access until the service can confirm the token.
    DenyAccess,
}

/// Connection settings for the remote auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Auth service base URL (e.g., http://localhost:9601).
    pub base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// What to do when the verification endpoint is unreachable.
    #[serde(default)]
    pub on_verify_unreachable: VerifyFallback,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCAL_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            on_verify_unreachable: VerifyFallback::default(),
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// Returns `None` when `AUTHGATE_URL` is unset or empty. Recognized
    /// variables: `AUTHGATE_URL`, `AUTHGATE_TIMEOUT_SECS`,
    /// `AUTHGATE_ON_UNREACHABLE` (`allow-cached` | `deny-access`).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("AUTHGATE_URL").ok()?;
        if base_url.is_empty() {
            return None;
        }

        let timeout_secs = std::env::var("AUTHGATE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let on_verify_unreachable = match std::env::var("AUTHGATE_ON_UNREACHABLE").ok() {
            Some(v) if v == "deny-access" => VerifyFallback::DenyAccess,
            Some(v) if v == "allow-cached" || v.is_empty() => VerifyFallback::AllowCached,
            Some(v) => {
                tracing::warn!(value = %v, "unknown AUTHGATE_ON_UNREACHABLE value, using allow-cached");
                VerifyFallback::AllowCached
            }
            None => VerifyFallback::AllowCached,
        };

        Some(Self {
            base_url,
            timeout_secs,
            on_verify_unreachable,
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read auth config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse auth config {}", path.display()))?;
        if config.base_url.trim().is_empty() {
            anyhow::bail!("Auth config {}: base_url must not be empty", path.display());
        }
        Ok(config)
    }

    /// Base URL with any trailing slash trimmed, ready for path joining.
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = AuthConfig::default();
        assert_eq!(config.base_url, "http://localhost:9601");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.on_verify_unreachable, VerifyFallback::AllowCached);
    }

    #[test]
    fn base_trims_trailing_slash() {
        let config = AuthConfig {
            base_url: "https://auth.example.org/".to_string(),
            ..AuthConfig::default()
        };
        assert_eq!(config.base(), "https://auth.example.org");
    }

    #[test]
    fn load_parses_toml_with_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("authgate.toml");
        std::fs::write(&path, "base_url = \"https://auth.example.org\"\n").unwrap();

        let config = AuthConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "https://auth.example.org");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.on_verify_unreachable, VerifyFallback::AllowCached);
    }

    #[test]
    fn load_parses_deny_access_policy() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("authgate.toml");
        std::fs::write(
            &path,
            "base_url = \"https://auth.example.org\"\ntimeout_secs = 5\non_verify_unreachable = \"deny-access\"\n",
        )
        .unwrap();

        let config = AuthConfig::load(&path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.on_verify_unreachable, VerifyFallback::DenyAccess);
    }

    #[test]
    fn load_rejects_empty_base_url() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("authgate.toml");
        std::fs::write(&path, "base_url = \"\"\n").unwrap();

        let result = AuthConfig::load(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }

    #[test]
    fn from_env_reads_variables() {
        std::env::set_var("AUTHGATE_URL", "https://auth.example.org");
        std::env::set_var("AUTHGATE_TIMEOUT_SECS", "7");
        std::env::set_var("AUTHGATE_ON_UNREACHABLE", "deny-access");

        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://auth.example.org");
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.on_verify_unreachable, VerifyFallback::DenyAccess);

        std::env::remove_var("AUTHGATE_URL");
        std::env::remove_var("AUTHGATE_TIMEOUT_SECS");
        std::env::remove_var("AUTHGATE_ON_UNREACHABLE");

        assert!(AuthConfig::from_env().is_none());
    }
}
