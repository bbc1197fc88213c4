//! Lenient session-token introspection.
//!
//! The topbar may fall back to the token's subject claim when no username
//! echo is stored. Decoding is display-only: the payload segment is
//! base64url-decoded and parsed, the signature is never checked. Only the
//! remote service vouches for the token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Extract the `sub` claim from a token, tolerating a `Bearer ` prefix.
///
/// Returns `None` for anything that does not carry a readable payload
/// segment.
pub fn subject(token: &str) -> Option<String> {
    let raw = token.strip_prefix("Bearer ").unwrap_or(token).trim();
    let payload = raw.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("sub")?.as_str().map(str::to_string)
}
