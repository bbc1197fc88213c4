//! Token-session gate client for pages backed by a remote auth service.
//!
//! Provides:
//! - Session gate: decides whether the current page may render protected
//!   content by checking the stored token against the remote verification
//!   endpoint
//! - Login / registration / logout flows with token + username storage
//! - Configurable policy for an unreachable verification endpoint
//!   (allow the cached token, or deny access)
//! - Page and topbar view models behind a render seam
//!
//! ## Design Decisions
//! - The credential store is an explicit value handed to the gate, not
//!   ambient global state; callers own page lifetime and scoping.
//! - The permissive network-failure fallback is configuration
//!   (`VerifyFallback`), not hardcoded policy: availability vs. strict
//!   verification is the embedder's trade-off to make.
//! - Tokens stay opaque. The only local inspection is a display-layer
//!   fallback reading the subject claim; it never gates access.

pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod map;
pub mod session;
pub mod view;

pub use client::{AuthClient, VerifyOutcome};
pub use config::{AuthConfig, VerifyFallback};
pub use error::AuthError;
pub use gate::SessionGate;
pub use map::ZoomControl;
pub use session::{Credentials, SessionStore};
pub use view::{Content, Page, PageView, Topbar, TopbarEntry};
