//! Page view models mutated by the gate.
//!
//! Rendering stays outside this crate. `PageView` is the seam an embedder
//! implements against its real surface; `Page` is the provided in-memory
//! model used by simple embedders and by the tests.

use tracing::debug;

/// Headline shown with either placeholder card.
const RESTRICTED_HEADLINE: &str = "Access restricted";

/// Heading of the placeholder card replacing protected content.
const NOTICE_HEADING: &str = "Login required";

/// Topbar action label while signed out.
const SIGN_IN_LABEL: &str = "Sign in";

/// Topbar action label while signed in.
const SIGN_OUT_LABEL: &str = "Sign out";

/// Render seam the gate and flows mutate.
pub trait PageView {
    /// No credential present: show the login prompt.
    fn show_login_required(&mut self, message: &str);

    /// The stored credential was rejected: show the expiry prompt.
    fn show_session_expired(&mut self, message: &str);

    /// Credential accepted (or trusted via fallback): protected content may
    /// render, topbar reflects the signed-in state.
    fn show_signed_in(&mut self, username: Option<&str>);
}

/// Content area state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// Protected content may render.
    #[default]
    Protected,
    /// Placeholder card replacing protected content.
    Notice {
        /// Card heading.
        heading: String,
        /// Card body text.
        body: String,
    },
}

/// One topbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopbarEntry {
    /// Greeting with the display username.
    Welcome(String),
    /// Action button (sign in / sign out).
    Action(String),
}

/// Topbar state: a sign-in action while signed out, an optional greeting
/// plus a sign-out action while signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topbar {
    entries: Vec<TopbarEntry>,
}

impl Default for Topbar {
    fn default() -> Self {
        Self {
            entries: vec![TopbarEntry::Action(SIGN_IN_LABEL.to_string())],
        }
    }
}

impl Topbar {
    /// Switch to the signed-in shape.
    ///
    /// Idempotent: a greeting already present is never inserted twice; the
    /// action label flips regardless.
    pub fn show_signed_in(&mut self, username: Option<&str>) {
        let has_greeting = self
            .entries
            .iter()
            .any(|e| matches!(e, TopbarEntry::Welcome(_)));

        if !has_greeting {
            if let Some(name) = username {
                self.entries
                    .insert(0, TopbarEntry::Welcome(format!("Hello, {name}")));
            }
        }

        for entry in &mut self.entries {
            if let TopbarEntry::Action(label) = entry {
                *label = SIGN_OUT_LABEL.to_string();
            }
        }
    }

    /// Switch back to the signed-out shape: greeting removed, action back
    /// to sign-in.
    pub fn show_signed_out(&mut self) {
        self.entries
            .retain(|e| !matches!(e, TopbarEntry::Welcome(_)));
        for entry in &mut self.entries {
            if let TopbarEntry::Action(label) = entry {
                *label = SIGN_IN_LABEL.to_string();
            }
        }
    }

    /// Current entries, in display order.
    pub fn entries(&self) -> &[TopbarEntry] {
        &self.entries
    }
}

/// Provided in-memory page model.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Headline element text, set by the placeholder renderers.
    pub headline: Option<String>,
    /// Content area state.
    pub content: Content,
    /// Topbar state.
    pub topbar: Topbar,
}

impl Page {
    /// Fresh page, content unguarded, topbar signed out.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageView for Page {
    fn show_login_required(&mut self, message: &str) {
        debug!("rendering login-required placeholder");
        self.headline = Some(RESTRICTED_HEADLINE.to_string());
        self.content = Content::Notice {
            heading: NOTICE_HEADING.to_string(),
            body: message.to_string(),
        };
        self.topbar.show_signed_out();
    }

    fn show_session_expired(&mut self, message: &str) {
        debug!("rendering session-expired placeholder");
        self.headline = Some(RESTRICTED_HEADLINE.to_string());
        self.content = Content::Notice {
            heading: NOTICE_HEADING.to_string(),
            body: message.to_string(),
        };
        self.topbar.show_signed_out();
    }

    fn show_signed_in(&mut self, username: Option<&str>) {
        self.content = Content::Protected;
        self.topbar.show_signed_in(username);
    }
}

// ── Tests ───────────────────────────────────────────────────────────
