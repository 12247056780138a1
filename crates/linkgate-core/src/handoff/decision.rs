//! The outcome of evaluating one navigation request.

use std::fmt;

use url::Url;

/// Decision returned by the handoff policy.
///
/// Exactly one decision is produced per request. `HandOff` and
/// `ConfirmThenHandOff` both mean the browser must not load the URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The browser proceeds with normal loading.
    LoadInBrowser,
    /// Launch `target` outside the browser immediately, no confirmation.
    HandOff { target: Url },
    /// Ask the user first; on accept launch `target`, on cancel do nothing.
    ConfirmThenHandOff {
        /// Prompt title; may be empty (e.g. a `mailto:` with no address).
        title: String,
        /// Label of the affirmative button ("Open", "Email", "FaceTime").
        action: String,
        target: Url,
    },
}

impl Decision {
    /// Whether this decision blocks the browser's own loading path.
    pub fn intercepts(&self) -> bool {
        !matches!(self, Decision::LoadInBrowser)
    }

    /// The URL to launch externally, when there is one.
    pub fn target(&self) -> Option<&Url> {
        match self {
            Decision::LoadInBrowser => None,
            Decision::HandOff { target } => Some(target),
            Decision::ConfirmThenHandOff { target, .. } => Some(target),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::LoadInBrowser => write!(f, "load in browser"),
            Decision::HandOff { target } => write!(f, "hand off to {target} (no confirmation)"),
            Decision::ConfirmThenHandOff {
                title,
                action,
                target,
            } => {
                if title.is_empty() {
                    write!(f, "confirm [{action}] then hand off to {target}")
                } else {
                    write!(f, "confirm \"{title}\" [{action}] then hand off to {target}")
                }
            }
        }
    }
}
