//! Validation verdict consumed by the render decision

use serde::{Deserialize, Serialize};

/// Outcome of validating the embed configuration
///
/// `is_empty` distinguishes an untouched configuration from a misconfigured
/// one; both are unfit to render. A valid verdict never carries messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub is_empty: bool,
    pub messages: Vec<String>,
}

impl ValidationVerdict {
    /// Verdict for a configuration with every field untouched
    pub fn empty() -> Self {
        ValidationVerdict {
            is_valid: false,
            is_empty: true,
            messages: Vec::new(),
        }
    }

    /// Verdict for a configuration that passed every field check
    pub fn valid() -> Self {
        ValidationVerdict {
            is_valid: true,
            is_empty: false,
            messages: Vec::new(),
        }
    }

    /// Verdict for a touched configuration that failed at least one check
    ///
    /// Also covers partially filled configurations whose present fields all
    /// pass; those carry no messages but still refuse the embed.
    pub fn invalid(messages: Vec<String>) -> Self {
        ValidationVerdict {
            is_valid: false,
            is_empty: false,
            messages,
        }
    }

    /// Renders the messages newline-separated, without a trailing newline
    pub fn message_text(&self) -> String {
        self.messages.join("\n")
    }
}
