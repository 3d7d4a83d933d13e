//! Application identifier type with UUID-v4 shape validation

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Canonical UUID v4 textual shape: 8-4-4-4-12 lowercase hex groups,
    /// version nibble fixed to 4, variant nibble restricted to 8, 9, a, b
    static ref APP_ID_PATTERN: Regex = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
    )
    .unwrap();
}

/// Error for an app id that does not match the UUID v4 shape
///
/// The display string doubles as the diagnostic message surfaced to the
/// administrator, so its wording is fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The App ID provided: \"{0}\" is not valid.")]
pub struct AppIdError(pub String);

/// A validated application identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether a raw value has the required UUID v4 shape
    pub fn is_valid(raw: &str) -> bool {
        APP_ID_PATTERN.is_match(raw)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppId {
    type Err = AppIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if AppId::is_valid(s) {
            Ok(AppId(s.to_string()))
        } else {
            Err(AppIdError(s.to_string()))
        }
    }
}
