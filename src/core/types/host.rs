//! Host context and environment label types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the collaboration-suite application hosting the page
///
/// Unrecognized names are preserved as [`HostName::Other`] so resolution
/// stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostName {
    Office,
    Outlook,
    Teams,
    TeamsModern,
    Other(String),
}

impl HostName {
    /// Returns the host name as reported by the host SDK
    pub fn as_str(&self) -> &str {
        match self {
            HostName::Office => "Office",
            HostName::Outlook => "Outlook",
            HostName::Teams => "Teams",
            HostName::TeamsModern => "TeamsModern",
            HostName::Other(name) => name,
        }
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for HostName {
    fn from(name: &str) -> Self {
        match name {
            "Office" => HostName::Office,
            "Outlook" => HostName::Outlook,
            "Teams" => HostName::Teams,
            "TeamsModern" => HostName::TeamsModern,
            other => HostName::Other(other.to_string()),
        }
    }
}

impl From<String> for HostName {
    fn from(name: String) -> Self {
        HostName::from(name.as_str())
    }
}

impl From<HostName> for String {
    fn from(name: HostName) -> Self {
        name.as_str().to_string()
    }
}

/// Descriptor of the application shell the page is embedded in
///
/// `host` is `None` when the page runs as a plain hosting page outside the
/// collaboration suite. Supplied externally once per initialization and
/// never owned by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    pub host: Option<HostName>,
    pub is_localhost: bool,
}

impl HostContext {
    /// Context for a page hosted outside the collaboration suite
    pub fn standalone(is_localhost: bool) -> Self {
        HostContext {
            host: None,
            is_localhost,
        }
    }

    /// Context for a page embedded in the named host application
    pub fn embedded(host: HostName, is_localhost: bool) -> Self {
        HostContext {
            host: Some(host),
            is_localhost,
        }
    }
}

/// Closed catalog of environment labels used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentLabel {
    #[serde(rename = "local-SharePoint")]
    LocalSharePoint,
    #[serde(rename = "SharePoint")]
    SharePoint,
    #[serde(rename = "local-Office")]
    LocalOffice,
    #[serde(rename = "Office")]
    Office,
    #[serde(rename = "local-Outlook")]
    LocalOutlook,
    #[serde(rename = "Outlook")]
    Outlook,
    #[serde(rename = "local-Teams")]
    LocalTeams,
    #[serde(rename = "Teams")]
    Teams,
    #[serde(rename = "unknown")]
    Unknown,
}

impl EnvironmentLabel {
    /// Returns the short catalog token for this label
    pub const fn as_str(&self) -> &'static str {
        match self {
            EnvironmentLabel::LocalSharePoint => "local-SharePoint",
            EnvironmentLabel::SharePoint => "SharePoint",
            EnvironmentLabel::LocalOffice => "local-Office",
            EnvironmentLabel::Office => "Office",
            EnvironmentLabel::LocalOutlook => "local-Outlook",
            EnvironmentLabel::Outlook => "Outlook",
            EnvironmentLabel::LocalTeams => "local-Teams",
            EnvironmentLabel::Teams => "Teams",
            EnvironmentLabel::Unknown => "unknown",
        }
    }

    /// Returns the full diagnostic sentence for this label
    pub const fn description(&self) -> &'static str {
        match self {
            EnvironmentLabel::LocalSharePoint => {
                "The app is running on your local environment as SharePoint web part"
            }
            EnvironmentLabel::SharePoint => "The app is running on SharePoint page",
            EnvironmentLabel::LocalOffice => {
                "The app is running on your local environment in office.com"
            }
            EnvironmentLabel::Office => "The app is running in office.com",
            EnvironmentLabel::LocalOutlook => {
                "The app is running on your local environment in Outlook"
            }
            EnvironmentLabel::Outlook => "The app is running in Outlook",
            EnvironmentLabel::LocalTeams => {
                "The app is running on your local environment as Microsoft Teams app"
            }
            EnvironmentLabel::Teams => "The app is running in Microsoft Teams",
            EnvironmentLabel::Unknown => "The app is running in an unknown environment",
        }
    }

    /// Checks whether this label names a localhost-served variant
    pub const fn is_localhost(&self) -> bool {
        matches!(
            self,
            EnvironmentLabel::LocalSharePoint
                | EnvironmentLabel::LocalOffice
                | EnvironmentLabel::LocalOutlook
                | EnvironmentLabel::LocalTeams
        )
    }
}

impl fmt::Display for EnvironmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
