//! Tenant identifier type with name/region parsing and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data-center regions a cloud analytics tenant may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
    De,
    Uk,
    Se,
    Sg,
    Ap,
    Jp,
    In,
    Ae,
}

impl Region {
    /// All regions a tenant is allowed to name, in catalog order
    pub const ALL: [Region; 10] = [
        Region::Us,
        Region::Eu,
        Region::De,
        Region::Uk,
        Region::Se,
        Region::Sg,
        Region::Ap,
        Region::Jp,
        Region::In,
        Region::Ae,
    ];

    /// Returns the short region code
    pub const fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::De => "de",
            Region::Uk => "uk",
            Region::Se => "se",
            Region::Sg => "sg",
            Region::Ap => "ap",
            Region::Jp => "jp",
            Region::In => "in",
            Region::Ae => "ae",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a region code outside the allowed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid region code: {0}")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    // Codes match exactly; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

/// Error raised when a raw tenant field cannot be parsed
///
/// The display strings double as the diagnostic messages surfaced to the
/// administrator, so their wording is fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantError {
    #[error("Tenant field format should be: 'tenantName.region'.")]
    Format,

    #[error("Tenant \"{0}\" has no tenant name.")]
    MissingName(String),

    #[error("Tenant \"{0}\" has an invalid region.")]
    InvalidRegion(String),
}

/// A parsed `name.region` tenant identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub region: Region,
}

impl Tenant {
    /// Creates a tenant from an already-validated name and region
    pub fn new(name: impl Into<String>, region: Region) -> Self {
        Tenant {
            name: name.into(),
            region,
        }
    }

    /// Returns the fully qualified cloud host name for this tenant
    pub fn host_name(&self) -> String {
        format!("{}.{}.{}", self.name, self.region, crate::core::CLOUD_DOMAIN)
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.region)
    }
}

impl FromStr for Tenant {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();

        // A trailing dot still splits into two segments; reject it as a
        // format error rather than a missing region.
        if segments.len() != 2 || s.ends_with('.') {
            return Err(TenantError::Format);
        }

        if segments[0].is_empty() {
            return Err(TenantError::MissingName(s.to_string()));
        }

        let region = segments[1]
            .parse::<Region>()
            .map_err(|_| TenantError::InvalidRegion(s.to_string()))?;

        Ok(Tenant::new(segments[0], region))
    }
}
