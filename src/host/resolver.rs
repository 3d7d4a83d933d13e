//! Environment resolver for Chart-Embed
//!
//! Derives a human-readable environment label from the host context. The
//! mapping is deterministic and total: every context resolves to exactly
//! one label from the fixed catalog.

use crate::core::types::{EnvironmentLabel, HostContext, HostName};

/// Host environment resolver
pub struct EnvironmentResolver;

impl EnvironmentResolver {
    /// Resolves the host context to an environment label
    pub fn resolve(context: &HostContext) -> EnvironmentLabel {
        let local = context.is_localhost;

        match &context.host {
            // Not inside the collaboration suite: a plain hosting page
            None => {
                if local {
                    EnvironmentLabel::LocalSharePoint
                } else {
                    EnvironmentLabel::SharePoint
                }
            }
            Some(HostName::Office) => {
                if local {
                    EnvironmentLabel::LocalOffice
                } else {
                    EnvironmentLabel::Office
                }
            }
            Some(HostName::Outlook) => {
                if local {
                    EnvironmentLabel::LocalOutlook
                } else {
                    EnvironmentLabel::Outlook
                }
            }
            Some(HostName::Teams) | Some(HostName::TeamsModern) => {
                if local {
                    EnvironmentLabel::LocalTeams
                } else {
                    EnvironmentLabel::Teams
                }
            }
            Some(HostName::Other(_)) => EnvironmentLabel::Unknown,
        }
    }
}

/// Resolves a host context to an environment label
pub fn resolve(context: &HostContext) -> EnvironmentLabel {
    EnvironmentResolver::resolve(context)
}
