//! Embed configuration validator for Chart-Embed
//!
//! Decides embed-readiness of the raw settings and explains any failure.
//! Rendering is all-or-nothing: every field must pass its own check before
//! the embed is allowed, and a partially valid configuration still gets the
//! diagnostic branch.

use super::settings::EmbedSettings;
use crate::core::types::{AppId, Tenant, ValidationVerdict};

/// Number of fields that must pass before the embed may render
pub const TOTAL_CONFIG_FIELDS: usize = 4;

/// Embed configuration validator
pub struct EmbedValidator;

impl EmbedValidator {
    /// Validates the entire configuration
    ///
    /// Pure and total: malformed input becomes a message in the verdict,
    /// never an error. An empty field is untouched rather than failing;
    /// it contributes no message but keeps the verdict invalid.
    pub fn validate(settings: &EmbedSettings) -> ValidationVerdict {
        if settings.is_untouched() {
            return ValidationVerdict::empty();
        }

        let mut validated_fields = 0;
        let mut messages = Vec::new();

        // Message order is fixed: tenant, client, app, object.
        if !settings.tenant.is_empty() {
            match settings.tenant.parse::<Tenant>() {
                Ok(_) => validated_fields += 1,
                Err(err) => messages.push(err.to_string()),
            }
        }

        // Presence is the only constraint on the client id.
        if !settings.client_id.is_empty() {
            validated_fields += 1;
        }

        if !settings.app_id.is_empty() {
            match settings.app_id.parse::<AppId>() {
                Ok(_) => validated_fields += 1,
                Err(err) => messages.push(err.to_string()),
            }
        }

        // The object id is opaque here; only the embed element consumes it.
        if !settings.object_id.is_empty() {
            validated_fields += 1;
        }

        if validated_fields == TOTAL_CONFIG_FIELDS {
            ValidationVerdict::valid()
        } else {
            ValidationVerdict::invalid(messages)
        }
    }
}

/// Validates embed settings
pub fn validate_settings(settings: &EmbedSettings) -> ValidationVerdict {
    EmbedValidator::validate(settings)
}
