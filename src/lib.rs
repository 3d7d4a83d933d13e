//! Chart-Embed library for analytics chart embed decisions
//!
//! Validates the administrator-supplied embed configuration, resolves the
//! hosting environment to a diagnostic label, and plans which fragment the
//! hosting page should render. The library is pure; all I/O lives in the
//! settings loader and the diagnostic binary.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod config;
pub mod core;
pub mod embed;
pub mod host;

// Re-export main types from core module
pub use crate::core::types::{
    AppId, ClientId, EmbedError, EmbedResult, EnvironmentLabel, HostContext, HostName, ObjectId,
    Region, Tenant, ValidationVerdict,
};

// Re-export the operations the hosting layer drives
pub use config::{validate_settings, ConfigError, EmbedSettings, EmbedValidator, SettingsLoader};
pub use embed::{plan_render, ChartEmbed, EmbedScript, RenderPlan};
pub use host::{resolve, EnvironmentResolver};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_module_accessible() {
        // Test that core module is accessible
        let _version = crate::core::VERSION;
        let _authors = crate::core::AUTHORS;
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::CLOUD_DOMAIN, "qlikcloud.com");
    }

    #[test]
    fn test_tenant_reexport() {
        // Test that Tenant is properly re-exported
        let tenant: Tenant = "acme.us".parse().unwrap();
        assert_eq!(tenant.name, "acme");
        assert_eq!(tenant.region, Region::Us);
    }

    #[test]
    fn test_app_id_reexport() {
        let app_id: AppId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().unwrap();
        assert_eq!(app_id.as_str().len(), 36);
    }

    #[test]
    fn test_validate_reexport() {
        let verdict = validate_settings(&EmbedSettings::default());
        assert!(verdict.is_empty);
        assert!(!verdict.is_valid);
    }

    #[test]
    fn test_resolve_reexport() {
        let label = resolve(&HostContext::embedded(HostName::Teams, false));
        assert_eq!(label, EnvironmentLabel::Teams);
    }

    #[test]
    fn test_plan_render_reexport() {
        let plan = plan_render(&EmbedSettings::default(), "https://example.test/page");
        assert!(!plan.is_chart());
    }

    #[test]
    fn test_embed_error_reexport() {
        let error = EmbedError::Unknown("test".to_string());
        assert!(error.to_string().contains("Unknown error"));

        let result: EmbedResult<u32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_id_aliases() {
        let client: ClientId = "client-abc".to_string();
        let object: ObjectId = "obj1".to_string();
        assert_eq!(client, "client-abc");
        assert_eq!(object, "obj1");
    }
}
