//! Core module containing fundamental types for Chart-Embed
//!
//! This module provides the foundational building blocks used throughout
//! the crate: parsed tenant and app identifiers, the validation verdict,
//! host context descriptors, and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    AppId,
    EmbedError,
    EmbedResult,
    EnvironmentLabel,
    HostContext,
    Tenant,
    ValidationVerdict,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

// Cloud domain all tenant hosts live under
pub const CLOUD_DOMAIN: &str = "qlikcloud.com";
