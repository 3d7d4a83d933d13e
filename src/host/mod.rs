//! Host environment module for Chart-Embed
//!
//! Maps the externally supplied host context to a diagnostic environment
//! label. The label never feeds back into validation.

mod resolver;

pub use resolver::{resolve, EnvironmentResolver};
