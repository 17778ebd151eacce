//! Domain layer — pure types, validation, and sanitization.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod platform;

pub use config::{PackageConfig, RawEnv, ScratchOrgConfig, VariableStoreConfig};
pub use error::{ConfigError, OrgError, ProcessError, SyncError};
pub use platform::{CiPlatform, sanitize_value};
