//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::platform::CiPlatform;

// ── Process errors ────────────────────────────────────────────────────────────

/// An external executable could not be launched or exited non-zero.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"))
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to process configuration and the project manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variables must be set: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("Default package not found in {}", .0.display())]
    NoDefaultPackage(PathBuf),

    #[error("Cannot read project manifest {}: {reason}", .path.display())]
    UnreadableManifest { path: PathBuf, reason: String },
}

// ── Org errors ────────────────────────────────────────────────────────────────

/// Failures of the scratch org reuse-or-create transition.
#[derive(Debug, Error)]
pub enum OrgError {
    #[error("Failed to authenticate to org '{org}': {reason}")]
    Authentication { org: String, reason: String },

    #[error("Failed to create scratch org '{org}': {reason}")]
    Provisioning { org: String, reason: String },
}

// ── Variable sync errors ──────────────────────────────────────────────────────

/// Failures while updating a CI variable.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("CI platform {0} is not supported.")]
    UnsupportedPlatform(String),

    #[error("Failed to update {platform} CI environment variable: {message}")]
    Rejected { platform: CiPlatform, message: String },

    #[error("Unexpected response from {platform} variable API: {reason}")]
    Malformed { platform: CiPlatform, reason: String },

    #[error("Cannot reach {platform} variable API: {reason}")]
    Transport { platform: CiPlatform, reason: String },
}
