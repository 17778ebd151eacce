//! Reads the `sfdx-project.json` manifest.

use std::path::Path;

use anyhow::Result;
use sfci_common::SfdxProject;

use crate::domain::ConfigError;

/// Load and parse the project manifest at `path`.
///
/// # Errors
///
/// `ConfigError::UnreadableManifest` if the file is missing or not valid JSON.
pub fn read_manifest(path: &Path) -> Result<SfdxProject> {
    let unreadable = |reason: String| ConfigError::UnreadableManifest {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    Ok(serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))?)
}

/// Name of the default package declared in the manifest at `path`.
///
/// # Errors
///
/// `ConfigError::NoDefaultPackage` when no directory is flagged default or
/// the default one has no `package` name.
pub fn default_package_name(path: &Path) -> Result<String> {
    let project = read_manifest(path)?;
    project
        .default_package()
        .and_then(|dir| dir.package.clone())
        .ok_or_else(|| ConfigError::NoDefaultPackage(path.to_path_buf()).into())
}
