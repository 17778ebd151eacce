//! `sfdx-project.json` manifest model.

use serde::{Deserialize, Serialize};

/// Salesforce DX project manifest. Only the fields the CI tooling reads are
/// modelled; the rest are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SfdxProject {
    pub package_directories: Vec<PackageDirectory>,
    pub namespace: Option<String>,
    pub source_api_version: Option<String>,
}

/// One entry of `packageDirectories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDirectory {
    pub path: String,
    pub package: Option<String>,
    pub version_name: Option<String>,
    pub version_number: Option<String>,
    pub default: bool,
}

impl SfdxProject {
    /// The directory flagged `"default": true`, if any.
    #[must_use]
    pub fn default_package(&self) -> Option<&PackageDirectory> {
        self.package_directories.iter().find(|d| d.default)
    }
}
