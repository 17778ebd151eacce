//! Result payloads of the `sf` commands the CI tooling invokes.
//!
//! SObject records use the API's PascalCase field names; command results use
//! camelCase. Every field defaults so abbreviated outputs still decode, and
//! fields the tooling never reads are `Option` so a `null` there is harmless.

use serde::{Deserialize, Serialize};

/// `result` of `sf data query`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total_size: Option<u64>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl<T> QueryResult<T> {
    /// Take the first record, if any.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.records.into_iter().next()
    }
}

/// `ScratchOrgInfo` SObject as returned by the Dev Hub.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScratchOrgInfo {
    pub id: Option<String>,
    pub signup_username: String,
    pub login_url: String,
    pub expiration_date: Option<String>,
    pub status: Option<String>,
    pub org_name: Option<String>,
    pub description: Option<String>,
    pub scratch_org: Option<String>,
}

/// `result` of `sf org create scratch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScratchOrgCreated {
    pub org_id: Option<String>,
    pub username: String,
    pub scratch_org_info: ScratchOrgInfo,
}

/// `result` of `sf org login jwt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct JwtLoginResult {
    pub org_id: Option<String>,
    pub username: Option<String>,
    pub login_url: Option<String>,
    pub instance_url: Option<String>,
    pub client_id: Option<String>,
}

/// `result` of `sf org generate password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratedPassword {
    pub username: Option<String>,
    pub password: String,
}

/// `result` of `sf org delete scratch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeletedOrg {
    pub username: String,
    pub org_id: String,
}

/// `result` of `sf package version create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageVersion {
    pub status: Option<String>,
    pub package2_id: Option<String>,
    pub package2_name: Option<String>,
    pub package2_version_id: Option<String>,
    pub subscriber_package_version_id: String,
    pub branch: String,
    pub code_coverage: Option<f64>,
    pub version_number: String,
    pub has_passed_code_coverage_check: Option<bool>,
}

/// `PackageInstallRequest` SObject returned by `sf package install`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstalledPackage {
    pub id: Option<String>,
    pub status: Option<String>,
    pub subscriber_package_version_key: Option<String>,
    pub errors: Option<serde_json::Value>,
}
