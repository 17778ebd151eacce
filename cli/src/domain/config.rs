//! Process configuration: raw environment snapshot and per-command validation.
//!
//! Pure functions only — no I/O, no async, no filesystem access. The
//! snapshot is filled by `crate::infra::config`; validation happens here,
//! once, before any component is constructed.

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::error::ConfigError;
use crate::domain::platform::CiPlatform;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_SCRATCH_DEF_PATH: &str = "config/project-scratch-def.json";
pub const DEFAULT_PROJECT_MANIFEST: &str = "sfdx-project.json";
pub const DEFAULT_PACKAGE_TARGET_ORG: &str = "devhub";
pub const DEFAULT_SF_BIN: &str = "sf";

// ── Raw environment ──────────────────────────────────────────────────────────

/// Every environment variable the tooling reads, as loaded by `envy`.
///
/// Each field maps to the upper-cased variable of the same name, e.g.
/// `test_org_name` ← `TEST_ORG_NAME`. Empty values count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnv {
    pub package_installation_key: Option<String>,
    pub package_target_org: Option<String>,
    pub sfdx_project_path: Option<String>,
    pub test_org_name: Option<String>,
    pub dev_hub_client_id: Option<String>,
    pub dev_hub_private_key_path: Option<String>,
    pub scratch_def_path: Option<String>,
    pub ci_platform: Option<String>,
    pub ci_env_var_url: Option<String>,
    pub ci_admin_token: Option<String>,
    pub sf_bin: Option<String>,
}

// ── Validated configs ────────────────────────────────────────────────────────

/// Target of CI variable updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStoreConfig {
    pub platform: CiPlatform,
    /// Variables collection URL; the key is appended as the last segment.
    pub base_url: String,
    pub admin_token: String,
}

/// Everything `sfci scratch-org` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchOrgConfig {
    pub org_name: String,
    pub client_id: String,
    pub private_key_path: PathBuf,
    /// As configured; resolved against the working directory by the caller.
    pub definition_file: PathBuf,
    pub variables: VariableStoreConfig,
}

/// Everything `sfci package` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub installation_key: String,
    pub target_org: String,
    pub manifest_path: PathBuf,
}

fn value(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Fail with every missing name at once, in the order given.
fn require(fields: &[(&str, &Option<String>)]) -> Result<(), ConfigError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, field)| value(field).is_none())
        .map(|(name, _)| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Missing(missing))
    }
}

fn owned(field: &Option<String>) -> String {
    value(field).unwrap_or_default().to_string()
}

impl RawEnv {
    /// Executable used for every `sf` invocation (`SF_BIN`, default `sf`).
    #[must_use]
    pub fn sf_program(&self) -> &str {
        value(&self.sf_bin).unwrap_or(DEFAULT_SF_BIN)
    }

    /// Validate the CI variable store settings.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` listing every absent variable, or
    /// `SyncError::UnsupportedPlatform` for an unknown `CI_PLATFORM`.
    pub fn variable_store_config(&self) -> Result<VariableStoreConfig> {
        require(&[
            ("CI_ENV_VAR_URL", &self.ci_env_var_url),
            ("CI_ADMIN_TOKEN", &self.ci_admin_token),
        ])?;
        self.variable_store_unchecked()
    }

    fn variable_store_unchecked(&self) -> Result<VariableStoreConfig> {
        let platform = match value(&self.ci_platform) {
            Some(raw) => raw.parse::<CiPlatform>()?,
            None => CiPlatform::default(),
        };
        Ok(VariableStoreConfig {
            platform,
            base_url: owned(&self.ci_env_var_url),
            admin_token: owned(&self.ci_admin_token),
        })
    }

    /// Validate the scratch org provisioning settings.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` listing every absent variable, or
    /// `SyncError::UnsupportedPlatform` for an unknown `CI_PLATFORM`.
    pub fn scratch_org_config(&self) -> Result<ScratchOrgConfig> {
        require(&[
            ("TEST_ORG_NAME", &self.test_org_name),
            ("CI_ENV_VAR_URL", &self.ci_env_var_url),
            ("CI_ADMIN_TOKEN", &self.ci_admin_token),
            ("DEV_HUB_CLIENT_ID", &self.dev_hub_client_id),
            ("DEV_HUB_PRIVATE_KEY_PATH", &self.dev_hub_private_key_path),
        ])?;
        Ok(ScratchOrgConfig {
            org_name: owned(&self.test_org_name),
            client_id: owned(&self.dev_hub_client_id),
            private_key_path: PathBuf::from(owned(&self.dev_hub_private_key_path)),
            definition_file: PathBuf::from(
                value(&self.scratch_def_path).unwrap_or(DEFAULT_SCRATCH_DEF_PATH),
            ),
            variables: self.variable_store_unchecked()?,
        })
    }

    /// Validate the package release settings.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` if `PACKAGE_INSTALLATION_KEY` is absent.
    pub fn package_config(&self) -> Result<PackageConfig> {
        require(&[("PACKAGE_INSTALLATION_KEY", &self.package_installation_key)])?;
        Ok(PackageConfig {
            installation_key: owned(&self.package_installation_key),
            target_org: value(&self.package_target_org)
                .unwrap_or(DEFAULT_PACKAGE_TARGET_ORG)
                .to_string(),
            manifest_path: PathBuf::from(
                value(&self.sfdx_project_path).unwrap_or(DEFAULT_PROJECT_MANIFEST),
            ),
        })
    }

    /// Org targeted by `sfci delete-org` when none is passed explicitly.
    #[must_use]
    pub fn default_org_name(&self) -> Option<&str> {
        value(&self.test_org_name)
    }
}
