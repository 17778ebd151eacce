//! Application service — reuse or provision the CI test scratch org.
//!
//! Imports only from `crate::domain`, `crate::application::ports` and
//! `sfci_common`. All I/O is routed through injected port traits.

use std::path::Path;

use anyhow::Result;
use sfci_common::{ScratchOrgInfo, TestCredentials};

use crate::application::ports::{
    JwtLoginSpec, OrgAuthenticator, ProgressReporter, ScratchOrgManager, ScratchOrgSpec,
    VariableStoreClient,
};
use crate::domain::OrgError;

/// CI variable that receives the connection descriptor of a new org.
pub const TEST_CREDENTIALS_KEY: &str = "TEST_CREDENTIALS";

/// Lifetime of a newly created scratch org.
pub const SCRATCH_ORG_DURATION_DAYS: u32 = 30;

/// Inputs of the `ensure_scratch_org` use-case.
pub struct ScratchOrgOptions<'a> {
    pub org_name: &'a str,
    /// Absolute path of the scratch definition file.
    pub definition_file: &'a Path,
    pub client_id: &'a str,
    pub private_key_path: &'a Path,
}

/// Result of looking the org up on the Dev Hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgLookup {
    FoundActive(ScratchOrgInfo),
    NotFound,
}

/// Outcome of the `ensure_scratch_org` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchOrgOutcome {
    /// An active org existed and the runner is now authenticated to it.
    Reused { username: String, instance_url: String },
    /// A new org was created and its credentials published to CI.
    Created { username: String, login_url: String },
}

/// Make the test org ready: authenticate to the active one or create it.
///
/// Never both: a found org that fails authentication is an error, not a
/// reason to create a new one.
///
/// # Errors
///
/// `OrgError::Authentication` or `OrgError::Provisioning` for the respective
/// transition, `SyncError` if publishing credentials fails, and any lookup
/// or password-generation failure as-is.
pub async fn ensure_scratch_org(
    sf: &(impl ScratchOrgManager + OrgAuthenticator),
    variables: &impl VariableStoreClient,
    reporter: &impl ProgressReporter,
    opts: &ScratchOrgOptions<'_>,
) -> Result<ScratchOrgOutcome> {
    reporter.step(&format!("retrieving org {}...", opts.org_name));

    let outcome = match lookup_test_org(sf, opts.org_name).await? {
        OrgLookup::FoundActive(info) => {
            reporter.step(&format!("authenticating into org {}...", opts.org_name));
            log_in(sf, &info, opts).await?
        }
        OrgLookup::NotFound => {
            reporter.warn(&format!(
                "org {} is no longer valid, creating a new scratch org...",
                opts.org_name
            ));
            create_and_publish(sf, variables, reporter, opts).await?
        }
    };

    reporter.success(&format!("connected to {}", opts.org_name));
    Ok(outcome)
}

/// Look up the active scratch org named `org_name`.
///
/// # Errors
///
/// Returns an error if the query fails or reports a non-zero status.
pub async fn lookup_test_org(sf: &impl ScratchOrgManager, org_name: &str) -> Result<OrgLookup> {
    let records = sf
        .find_active_scratch_orgs(org_name)
        .await?
        .into_result("sf data query")?;
    tracing::debug!(org = org_name, count = records.records.len(), "scratch org lookup");
    Ok(records
        .into_first()
        .map_or(OrgLookup::NotFound, OrgLookup::FoundActive))
}

async fn log_in(
    sf: &impl OrgAuthenticator,
    info: &ScratchOrgInfo,
    opts: &ScratchOrgOptions<'_>,
) -> Result<ScratchOrgOutcome> {
    let auth_failure = |reason: String| OrgError::Authentication {
        org: opts.org_name.to_string(),
        reason,
    };

    let envelope = sf
        .login_jwt(&JwtLoginSpec {
            alias: opts.org_name,
            client_id: opts.client_id,
            key_file: opts.private_key_path,
            username: &info.signup_username,
            instance_url: &info.login_url,
        })
        .await
        .map_err(|e| auth_failure(format!("{e:#}")))?;

    if !envelope.is_success() {
        return Err(auth_failure(envelope.diagnostic()).into());
    }
    let login = envelope.result.unwrap_or_default();

    Ok(ScratchOrgOutcome::Reused {
        username: non_empty_or(login.username, &info.signup_username),
        instance_url: non_empty_or(login.instance_url, &info.login_url),
    })
}

async fn create_and_publish(
    sf: &impl ScratchOrgManager,
    variables: &impl VariableStoreClient,
    reporter: &impl ProgressReporter,
    opts: &ScratchOrgOptions<'_>,
) -> Result<ScratchOrgOutcome> {
    let provisioning_failure = |reason: String| OrgError::Provisioning {
        org: opts.org_name.to_string(),
        reason,
    };

    let envelope = sf
        .create_scratch_org(&ScratchOrgSpec {
            alias: opts.org_name,
            definition_file: opts.definition_file,
            duration_days: SCRATCH_ORG_DURATION_DAYS,
        })
        .await
        .map_err(|e| provisioning_failure(format!("{e:#}")))?;

    if !envelope.is_success() {
        return Err(provisioning_failure(envelope.diagnostic()).into());
    }
    let created = envelope
        .result
        .ok_or_else(|| provisioning_failure("no result in creation output".to_string()))?;

    reporter.step("generating a password for the test user...");
    let password = sf
        .generate_password(opts.org_name)
        .await?
        .into_result("sf org generate password")?;

    let credentials = TestCredentials {
        login_url: created.scratch_org_info.login_url,
        username: created.username,
        password: password.password,
    };
    let value = serde_json::to_string(&credentials)?;

    reporter.step(&format!(
        "publishing {TEST_CREDENTIALS_KEY} to {} CI variables...",
        variables.platform()
    ));
    variables.set_variable(TEST_CREDENTIALS_KEY, &value).await?;

    Ok(ScratchOrgOutcome::Created {
        username: credentials.username,
        login_url: credentials.login_url,
    })
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
