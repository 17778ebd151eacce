//! Infrastructure implementation of the Salesforce CLI port traits.
//!
//! `SfCli<R>` composes `sf` argument vectors, routes them through a
//! `CommandRunner`, and decodes stdout with `parse_envelope`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use sfci_common::{
    DeletedOrg, Envelope, GeneratedPassword, InstalledPackage, JwtLoginResult, PackageVersion,
    QueryResult, ScratchOrgCreated, ScratchOrgInfo, parse_envelope,
};

use crate::application::ports::{
    CommandRunner, JwtLoginSpec, OrgAuthenticator, PackageInstallSpec, PackageManager,
    PackageVersionSpec, ScratchOrgManager, ScratchOrgSpec,
};
use crate::infra::command_runner::TokioCommandRunner;

/// Flags whose value must never reach logs or error messages.
const SECRET_FLAGS: &[&str] = &["--installation-key"];

/// Infrastructure adapter that routes all `sf` calls through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a scripted runner
/// without spawning real processes.
pub struct SfCli<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> SfCli<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// The wrapped runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn invoke<T: DeserializeOwned>(&self, args: &[&str]) -> Result<Envelope<T>> {
        let label = describe(&self.program, args);
        tracing::debug!(command = %label, "running sf");
        let stdout = self
            .runner
            .run_captured(&self.program, args)
            .await
            .with_context(|| format!("running `{label}`"))?;
        Ok(parse_envelope(&label, &stdout)?)
    }
}

impl SfCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner(program: &str) -> Self {
        Self::new(TokioCommandRunner, program)
    }
}

/// Render a command line for logs, masking secret flag values.
#[must_use]
pub fn describe(program: &str, args: &[&str]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    let mut mask_next = false;
    for arg in args {
        if mask_next {
            parts.push("***".to_string());
            mask_next = false;
            continue;
        }
        mask_next = SECRET_FLAGS.contains(arg);
        parts.push((*arg).to_string());
    }
    parts.join(" ")
}

/// SOQL string literal body: backslashes and single quotes escaped.
#[must_use]
pub fn soql_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Lookup of active scratch orgs with an exact `OrgName`.
#[must_use]
pub fn active_scratch_org_query(org_name: &str) -> String {
    format!(
        "SELECT Id, SignupUsername, LoginUrl, ExpirationDate, Status, OrgName, Description, \
         ScratchOrg FROM ScratchOrgInfo WHERE Status = 'Active' AND OrgName = '{}'",
        soql_escape(org_name)
    )
}

impl<R: CommandRunner> ScratchOrgManager for SfCli<R> {
    async fn find_active_scratch_orgs(
        &self,
        org_name: &str,
    ) -> Result<Envelope<QueryResult<ScratchOrgInfo>>> {
        let query = active_scratch_org_query(org_name);
        self.invoke(&["data", "query", "--query", &query, "--json"])
            .await
    }

    async fn create_scratch_org(
        &self,
        spec: &ScratchOrgSpec<'_>,
    ) -> Result<Envelope<ScratchOrgCreated>> {
        let definition_file = spec.definition_file.to_string_lossy();
        let duration = spec.duration_days.to_string();
        self.invoke(&[
            "org",
            "create",
            "scratch",
            "--alias",
            spec.alias,
            "--name",
            spec.alias,
            "--definition-file",
            &definition_file,
            "--duration-days",
            &duration,
            "--no-namespace",
            "--json",
        ])
        .await
    }

    async fn generate_password(&self, target_org: &str) -> Result<Envelope<GeneratedPassword>> {
        self.invoke(&["org", "generate", "password", "--target-org", target_org, "--json"])
            .await
    }

    async fn delete_scratch_org(&self, target_org: &str) -> Result<Envelope<DeletedOrg>> {
        self.invoke(&[
            "org",
            "delete",
            "scratch",
            "--target-org",
            target_org,
            "--no-prompt",
            "--json",
        ])
        .await
    }
}

impl<R: CommandRunner> OrgAuthenticator for SfCli<R> {
    async fn login_jwt(&self, spec: &JwtLoginSpec<'_>) -> Result<Envelope<JwtLoginResult>> {
        let key_file = spec.key_file.to_string_lossy();
        self.invoke(&[
            "org",
            "login",
            "jwt",
            "--alias",
            spec.alias,
            "--client-id",
            spec.client_id,
            "--jwt-key-file",
            &key_file,
            "--username",
            spec.username,
            "--instance-url",
            spec.instance_url,
            "--json",
        ])
        .await
    }
}

impl<R: CommandRunner> PackageManager for SfCli<R> {
    async fn create_package_version(
        &self,
        spec: &PackageVersionSpec<'_>,
    ) -> Result<Envelope<PackageVersion>> {
        let wait = spec.wait_minutes.to_string();
        self.invoke(&[
            "package",
            "version",
            "create",
            "--package",
            spec.package,
            "--branch",
            spec.branch,
            "--code-coverage",
            "--installation-key",
            spec.installation_key,
            "--wait",
            &wait,
            "--json",
        ])
        .await
    }

    async fn install_package(
        &self,
        spec: &PackageInstallSpec<'_>,
    ) -> Result<Envelope<InstalledPackage>> {
        let wait = spec.wait_minutes.to_string();
        self.invoke(&[
            "package",
            "install",
            "--target-org",
            spec.target_org,
            "--package",
            spec.package_version_id,
            "--installation-key",
            spec.installation_key,
            "--wait",
            &wait,
            "--publish-wait",
            &wait,
            "--json",
        ])
        .await
    }
}
