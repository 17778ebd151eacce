//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `sfci_common` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;
use sfci_common::{
    DeletedOrg, Envelope, GeneratedPassword, InstalledPackage, JwtLoginResult, PackageVersion,
    QueryResult, ScratchOrgCreated, ScratchOrgInfo,
};

use crate::domain::{CiPlatform, ProcessError};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Parameters for `sf org create scratch`.
pub struct ScratchOrgSpec<'a> {
    /// Local alias, also used as the org name.
    pub alias: &'a str,
    /// Absolute path of the scratch definition file.
    pub definition_file: &'a Path,
    /// Lifetime bound of the org.
    pub duration_days: u32,
}

/// Parameters for `sf org login jwt`.
pub struct JwtLoginSpec<'a> {
    pub alias: &'a str,
    pub client_id: &'a str,
    pub key_file: &'a Path,
    pub username: &'a str,
    pub instance_url: &'a str,
}

/// Parameters for `sf package version create`.
pub struct PackageVersionSpec<'a> {
    pub package: &'a str,
    pub branch: &'a str,
    pub installation_key: &'a str,
    pub wait_minutes: u32,
}

/// Parameters for `sf package install`.
pub struct PackageInstallSpec<'a> {
    pub target_org: &'a str,
    /// Subscriber package version id (`04t...`).
    pub package_version_id: &'a str,
    pub installation_key: &'a str,
    pub wait_minutes: u32,
}

/// HTTP verbs used by the variable APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Patch,
    Put,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "PATCH",
            Self::Put => "PUT",
        }
    }
}

/// Request body encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Pre-rendered JSON document.
    Json(String),
    /// `application/x-www-form-urlencoded` fields.
    Form(Vec<(String, String)>),
}

/// One outgoing HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response status and body, including 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output. No timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Spawn` if the program cannot be started.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program and return its stdout as text.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Exit` on a non-zero exit; no partial output is
    /// returned in that case.
    async fn run_captured(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.run(program, args).await?;
        if !output.status.success() {
            return Err(ProcessError::Exit {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ── Salesforce CLI Ports ──────────────────────────────────────────────────────
//
// Every method returns the decoded envelope as-is; interpreting `status` is
// the service's job.

/// Scratch org lifecycle on the Dev Hub.
#[allow(async_fn_in_trait)]
pub trait ScratchOrgManager {
    /// Query active `ScratchOrgInfo` records whose `OrgName` equals `org_name`.
    async fn find_active_scratch_orgs(
        &self,
        org_name: &str,
    ) -> Result<Envelope<QueryResult<ScratchOrgInfo>>>;
    /// Create a scratch org from a definition file.
    async fn create_scratch_org(&self, spec: &ScratchOrgSpec<'_>)
    -> Result<Envelope<ScratchOrgCreated>>;
    /// Generate a new password for the org's admin user.
    async fn generate_password(&self, target_org: &str) -> Result<Envelope<GeneratedPassword>>;
    /// Delete a scratch org without prompting.
    async fn delete_scratch_org(&self, target_org: &str) -> Result<Envelope<DeletedOrg>>;
}

/// Org authentication.
#[allow(async_fn_in_trait)]
pub trait OrgAuthenticator {
    /// Authenticate with the JWT bearer flow.
    async fn login_jwt(&self, spec: &JwtLoginSpec<'_>) -> Result<Envelope<JwtLoginResult>>;
}

/// Second-generation package operations.
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Create a package version and wait for it to build.
    async fn create_package_version(
        &self,
        spec: &PackageVersionSpec<'_>,
    ) -> Result<Envelope<PackageVersion>>;
    /// Install a package version into an org.
    async fn install_package(&self, spec: &PackageInstallSpec<'_>)
    -> Result<Envelope<InstalledPackage>>;
}

/// Composite trait — any type implementing all three is a full `sf` adapter.
pub trait SalesforceCli: ScratchOrgManager + OrgAuthenticator + PackageManager {}

impl<T> SalesforceCli for T where T: ScratchOrgManager + OrgAuthenticator + PackageManager {}

// ── CI Variable Store Port ────────────────────────────────────────────────────

/// Updates one variable in a CI provider's variable store.
#[allow(async_fn_in_trait)]
pub trait VariableStoreClient {
    /// Provider this client talks to.
    fn platform(&self) -> CiPlatform;

    /// Sanitize `value` for the provider and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `SyncError` if the provider rejects the update or cannot be
    /// reached.
    async fn set_variable(&self, key: &str, value: &str) -> Result<()>;
}

// ── HTTP Port ─────────────────────────────────────────────────────────────────

/// Abstracts HTTP so provider clients can be tested without a network.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Send a request. Non-2xx responses are returned, not raised.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
