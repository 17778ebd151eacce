//! Shared mock infrastructure for unit tests.
//!
//! Hand-written port implementations that return canned results and record
//! every call, so tests can assert both outcomes and side effects.

#![allow(dead_code, clippy::expect_used)]

use std::collections::VecDeque;
use std::process::Output;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use sfci_cli::application::ports::{
    CommandRunner, HttpRequest, HttpResponse, HttpTransport, JwtLoginSpec, OrgAuthenticator,
    PackageInstallSpec, PackageManager, PackageVersionSpec, ProgressReporter, ScratchOrgManager,
    ScratchOrgSpec, VariableStoreClient,
};
use sfci_cli::domain::{CiPlatform, SyncError};
use sfci_common::{
    DeletedOrg, Envelope, GeneratedPassword, InstalledPackage, JwtLoginResult, PackageVersion,
    QueryResult, ScratchOrgCreated, ScratchOrgInfo,
};

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Collects every progress message, prefixed with its level.
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }

    fn push(&self, level: &str, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("{level}: {message}"));
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push("step", message);
    }
    fn success(&self, message: &str) {
        self.push("success", message);
    }
    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
}

// ── Command runner ───────────────────────────────────────────────────────────

/// Replays queued outputs in order and records each `(program, args)` call.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: Mutex<VecDeque<Output>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(outputs: Vec<Output>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("lock").clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| (*a).to_string()));
        self.calls.lock().expect("lock").push(call);
        self.outputs
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected command: {program} {}", args.join(" ")))
    }
}

// ── Salesforce CLI ───────────────────────────────────────────────────────────

/// Port-level fake: each slot holds the envelope its method returns. An empty
/// slot makes the call fail, like a process that could not be started.
#[derive(Default)]
pub struct FakeSf {
    pub lookup: Option<Envelope<QueryResult<ScratchOrgInfo>>>,
    pub create: Option<Envelope<ScratchOrgCreated>>,
    pub password: Option<Envelope<GeneratedPassword>>,
    pub delete: Option<Envelope<DeletedOrg>>,
    pub login: Option<Envelope<JwtLoginResult>>,
    pub version: Option<Envelope<PackageVersion>>,
    pub install: Option<Envelope<InstalledPackage>>,
    /// Filled in by the fake; tests read it through `calls()`.
    pub call_log: Mutex<Vec<String>>,
}

impl FakeSf {
    /// Every call as `method:detail`.
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().expect("lock").clone()
    }

    pub fn called(&self, method: &str) -> bool {
        self.calls()
            .iter()
            .any(|c| c.split(':').next() == Some(method))
    }

    fn canned<T: Clone>(&self, call: String, slot: &Option<Envelope<T>>) -> Result<Envelope<T>> {
        let method = call.split(':').next().unwrap_or_default().to_string();
        self.call_log.lock().expect("lock").push(call);
        slot.clone()
            .ok_or_else(|| anyhow::anyhow!("{method} not expected in this test"))
    }
}

impl ScratchOrgManager for FakeSf {
    async fn find_active_scratch_orgs(
        &self,
        org_name: &str,
    ) -> Result<Envelope<QueryResult<ScratchOrgInfo>>> {
        self.canned(format!("find_active_scratch_orgs:{org_name}"), &self.lookup)
    }

    async fn create_scratch_org(
        &self,
        spec: &ScratchOrgSpec<'_>,
    ) -> Result<Envelope<ScratchOrgCreated>> {
        self.canned(
            format!(
                "create_scratch_org:{}:{}:{}",
                spec.alias,
                spec.definition_file.display(),
                spec.duration_days
            ),
            &self.create,
        )
    }

    async fn generate_password(&self, target_org: &str) -> Result<Envelope<GeneratedPassword>> {
        self.canned(format!("generate_password:{target_org}"), &self.password)
    }

    async fn delete_scratch_org(&self, target_org: &str) -> Result<Envelope<DeletedOrg>> {
        self.canned(format!("delete_scratch_org:{target_org}"), &self.delete)
    }
}

impl OrgAuthenticator for FakeSf {
    async fn login_jwt(&self, spec: &JwtLoginSpec<'_>) -> Result<Envelope<JwtLoginResult>> {
        self.canned(
            format!(
                "login_jwt:{}:{}:{}:{}",
                spec.alias, spec.client_id, spec.username, spec.instance_url
            ),
            &self.login,
        )
    }
}

impl PackageManager for FakeSf {
    async fn create_package_version(
        &self,
        spec: &PackageVersionSpec<'_>,
    ) -> Result<Envelope<PackageVersion>> {
        self.canned(
            format!(
                "create_package_version:{}:{}:{}",
                spec.package, spec.branch, spec.wait_minutes
            ),
            &self.version,
        )
    }

    async fn install_package(
        &self,
        spec: &PackageInstallSpec<'_>,
    ) -> Result<Envelope<InstalledPackage>> {
        self.canned(
            format!(
                "install_package:{}:{}:{}",
                spec.target_org, spec.package_version_id, spec.wait_minutes
            ),
            &self.install,
        )
    }
}

// ── Variable store ───────────────────────────────────────────────────────────

/// Records `(key, value)` updates; optionally rejects them all.
#[derive(Default)]
pub struct RecordingVariableStore {
    updates: Mutex<Vec<(String, String)>>,
    reject_with: Option<String>,
}

impl RecordingVariableStore {
    pub fn rejecting(message: &str) -> Self {
        Self {
            updates: Mutex::new(Vec::new()),
            reject_with: Some(message.to_string()),
        }
    }

    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().expect("lock").clone()
    }
}

impl VariableStoreClient for RecordingVariableStore {
    fn platform(&self) -> CiPlatform {
        CiPlatform::Github
    }

    async fn set_variable(&self, key: &str, value: &str) -> Result<()> {
        self.updates
            .lock()
            .expect("lock")
            .push((key.to_string(), value.to_string()));
        match &self.reject_with {
            Some(message) => Err(SyncError::Rejected {
                platform: CiPlatform::Github,
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

// ── HTTP transport ───────────────────────────────────────────────────────────

/// Replays queued responses and records requests. Cloning shares state, so a
/// test can keep a handle after moving one into a client.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, String>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport
            .responses
            .lock()
            .expect("lock")
            .push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
        transport
    }

    pub fn unreachable(reason: &str) -> Self {
        let transport = Self::default();
        transport
            .responses
            .lock()
            .expect("lock")
            .push_back(Err(reason.to_string()));
        transport
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().expect("lock").push(request);
        match self.responses.lock().expect("lock").pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(anyhow::anyhow!(reason)),
            None => anyhow::bail!("no response queued"),
        }
    }
}
