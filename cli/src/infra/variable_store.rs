//! CI variable store clients — one per provider, behind `VariableStoreClient`.
//!
//! `CiVariableStore::new` is the single place that looks at `CiPlatform`;
//! everything above it only sees the trait.

use anyhow::Result;
use serde::de::DeserializeOwned;
use sfci_common::{GithubVariableResponse, GitlabVariableResponse};

use crate::application::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody, VariableStoreClient,
};
use crate::domain::{CiPlatform, SyncError, VariableStoreConfig, sanitize_value};
use crate::infra::http::UreqTransport;

/// Value of the `X-GitHub-Api-Version` header.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

fn variable_url(base_url: &str, key: &str) -> String {
    format!("{}/{key}", base_url.trim_end_matches('/'))
}

/// Decode a provider response; an empty body reads as `{}`.
fn decode_body<T: DeserializeOwned + Default>(
    platform: CiPlatform,
    body: &str,
) -> Result<T, SyncError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| SyncError::Malformed {
        platform,
        reason: e.to_string(),
    })
}

async fn send(
    transport: &impl HttpTransport,
    platform: CiPlatform,
    request: HttpRequest,
) -> Result<HttpResponse, SyncError> {
    transport
        .send(request)
        .await
        .map_err(|e| SyncError::Transport {
            platform,
            reason: format!("{e:#}"),
        })
}

// ── GitHub ────────────────────────────────────────────────────────────────────

/// GitHub Actions repository variables.
///
/// `base_url` is the variables collection, e.g.
/// `https://api.github.com/repos/{owner}/{repo}/actions/variables`.
pub struct GithubVariableStore<H: HttpTransport> {
    transport: H,
    base_url: String,
    token: String,
}

impl<H: HttpTransport> GithubVariableStore<H> {
    pub fn new(transport: H, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Request that stores the sanitized `value` under `key`.
    #[must_use]
    pub fn build_request(&self, key: &str, value: &str) -> HttpRequest {
        let sanitized = sanitize_value(CiPlatform::Github, value);
        HttpRequest {
            method: HttpMethod::Patch,
            url: variable_url(&self.base_url, key),
            headers: vec![
                ("Accept".into(), "application/vnd.github+json".into()),
                ("Authorization".into(), format!("Bearer {}", self.token)),
                ("X-GitHub-Api-Version".into(), GITHUB_API_VERSION.into()),
            ],
            body: RequestBody::Json(format!(r#"{{"value": "{sanitized}"}}"#)),
        }
    }
}

impl<H: HttpTransport> VariableStoreClient for GithubVariableStore<H> {
    fn platform(&self) -> CiPlatform {
        CiPlatform::Github
    }

    async fn set_variable(&self, key: &str, value: &str) -> Result<()> {
        let platform = self.platform();
        let response = send(&self.transport, platform, self.build_request(key, value)).await?;
        let body: GithubVariableResponse = decode_body(platform, &response.body)?;

        let rejected_status = body.status.as_deref().filter(|s| *s != "200");
        if rejected_status.is_some() || response.status >= 400 {
            let message = body.message.unwrap_or_else(|| {
                format!(
                    "HTTP {}",
                    rejected_status.map_or_else(|| response.status.to_string(), str::to_string)
                )
            });
            return Err(SyncError::Rejected { platform, message }.into());
        }
        tracing::info!(key, %platform, "CI variable updated");
        Ok(())
    }
}

// ── GitLab ────────────────────────────────────────────────────────────────────

/// GitLab CI/CD project variables.
///
/// `base_url` is the variables collection, e.g.
/// `https://gitlab.com/api/v4/projects/{id}/variables`.
pub struct GitlabVariableStore<H: HttpTransport> {
    transport: H,
    base_url: String,
    token: String,
}

impl<H: HttpTransport> GitlabVariableStore<H> {
    pub fn new(transport: H, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn build_request(&self, key: &str, value: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            url: variable_url(&self.base_url, key),
            headers: vec![("PRIVATE-TOKEN".into(), self.token.clone())],
            body: RequestBody::Form(vec![(
                "value".into(),
                sanitize_value(CiPlatform::Gitlab, value),
            )]),
        }
    }
}

impl<H: HttpTransport> VariableStoreClient for GitlabVariableStore<H> {
    fn platform(&self) -> CiPlatform {
        CiPlatform::Gitlab
    }

    async fn set_variable(&self, key: &str, value: &str) -> Result<()> {
        let platform = self.platform();
        let response = send(&self.transport, platform, self.build_request(key, value)).await?;
        let body: GitlabVariableResponse = decode_body(platform, &response.body)?;

        if body.key.is_none() {
            let message = body
                .message_text()
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            return Err(SyncError::Rejected { platform, message }.into());
        }
        tracing::info!(key, %platform, "CI variable updated");
        Ok(())
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// The variable store selected by `CI_PLATFORM`.
pub enum CiVariableStore<H: HttpTransport> {
    Github(GithubVariableStore<H>),
    Gitlab(GitlabVariableStore<H>),
}

impl<H: HttpTransport> CiVariableStore<H> {
    pub fn new(config: &VariableStoreConfig, transport: H) -> Self {
        match config.platform {
            CiPlatform::Github => Self::Github(GithubVariableStore::new(
                transport,
                &config.base_url,
                &config.admin_token,
            )),
            CiPlatform::Gitlab => Self::Gitlab(GitlabVariableStore::new(
                transport,
                &config.base_url,
                &config.admin_token,
            )),
        }
    }
}

impl CiVariableStore<UreqTransport> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &VariableStoreConfig) -> Self {
        Self::new(config, UreqTransport::new())
    }
}

impl<H: HttpTransport> VariableStoreClient for CiVariableStore<H> {
    fn platform(&self) -> CiPlatform {
        match self {
            Self::Github(store) => store.platform(),
            Self::Gitlab(store) => store.platform(),
        }
    }

    async fn set_variable(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Github(store) => store.set_variable(key, value).await,
            Self::Gitlab(store) => store.set_variable(key, value).await,
        }
    }
}
