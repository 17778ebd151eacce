//! Unit tests for the GitHub and GitLab variable store clients.

#![allow(clippy::expect_used)]

use sfci_cli::application::ports::{HttpMethod, RequestBody, VariableStoreClient};
use sfci_cli::domain::{CiPlatform, SyncError, VariableStoreConfig};
use sfci_cli::infra::variable_store::{CiVariableStore, GithubVariableStore, GitlabVariableStore};

use crate::mocks::RecordingTransport;

const GITHUB_URL: &str = "https://api.github.com/repos/acme/app/actions/variables/";
const GITLAB_URL: &str = "https://gitlab.com/api/v4/projects/42/variables";

fn github(transport: &RecordingTransport) -> GithubVariableStore<RecordingTransport> {
    GithubVariableStore::new(transport.clone(), GITHUB_URL, "ghp_token")
}

fn gitlab(transport: &RecordingTransport) -> GitlabVariableStore<RecordingTransport> {
    GitlabVariableStore::new(transport.clone(), GITLAB_URL, "glpat-token")
}

fn rejection(err: &anyhow::Error) -> Option<&str> {
    match err.downcast_ref::<SyncError>() {
        Some(SyncError::Rejected { message, .. }) => Some(message.as_str()),
        _ => None,
    }
}

// ── GitHub ───────────────────────────────────────────────────────────────────

#[test]
fn test_github_request_shape() {
    let store = github(&RecordingTransport::default());

    let request = store.build_request("TEST_CREDENTIALS", r#"a&b "q""#);

    assert_eq!(request.method, HttpMethod::Patch);
    assert_eq!(
        request.url,
        "https://api.github.com/repos/acme/app/actions/variables/TEST_CREDENTIALS"
    );
    assert_eq!(request.header("Authorization"), Some("Bearer ghp_token"));
    assert_eq!(request.header("X-GitHub-Api-Version"), Some("2022-11-28"));
    assert_eq!(
        request.header("Accept"),
        Some("application/vnd.github+json")
    );
    assert_eq!(
        request.body,
        RequestBody::Json(r#"{"value": "a\&b \"q\""}"#.to_string())
    );
}

#[tokio::test]
async fn test_github_empty_body_is_success() {
    let transport = RecordingTransport::responding(204, "");

    github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect("update");

    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_github_error_status_in_body_is_rejected() {
    let transport = RecordingTransport::responding(200, r#"{"status":"404","message":"not found"}"#);

    let err = github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    assert_eq!(rejection(&err), Some("not found"));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_github_status_200_in_body_is_success() {
    let transport = RecordingTransport::responding(200, r#"{"status":"200"}"#);

    github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect("update");
}

#[tokio::test]
async fn test_github_http_error_without_status_field_is_rejected() {
    let transport = RecordingTransport::responding(
        401,
        r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#,
    );

    let err = github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    assert_eq!(rejection(&err), Some("Bad credentials"));
}

#[tokio::test]
async fn test_github_non_json_body_is_malformed() {
    let transport = RecordingTransport::responding(502, "<html>Bad Gateway</html>");

    let err = github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    assert!(matches!(
        err.downcast_ref::<SyncError>(),
        Some(SyncError::Malformed {
            platform: CiPlatform::Github,
            ..
        })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let transport = RecordingTransport::unreachable("dns error: no such host");

    let err = github(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    match err.downcast_ref::<SyncError>() {
        Some(SyncError::Transport { reason, .. }) => assert!(reason.contains("dns error")),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── GitLab ───────────────────────────────────────────────────────────────────

#[test]
fn test_gitlab_request_shape() {
    let store = gitlab(&RecordingTransport::default());

    let request = store.build_request("TEST_CREDENTIALS", r#"a&b "q""#);

    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(
        request.url,
        "https://gitlab.com/api/v4/projects/42/variables/TEST_CREDENTIALS"
    );
    assert_eq!(request.header("PRIVATE-TOKEN"), Some("glpat-token"));
    assert_eq!(request.header("Authorization"), None);
    assert_eq!(
        request.body,
        RequestBody::Form(vec![("value".to_string(), r#"a\&b "q""#.to_string())])
    );
}

#[tokio::test]
async fn test_gitlab_response_with_key_is_success() {
    let transport = RecordingTransport::responding(
        200,
        r#"{"key":"TEST_CREDENTIALS","value":"v","variable_type":"env_var","protected":false,"masked":false}"#,
    );

    gitlab(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect("update");
}

#[tokio::test]
async fn test_gitlab_response_without_key_is_rejected() {
    let transport = RecordingTransport::responding(403, r#"{"message":"403 Forbidden"}"#);

    let err = gitlab(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    assert_eq!(rejection(&err), Some("403 Forbidden"));
    assert_eq!(
        err.to_string(),
        "Failed to update Gitlab CI environment variable: 403 Forbidden"
    );
}

#[tokio::test]
async fn test_gitlab_empty_body_is_rejected() {
    let transport = RecordingTransport::responding(404, "");

    let err = gitlab(&transport)
        .set_variable("TEST_CREDENTIALS", "v")
        .await
        .expect_err("should fail");

    assert_eq!(rejection(&err), Some("HTTP 404"));
}

// ── Factory ──────────────────────────────────────────────────────────────────

fn config(platform: CiPlatform) -> VariableStoreConfig {
    VariableStoreConfig {
        platform,
        base_url: "https://ci.example.com/variables".into(),
        admin_token: "token".into(),
    }
}

#[tokio::test]
async fn test_factory_selects_gitlab_client() {
    let transport = RecordingTransport::responding(200, r#"{"key":"K"}"#);
    let store = CiVariableStore::new(&config(CiPlatform::Gitlab), transport.clone());

    store.set_variable("K", "v").await.expect("update");

    assert_eq!(store.platform(), CiPlatform::Gitlab);
    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Put);
    assert_eq!(requests[0].header("PRIVATE-TOKEN"), Some("token"));
}

#[tokio::test]
async fn test_factory_selects_github_client() {
    let transport = RecordingTransport::responding(204, "");
    let store = CiVariableStore::new(&config(CiPlatform::Github), transport.clone());

    store.set_variable("K", "v").await.expect("update");

    assert_eq!(store.platform(), CiPlatform::Github);
    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(requests[0].header("Authorization"), Some("Bearer token"));
}
