//! Bodies exchanged with CI provider variable APIs.

use serde::{Deserialize, Serialize};

/// Response of `PATCH /repos/{owner}/{repo}/actions/variables/{name}`.
///
/// GitHub answers `204 No Content` on success, so every field is optional;
/// error bodies carry `status` as a string (e.g. `"404"`) and `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GithubVariableResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub documentation_url: Option<String>,
}

/// Response of `PUT /projects/:id/variables/:key`.
///
/// A successful update echoes the variable, including its `key`. Errors only
/// carry `message`, which GitLab sends either as a string or as an object of
/// field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitlabVariableResponse {
    pub key: Option<String>,
    pub value: Option<String>,
    pub variable_type: Option<String>,
    pub protected: Option<bool>,
    pub masked: Option<bool>,
    pub raw: Option<bool>,
    pub environment_scope: Option<String>,
    pub description: Option<String>,
    pub message: Option<serde_json::Value>,
}

impl GitlabVariableResponse {
    /// `message` rendered as text, unquoted when it is a plain string.
    #[must_use]
    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(|m| match m {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Connection descriptor published to CI for a freshly created scratch org.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestCredentials {
    pub login_url: String,
    pub username: String,
    pub password: String,
}
