use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wrapper printed on stdout by every `sf ... --json` invocation.
///
/// `status == 0` means the command succeeded and `result` carries its
/// payload. On failure the CLI fills `name` and `message` instead and
/// usually omits `result`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Exit status reported by the tool. Absent is treated as success.
    #[serde(default)]
    pub status: i32,
    /// Command-specific payload. Absent on most failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Free-form warnings (documented upstream as `unknown[]`).
    #[serde(default)]
    pub warnings: Vec<serde_json::Value>,
    /// Error class name on failure, e.g. `NoOrgFound`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable error message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors produced while decoding or interpreting an [`Envelope`].
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed response from `{command}`: {reason}")]
    Malformed { command: String, reason: String },

    #[error("`{command}` reported status {status}: {diagnostic}")]
    ToolFailure {
        command: String,
        status: i32,
        diagnostic: String,
    },
}

impl<T> Envelope<T> {
    /// Envelope for a successful call. Mostly useful for test doubles.
    #[must_use]
    pub fn success(result: T) -> Self {
        Self {
            status: 0,
            result: Some(result),
            warnings: Vec::new(),
            name: None,
            message: None,
        }
    }

    /// Envelope for a failed call with the given status and message.
    #[must_use]
    pub fn failure(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            result: None,
            warnings: Vec::new(),
            name: None,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Best available explanation of a failure: the message if present,
    /// then the warnings, then the bare status.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        if !self.warnings.is_empty() {
            return self
                .warnings
                .iter()
                .map(|w| match w {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; ");
        }
        format!("status {}", self.status)
    }

    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// `ToolFailure` when `status != 0`, `Malformed` when a successful
    /// envelope carries no `result`.
    pub fn into_result(self, command: &str) -> Result<T, EnvelopeError> {
        if !self.is_success() {
            return Err(EnvelopeError::ToolFailure {
                command: command.to_string(),
                status: self.status,
                diagnostic: self.diagnostic(),
            });
        }
        self.result.ok_or_else(|| EnvelopeError::Malformed {
            command: command.to_string(),
            reason: "missing `result`".to_string(),
        })
    }
}

/// Decode the stdout of an `sf --json` call.
///
/// Only JSON syntax and the shape of `T` are checked here; interpreting
/// `status` is left to the caller.
///
/// # Errors
///
/// Returns `EnvelopeError::Malformed` if `text` is not a JSON envelope.
pub fn parse_envelope<T: DeserializeOwned>(
    command: &str,
    text: &str,
) -> Result<Envelope<T>, EnvelopeError> {
    serde_json::from_str(text).map_err(|e| EnvelopeError::Malformed {
        command: command.to_string(),
        reason: e.to_string(),
    })
}
