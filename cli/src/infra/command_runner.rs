//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. It waits for the
//! child without a timeout: `sf` enforces its own `--wait` limits, and a CI
//! job timeout bounds everything else.

use std::process::{Output, Stdio};

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::domain::ProcessError;

/// Production `CommandRunner` — spawns via tokio with piped stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;
        tracing::debug!(program, status = ?output.status.code(), "process exited");
        Ok(output)
    }
}
