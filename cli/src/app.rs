//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the output context and the environment snapshot so
//! command handlers never read process globals themselves.

use anyhow::Result;

use crate::domain::RawEnv;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()`; the environment is read exactly once
/// here and validated per command before any adapter is built.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Process environment snapshot.
    pub env: RawEnv,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be decoded.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        Ok(Self::with_env(flags, crate::infra::config::load_env()?))
    }

    /// Construct an `AppContext` around an explicit environment snapshot.
    #[must_use]
    pub fn with_env(flags: &OutputFlags, env: RawEnv) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            env,
        }
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
