//! Loads the process environment into `RawEnv` via `envy`.

use std::ffi::OsString;

use anyhow::{Context, Result};

use crate::domain::RawEnv;

/// Snapshot the current process environment.
///
/// Entries that are not valid UTF-8 are skipped, so a required variable with
/// such a value reports as missing instead of aborting the process.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be decoded into `RawEnv`.
pub fn load_env() -> Result<RawEnv> {
    load_env_from(utf8_vars(std::env::vars_os()))
}

fn utf8_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter()
        .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (name, _) => {
                tracing::debug!(name = ?name, "skipping non-UTF-8 environment entry");
                None
            }
        })
}

/// Build a snapshot from explicit `(NAME, value)` pairs.
///
/// # Errors
///
/// Returns an error if the pairs cannot be decoded into `RawEnv`.
pub fn load_env_from<I>(vars: I) -> Result<RawEnv>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::from_iter(vars).context("cannot read environment snapshot")
}
