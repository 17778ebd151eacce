//! Application service — create a package version and install it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sfci_common::{InstalledPackage, PackageVersion};

use crate::application::ports::{
    PackageInstallSpec, PackageManager, PackageVersionSpec, ProgressReporter,
};

/// Default `--wait` / `--publish-wait` in minutes.
pub const DEFAULT_WAIT_MINUTES: u32 = 10;

/// Inputs of the `release_package` use-case.
pub struct ReleaseOptions<'a> {
    /// Package name from the project manifest.
    pub package: &'a str,
    /// Branch label attached to the new version.
    pub branch: &'a str,
    pub installation_key: &'a str,
    /// Org the new version is installed into.
    pub target_org: &'a str,
    pub wait_minutes: u32,
}

/// Outcome of the `release_package` use-case.
#[derive(Debug, Clone)]
pub struct PackageRelease {
    /// `{package}@{VersionNumber}-{Branch}`.
    pub alias: String,
    pub version: PackageVersion,
    pub install: InstalledPackage,
}

/// Branch label derived from a timestamp: ISO-8601 with `-` and `:`
/// replaced by `_`, e.g. `2026_10_19T15_09_00.123Z`.
#[must_use]
pub fn branch_label(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace(['-', ':'], "_")
}

#[must_use]
pub fn version_alias(package: &str, version: &PackageVersion) -> String {
    format!("{package}@{}-{}", version.version_number, version.branch)
}

/// Create a new version of `opts.package`, then install it.
///
/// # Errors
///
/// Returns an error if either `sf` call fails or reports a non-zero status.
pub async fn release_package(
    sf: &impl PackageManager,
    reporter: &impl ProgressReporter,
    opts: &ReleaseOptions<'_>,
) -> Result<PackageRelease> {
    reporter.step(&format!("creating package version for {}...", opts.package));
    let version = sf
        .create_package_version(&PackageVersionSpec {
            package: opts.package,
            branch: opts.branch,
            installation_key: opts.installation_key,
            wait_minutes: opts.wait_minutes,
        })
        .await?
        .into_result("sf package version create")?;

    match version.code_coverage {
        Some(coverage) => reporter.success(&format!("test code coverage: {coverage}%")),
        None => reporter.warn("test code coverage not reported"),
    }
    if version.has_passed_code_coverage_check != Some(true) {
        reporter.warn("package version has not passed the code coverage check");
    }

    let alias = version_alias(opts.package, &version);
    reporter.step(&format!(
        "installing package {alias} ({}) into {}...",
        version.subscriber_package_version_id, opts.target_org
    ));
    let install = sf
        .install_package(&PackageInstallSpec {
            target_org: opts.target_org,
            package_version_id: &version.subscriber_package_version_id,
            installation_key: opts.installation_key,
            wait_minutes: opts.wait_minutes,
        })
        .await?
        .into_result("sf package install")?;

    reporter.success(&format!("installed {alias}"));
    Ok(PackageRelease {
        alias,
        version,
        install,
    })
}
