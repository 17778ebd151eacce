//! `sfci package` — create and install a new package version.

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::package::{
    DEFAULT_WAIT_MINUTES, ReleaseOptions, branch_label, release_package,
};
use crate::infra::project::default_package_name;
use crate::infra::sf_cli::SfCli;

/// Arguments for the package command.
#[derive(Args)]
pub struct PackageArgs {
    /// Minutes to wait for version creation and installation
    #[arg(long, default_value_t = DEFAULT_WAIT_MINUTES)]
    pub wait: u32,
}

/// Run `sfci package`.
///
/// # Errors
///
/// Returns an error if configuration or the manifest is invalid, or if
/// version creation or installation fails.
pub async fn run(ctx: &AppContext, args: &PackageArgs) -> Result<()> {
    let config = ctx.env.package_config()?;
    let package = default_package_name(&config.manifest_path)?;
    let branch = branch_label(Utc::now());

    let sf = SfCli::default_runner(ctx.env.sf_program());
    let reporter = ctx.reporter();

    ctx.output.header(&format!("Package {package}"));
    let release = release_package(
        &sf,
        &reporter,
        &ReleaseOptions {
            package: &package,
            branch: &branch,
            installation_key: &config.installation_key,
            target_org: &config.target_org,
            wait_minutes: args.wait,
        },
    )
    .await?;

    ctx.output.kv("version", &release.alias);
    ctx.output.kv(
        "subscriber version",
        &release.version.subscriber_package_version_id,
    );
    ctx.output.kv(
        "install status",
        release.install.status.as_deref().unwrap_or("unknown"),
    );
    Ok(())
}
