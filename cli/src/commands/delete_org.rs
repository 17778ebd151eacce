//! `sfci delete-org [ORG]` — delete a scratch org.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::org_cleanup::delete_scratch_org;
use crate::domain::ConfigError;
use crate::infra::sf_cli::SfCli;

/// Arguments for the delete-org command.
#[derive(Args)]
pub struct DeleteOrgArgs {
    /// Org alias or username (defaults to $TEST_ORG_NAME)
    pub org: Option<String>,
}

/// Run `sfci delete-org`.
///
/// # Errors
///
/// Returns an error if no org is given or the deletion fails.
pub async fn run(ctx: &AppContext, args: &DeleteOrgArgs) -> Result<()> {
    let org = match args.org.as_deref().or(ctx.env.default_org_name()) {
        Some(org) => org.to_string(),
        None => return Err(ConfigError::Missing(vec!["TEST_ORG_NAME".to_string()]).into()),
    };

    let sf = SfCli::default_runner(ctx.env.sf_program());
    let deleted = delete_scratch_org(&sf, &ctx.reporter(), &org).await?;
    ctx.output.kv("org id", &deleted.org_id);
    Ok(())
}
