//! `sfci scratch-org` — reuse or provision the CI test scratch org.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::scratch_org::{
    ScratchOrgOptions, ScratchOrgOutcome, TEST_CREDENTIALS_KEY, ensure_scratch_org,
};
use crate::infra::sf_cli::SfCli;
use crate::infra::variable_store::CiVariableStore;

/// Run `sfci scratch-org`.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or any step fails.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let config = ctx.env.scratch_org_config()?;
    let definition_file = std::path::absolute(&config.definition_file).with_context(|| {
        format!(
            "cannot resolve scratch definition path {}",
            config.definition_file.display()
        )
    })?;

    let sf = SfCli::default_runner(ctx.env.sf_program());
    let variables = CiVariableStore::from_config(&config.variables);
    let reporter = ctx.reporter();

    ctx.output.header(&format!("Scratch org {}", config.org_name));
    let outcome = ensure_scratch_org(
        &sf,
        &variables,
        &reporter,
        &ScratchOrgOptions {
            org_name: &config.org_name,
            definition_file: &definition_file,
            client_id: &config.client_id,
            private_key_path: &config.private_key_path,
        },
    )
    .await?;

    match outcome {
        ScratchOrgOutcome::Reused {
            username,
            instance_url,
        } => {
            ctx.output.kv("username", &username);
            ctx.output.kv("instance", &instance_url);
        }
        ScratchOrgOutcome::Created {
            username,
            login_url,
        } => {
            ctx.output.kv("username", &username);
            ctx.output.kv("login url", &login_url);
            ctx.output.kv("published", TEST_CREDENTIALS_KEY);
        }
    }
    Ok(())
}
