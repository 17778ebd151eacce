//! `sfci set-variable <KEY> <VALUE>` — update one CI variable.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::VariableStoreClient;
use crate::infra::variable_store::CiVariableStore;

/// Arguments for the set-variable command.
#[derive(Args)]
pub struct SetVariableArgs {
    /// Variable name
    pub key: String,
    /// New value, sent as-is apart from provider escaping
    pub value: String,
}

/// Run `sfci set-variable`.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the provider rejects
/// the update.
pub async fn run(ctx: &AppContext, args: &SetVariableArgs) -> Result<()> {
    let config = ctx.env.variable_store_config()?;
    let store = CiVariableStore::from_config(&config);
    store.set_variable(&args.key, &args.value).await?;
    ctx.output
        .success(&format!("updated {} on {}", args.key, store.platform()));
    Ok(())
}
