//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Salesforce DX CI automation: scratch orgs, packages, CI variables
#[derive(Parser)]
#[command(
    name = "sfci",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reuse the active test scratch org or create a new one
    ScratchOrg,

    /// Create a new package version and install it
    Package(commands::package::PackageArgs),

    /// Delete a scratch org
    DeleteOrg(commands::delete_org::DeleteOrgArgs),

    /// Update one CI variable
    SetVariable(commands::set_variable::SetVariableArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;
        let ctx = AppContext::new(&OutputFlags { no_color, quiet })?;
        match command {
            Command::ScratchOrg => commands::scratch_org::run(&ctx).await,
            Command::Package(args) => commands::package::run(&ctx, &args).await,
            Command::DeleteOrg(args) => commands::delete_org::run(&ctx, &args).await,
            Command::SetVariable(args) => commands::set_variable::run(&ctx, &args).await,
        }
    }
}
