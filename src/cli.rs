//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Docker provisioning for CI hosts
#[derive(Parser)]
#[command(
    name = "dockup",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install Docker, join the docker group, and smoke-test the engine
    Provision,

    /// Inspect the host without changing anything
    Doctor,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::Provision => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::provision::run(&ctx, json).await
            }
            Command::Doctor => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::doctor::run(&ctx, json).await
            }
        }
    }
}
