//! `dockup provision` — install Docker, join the docker group, verify.

use anyhow::{Context, Result};

use crate::application::services::provision::run_provision;
use crate::domain::{ProvisionReport, StepOutcome};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::infra::host;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Run `dockup provision`.
///
/// # Errors
///
/// Returns an error if the host is not Linux, the invoking user cannot be
/// determined, or any provisioning command fails.
pub async fn run(ctx: &OutputContext, json: bool) -> Result<()> {
    let host = host::detect()?;
    let reporter = TerminalReporter::new(ctx);

    let report = run_provision(&host, &TokioCommandRunner, &LocalFs, &reporter).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("JSON serialization")?
        );
        return Ok(());
    }

    render(ctx, &report);
    Ok(())
}

fn render(ctx: &OutputContext, report: &ProvisionReport) {
    println!();
    ctx.header("Provisioning summary");
    print_outcome(ctx, "Docker engine", report.engine);
    if let Some(outcome) = report.keyring {
        print_outcome(ctx, "Signing keyring", outcome);
    }
    if let Some(outcome) = report.repository {
        print_outcome(ctx, "APT repository", outcome);
    }
    print_outcome(ctx, "docker group", report.group_membership);
    ctx.success("hello-world container ran successfully");
}

fn print_outcome(ctx: &OutputContext, label: &str, outcome: StepOutcome) {
    let detail = match outcome {
        StepOutcome::AlreadySatisfied => "already in place",
        StepOutcome::Performed => "newly configured",
    };
    ctx.kv(label, detail);
}
