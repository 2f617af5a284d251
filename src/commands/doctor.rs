//! `dockup doctor` — read-only host diagnostics.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::application::ports::ProgressReporter;
use crate::application::services::doctor::run_doctor;
use crate::domain::collect_issues;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::infra::host;
use crate::output::{OutputContext, progress};

/// Reporter that swallows progress events; the spinner covers activity and
/// the findings are rendered after the probes return.
struct Silent;

impl ProgressReporter for Silent {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// Run `dockup doctor`. Diagnoses, never mutates; always exits 0.
///
/// # Errors
///
/// Returns an error if the invoking user cannot be determined or output
/// serialization fails.
pub async fn run(ctx: &OutputContext, json: bool) -> Result<()> {
    let host = host::detect()?;

    let pb = ctx.show_progress().then(|| progress::spinner("inspecting host"));
    let report = run_doctor(&host, &TokioCommandRunner, &LocalFs, &Silent).await?;
    if let Some(pb) = pb {
        progress::finish_ok(&pb, "inspection complete");
    }

    let issues = collect_issues(&report);
    let status = if issues.is_empty() {
        "healthy"
    } else {
        "unhealthy"
    };

    if json {
        let out = serde_json::json!({
            "status": status,
            "checks": report,
            "issues": issues,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("JSON serialization")?
        );
        return Ok(());
    }

    println!();
    println!("  {}", "Dockup Host Check".style(ctx.styles.header));
    println!();

    print_check(ctx, report.os_supported, "Linux host");
    match &report.docker_version {
        Some(version) => print_check(ctx, true, &format!("Docker installed ({version})")),
        None => print_check(ctx, false, "Docker not installed"),
    }
    print_check(ctx, report.keyring_present, "Signing keyring present");
    print_check(ctx, report.repository_present, "APT repository configured");
    print_check(ctx, report.user_in_docker_group, "User in docker group");

    println!();
    if issues.is_empty() {
        println!("  {} Everything looks good!", "✓".style(ctx.styles.success));
    } else {
        println!(
            "  {} Found {} issues. Run 'dockup provision' to fix them.",
            "✗".style(ctx.styles.error),
            issues.len(),
        );
    }
    println!();

    Ok(())
}

fn print_check(ctx: &OutputContext, ok: bool, msg: &str) {
    if ok {
        println!("    {} {msg}", "✓".style(ctx.styles.success));
    } else {
        println!("    {} {msg}", "✗".style(ctx.styles.error));
    }
}
