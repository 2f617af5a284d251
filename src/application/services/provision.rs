//! Application service — the idempotent Docker provisioning sequence.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All process execution is routed through the injected `CommandRunner`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, HostFiles, ProgressReporter};
use crate::domain::provision::{
    DOCKER_GROUP, ENGINE_PACKAGES, KEYRING_PATH, PREREQUISITE_PACKAGES, SIGNING_KEY_URL,
    SOURCES_LIST_PATH,
};
use crate::domain::{
    HostContext, Platform, ProvisionError, ProvisionReport, StepOutcome, groups_contain,
    render_source_entry,
};

/// Bring the host from an unknown state to "Docker installed, invoking user
/// in the docker group, verified working".
///
/// Every step is gated by a precondition check, so repeated runs converge
/// without duplicating effects. The first failing child process aborts the
/// run; state already applied (an installed keyring, say) is left in place
/// for the next run to pick up.
///
/// # Errors
///
/// Returns [`ProvisionError::UnsupportedPlatform`] on non-Linux hosts before
/// any side effect, and [`ProvisionError::CommandFailed`] (or a spawn error)
/// for the first child process that fails. A spawn failure of the `docker`
/// presence probe itself is not an error — it means "not installed".
pub async fn run_provision(
    host: &HostContext,
    runner: &impl CommandRunner,
    files: &impl HostFiles,
    reporter: &impl ProgressReporter,
) -> Result<ProvisionReport> {
    if host.platform != Platform::Linux {
        return Err(ProvisionError::UnsupportedPlatform {
            os: host.os.clone(),
        }
        .into());
    }

    reporter.step("checking if Docker is already installed");
    let (engine, keyring, repository) = if let Some(version) = probe_docker(runner, reporter).await
    {
        reporter.success(&format!("Docker already installed ({version})"));
        (StepOutcome::AlreadySatisfied, None, None)
    } else {
        reporter.step("Docker not installed, installing");
        let (keyring, repository) = install_docker(runner, files, reporter).await?;
        (StepOutcome::Performed, Some(keyring), Some(repository))
    };

    let group_membership = ensure_group_membership(host, runner, reporter).await?;

    reporter.step("testing the Docker installation");
    stream(runner, "docker", &["run", "--rm", "hello-world"]).await?;
    reporter.success("hello-world container ran successfully");

    Ok(ProvisionReport {
        engine,
        keyring,
        repository,
        group_membership,
    })
}

// ── Step implementations ──────────────────────────────────────────────────────

/// Probe for a working `docker` binary via `docker --version`.
///
/// A spawn failure means the binary is absent — an expected state here, not
/// an error — and is surfaced as a warning.
async fn probe_docker(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Option<String> {
    match runner.run("docker", &["--version"]).await {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_owned())
        }
        Ok(_) => None,
        Err(_) => {
            reporter.warn("command 'docker' not found");
            None
        }
    }
}

/// Refresh APT, install prerequisites, then bring up the keyring and the
/// repository (each gated by its own file check).
async fn install_docker(
    runner: &impl CommandRunner,
    files: &impl HostFiles,
    reporter: &impl ProgressReporter,
) -> Result<(StepOutcome, StepOutcome)> {
    reporter.step("updating APT package index");
    stream(runner, "sudo", &["apt-get", "update"]).await?;

    reporter.step("installing prerequisites");
    let mut install = vec!["apt-get", "install", "-y"];
    install.extend(PREREQUISITE_PACKAGES);
    stream(runner, "sudo", &install).await?;

    let keyring = ensure_keyring(runner, files, reporter).await?;
    let repository = ensure_repository(runner, files, reporter).await?;
    Ok((keyring, repository))
}

/// Download and dearmor Docker's signing key unless the keyring file already
/// exists.
async fn ensure_keyring(
    runner: &impl CommandRunner,
    files: &impl HostFiles,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    if files.exists(Path::new(KEYRING_PATH)) {
        reporter.success("Docker keyring already exists");
        return Ok(StepOutcome::AlreadySatisfied);
    }

    reporter.step("downloading Docker signing key");
    let scratch = tempfile::tempdir().context("creating scratch directory for the signing key")?;
    let key_path = scratch.path().join("docker-key.pgp");
    let key_arg = key_path.display().to_string();
    stream(runner, "curl", &["-fsSL", "-o", key_arg.as_str(), SIGNING_KEY_URL]).await?;

    reporter.step("installing Docker keyring");
    stream(runner, "sudo", &["gpg", "--dearmor", "-o", KEYRING_PATH, key_arg.as_str()]).await?;
    reporter.success("Docker keyring installed");
    Ok(StepOutcome::Performed)
}

/// Write the APT source entry and install the engine packages unless the
/// source-list file already exists.
async fn ensure_repository(
    runner: &impl CommandRunner,
    files: &impl HostFiles,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    if files.exists(Path::new(SOURCES_LIST_PATH)) {
        reporter.success("Docker repository already exists");
        return Ok(StepOutcome::AlreadySatisfied);
    }

    reporter.step("configuring Docker APT repository");
    let arch = capture(runner, "dpkg", &["--print-architecture"]).await?;
    let codename = capture(runner, "lsb_release", &["-cs"]).await?;
    let entry = render_source_entry(arch.trim(), codename.trim());

    let dest = format!("of={SOURCES_LIST_PATH}");
    let output = runner
        .run_with_stdin("sudo", &["dd", dest.as_str()], entry.as_bytes())
        .await
        .with_context(|| format!("failed running `sudo dd {dest}`"))?;
    if !output.status.success() {
        return Err(ProvisionError::CommandFailed {
            command: format!("sudo dd {dest}"),
            status: output.status.to_string(),
        }
        .into());
    }

    reporter.step("updating APT package index");
    stream(runner, "sudo", &["apt-get", "update"]).await?;

    reporter.step("installing Docker engine packages");
    let mut install = vec!["apt-get", "install", "-y"];
    install.extend(ENGINE_PACKAGES);
    stream(runner, "sudo", &install).await?;
    reporter.success("Docker installed");
    Ok(StepOutcome::Performed)
}

/// Add the invoking user to the docker group unless `groups` already lists
/// it, then attempt to reload group membership for the process tree.
async fn ensure_group_membership(
    host: &HostContext,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    reporter.step("checking docker group membership");
    let listing = capture(runner, "groups", &[host.username.as_str()]).await?;
    if groups_contain(&listing, DOCKER_GROUP) {
        reporter.success(&format!("user already belongs to group {DOCKER_GROUP}"));
        return Ok(StepOutcome::AlreadySatisfied);
    }

    reporter.warn(&format!(
        "user does not belong to group {DOCKER_GROUP}, adding to group"
    ));
    stream(runner, "sudo", &["usermod", "-aG", DOCKER_GROUP, host.username.as_str()]).await?;

    reporter.step("reloading docker group membership");
    stream(runner, "newgrp", &[DOCKER_GROUP]).await?;
    reporter.success("docker group membership reloaded");
    Ok(StepOutcome::Performed)
}

// ── Runner helpers ────────────────────────────────────────────────────────────

/// Render a program and argument list for error messages.
fn render_command(program: &str, args: &[&str]) -> String {
    let mut command = String::from(program);
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

/// Run a streamed (inherited-stdio) command. Any failure is fatal.
async fn stream(runner: &impl CommandRunner, program: &str, args: &[&str]) -> Result<()> {
    let status = runner
        .run_status(program, args)
        .await
        .with_context(|| format!("failed running `{}`", render_command(program, args)))?;
    if status.success() {
        Ok(())
    } else {
        Err(ProvisionError::CommandFailed {
            command: render_command(program, args),
            status: status.to_string(),
        }
        .into())
    }
}

/// Run a captured query command and return its stdout as text. Any failure
/// is fatal.
async fn capture(runner: &impl CommandRunner, program: &str, args: &[&str]) -> Result<String> {
    let output = runner
        .run(program, args)
        .await
        .with_context(|| format!("failed running `{}`", render_command(program, args)))?;
    if !output.status.success() {
        return Err(ProvisionError::CommandFailed {
            command: render_command(program, args),
            status: output.status.to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
