//! Application service — read-only host inspection.
//!
//! Reports the same host facts the provisioner gates on, without mutating
//! anything. Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, HostFiles, ProgressReporter};
use crate::domain::provision::{DOCKER_GROUP, KEYRING_PATH, SOURCES_LIST_PATH};
use crate::domain::{DoctorReport, HostContext, Platform, groups_contain};

/// Inspect the host and return a [`DoctorReport`]. Only query commands run;
/// nothing is installed or modified.
///
/// Probe failures (a missing `docker` binary, an unreadable group listing)
/// are recorded as negative findings, never raised as errors.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` mirrors the other services
/// so callers treat all use cases uniformly.
pub async fn run_doctor(
    host: &HostContext,
    runner: &impl CommandRunner,
    files: &impl HostFiles,
    reporter: &impl ProgressReporter,
) -> Result<DoctorReport> {
    reporter.step("checking host platform");
    let os_supported = host.platform == Platform::Linux;

    reporter.step("checking for Docker");
    let docker_version = match runner.run("docker", &["--version"]).await {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_owned())
        }
        _ => None,
    };

    reporter.step("checking keyring and repository files");
    let keyring_present = files.exists(Path::new(KEYRING_PATH));
    let repository_present = files.exists(Path::new(SOURCES_LIST_PATH));

    reporter.step("checking docker group membership");
    let user_in_docker_group = match runner.run("groups", &[host.username.as_str()]).await {
        Ok(output) if output.status.success() => {
            groups_contain(&String::from_utf8_lossy(&output.stdout), DOCKER_GROUP)
        }
        _ => false,
    };

    reporter.success("diagnostics complete");

    Ok(DoctorReport {
        os_supported,
        docker_found: docker_version.is_some(),
        docker_version,
        keyring_present,
        repository_present,
        user_in_docker_group,
    })
}
