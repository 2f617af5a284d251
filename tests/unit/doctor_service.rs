//! Tests for the `doctor` application service.
//!
//! Doctor must only observe: the probes it runs are query commands, and a
//! degraded host produces findings, never errors.

#![allow(clippy::expect_used)]

use dockup_cli::application::services::doctor::run_doctor;
use dockup_cli::domain::{HostContext, collect_issues};

use crate::mocks::{FakeFiles, FakeHost, NoopReporter};

fn linux_host() -> HostContext {
    HostContext::new("linux", "ci")
}

#[tokio::test]
async fn healthy_host_reports_all_checks_green() {
    let runner = FakeHost::provisioned();

    let report = run_doctor(&linux_host(), &runner, &FakeFiles::all(), &NoopReporter)
        .await
        .expect("doctor should succeed");

    assert!(report.os_supported);
    assert!(report.docker_found);
    assert!(
        report
            .docker_version
            .as_deref()
            .is_some_and(|v| v.starts_with("Docker version")),
        "expected the docker version line, got: {:?}",
        report.docker_version
    );
    assert!(report.keyring_present);
    assert!(report.repository_present);
    assert!(report.user_in_docker_group);
    assert!(collect_issues(&report).is_empty());
}

#[tokio::test]
async fn doctor_runs_only_query_commands() {
    let runner = FakeHost::provisioned();

    run_doctor(&linux_host(), &runner, &FakeFiles::all(), &NoopReporter)
        .await
        .expect("doctor should succeed");

    assert_eq!(
        runner.calls(),
        vec!["docker --version".to_string(), "groups ci".to_string()],
        "doctor must not run anything that mutates the host"
    );
}

#[tokio::test]
async fn fresh_host_produces_findings_not_errors() {
    let runner = FakeHost::fresh();

    let report = run_doctor(&linux_host(), &runner, &FakeFiles::none(), &NoopReporter)
        .await
        .expect("a degraded host is a finding, not an error");

    assert!(!report.docker_found);
    assert_eq!(report.docker_version, None);
    assert!(!report.keyring_present);
    assert!(!report.repository_present);
    assert!(!report.user_in_docker_group);

    let issues = collect_issues(&report);
    assert_eq!(issues.len(), 2, "expected 2 issues, got: {issues:?}");
}

#[tokio::test]
async fn non_linux_host_is_a_finding() {
    let host = HostContext::new("windows", "ci");
    let runner = FakeHost::provisioned();

    let report = run_doctor(&host, &runner, &FakeFiles::all(), &NoopReporter)
        .await
        .expect("doctor should succeed on any platform");

    assert!(!report.os_supported);
    let issues = collect_issues(&report);
    assert!(
        issues.iter().any(|i| i.contains("not Linux")),
        "expected a platform issue, got: {issues:?}"
    );
}
