//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// The provisioner never touches a real package manager in unit tests; every
/// shell-out goes through this trait.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output. Used for query commands
    /// (`docker --version`, `groups`, `dpkg`, `lsb_release`).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with stdin piped from `stdin`, capturing output.
    async fn run_with_stdin(&self, program: &str, args: &[&str], stdin: &[u8]) -> Result<Output>;

    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// Used for the long-running installer commands, whose output should
    /// stream straight to the CI job log.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus>;
}

// ── Host File Probe Port ──────────────────────────────────────────────────────

/// Abstracts file-existence probes on the host filesystem.
pub trait HostFiles {
    /// Whether `path` exists on the host.
    fn exists(&self, path: &Path) -> bool;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
