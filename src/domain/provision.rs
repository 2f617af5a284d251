//! Provisioning domain types and the pure helpers the step checks gate on.

use serde::Serialize;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Group that grants non-root access to the Docker daemon socket.
pub const DOCKER_GROUP: &str = "docker";

/// Trust-store file holding Docker's package-signing key.
pub const KEYRING_PATH: &str = "/usr/share/keyrings/docker-archive-keyring.gpg";

/// APT source-list file declaring Docker's package repository.
pub const SOURCES_LIST_PATH: &str = "/etc/apt/sources.list.d/docker.list";

/// URL of Docker's ASCII-armored package-signing key.
pub const SIGNING_KEY_URL: &str = "https://download.docker.com/linux/debian/gpg";

/// Base URL of Docker's APT repository.
pub const REPOSITORY_URL: &str = "https://download.docker.com/linux/ubuntu";

/// Packages required before the Docker repository can be configured.
pub const PREREQUISITE_PACKAGES: [&str; 4] = ["ca-certificates", "curl", "gnupg", "lsb-release"];

/// The Docker engine, CLI, and container runtime.
pub const ENGINE_PACKAGES: [&str; 3] = ["docker-ce", "docker-ce-cli", "containerd.io"];

// ── Step outcomes and reports ─────────────────────────────────────────────────

/// How a gated provisioning step resolved. A failed step surfaces as an
/// error, not an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepOutcome {
    /// The precondition check found the step already done; nothing ran.
    AlreadySatisfied,
    /// The step's external commands ran to completion.
    Performed,
}

/// Per-step record of a successful provisioning run.
///
/// `keyring` and `repository` are `None` when the installation phase was
/// skipped entirely because a docker binary was already present.
#[derive(Debug, Serialize)]
pub struct ProvisionReport {
    /// Docker engine installation.
    pub engine: StepOutcome,
    /// Signing-keyring installation, when the install phase ran.
    pub keyring: Option<StepOutcome>,
    /// APT repository configuration, when the install phase ran.
    pub repository: Option<StepOutcome>,
    /// Membership of the invoking user in the docker group.
    pub group_membership: StepOutcome,
}

/// Read-only snapshot of the host facts the provisioner gates on.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    /// Whether the host platform is Linux.
    pub os_supported: bool,
    /// Whether a working `docker` binary responded to `--version`.
    pub docker_found: bool,
    /// The version line docker printed, when found.
    pub docker_version: Option<String>,
    /// Whether the signing keyring file exists.
    pub keyring_present: bool,
    /// Whether the APT source-list file exists.
    pub repository_present: bool,
    /// Whether the invoking user is in the docker group.
    pub user_in_docker_group: bool,
}

/// Collect actionable issues from a doctor snapshot.
///
/// A missing keyring or source list is not an issue on its own — `provision`
/// creates both — so only the facts that block `docker run` are reported.
#[must_use]
pub fn collect_issues(report: &DoctorReport) -> Vec<String> {
    let mut issues = Vec::new();
    if !report.os_supported {
        issues.push("host is not Linux".to_string());
    }
    if !report.docker_found {
        issues.push("no working docker binary found".to_string());
    }
    if !report.user_in_docker_group {
        issues.push(format!("user is not in the {DOCKER_GROUP} group"));
    }
    issues
}

// ── Pure parsing helpers ──────────────────────────────────────────────────────

/// Whether a `groups <user>` listing contains `group` as an exact token.
///
/// The listing looks like `ci : ci adm sudo docker`; matching on whitespace
/// tokens keeps a group like `dockerd` from counting as `docker`.
#[must_use]
pub fn groups_contain(listing: &str, group: &str) -> bool {
    listing.split_whitespace().any(|g| g == group)
}

/// Render the APT source-list entry for the Docker repository, parameterized
/// by the host architecture and OS codename. Ends with the newline `dd`
/// writes verbatim.
#[must_use]
pub fn render_source_entry(arch: &str, codename: &str) -> String {
    format!("deb [arch={arch} signed-by={KEYRING_PATH}] {REPOSITORY_URL} {codename} stable\n")
}
