//! Host identity — the process-wide facts services run against.
//!
//! Platform and username are detected once in `infra::host` and passed in as
//! a `HostContext`, never looked up ad hoc inside services. Tests substitute
//! fake contexts to exercise the non-Linux and unknown-user paths.

use serde::Serialize;

/// Operating system family the binary is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// Map a `std::env::consts::OS`-style identifier to a platform family.
    #[must_use]
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// Process-wide host facts, injected into services.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Platform family the binary is running on.
    pub platform: Platform,
    /// Raw OS identifier, kept for error messages.
    pub os: String,
    /// Name of the invoking user.
    pub username: String,
}

impl HostContext {
    /// Build a context from a raw OS identifier and username.
    #[must_use]
    pub fn new(os: &str, username: &str) -> Self {
        Self {
            platform: Platform::from_os_str(os),
            os: os.to_owned(),
            username: username.to_owned(),
        }
    }
}
