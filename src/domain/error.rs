//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Errors raised by the provisioning sequence.
///
/// There is deliberately no retry or partial-failure variant: the first
/// failing step terminates the whole run, and whatever state it already
/// applied (an installed keyring, say) is left in place for the next run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Raised before any side effect when the host is not Linux.
    #[error("unsupported platform '{os}': dockup only provisions Linux hosts")]
    UnsupportedPlatform { os: String },

    /// A child process exited unsuccessfully. `command` is the full rendered
    /// program and argument list; `status` is the rendered wait status.
    #[error("command `{command}` failed: {status}")]
    CommandFailed { command: String, status: String },
}
