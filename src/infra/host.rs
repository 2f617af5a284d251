//! Host introspection — builds the `HostContext` injected into services.

use anyhow::{Context, Result};

use crate::domain::HostContext;

/// Detect the current platform and invoking user, once, at startup.
///
/// The username comes from `$USER` (or `$LOGNAME` as a fallback) — the
/// variables login shells and CI runners set for the job user.
///
/// # Errors
///
/// Returns an error if neither variable is set.
pub fn detect() -> Result<HostContext> {
    let username = std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .context("cannot determine the invoking user: neither $USER nor $LOGNAME is set")?;
    Ok(HostContext::new(std::env::consts::OS, &username))
}
