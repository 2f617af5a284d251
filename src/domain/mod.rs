//! Domain layer — pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod host;
pub mod provision;

pub use error::ProvisionError;
pub use host::{HostContext, Platform};
pub use provision::{
    DoctorReport, ProvisionReport, StepOutcome, collect_issues, groups_contain,
    render_source_entry,
};
