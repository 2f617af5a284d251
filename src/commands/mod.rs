//! Command implementations

pub mod doctor;
pub mod provision;
pub mod version;
