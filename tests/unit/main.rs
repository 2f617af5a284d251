//! Unit tests for dockup CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod doctor_service;
mod helpers;
mod property_tests;
