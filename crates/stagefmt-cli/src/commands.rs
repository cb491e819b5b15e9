// Rust guideline compliant 2026-10-18

//! Command implementations for the stagefmt CLI.

pub mod files;
pub mod install;
pub mod rules;
pub mod staged;
