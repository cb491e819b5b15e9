// Rust guideline compliant 2026-10-18

//! stagefmt CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod terminal;

pub use terminal::{print_error, print_success, should_use_color};
