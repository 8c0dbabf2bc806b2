//! CLI commands for bump-version
//!
//! - **bump**: compute the next version, patch the project files, roll the
//!   changelog

pub mod bump;

pub use bump::run_bump;
