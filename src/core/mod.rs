//! Core building blocks for the bump workflow
//!
//! - **config**: bump.toml parsing with built-in project defaults
//! - **error**: error types behind the `error: <msg>` CLI contract
//! - **vcs**: git history inspection via the system git binary (SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
