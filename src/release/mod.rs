//! Version bump planning and the changelog roll
//!
//! # Core Invariants
//!
//! 1. **The version file is the single source of truth**
//!    - Every other file is patched to agree with it
//!    - The stored format is strict `major.minor.patch`, nothing more
//!
//! 2. **Validate everything, then write everything**
//!    - `BumpPlan::prepare` runs every check and computes every new file
//!      content; `apply` only writes
//!    - A failed check leaves the tree byte-for-byte untouched
//!
//! 3. **The changelog must move between releases**
//!    - With a tagged release in history, an unchanged changelog aborts
//!      the bump
//!    - Exactly one `## [Unreleased]` section may exist

pub mod changelog;
pub mod plan;
pub mod version;

pub use plan::BumpPlan;
pub use version::BumpLevel;
