//! Changelog roll: turn the Unreleased section into a dated release entry

use crate::core::error::{BumpError, BumpResult};
use semver::Version;

/// Heading under which pending changes accumulate
pub const UNRELEASED_HEADER: &str = "## [Unreleased]";

/// Verify the changelog carries exactly one Unreleased section
pub fn validate(content: &str) -> BumpResult<()> {
  match content.matches(UNRELEASED_HEADER).count() {
    0 => Err(BumpError::NoUnreleasedSection),
    1 => Ok(()),
    _ => Err(BumpError::MultipleUnreleasedSections),
  }
}

/// Roll the Unreleased section into a dated release entry.
///
/// The single `## [Unreleased]` header becomes a fresh empty Unreleased
/// section followed by the versioned header and the published image tag:
///
/// ```text
/// ## [Unreleased]
///
/// ## [1.4.0] - 2026-08-24
///
/// Image tag: ghcr.io/acme/signal-inspector-backend:1.4.0
/// ```
///
/// Everything that was listed under Unreleased stays below the new entry.
pub fn roll(content: &str, version: &Version, date: &str, image_tag: &str) -> BumpResult<String> {
  validate(content)?;

  let entry = format!(
    "{}\n\n## [{}] - {}\n\nImage tag: {}",
    UNRELEASED_HEADER, version, date, image_tag
  );

  Ok(content.replacen(UNRELEASED_HEADER, &entry, 1))
}
