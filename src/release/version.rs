//! Version parsing and bump arithmetic

use crate::core::error::{BumpError, BumpResult};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
  /// Major version bump (breaking changes)
  Major,
  /// Minor version bump (new features)
  Minor,
  /// Patch version bump (bug fixes)
  Patch,
}

impl BumpLevel {
  /// Apply bump to a semver version
  ///
  /// Everything below the bumped component resets to zero. Inputs come from
  /// `parse_version`, which bounds every component below `u64::MAX`, so the
  /// increment cannot overflow.
  pub fn apply(&self, version: &Version) -> Version {
    match self {
      BumpLevel::Major => Version::new(version.major + 1, 0, 0),
      BumpLevel::Minor => Version::new(version.major, version.minor + 1, 0),
      BumpLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
  }
}

impl FromStr for BumpLevel {
  type Err = BumpError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "major" => Ok(BumpLevel::Major),
      "minor" => Ok(BumpLevel::Minor),
      "patch" => Ok(BumpLevel::Patch),
      _ => Err(BumpError::InvalidBumpComponent),
    }
  }
}

impl fmt::Display for BumpLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpLevel::Major => write!(f, "major"),
      BumpLevel::Minor => write!(f, "minor"),
      BumpLevel::Patch => write!(f, "patch"),
    }
  }
}

/// Parse a stored `major.minor.patch` string.
///
/// Stricter than `semver::Version::parse`: exactly three dot-separated
/// decimal components and nothing else. Pre-release and build suffixes are
/// rejected because the version file never carries them, and every
/// component must stay strictly below `u64::MAX` so a bump cannot overflow.
pub fn parse_version(raw: &str) -> BumpResult<Version> {
  let invalid = || BumpError::InvalidVersionFormat {
    version: raw.to_string(),
  };

  let components: Vec<&str> = raw.split('.').collect();
  if components.len() != 3 {
    return Err(invalid());
  }

  let mut parts = [0u64; 3];
  for (slot, component) in parts.iter_mut().zip(&components) {
    if component.is_empty() || !component.chars().all(|c| c.is_ascii_digit()) {
      return Err(invalid());
    }
    let value: u64 = component.parse().map_err(|_| invalid())?;
    // A component at u64::MAX could not survive a bump.
    if value == u64::MAX {
      return Err(invalid());
    }
    *slot = value;
  }

  Ok(Version::new(parts[0], parts[1], parts[2]))
}
