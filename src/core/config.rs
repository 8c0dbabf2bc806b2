//! Configuration for bump-version (bump.toml)
//!
//! The defaults reproduce the signal-inspector project layout, so a bare
//! checkout needs no config file at all. A bump.toml only has to name the
//! fields it overrides.

use crate::core::error::{BumpResult, ConfigError};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for bump-version
/// Searched in order: bump.toml, .bump.toml, .config/bump.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BumpConfig {
  #[serde(default)]
  pub files: FilesConfig,
  #[serde(default)]
  pub image: ImageConfig,
}

/// Target files, relative to the repository root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
  /// Plain file holding the current version string
  #[serde(default = "default_version_file")]
  pub version: PathBuf,

  /// Deployment configuration carrying a `version: <x.y.z>` field
  #[serde(default = "default_hocfile")]
  pub hocfile: PathBuf,

  /// Package manifests carrying a `version = "<x.y.z>"` field
  #[serde(default = "default_manifests")]
  pub manifests: Vec<PathBuf>,

  /// Changelog with the `## [Unreleased]` section
  #[serde(default = "default_changelog")]
  pub changelog: PathBuf,
}

fn default_version_file() -> PathBuf {
  PathBuf::from("VERSION")
}

fn default_hocfile() -> PathBuf {
  PathBuf::from("hocfile.yaml")
}

fn default_manifests() -> Vec<PathBuf> {
  vec![PathBuf::from("frontend/Cargo.toml"), PathBuf::from("backend/Cargo.toml")]
}

fn default_changelog() -> PathBuf {
  PathBuf::from("CHANGELOG.md")
}

impl Default for FilesConfig {
  fn default() -> Self {
    Self {
      version: default_version_file(),
      hocfile: default_hocfile(),
      manifests: default_manifests(),
      changelog: default_changelog(),
    }
  }
}

/// Container image coordinates for the changelog tag line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
  /// Registry host (default: ghcr.io)
  #[serde(default = "default_registry")]
  pub registry: String,

  /// Image name inside the owner's namespace
  #[serde(default = "default_image_name")]
  pub name: String,
}

fn default_registry() -> String {
  "ghcr.io".to_string()
}

fn default_image_name() -> String {
  "signal-inspector-backend".to_string()
}

impl Default for ImageConfig {
  fn default() -> Self {
    Self {
      registry: default_registry(),
      name: default_image_name(),
    }
  }
}

impl BumpConfig {
  /// Find config file in search order: bump.toml, .bump.toml, .config/bump.toml
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    let candidates = vec![
      root.join("bump.toml"),
      root.join(".bump.toml"),
      root.join(".config").join("bump.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the repository root.
  ///
  /// With no explicit path and no file on the search path this returns the
  /// built-in defaults. An explicit path that cannot be read is an error.
  pub fn load(root: &Path, explicit: Option<&Path>) -> BumpResult<Self> {
    let config_path = match explicit {
      Some(path) => root.join(path),
      None => match Self::find_config_path(root) {
        Some(path) => path,
        None => return Ok(Self::default()),
      },
    };

    let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Unreadable {
      path: config_path.clone(),
      source: e,
    })?;

    let config: BumpConfig = toml_edit::de::from_str(&content).map_err(|e| ConfigError::Invalid {
      path: config_path,
      message: e.to_string(),
    })?;

    Ok(config)
  }

  /// Image tag for a release, e.g. `ghcr.io/acme/signal-inspector-backend:1.4.0`
  pub fn image_tag(&self, owner: &str, version: &Version) -> String {
    format!("{}/{}/{}:{}", self.image.registry, owner, self.image.name, version)
  }
}
