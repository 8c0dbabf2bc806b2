//! Plan-based version bumps
//!
//! Every bump produces a `BumpPlan` before any file is touched:
//!
//! - **Dry-run mode**: show what will happen without doing it
//! - **Idempotency**: same tree, same level, same plan
//! - **Auditability**: plans are JSON-serializable for CI logs
//!
//! `prepare` runs every validation (version parse, changelog hygiene
//! against git history, header checks) and computes the full new content of
//! every target file. `apply` only writes. A failed check therefore leaves
//! the whole tree untouched instead of half-patched.

use crate::core::config::BumpConfig;
use crate::core::error::{BumpError, BumpResult};
use crate::core::vcs::SystemGit;
use crate::release::changelog;
use crate::release::version::{BumpLevel, parse_version};
use semver::Version;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Plan identifier (SHA256 hash of plan contents)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
  /// Create a plan ID from plan contents
  pub fn from_contents(contents: &[u8]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    Self(format!("{:x}", result))
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for PlanId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}

/// What kind of edit a patch performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileEdit {
  /// Overwrite the whole file with the new version string
  WriteVersion,
  /// Replace the first `version: <old>` occurrence
  ReplaceYamlField,
  /// Replace the first `version = "<old>"` occurrence
  ReplaceTomlField,
  /// Roll the Unreleased section into a dated entry
  RollChangelog,
}

/// Outcome computed for a patch during planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
  /// File content will change
  Update,
  /// Expected version pattern was absent; the file is left as-is
  PatternMissing,
}

/// A single file rewrite within a bump plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePatch {
  /// Path relative to the repository root
  pub path: PathBuf,
  pub edit: FileEdit,
  pub status: PatchStatus,
  /// Full new file content, kept out of JSON output
  #[serde(skip)]
  new_content: String,
}

/// A validated, content-complete version bump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpPlan {
  /// Plan ID (content hash)
  pub id: PlanId,
  pub level: BumpLevel,
  pub current_version: Version,
  pub next_version: Version,
  /// Image tag published for this release
  pub image_tag: String,
  /// File rewrites, in apply order
  pub patches: Vec<FilePatch>,
}

impl BumpPlan {
  /// Validate the bump and compute every new file content up front.
  ///
  /// No file is written here. The changelog hygiene checks run in the order
  /// the release flow has always used: diff-since-last-tag first, then the
  /// Unreleased header count. Replacement patterns search for the version
  /// string exactly as stored and write the canonical next version.
  pub fn prepare(root: &Path, level: BumpLevel, owner: &str, config: &BumpConfig) -> BumpResult<Self> {
    let raw = read_file(root, &config.files.version)?;
    let stored = raw.trim();
    let current_version = parse_version(stored)?;
    let next_version = level.apply(&current_version);
    let image_tag = config.image_tag(owner, &next_version);

    let mut patches = Vec::new();

    // The version file is overwritten outright, never pattern-matched.
    patches.push(FilePatch {
      path: config.files.version.clone(),
      edit: FileEdit::WriteVersion,
      status: PatchStatus::Update,
      new_content: next_version.to_string(),
    });

    patches.push(replace_patch(
      root,
      &config.files.hocfile,
      FileEdit::ReplaceYamlField,
      &format!("version: {}", stored),
      &format!("version: {}", next_version),
    )?);

    for manifest in &config.files.manifests {
      patches.push(replace_patch(
        root,
        manifest,
        FileEdit::ReplaceTomlField,
        &format!("version = \"{}\"", stored),
        &format!("version = \"{}\"", next_version),
      )?);
    }

    patches.push(changelog_patch(root, config, &next_version, &image_tag)?);

    let mut contents = Vec::new();
    for patch in &patches {
      contents.extend_from_slice(patch.new_content.as_bytes());
    }
    let id = PlanId::from_contents(&contents);

    Ok(Self {
      id,
      level,
      current_version,
      next_version,
      image_tag,
      patches,
    })
  }

  /// Write every computed patch.
  ///
  /// Files whose version pattern was missing keep their original content
  /// and are skipped.
  pub fn apply(&self, root: &Path) -> BumpResult<()> {
    for patch in &self.patches {
      if patch.status == PatchStatus::PatternMissing {
        continue;
      }
      write_file(root, &patch.path, &patch.new_content)?;
    }
    Ok(())
  }

  /// Serialize to JSON
  pub fn to_json(&self) -> BumpResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Get human-readable representation
  pub fn to_human_readable(&self) -> String {
    let mut output = String::new();

    output.push_str(&format!("📋 Plan: bump {} ({})\n", self.level, self.id));
    output.push_str(&format!("   Version: {} → {}\n", self.current_version, self.next_version));
    output.push_str(&format!("   Image tag: {}\n", self.image_tag));

    output.push_str(&format!("\n   Files ({}):\n", self.patches.len()));
    for (i, patch) in self.patches.iter().enumerate() {
      let note = match patch.status {
        PatchStatus::Update => "",
        PatchStatus::PatternMissing => " (version pattern not found, left unchanged)",
      };
      output.push_str(&format!(
        "   {}. {} {}{}\n",
        i + 1,
        edit_to_string(patch.edit),
        patch.path.display(),
        note
      ));
    }

    output
  }
}

/// Convert edit kind to a human-readable verb phrase
fn edit_to_string(edit: FileEdit) -> &'static str {
  match edit {
    FileEdit::WriteVersion => "Overwrite",
    FileEdit::ReplaceYamlField | FileEdit::ReplaceTomlField => "Patch version field in",
    FileEdit::RollChangelog => "Roll Unreleased section in",
  }
}

/// Compute a first-occurrence replacement patch for one file.
///
/// A missing pattern is not an error; the patch records it so dry-run and
/// JSON output surface the drift.
fn replace_patch(root: &Path, path: &Path, edit: FileEdit, from: &str, to: &str) -> BumpResult<FilePatch> {
  let content = read_file(root, path)?;

  let (status, new_content) = if content.contains(from) {
    (PatchStatus::Update, content.replacen(from, to, 1))
  } else {
    (PatchStatus::PatternMissing, content)
  };

  Ok(FilePatch {
    path: path.to_path_buf(),
    edit,
    status,
    new_content,
  })
}

/// Validate changelog hygiene and compute the rolled content.
///
/// When a tagged release exists, the changelog must have changed between
/// that tag and HEAD. Without any tag (including outside a git repository)
/// the diff check is skipped.
fn changelog_patch(root: &Path, config: &BumpConfig, next_version: &Version, image_tag: &str) -> BumpResult<FilePatch> {
  let git = SystemGit::new(root);

  if let Some(base) = git.latest_tagged_commit() {
    let diff = git.diff_since(&base, &config.files.changelog)?;
    if diff.is_empty() {
      return Err(BumpError::ChangelogUnchanged);
    }
  }

  let content = read_file(root, &config.files.changelog)?;
  let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
  let new_content = changelog::roll(&content, next_version, &date, image_tag)?;

  Ok(FilePatch {
    path: config.files.changelog.clone(),
    edit: FileEdit::RollChangelog,
    status: PatchStatus::Update,
    new_content,
  })
}

fn read_file(root: &Path, path: &Path) -> BumpResult<String> {
  fs::read_to_string(root.join(path))
    .map_err(|e| io::Error::new(e.kind(), format!("failed to read {}: {}", path.display(), e)).into())
}

fn write_file(root: &Path, path: &Path, content: &str) -> BumpResult<()> {
  fs::write(root.join(path), content)
    .map_err(|e| io::Error::new(e.kind(), format!("failed to write {}: {}", path.display(), e)).into())
}
