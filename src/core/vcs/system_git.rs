//! System git backend - zero dependencies
//!
//! Uses git plumbing commands for tag and diff inspection with a safe,
//! isolated subprocess environment. The release flow only reads history;
//! it never creates commits or tags.

use crate::core::error::{BumpResult, GitError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend driving the system git binary (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Wrap a directory without probing it.
  ///
  /// The directory is allowed to not be a git repository at all; every
  /// query below degrades to the "no history" answer in that case.
  pub fn new(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// SHA of the most recently tagged commit, in tag date order.
  ///
  /// Returns `None` when no tag exists, when the directory is not a git
  /// repository, or when git itself cannot run. Callers treat all three
  /// as "nothing has been released yet".
  pub fn latest_tagged_commit(&self) -> Option<String> {
    let output = self
      .git_cmd()
      .args(["rev-list", "--date-order", "--tags", "--max-count=1"])
      .output()
      .ok()?;

    if !output.status.success() {
      return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() { None } else { Some(sha) }
  }

  /// Diff a single path between `base` and HEAD, returning the diff text.
  ///
  /// Contract inherited from the release flow: anything the command writes
  /// to stderr is the failure signal, not the exit status. An empty result
  /// means the path is identical in both commits.
  pub fn diff_since(&self, base: &str, path: &Path) -> BumpResult<String> {
    let output = self
      .git_cmd()
      .args(["diff", base, "HEAD", "--"])
      .arg(path)
      .output()
      .map_err(|e| GitError::CommandFailed {
        command: "diff".to_string(),
        stderr: e.to_string(),
      })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
      return Err(
        GitError::CommandFailed {
          command: "diff".to_string(),
          stderr,
        }
        .into(),
      );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    // Set working directory
    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }
}
