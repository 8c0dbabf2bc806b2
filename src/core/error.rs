//! Error types for bump-version
//!
//! Every failure here is fatal: the binary prints a single `error: <msg>`
//! line to stderr and exits with code 1. The CI scripts that wrap this tool
//! parse that line, so the messages for the release checks are load-bearing
//! and must stay stable.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for bump-version
#[derive(Debug)]
pub enum BumpError {
  /// A required positional argument was not provided
  MissingArgument { name: &'static str },

  /// The bump keyword was not one of major, minor, patch
  InvalidBumpComponent,

  /// The stored version was not three dot-separated numeric components
  InvalidVersionFormat { version: String },

  /// The changelog has not changed since the last tagged release
  ChangelogUnchanged,

  /// No `## [Unreleased]` header in the changelog
  NoUnreleasedSection,

  /// More than one `## [Unreleased]` header in the changelog
  MultipleUnreleasedSections,

  /// Git operation errors
  Git(GitError),

  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),
}

impl fmt::Display for BumpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpError::MissingArgument { name } => write!(f, "{} argument missing", name),
      BumpError::InvalidBumpComponent => write!(f, "\"major\", \"minor\" or \"patch\" expected"),
      BumpError::InvalidVersionFormat { version } => write!(f, "\"{}\" version number invalid", version),
      BumpError::ChangelogUnchanged => write!(f, "no changes have been made to the changelog"),
      BumpError::NoUnreleasedSection => write!(f, "no unreleased version section found"),
      BumpError::MultipleUnreleasedSections => write!(f, "multiple unreleased version sections found"),
      BumpError::Git(e) => write!(f, "{}", e),
      BumpError::Config(e) => write!(f, "{}", e),
      BumpError::Io(e) => write!(f, "{}", e),
    }
  }
}

impl std::error::Error for BumpError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BumpError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for BumpError {
  fn from(err: io::Error) -> Self {
    BumpError::Io(err)
  }
}

impl From<GitError> for BumpError {
  fn from(err: GitError) -> Self {
    BumpError::Git(err)
  }
}

impl From<ConfigError> for BumpError {
  fn from(err: ConfigError) -> Self {
    BumpError::Config(err)
  }
}

impl From<serde_json::Error> for BumpError {
  fn from(err: serde_json::Error) -> Self {
    BumpError::Io(err.into())
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command could not run or reported a failure on stderr
  CommandFailed { command: String, stderr: String },
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "git {} failed: {}", command, stderr)
      }
    }
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file exists but could not be read
  Unreadable { path: PathBuf, source: io::Error },

  /// Config file could not be parsed
  Invalid { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Unreadable { path, source } => {
        write!(f, "failed to read config {}: {}", path.display(), source)
      }
      ConfigError::Invalid { path, message } => {
        write!(f, "invalid config {}: {}", path.display(), message)
      }
    }
  }
}

/// Result type alias for bump-version
pub type BumpResult<T> = Result<T, BumpError>;

/// Print an error to stderr in the `error: <msg>` form wrapping scripts parse
pub fn print_error(error: &BumpError) {
  eprintln!("error: {}", error);
}
