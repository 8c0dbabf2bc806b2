//! Integration tests for the CLI surface: arguments, dry-run, JSON output

use crate::helpers::{TestRepo, assert_bump_fails, run_bump, run_bump_ok};
use anyhow::Result;

#[test]
fn test_missing_component_argument() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;

  assert_bump_fails(&repo.path, &[], "component argument missing")?;

  Ok(())
}

#[test]
fn test_missing_owner_argument() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;

  assert_bump_fails(&repo.path, &["minor"], "repository owner argument missing")?;

  Ok(())
}

#[test]
fn test_invalid_bump_keyword() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;

  assert_bump_fails(&repo.path, &["huge", "acme"], "\"major\", \"minor\" or \"patch\" expected")?;

  // Case matters, exactly as it always has.
  assert_bump_fails(&repo.path, &["Minor", "acme"], "\"major\", \"minor\" or \"patch\" expected")?;

  Ok(())
}

#[test]
fn test_invalid_stored_version() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;
  repo.write_file("VERSION", "1.x.3")?;

  assert_bump_fails(&repo.path, &["minor", "acme"], "\"1.x.3\" version number invalid")?;

  let repo = TestRepo::without_git("0.1.0")?;
  repo.write_file("VERSION", "1.2")?;

  assert_bump_fails(&repo.path, &["minor", "acme"], "\"1.2\" version number invalid")?;

  Ok(())
}

#[test]
fn test_version_component_at_u64_max_is_rejected() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;
  repo.write_file("VERSION", "18446744073709551615.0.0")?;

  // Fails with the usual error line and exit code, never a panic.
  assert_bump_fails(
    &repo.path,
    &["major", "acme"],
    "\"18446744073709551615.0.0\" version number invalid",
  )?;

  assert_eq!(repo.read_file("VERSION")?, "18446744073709551615.0.0");
  assert!(repo.read_file("hocfile.yaml")?.contains("version: 0.1.0"));

  Ok(())
}

#[test]
fn test_dry_run_changes_nothing() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;
  let changelog_before = repo.read_file("CHANGELOG.md")?;

  let output = run_bump_ok(&repo.path, &["minor", "acme", "--dry-run"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("bump minor"), "plan summary shown: {}", stdout);
  assert!(stdout.contains("0.1.0"));
  assert!(stdout.contains("0.2.0"));
  assert!(stdout.contains("Dry-run"));

  assert_eq!(repo.read_file("VERSION")?, "0.1.0");
  assert_eq!(repo.read_file("CHANGELOG.md")?, changelog_before);
  assert!(repo.read_file("hocfile.yaml")?.contains("version: 0.1.0"));

  Ok(())
}

#[test]
fn test_json_output_is_machine_readable() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;

  let output = run_bump_ok(&repo.path, &["minor", "acme", "--json"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  let plan: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(plan["level"], "minor");
  assert_eq!(plan["current_version"], "0.1.0");
  assert_eq!(plan["next_version"], "0.2.0");
  assert_eq!(plan["image_tag"], "ghcr.io/acme/signal-inspector-backend:0.2.0");

  let patches = plan["patches"].as_array().unwrap();
  assert_eq!(patches.len(), 5);
  assert!(patches.iter().all(|p| p["status"] == "update"));

  // JSON mode still applies the bump.
  assert_eq!(repo.read_file("VERSION")?, "0.2.0");

  Ok(())
}

#[test]
fn test_json_dry_run_reports_missing_patterns() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;
  repo.write_file("hocfile.yaml", "image:\n  version: 9.9.9\n")?;

  let output = run_bump_ok(&repo.path, &["minor", "acme", "--dry-run", "--json"])?;
  let plan: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  let patches = plan["patches"].as_array().unwrap();
  let hocfile = patches.iter().find(|p| p["path"] == "hocfile.yaml").unwrap();
  assert_eq!(hocfile["status"], "pattern_missing");

  assert_eq!(repo.read_file("VERSION")?, "0.1.0");

  Ok(())
}

#[test]
fn test_help_flag() -> Result<()> {
  let repo = TestRepo::without_git("0.1.0")?;

  let output = run_bump(&repo.path, &["--help"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("major"));
  assert!(stdout.contains("--dry-run"));

  Ok(())
}

#[test]
fn test_explicit_config_flag() -> Result<()> {
  let repo = TestRepo::without_git("1.0.0")?;
  repo.write_file("release.toml", "[image]\nname = \"custom-image\"\n")?;

  run_bump_ok(&repo.path, &["patch", "acme", "--config", "release.toml"])?;

  let changelog = repo.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("Image tag: ghcr.io/acme/custom-image:1.0.1"));

  Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
  let repo = TestRepo::without_git("1.0.0")?;

  let output = run_bump(&repo.path, &["patch", "acme", "--config", "absent.toml"])?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.starts_with("error: "), "stderr: {}", stderr);
  assert!(stderr.contains("absent.toml"));

  Ok(())
}
