//! The bump command: roll the version across project files
//!
//! Flow: validate arguments, load configuration, prepare the plan (all
//! checks and content computation), then either display it (dry-run) or
//! apply it and print the next version.

use crate::core::config::BumpConfig;
use crate::core::error::{BumpError, BumpResult};
use crate::release::{BumpLevel, BumpPlan};
use std::env;
use std::path::PathBuf;

/// Run the bump command
pub fn run_bump(
  component: Option<String>,
  repository_owner: Option<String>,
  dry_run: bool,
  json: bool,
  repo_root: Option<PathBuf>,
  config_path: Option<PathBuf>,
) -> BumpResult<()> {
  // Positionals are validated here rather than by clap so that a missing
  // argument keeps the `error: <msg>` line and exit code 1 the wrapping
  // scripts expect, instead of clap's usage error. Order matters:
  // component first, then owner, then the keyword itself.
  let component = component.ok_or(BumpError::MissingArgument { name: "component" })?;
  let owner = repository_owner.ok_or(BumpError::MissingArgument {
    name: "repository owner",
  })?;
  let level: BumpLevel = component.parse()?;

  let root = match repo_root {
    Some(root) => root,
    None => env::current_dir()?,
  };

  let config = BumpConfig::load(&root, config_path.as_deref())?;
  let plan = BumpPlan::prepare(&root, level, &owner, &config)?;

  if dry_run {
    if json {
      println!("{}", plan.to_json()?);
    } else {
      print!("{}", plan.to_human_readable());
      println!();
      println!("🔍 Dry-run mode (no changes applied)");
    }
    return Ok(());
  }

  plan.apply(&root)?;

  if json {
    println!("{}", plan.to_json()?);
  } else {
    println!("{}", plan.next_version);
  }

  Ok(())
}
