mod commands;
mod core;
mod release;

use clap::Parser;
use crate::core::error::{BumpError, print_error};
use std::path::PathBuf;

/// Bump the release version across project files and roll the changelog
#[derive(Parser)]
#[command(name = "bump-version")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Version component to bump: major, minor or patch
  component: Option<String>,

  /// Repository owner used in the published image tag
  repository_owner: Option<String>,

  /// Show the plan without changing any file
  #[arg(long)]
  dry_run: bool,

  /// Output the plan in JSON format (useful for CI/automation)
  #[arg(long)]
  json: bool,

  /// Run as if started in this directory
  #[arg(short = 'C', long, value_name = "DIR")]
  repo_root: Option<PathBuf>,

  /// Configuration file (default: bump.toml at the repository root)
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = commands::run_bump(
    cli.component,
    cli.repository_owner,
    cli.dry_run,
    cli.json,
    cli.repo_root,
    cli.config,
  );

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: BumpError) -> ! {
  print_error(&err);
  std::process::exit(1);
}
