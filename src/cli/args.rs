// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Commitgate - CI Gate for Conventional Commit Subjects
///
/// Lints commit subjects over a git range and fails the process when any
/// subject violates the configured convention.
#[derive(Parser, Debug)]
#[command(name = "commitgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "CI gate for conventional commit subjects", long_about = None)]
pub struct Cli {
    /// Commit range to lint (overrides pull-request range inference)
    #[arg(long, value_name = "SPEC")]
    pub range: Option<String>,

    /// Maximum number of commits to lint
    #[arg(long, default_value = "200", value_name = "N")]
    pub limit: usize,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for machine-readable output
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// GitHub Actions workflow commands (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
