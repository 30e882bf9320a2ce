// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint run orchestration.

use crate::ci;
use crate::config;
use crate::error::{GateError, Result};
use crate::git;
use crate::rules::RuleEngine;

use super::args::Cli;

/// Run the linter with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("Running with args: {:?}", cli);

    if ci::skip_for_actor() {
        ci::notice(ci::TITLE, "Skipping for release-please[bot].");
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        config::load_config_from(config_path)?
    } else {
        config::load_config()?
    };

    // Resolve the range: explicit flag wins, then pull-request inference
    let range = cli.range.clone().or_else(ci::infer_range);

    let commits = fetch_commits(range.as_deref(), cli.limit)?;

    if commits.is_empty() {
        ci::warning(ci::TITLE, "No commits found to lint.");
        return Ok(());
    }

    let engine = RuleEngine::new(config);
    let report = engine.lint_commits(&commits);
    report.print(cli.format);

    if report.is_clean() {
        Ok(())
    } else {
        Err(GateError::ViolationsFound {
            violations: report.violation_count(),
            commits: report.commits_examined,
        })
    }
}

/// Fetch commits for the range, falling back once to the head commit.
fn fetch_commits(range: Option<&str>, limit: usize) -> Result<Vec<git::Commit>> {
    match git::commits_in_range(range, limit) {
        Ok(commits) => Ok(commits),
        Err(e) => {
            ci::warning(
                ci::TITLE,
                &format!("Could not read git log ({}). Falling back to HEAD", e),
            );
            git::commits_in_range(None, 1).map_err(|e| {
                ci::error(ci::TITLE, &format!("Failed to get git commits: {}", e));
                e
            })
        }
    }
}
