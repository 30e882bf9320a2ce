// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commitgate - CI Gate for Conventional Commit Subjects
//!
//! A CLI tool that lints commit subject lines over a git range and reports
//! violations as GitHub Actions annotations, for pass/fail gating in CI.
//!
//! # Features
//!
//! - **Rule Engine**: Fixed, ordered rule set over parsed subject lines
//! - **Subject Parser**: Conventional-commit grammar with optional scope and
//!   breaking marker, plus a merge-commit carve-out
//! - **History Provider**: Range-aware commit enumeration with merge
//!   exclusion and a HEAD fallback
//! - **Layered Configuration**: Defaults, optional TOML file, environment
//!   overrides
//! - **CI Integration**: Pull-request range inference, bot-actor skip,
//!   workflow-command output
//!
//! # Example
//!
//! ```
//! use commitgate::config::LintConfig;
//! use commitgate::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::default());
//!
//! assert!(engine.lint_subject("feat(cli): add range override").is_empty());
//!
//! let violations = engine.lint_subject("docs: Add documentation.");
//! assert_eq!(violations.len(), 2);
//! ```

// Module declarations
pub mod ci;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;
pub mod subject;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{GateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
