// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit subject validation.
//!
//! This module provides the rule engine that evaluates parsed subject lines
//! against the configured convention and collects violations.

mod builtin;
mod engine;
mod report;

pub use builtin::{apply_builtin_rules, Violation, FORMAT_MESSAGE};
pub use engine::RuleEngine;
pub use report::{CommitReport, LintReport};
