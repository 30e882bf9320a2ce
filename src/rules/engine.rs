// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit subject validation.

use crate::config::LintConfig;
use crate::git::Commit;
use crate::subject::{is_merge_subject, ParsedSubject};

use super::builtin::{apply_builtin_rules, Violation};
use super::report::{CommitReport, LintReport};

/// Rule engine for validating commit subjects.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine evaluates against.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint a single subject line.
    ///
    /// Returns every violation in rule order. Merge-commit subjects pass
    /// unconditionally; a subject that fails the grammar yields a single
    /// terminal format violation and no other rule runs.
    pub fn lint_subject(&self, subject: &str) -> Vec<Violation> {
        if is_merge_subject(subject) {
            return Vec::new();
        }

        match ParsedSubject::parse(subject) {
            Some(parsed) => apply_builtin_rules(&parsed, &self.config),
            None => vec![Violation::format()],
        }
    }

    /// Lint a batch of commits and collect the results into a report.
    pub fn lint_commits(&self, commits: &[Commit]) -> LintReport {
        let mut report = LintReport::new(commits.len());

        for commit in commits {
            let violations = self.lint_subject(&commit.subject);
            if !violations.is_empty() {
                report.push(CommitReport {
                    id: commit.id.clone(),
                    subject: commit.subject.clone(),
                    violations,
                });
            }
        }

        report
    }
}
