// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint report types and output.

use console::style;

use crate::ci;
use crate::cli::args::OutputFormat;

use super::builtin::Violation;

/// Lint outcome for a single commit with violations.
#[derive(Debug, Clone)]
pub struct CommitReport {
    /// Full commit hash.
    pub id: String,
    /// Original subject line.
    pub subject: String,
    /// Violations in rule order.
    pub violations: Vec<Violation>,
}

impl CommitReport {
    /// First seven characters of the commit hash.
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }
}

/// Aggregated result of linting a batch of commits.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// Number of commits examined, including compliant ones.
    pub commits_examined: usize,
    /// Per-commit results, violations only.
    pub results: Vec<CommitReport>,
}

impl LintReport {
    /// Create an empty report for a batch of the given size.
    pub fn new(commits_examined: usize) -> Self {
        Self {
            commits_examined,
            results: Vec::new(),
        }
    }

    /// Record a commit that failed linting.
    pub fn push(&mut self, result: CommitReport) {
        self.results.push(result);
    }

    /// Check if every examined commit was compliant.
    pub fn is_clean(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of violations across all commits.
    pub fn violation_count(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => self.print_json(),
            OutputFormat::Text => self.print_text(),
        }
    }

    /// Print as GitHub Actions workflow commands.
    fn print_text(&self) {
        for result in &self.results {
            for violation in &result.violations {
                ci::error(
                    &format!("commit {}", result.short_id()),
                    &format!("{} | '{}'", violation.message, result.subject),
                );
            }
        }

        if self.is_clean() {
            println!(
                "{} All commit subjects comply with rules.",
                style("✓").green().bold()
            );
        } else {
            ci::group("Commit lint summary");
            println!(
                "Found {} errors across {} commit(s).",
                self.violation_count(),
                self.commits_examined
            );
            ci::endgroup();
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_clean(),
            "commits": self.commits_examined,
            "violations": self.violation_count(),
            "results": self.results.iter().map(|r| {
                serde_json::json!({
                    "commit": r.id,
                    "subject": r.subject,
                    "violations": r.violations.iter().map(|v| {
                        serde_json::json!({
                            "code": v.code,
                            "message": v.message,
                        })
                    }).collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = LintReport::new(5);
        assert!(report.is_clean());
        assert_eq!(report.violation_count(), 0);
    }

    #[test]
    fn test_violation_count_sums_across_commits() {
        let mut report = LintReport::new(3);
        report.push(CommitReport {
            id: "1234567890abcdef".to_string(),
            subject: "bad".to_string(),
            violations: vec![Violation::format()],
        });
        report.push(CommitReport {
            id: "fedcba0987654321".to_string(),
            subject: "chore: Bad one.".to_string(),
            violations: vec![
                Violation::format(),
                Violation::format(),
            ],
        });

        assert!(!report.is_clean());
        assert_eq!(report.violation_count(), 3);
    }

    #[test]
    fn test_short_id_truncates_long_hashes() {
        let result = CommitReport {
            id: "1234567890abcdef".to_string(),
            subject: "bad".to_string(),
            violations: Vec::new(),
        };
        assert_eq!(result.short_id(), "1234567");
    }

    #[test]
    fn test_short_id_keeps_short_hashes() {
        let result = CommitReport {
            id: "12345".to_string(),
            subject: "bad".to_string(),
            violations: Vec::new(),
        };
        assert_eq!(result.short_id(), "12345");
    }
}
