// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for parsing conventional commit subject lines.
    static ref SUBJECT_REGEX: Regex = Regex::new(
        r"^(?P<type>[a-z]+)(?:\((?P<scope>[a-z0-9][a-z0-9./-]*?)\))?(?P<breaking>!)?: (?P<description>.*)$"
    ).unwrap();

    /// Regex for machine-generated merge subjects. Only the three documented
    /// shapes are recognized; the prefix match is case-sensitive.
    static ref MERGE_REGEX: Regex = Regex::new(
        r"^Merge (?:pull request #\d+ from \S+|branch '[^']+'(?: into .+)?|[0-9a-f]+ into [0-9a-f]+)$"
    ).unwrap();
}

/// A structurally parsed commit subject line.
///
/// The `description` is the raw remainder after the `": "` separator. Length,
/// trailing-period and casing checks read it verbatim; only the emptiness
/// check trims it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubject {
    /// Commit type token (feat, fix, etc.).
    pub commit_type: String,
    /// Optional parenthesized scope.
    pub scope: Option<String>,
    /// Whether a `!` breaking marker precedes the colon.
    pub breaking: bool,
    /// Raw description after the colon-space separator.
    pub description: String,
}

impl ParsedSubject {
    /// Parse a subject line against the conventional grammar.
    ///
    /// Returns `None` when the line does not match; the caller turns that
    /// into a single terminal format violation.
    pub fn parse(subject: &str) -> Option<Self> {
        let captures = SUBJECT_REGEX.captures(subject)?;

        Some(Self {
            commit_type: captures
                .name("type")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            breaking: captures.name("breaking").is_some(),
            description: captures
                .name("description")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// The description with surrounding whitespace removed.
    pub fn description_trimmed(&self) -> &str {
        self.description.trim()
    }
}

/// Check whether a subject is a recognized merge-commit subject.
///
/// Merge commits are machine-generated and never follow the convention, so
/// they pass linting unconditionally. The history provider also excludes
/// merges by parent count; this recognition covers subjects fed from sources
/// that do not pre-filter.
pub fn is_merge_subject(subject: &str) -> bool {
    MERGE_REGEX.is_match(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = ParsedSubject::parse("feat: add new feature").unwrap();
        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.scope, None);
        assert!(!parsed.breaking);
        assert_eq!(parsed.description, "add new feature");
    }

    #[test]
    fn test_parse_with_scope() {
        let parsed = ParsedSubject::parse("fix(api): correct a bug").unwrap();
        assert_eq!(parsed.commit_type, "fix");
        assert_eq!(parsed.scope, Some("api".to_string()));
        assert_eq!(parsed.description, "correct a bug");
    }

    #[test]
    fn test_parse_breaking() {
        let parsed = ParsedSubject::parse("refactor(parser)!: simplify the logic").unwrap();
        assert_eq!(parsed.commit_type, "refactor");
        assert_eq!(parsed.scope, Some("parser".to_string()));
        assert!(parsed.breaking);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let parsed = ParsedSubject::parse("feat!: drop legacy flags").unwrap();
        assert_eq!(parsed.scope, None);
        assert!(parsed.breaking);
    }

    #[test]
    fn test_parse_scope_charset() {
        let parsed = ParsedSubject::parse("chore(deps/dev-2.0): bump things").unwrap();
        assert_eq!(parsed.scope, Some("deps/dev-2.0".to_string()));
    }

    #[test]
    fn test_parse_rejects_uppercase_type() {
        assert!(ParsedSubject::parse("Feat: add new feature").is_none());
    }

    #[test]
    fn test_parse_rejects_uppercase_scope() {
        assert!(ParsedSubject::parse("feat(API): add new feature").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        assert!(ParsedSubject::parse("missing colon").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_space_after_colon() {
        assert!(ParsedSubject::parse("feat:no space").is_none());
    }

    #[test]
    fn test_parse_keeps_raw_description() {
        let parsed = ParsedSubject::parse("chore: ").unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.description_trimmed(), "");

        let parsed = ParsedSubject::parse("chore:   padded   ").unwrap();
        assert_eq!(parsed.description, "  padded   ");
        assert_eq!(parsed.description_trimmed(), "padded");
    }

    #[test]
    fn test_merge_pull_request() {
        assert!(is_merge_subject("Merge pull request #123 from feature/branch"));
    }

    #[test]
    fn test_merge_branch() {
        assert!(is_merge_subject("Merge branch 'feature/foo'"));
        assert!(is_merge_subject("Merge branch 'feature/foo' into develop"));
    }

    #[test]
    fn test_merge_hashes() {
        assert!(is_merge_subject(
            "Merge 9d7b7c932575348d7a2768fc781960128d9b16f2 into 15a00c61be9c996611064f3cb94a388cbe40c3a2"
        ));
    }

    #[test]
    fn test_merge_rejects_lowercase_prefix() {
        assert!(!is_merge_subject("merge branch 'feature/foo'"));
    }

    #[test]
    fn test_merge_rejects_ordinary_subjects() {
        assert!(!is_merge_subject("feat: merge two buffers"));
        assert!(!is_merge_subject("Merge things around"));
    }
}
