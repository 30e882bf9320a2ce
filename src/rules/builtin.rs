// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::config::LintConfig;
use crate::subject::ParsedSubject;

/// Terminal violation reported when a subject does not match the grammar.
pub const FORMAT_MESSAGE: &str =
    "format must be 'type(scope)?: subject' with lowercase type and a space after colon";

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Stable code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The terminal format violation.
    pub fn format() -> Self {
        Self::new("format", FORMAT_MESSAGE)
    }
}

/// Apply all built-in rules to a parsed subject.
///
/// Rules are independent and evaluated in a fixed order; every failing rule
/// is reported.
pub fn apply_builtin_rules(parsed: &ParsedSubject, config: &LintConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Type rules
    if let Some(violation) = check_allowed_types(parsed, config) {
        violations.push(violation);
    }

    // Scope rules
    if let Some(violation) = check_require_scope(parsed, config) {
        violations.push(violation);
    }
    if let Some(violation) = check_allowed_scopes(parsed, config) {
        violations.push(violation);
    }

    // Description rules
    if let Some(violation) = check_description_empty(parsed) {
        violations.push(violation);
    }
    if let Some(violation) = check_max_length(parsed, config) {
        violations.push(violation);
    }
    if let Some(violation) = check_trailing_period(parsed) {
        violations.push(violation);
    }
    if let Some(violation) = check_leading_capital(parsed, config) {
        violations.push(violation);
    }

    violations
}

/// Check if the commit type is in the allow-list.
fn check_allowed_types(parsed: &ParsedSubject, config: &LintConfig) -> Option<Violation> {
    let allowed = config.allowed_types.as_ref()?;

    if allowed.iter().any(|t| t == &parsed.commit_type) {
        None
    } else {
        Some(Violation::new(
            "type-not-allowed",
            format!(
                "type '{}' is not allowed. Allowed: {}",
                parsed.commit_type,
                allowed.join(", ")
            ),
        ))
    }
}

/// Check if a required scope is missing.
fn check_require_scope(parsed: &ParsedSubject, config: &LintConfig) -> Option<Violation> {
    if config.require_scope
        && parsed.scope.is_none()
        && !config
            .require_scope_except
            .iter()
            .any(|t| t == &parsed.commit_type)
    {
        Some(Violation::new(
            "scope-required",
            "scope is required but missing",
        ))
    } else {
        None
    }
}

/// Check if a present scope is in the allow-list.
fn check_allowed_scopes(parsed: &ParsedSubject, config: &LintConfig) -> Option<Violation> {
    let scope = parsed.scope.as_ref()?;
    let allowed = config.allowed_scopes.as_ref()?;

    if allowed.iter().any(|s| s == scope) {
        None
    } else {
        Some(Violation::new(
            "scope-not-allowed",
            format!(
                "scope '{}' is not in allowed list: {}",
                scope,
                allowed.join(", ")
            ),
        ))
    }
}

/// Check if the description is empty after trimming.
fn check_description_empty(parsed: &ParsedSubject) -> Option<Violation> {
    if parsed.description_trimmed().is_empty() {
        Some(Violation::new("subject-empty", "subject must not be empty"))
    } else {
        None
    }
}

/// Check the raw description length against the configured maximum.
fn check_max_length(parsed: &ParsedSubject, config: &LintConfig) -> Option<Violation> {
    let len = parsed.description.len();

    if len > config.max_subject_length {
        Some(Violation::new(
            "subject-max-length",
            format!("subject too long ({} > {})", len, config.max_subject_length),
        ))
    } else {
        None
    }
}

/// Check if the raw description ends with a period.
fn check_trailing_period(parsed: &ParsedSubject) -> Option<Violation> {
    if parsed.description.ends_with('.') {
        Some(Violation::new(
            "subject-trailing-period",
            "subject must not end with a period",
        ))
    } else {
        None
    }
}

/// Check if the raw description starts with an uppercase ASCII letter.
fn check_leading_capital(parsed: &ParsedSubject, config: &LintConfig) -> Option<Violation> {
    if config.allow_capital_subject {
        return None;
    }

    let first = parsed.description.as_bytes().first()?;

    if first.is_ascii_uppercase() {
        Some(Violation::new(
            "subject-case",
            "subject should start lowercase (imperative mood)",
        ))
    } else {
        None
    }
}
