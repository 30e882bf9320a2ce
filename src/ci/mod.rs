// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI integration: GitHub Actions workflow commands and run context.
//!
//! Diagnostics are printed as workflow commands so the Actions runner turns
//! them into annotations; outside Actions they are still plain readable
//! lines.

use crate::config::env_bool;

/// Annotation title used for run-level diagnostics.
pub const TITLE: &str = "commitgate";

/// Actor identity that short-circuits the whole run.
const RELEASE_BOT_ACTOR: &str = "release-please[bot]";

/// Print an error annotation.
pub fn error(title: &str, message: &str) {
    println!("::error title={}::{}", title, message);
}

/// Print a warning annotation.
pub fn warning(title: &str, message: &str) {
    println!("::warning title={}::{}", title, message);
}

/// Print a notice annotation.
pub fn notice(title: &str, message: &str) {
    println!("::notice title={}::{}", title, message);
}

/// Open a collapsible output group.
pub fn group(name: &str) {
    println!("::group::{}", name);
}

/// Close the current output group.
pub fn endgroup() {
    println!("::endgroup::");
}

/// Infer a commit range from pull-request environment context.
///
/// In a `pull_request` (or `pull_request_target`) workflow the base branch is
/// exported as `GITHUB_BASE_REF`; linting `origin/<base>..HEAD` covers
/// exactly the commits the pull request adds. Outside that context there is
/// no inferred range and the caller walks from HEAD.
pub fn infer_range() -> Option<String> {
    let event_name = std::env::var("GITHUB_EVENT_NAME").ok()?;
    if !event_name.starts_with("pull_request") {
        return None;
    }

    let base_ref = std::env::var("GITHUB_BASE_REF").ok()?;
    if base_ref.is_empty() {
        return None;
    }

    Some(format!("origin/{}..HEAD", base_ref))
}

/// Check whether the run should be skipped for the triggering actor.
///
/// Release automation produces commits outside the convention; with
/// `SKIP_FOR_BOT` enabled (the default) a run triggered by it exits
/// successfully before any linting.
pub fn skip_for_actor() -> bool {
    env_bool("SKIP_FOR_BOT", true)
        && std::env::var("GITHUB_ACTOR").as_deref() == Ok(RELEASE_BOT_ACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-dependent behavior is exercised end to end in the CLI
    // integration tests, where each child process gets its own environment.
    // In-process tests only cover values private to this test binary.

    #[test]
    fn test_infer_range_requires_pull_request_context() {
        std::env::remove_var("GITHUB_EVENT_NAME");
        std::env::remove_var("GITHUB_BASE_REF");
        assert_eq!(infer_range(), None);
    }
}
