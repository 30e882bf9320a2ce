// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// The linter configuration, resolved once at startup and immutable after.
///
/// For the two allow-lists, `None` means "no restriction", which is distinct
/// from an empty list that would reject everything. The loader never
/// produces `Some` holding an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// Allowed commit types, or `None` for no restriction.
    pub allowed_types: Option<Vec<String>>,

    /// Allowed scopes, or `None` for no restriction.
    pub allowed_scopes: Option<Vec<String>>,

    /// Whether a scope is required.
    pub require_scope: bool,

    /// Types exempt from the scope requirement.
    pub require_scope_except: Vec<String>,

    /// Whether the description may start with an uppercase letter.
    pub allow_capital_subject: bool,

    /// Maximum raw description length in bytes.
    pub max_subject_length: usize,
}

/// Default maximum description length.
pub(crate) const DEFAULT_MAX_SUBJECT_LENGTH: usize = 72;

/// Default allowed commit types, comma-joined.
pub(crate) const DEFAULT_TYPES: &str =
    "feat,fix,docs,style,refactor,perf,test,build,ci,chore,revert";

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            allowed_types: Some(
                DEFAULT_TYPES
                    .split(',')
                    .map(str::to_string)
                    .collect(),
            ),
            allowed_scopes: None,
            require_scope: false,
            require_scope_except: vec!["revert".to_string()],
            allow_capital_subject: false,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
        }
    }
}

/// Partial configuration as read from a TOML file.
///
/// Every field is optional so that an absent key keeps the layered value
/// rather than resetting it to a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub allowed_types: Option<Vec<String>>,
    pub allowed_scopes: Option<Vec<String>>,
    pub require_scope: Option<bool>,
    pub require_scope_except: Option<Vec<String>>,
    pub allow_capital_subject: Option<bool>,
    pub max_subject_length: Option<usize>,
}
