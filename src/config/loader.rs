// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and layering.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment variable overrides. The result is computed once at startup;
//! the rule engine never reads the environment itself.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, GateError, Result};

use super::schema::{FileConfig, LintConfig, DEFAULT_MAX_SUBJECT_LENGTH};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["commitgate.toml", ".commitgate.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("commitgate").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Load configuration from the default locations plus environment overrides.
pub fn load_config() -> Result<LintConfig> {
    let mut config = match find_config_file() {
        Some(path) => load_file(&path)?,
        None => {
            tracing::debug!("No configuration file found, using defaults");
            LintConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from a specific file plus environment overrides.
///
/// Unlike discovery, an explicitly named file must exist.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    if !path.exists() {
        return Err(GateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let mut config = load_file(path)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn load_file(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string, layered over the defaults.
pub(crate) fn parse_config(content: &str) -> Result<LintConfig> {
    let file: FileConfig = toml::from_str(content).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    let mut config = LintConfig::default();

    if let Some(types) = file.allowed_types {
        config.allowed_types = normalize_list(types);
    }
    if let Some(scopes) = file.allowed_scopes {
        config.allowed_scopes = normalize_list(scopes);
    }
    if let Some(require) = file.require_scope {
        config.require_scope = require;
    }
    if let Some(except) = file.require_scope_except {
        config.require_scope_except = normalize_list(except).unwrap_or_default();
    }
    if let Some(allow) = file.allow_capital_subject {
        config.allow_capital_subject = allow;
    }
    if let Some(max) = file.max_subject_length {
        config.max_subject_length = if max > 0 {
            max
        } else {
            DEFAULT_MAX_SUBJECT_LENGTH
        };
    }

    Ok(config)
}

/// Apply environment variable overrides on top of a layered configuration.
pub(crate) fn apply_env_overrides(config: &mut LintConfig) {
    if let Some(types) = env_list("TYPES") {
        config.allowed_types = Some(types);
    }
    if let Some(scopes) = env_list("SCOPES") {
        config.allowed_scopes = Some(scopes);
    }
    if let Some(except) = env_list("REQUIRE_SCOPE_EXCEPT_TYPES") {
        config.require_scope_except = except;
    }
    config.require_scope = env_bool("REQUIRE_SCOPE", config.require_scope);
    config.allow_capital_subject = env_bool("ALLOW_CAPITAL_SUBJECT", config.allow_capital_subject);

    if let Ok(raw) = std::env::var("MAX_SUBJECT") {
        if !raw.trim().is_empty() {
            // A set but unparseable or non-positive value silently recovers
            // to the stock default.
            config.max_subject_length = match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => max,
                _ => DEFAULT_MAX_SUBJECT_LENGTH,
            };
        }
    }
}

/// Read a comma-separated list from an environment variable.
///
/// Returns `None` when the variable is unset or all-whitespace, so callers
/// keep their layered value. Tokens are trimmed and empty ones dropped.
pub fn env_list(name: &str) -> Option<Vec<String>> {
    let raw = std::env::var(name).ok()?;
    if raw.trim().is_empty() {
        return None;
    }

    let parts: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}

/// Read a boolean from an environment variable.
///
/// `true`, `yes`, `on` and `1` (case-insensitive) are true; any other set
/// value is false; an unset or empty variable yields the default.
pub fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) if !raw.is_empty() => {
            matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        _ => default,
    }
}

fn normalize_list(list: Vec<String>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = list
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_keeps_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
allowed_types = ["feat", "fix"]
allowed_scopes = ["api", "ui"]
require_scope = true
max_subject_length = 50
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.allowed_types,
            Some(vec!["feat".to_string(), "fix".to_string()])
        );
        assert_eq!(
            config.allowed_scopes,
            Some(vec!["api".to_string(), "ui".to_string()])
        );
        assert!(config.require_scope);
        assert_eq!(config.max_subject_length, 50);
        // Untouched fields keep their defaults.
        assert_eq!(config.require_scope_except, vec!["revert"]);
    }

    #[test]
    fn test_parse_empty_list_means_unrestricted() {
        let config = parse_config("allowed_scopes = []").unwrap();
        assert_eq!(config.allowed_scopes, None);
    }

    #[test]
    fn test_parse_trims_list_tokens() {
        let config = parse_config(r#"allowed_types = [" feat ", "", "fix"]"#).unwrap();
        assert_eq!(
            config.allowed_types,
            Some(vec!["feat".to_string(), "fix".to_string()])
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("no_such_option = true").is_err());
    }

    #[test]
    fn test_parse_zero_max_recovers_default() {
        let config = parse_config("max_subject_length = 0").unwrap();
        assert_eq!(config.max_subject_length, 72);
    }

    #[test]
    fn test_env_list_unset() {
        assert_eq!(env_list("COMMITGATE_TEST_LIST_UNSET"), None);
    }

    #[test]
    fn test_env_list_splits_and_trims() {
        std::env::set_var("COMMITGATE_TEST_LIST_SPLIT", " one,  two  ,,three ");
        let result = env_list("COMMITGATE_TEST_LIST_SPLIT");
        std::env::remove_var("COMMITGATE_TEST_LIST_SPLIT");
        assert_eq!(
            result,
            Some(vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string()
            ])
        );
    }

    #[test]
    fn test_env_list_whitespace_behaves_as_unset() {
        std::env::set_var("COMMITGATE_TEST_LIST_BLANK", "   ");
        let result = env_list("COMMITGATE_TEST_LIST_BLANK");
        std::env::remove_var("COMMITGATE_TEST_LIST_BLANK");
        assert_eq!(result, None);
    }

    #[test]
    fn test_env_bool_unset_uses_default() {
        assert!(env_bool("COMMITGATE_TEST_BOOL_UNSET_A", true));
        assert!(!env_bool("COMMITGATE_TEST_BOOL_UNSET_B", false));
    }

    #[test]
    fn test_env_bool_truthy_values() {
        for value in ["true", "True", "YES", "on", "1"] {
            std::env::set_var("COMMITGATE_TEST_BOOL_TRUTHY", value);
            let result = env_bool("COMMITGATE_TEST_BOOL_TRUTHY", false);
            std::env::remove_var("COMMITGATE_TEST_BOOL_TRUTHY");
            assert!(result, "expected '{}' to be truthy", value);
        }
    }

    #[test]
    fn test_env_bool_other_values_are_false() {
        for value in ["false", "other", "0", "no"] {
            std::env::set_var("COMMITGATE_TEST_BOOL_FALSY", value);
            let result = env_bool("COMMITGATE_TEST_BOOL_FALSY", true);
            std::env::remove_var("COMMITGATE_TEST_BOOL_FALSY");
            assert!(!result, "expected '{}' to be falsy", value);
        }
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let result = load_config_from(Path::new("/definitely/not/here.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_file_from_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".commitgate.toml"), "require_scope = true").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".commitgate.toml"));
    }
}
