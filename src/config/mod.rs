// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitgate.
//!
//! This module handles loading and merging configuration from defaults, an
//! optional TOML file, and environment variable overrides.

mod loader;
mod schema;

pub use loader::{env_bool, env_list, find_config_file, load_config, load_config_from};
pub use schema::LintConfig;
