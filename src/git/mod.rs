// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module supplies the ordered commit history the linter runs over.

mod history;

pub use history::{commits_in_range, Commit, Repository};
