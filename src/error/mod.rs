// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commitgate application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // One or more commits failed linting
    #[error("found {violations} violation(s) across {commits} commit(s)")]
    ViolationsFound { violations: usize, commits: usize },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Failed to walk history: {message}")]
    WalkFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
