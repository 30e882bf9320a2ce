// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit history enumeration.

use git2::Repository as Git2Repo;
use std::path::Path;

use crate::error::{GateError, GitError, Result};

/// One commit to lint: full hash and subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash.
    pub id: String,
    /// First line of the commit message.
    pub subject: String,
}

/// Wrapper around git2::Repository with history enumeration.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository discovered from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            GateError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository discovered from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GateError::Git(GitError::NotARepository)
            } else {
                GateError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Enumerate non-merge commits for a range, newest first.
    ///
    /// A `..` range walks the asymmetric difference; a single revision walks
    /// history reachable from it; `None` walks from HEAD. Commits with more
    /// than one parent are skipped and `limit` caps the result.
    pub fn commits_in_range(&self, range: Option<&str>, limit: usize) -> Result<Vec<Commit>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| {
            GateError::Git(GitError::WalkFailed {
                message: e.message().to_string(),
            })
        })?;

        match range {
            Some(spec) if spec.contains("..") => {
                revwalk.push_range(spec).map_err(|_| {
                    GateError::Git(GitError::InvalidReference {
                        reference: spec.to_string(),
                    })
                })?;
            }
            Some(spec) => {
                let obj = self.inner.revparse_single(spec).map_err(|_| {
                    GateError::Git(GitError::InvalidReference {
                        reference: spec.to_string(),
                    })
                })?;
                revwalk.push(obj.id()).map_err(|e| {
                    GateError::Git(GitError::WalkFailed {
                        message: e.message().to_string(),
                    })
                })?;
            }
            None => {
                revwalk.push_head().map_err(|e| {
                    GateError::Git(GitError::WalkFailed {
                        message: e.message().to_string(),
                    })
                })?;
            }
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            if commits.len() >= limit {
                break;
            }

            let oid = oid_result.map_err(|e| {
                GateError::Git(GitError::WalkFailed {
                    message: e.message().to_string(),
                })
            })?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                GateError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;

            // Merge commits are machine-generated and excluded from linting.
            if commit.parent_count() > 1 {
                continue;
            }

            commits.push(Commit {
                id: oid.to_string(),
                subject: commit.summary().unwrap_or("").to_string(),
            });
        }

        tracing::debug!(
            "Collected {} commit(s) for range {:?}",
            commits.len(),
            range
        );

        Ok(commits)
    }
}

/// Enumerate non-merge commits from the repository at the current directory.
pub fn commits_in_range(range: Option<&str>, limit: usize) -> Result<Vec<Commit>> {
    let repo = Repository::open_current()?;
    repo.commits_in_range(range, limit)
}
