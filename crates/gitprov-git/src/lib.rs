// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Read-only provenance queries against a git working copy.
//!
//! The crate answers a handful of questions about a checkout: branch, HEAD
//! SHA, describe tag, cleanliness, relationship to the upstream branch, and
//! the GitHub account owning `origin`. Every answer is recomputed from git on
//! each call and failures degrade to a documented default instead of an
//! error.
//!
//! [`RepoInspector`] takes any [`GitRunner`]; the free functions below use
//! the default [`CommandRunner`].

mod command_runner;
mod config;
mod error;
mod inspect;
mod mock_runner;
mod query;
mod remote;
mod runner;
mod status;

use std::path::Path;

pub use command_runner::CommandRunner;
pub use config::{RunnerConfig, DEFAULT_GIT_PROGRAM, GIT_PROGRAM_ENV};
pub use error::{ConfigError, GitError};
pub use inspect::{RepoInspector, RepoSnapshot, DETACHED_HEAD};
pub use mock_runner::MockGitRunner;
pub use query::GitQuery;
pub use remote::{account_from_remotes, ORIGIN, REMOTE_LINE_REGEX};
pub use runner::GitRunner;
pub use status::{classify, DivergenceStatus};

fn default_inspector() -> RepoInspector {
	RepoInspector::new(CommandRunner::new())
}

/// Current branch at `path`. See [`RepoInspector::branch`].
pub fn branch(path: impl AsRef<Path>) -> String {
	default_inspector().branch(path.as_ref())
}

/// HEAD SHA at `path`. See [`RepoInspector::sha`].
pub fn sha(path: impl AsRef<Path>) -> String {
	default_inspector().sha(path.as_ref())
}

/// Describe tag at `path`. See [`RepoInspector::tag`].
pub fn tag(path: impl AsRef<Path>) -> String {
	default_inspector().tag(path.as_ref())
}

/// Working tree cleanliness at `path`. See [`RepoInspector::is_clean`].
pub fn is_clean(path: impl AsRef<Path>) -> bool {
	default_inspector().is_clean(path.as_ref())
}

/// Upstream relationship at `path`. See [`RepoInspector::up_to_date`].
pub fn up_to_date(path: impl AsRef<Path>) -> DivergenceStatus {
	default_inspector().up_to_date(path.as_ref())
}

/// Raw `git remote -v` output at `path`.
pub fn remotes(path: impl AsRef<Path>) -> String {
	default_inspector().remotes(path.as_ref())
}

/// GitHub account of `origin` at `path`.
pub fn remote_account(path: impl AsRef<Path>) -> String {
	default_inspector().remote_account(path.as_ref())
}

/// All facts at `path`. See [`RepoInspector::snapshot`].
pub fn snapshot(path: impl AsRef<Path>) -> RepoSnapshot {
	default_inspector().snapshot(path.as_ref())
}
