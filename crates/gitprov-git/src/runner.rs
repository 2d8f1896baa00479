// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;
use std::sync::Arc;

use crate::error::GitError;
use crate::query::GitQuery;

/// Trait abstracting git query execution for testability.
///
/// An implementation runs one query rooted at `path` and returns its output
/// with a single trailing line terminator removed. Any failure (git missing,
/// non-zero exit, not a repository) is reported as an error; callers decide
/// what a failure means for them.
pub trait GitRunner: Send + Sync {
	fn run(&self, path: &Path, query: &GitQuery) -> Result<String, GitError>;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
	fn run(&self, path: &Path, query: &GitQuery) -> Result<String, GitError> {
		(**self).run(path, query)
	}
}

impl<R: GitRunner + ?Sized> GitRunner for Box<R> {
	fn run(&self, path: &Path, query: &GitQuery) -> Result<String, GitError> {
		(**self).run(path, query)
	}
}

impl<R: GitRunner + ?Sized> GitRunner for Arc<R> {
	fn run(&self, path: &Path, query: &GitQuery) -> Result<String, GitError> {
		(**self).run(path, query)
	}
}
