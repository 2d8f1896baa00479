// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::command_runner::CommandRunner;
use crate::error::GitError;
use crate::query::GitQuery;
use crate::remote::account_from_remotes;
use crate::runner::GitRunner;
use crate::status::{classify, DivergenceStatus};

/// What `git rev-parse --abbrev-ref HEAD` prints for a detached checkout.
pub const DETACHED_HEAD: &str = "HEAD";

/// Every fact about a working copy, gathered in one pass.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
	/// Current branch; `"HEAD"` if detached and unresolved, empty if unknown.
	pub branch: String,
	/// Full commit SHA of HEAD.
	pub sha: String,
	/// `git describe --always --dirty --tags` output.
	pub tag: String,
	/// Whether the working tree has no unstaged changes.
	pub is_clean: bool,
	/// Relationship to the upstream branch.
	pub status: DivergenceStatus,
	/// GitHub account owning `origin`.
	pub remote_account: String,
}

/// Resolves repository facts through an injected [`GitRunner`].
///
/// None of the methods return errors: a failed query degrades to the
/// documented default for that fact.
#[derive(Debug, Clone, Default)]
pub struct RepoInspector<R = CommandRunner> {
	runner: R,
}

impl<R: GitRunner> RepoInspector<R> {
	pub fn new(runner: R) -> Self {
		Self { runner }
	}

	pub fn runner(&self) -> &R {
		&self.runner
	}

	fn query(&self, path: &Path, query: &GitQuery) -> Result<String, GitError> {
		self.runner.run(path, query).inspect_err(|e| {
			debug!(path = %path.display(), query = ?query, error = %e, "git query failed");
		})
	}

	/// Returns the current branch name.
	///
	/// In detached HEAD state the first branch containing HEAD (other than
	/// the `*` entry) is returned instead, falling back to `"HEAD"`. Returns
	/// an empty string if the branch query itself fails.
	pub fn branch(&self, path: &Path) -> String {
		let Ok(branch) = self.query(path, &GitQuery::CurrentBranch) else {
			return String::new();
		};

		if branch != DETACHED_HEAD {
			trace!(path = %path.display(), branch = %branch, "found branch");
			return branch;
		}

		debug!(path = %path.display(), "detached HEAD state, searching containing branches");
		let sha = self.sha(path);
		let Ok(listing) = self.query(path, &GitQuery::BranchesContaining(sha)) else {
			return branch;
		};

		match first_containing_branch(&listing) {
			Some(candidate) => {
				trace!(path = %path.display(), branch = %candidate, "resolved detached HEAD");
				candidate.to_string()
			}
			None => branch,
		}
	}

	/// Returns the full SHA of HEAD, or an empty string.
	pub fn sha(&self, path: &Path) -> String {
		self.query(path, &GitQuery::HeadCommit).unwrap_or_default()
	}

	/// Returns the describe tag (falls back to the abbreviated SHA), or an
	/// empty string.
	pub fn tag(&self, path: &Path) -> String {
		self.query(path, &GitQuery::Describe).unwrap_or_default()
	}

	/// Returns true if `git diff --shortstat` succeeds with no output.
	pub fn is_clean(&self, path: &Path) -> bool {
		match self.query(path, &GitQuery::DiffShortStat) {
			Ok(stat) => stat.is_empty(),
			Err(_) => false,
		}
	}

	/// Classifies the checked-out branch against its upstream.
	///
	/// Any failed query yields [`DivergenceStatus::Diverged`].
	pub fn up_to_date(&self, path: &Path) -> DivergenceStatus {
		let Ok(local) = self.query(path, &GitQuery::LocalRef) else {
			return DivergenceStatus::Diverged;
		};
		let Ok(remote) = self.query(path, &GitQuery::UpstreamRef) else {
			return DivergenceStatus::Diverged;
		};

		if local == remote {
			return DivergenceStatus::UpToDate;
		}

		let Ok(base) = self.query(path, &GitQuery::MergeBase) else {
			return DivergenceStatus::Diverged;
		};

		let status = classify(&local, &remote, Some(base.as_str()));
		trace!(
				path = %path.display(),
				local = %local,
				remote = %remote,
				base = %base,
				status = %status,
				"classified divergence"
		);
		status
	}

	/// Returns raw `git remote -v` output, or an empty string.
	pub fn remotes(&self, path: &Path) -> String {
		self.query(path, &GitQuery::Remotes).unwrap_or_default()
	}

	/// Returns the GitHub account of the `origin` remote, or an empty string.
	pub fn remote_account(&self, path: &Path) -> String {
		account_from_remotes(&self.remotes(path))
	}

	/// Gathers every fact. Each one is queried afresh.
	pub fn snapshot(&self, path: &Path) -> RepoSnapshot {
		let snapshot = RepoSnapshot {
			branch: self.branch(path),
			sha: self.sha(path),
			tag: self.tag(path),
			is_clean: self.is_clean(path),
			status: self.up_to_date(path),
			remote_account: self.remote_account(path),
		};

		info!(
				path = %path.display(),
				branch = %snapshot.branch,
				sha = %snapshot.sha,
				tag = %snapshot.tag,
				is_clean = snapshot.is_clean,
				status = %snapshot.status,
				remote_account = %snapshot.remote_account,
				"inspected git repository"
		);

		snapshot
	}
}

/// First entry of `git branch --contains` output that is not blank and not
/// the `*`-marked current entry, trimmed of surrounding spaces.
fn first_containing_branch(listing: &str) -> Option<&str> {
	listing
		.split('\n')
		.filter(|line| !line.is_empty() && !line.starts_with('*'))
		.map(|line| line.trim_matches(' '))
		.next()
}
