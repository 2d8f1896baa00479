// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// The fixed set of read-only git queries issued by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GitQuery {
	/// `git rev-parse -q --abbrev-ref HEAD`
	CurrentBranch,
	/// `git branch --contains <sha>`
	BranchesContaining(String),
	/// `git rev-parse -q HEAD`
	HeadCommit,
	/// `git describe --always --dirty --tags`
	Describe,
	/// `git diff --shortstat`
	DiffShortStat,
	/// `git rev-parse @`
	LocalRef,
	/// `git rev-parse @{u}`
	UpstreamRef,
	/// `git merge-base @ @{u}`
	MergeBase,
	/// `git remote -v`
	Remotes,
}

impl GitQuery {
	/// Arguments passed to git for this query.
	pub fn args(&self) -> Vec<&str> {
		match self {
			Self::CurrentBranch => vec!["rev-parse", "-q", "--abbrev-ref", "HEAD"],
			Self::BranchesContaining(sha) => vec!["branch", "--contains", sha.as_str()],
			Self::HeadCommit => vec!["rev-parse", "-q", "HEAD"],
			Self::Describe => vec!["describe", "--always", "--dirty", "--tags"],
			Self::DiffShortStat => vec!["diff", "--shortstat"],
			Self::LocalRef => vec!["rev-parse", "@"],
			Self::UpstreamRef => vec!["rev-parse", "@{u}"],
			Self::MergeBase => vec!["merge-base", "@", "@{u}"],
			Self::Remotes => vec!["remote", "-v"],
		}
	}
}

/// Strips exactly one trailing line terminator (`\n` or `\r\n`).
pub(crate) fn strip_line_terminator(output: &str) -> &str {
	match output.strip_suffix('\n') {
		Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
		None => output,
	}
}
