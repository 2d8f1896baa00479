// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Account extraction from `git remote -v` output.

use std::sync::LazyLock;

use regex::Regex;

/// Name of the only remote that contributes an account.
pub const ORIGIN: &str = "origin";

/// Matches one line of `git remote -v` whose URL points at github.com over
/// SSH shorthand, HTTP(S) or the git protocol.
pub static REMOTE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(?P<remote>[^\t\n\f\r ]+)[\t\n\v\f\r ]+(git@github\.com:|(https?|git)://github\.com/)(?P<owner>[a-zA-Z0-9][a-zA-Z0-9-]*)/(?P<repo>[a-zA-Z0-9_.-]+)(\.git|[^\t\n\f\r ])+.*$",
	)
	.unwrap()
});

/// Returns the account owning the `origin` remote, or an empty string.
///
/// Lines for other remotes and lines that do not parse are skipped; the
/// first matching `origin` line wins.
pub fn account_from_remotes(remotes: &str) -> String {
	for line in remotes.split('\n') {
		let Some(caps) = REMOTE_LINE_REGEX.captures(line) else {
			if !line.is_empty() {
				tracing::trace!(line, "skipping unparseable remote line");
			}
			continue;
		};

		if &caps["remote"] == ORIGIN {
			let owner = &caps["owner"];
			tracing::trace!(owner, repo = &caps["repo"], "found origin account");
			return owner.to_string();
		}
	}

	String::new()
}
