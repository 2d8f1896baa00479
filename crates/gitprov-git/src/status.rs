// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Relationship between the local branch tip and its upstream.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::GitError;

/// Synchronization state of the checked-out branch against `@{u}`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivergenceStatus {
	/// Local and upstream point at the same commit.
	UpToDate,
	/// Upstream has commits the local branch lacks.
	NeedToPull,
	/// The local branch has commits upstream lacks.
	NeedToPush,
	/// Both sides have unique commits, or the state could not be determined.
	Diverged,
}

impl DivergenceStatus {
	pub const ALL: [DivergenceStatus; 4] = [
		Self::UpToDate,
		Self::NeedToPull,
		Self::NeedToPush,
		Self::Diverged,
	];

	/// Stable numeric code (0..=3).
	pub const fn code(self) -> i32 {
		match self {
			Self::UpToDate => 0,
			Self::NeedToPull => 1,
			Self::NeedToPush => 2,
			Self::Diverged => 3,
		}
	}

	/// Canonical name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::UpToDate => "up-to-date",
			Self::NeedToPull => "need-to-pull",
			Self::NeedToPush => "need-to-push",
			Self::Diverged => "diverged",
		}
	}

	/// Whether an artifact built from this state may be published.
	pub const fn is_publishable(self) -> bool {
		matches!(self, Self::UpToDate)
	}

	/// Canonical name for a numeric status code.
	///
	/// # Panics
	///
	/// Panics if `code` is not one of the four defined codes. Use
	/// [`DivergenceStatus::try_from`] to handle untrusted input.
	pub fn name_for_code(code: i32) -> &'static str {
		match Self::try_from(code) {
			Ok(status) => status.as_str(),
			Err(e) => panic!("{e}"),
		}
	}
}

impl TryFrom<i32> for DivergenceStatus {
	type Error = GitError;

	fn try_from(code: i32) -> Result<Self, Self::Error> {
		match code {
			0 => Ok(Self::UpToDate),
			1 => Ok(Self::NeedToPull),
			2 => Ok(Self::NeedToPush),
			3 => Ok(Self::Diverged),
			other => Err(GitError::UnknownStatus(other)),
		}
	}
}

impl FromStr for DivergenceStatus {
	type Err = GitError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str() == s)
			.ok_or_else(|| GitError::UnknownStatusName(s.to_string()))
	}
}

impl fmt::Display for DivergenceStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classifies the relationship between two tips given their merge base.
///
/// `base` is only consulted when the tips differ; pass `None` when the
/// merge base could not be computed.
pub fn classify(local: &str, remote: &str, base: Option<&str>) -> DivergenceStatus {
	if local == remote {
		return DivergenceStatus::UpToDate;
	}
	match base {
		Some(base) if base == local => DivergenceStatus::NeedToPull,
		Some(base) if base == remote => DivergenceStatus::NeedToPush,
		_ => DivergenceStatus::Diverged,
	}
}
