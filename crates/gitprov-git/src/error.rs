// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
	#[error("git command failed: {cmd} {args:?}: {stderr}")]
	CommandFailed {
		cmd: String,
		args: Vec<String>,
		stderr: String,
	},

	#[error("git is not installed or not in PATH")]
	GitNotInstalled,

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("unknown divergence status code: {0}")]
	UnknownStatus(i32),

	#[error("unknown divergence status name: {0:?}")]
	UnknownStatusName(String),
}

/// Errors produced while resolving runner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The variable was set but contained nothing usable.
	#[error("environment variable {var} is set but empty")]
	EmptyValue { var: String },

	/// The variable was not valid unicode.
	#[error("environment variable {var} is not valid unicode")]
	NotUnicode { var: String },
}
