// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Runner configuration.
//!
//! The only knob is which git executable gets spawned. It defaults to `git`
//! resolved through `PATH` and can be overridden with the `GITPROV_GIT`
//! environment variable.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable naming the git executable to run.
pub const GIT_PROGRAM_ENV: &str = "GITPROV_GIT";

/// Program spawned when nothing else is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Configuration for [`CommandRunner`](crate::CommandRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
	/// Executable name or path of the git binary.
	pub program: PathBuf,
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self {
			program: PathBuf::from(DEFAULT_GIT_PROGRAM),
		}
	}
}

impl RunnerConfig {
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
		}
	}

	/// Load configuration from the process environment.
	///
	/// # Precedence
	///
	/// 1. If `GITPROV_GIT` is set, use it as the program
	/// 2. Otherwise fall back to [`DEFAULT_GIT_PROGRAM`]
	///
	/// An empty or whitespace-only `GITPROV_GIT` is rejected rather than
	/// silently replaced by the default.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|var| env::var(var))
	}

	fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Result<String, env::VarError>,
	{
		match lookup(GIT_PROGRAM_ENV) {
			Ok(value) => {
				let value = value.trim();
				if value.is_empty() {
					return Err(ConfigError::EmptyValue {
						var: GIT_PROGRAM_ENV.to_string(),
					});
				}
				tracing::debug!(program = %value, "using git program from environment");
				Ok(Self::new(value))
			}
			Err(env::VarError::NotPresent) => Ok(Self::default()),
			Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
				var: GIT_PROGRAM_ENV.to_string(),
			}),
		}
	}
}
