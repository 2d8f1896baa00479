// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;
use std::process::Command;

use tracing::{trace, warn};

use crate::config::RunnerConfig;
use crate::error::{ConfigError, GitError};
use crate::query::{strip_line_terminator, GitQuery};
use crate::runner::GitRunner;

/// Git runner implementation using the git CLI.
///
/// Every call spawns a fresh process and blocks until it exits. Nothing is
/// cached between calls.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
	config: RunnerConfig,
}

impl CommandRunner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: RunnerConfig) -> Self {
		Self { config }
	}

	/// Runner configured from `GITPROV_GIT`. See [`RunnerConfig::from_env`].
	pub fn from_env() -> Result<Self, ConfigError> {
		RunnerConfig::from_env().map(Self::with_config)
	}

	pub fn config(&self) -> &RunnerConfig {
		&self.config
	}
}

impl GitRunner for CommandRunner {
	fn run(&self, path: &Path, query: &GitQuery) -> Result<String, GitError> {
		let args = query.args();

		// `-C ""` leaves git in the process working directory.
		let mut cmd = Command::new(&self.config.program);
		cmd.arg("-C").arg(path).args(&args);

		trace!(
				cmd = %format!("{} -C {} {}", self.config.program.display(), path.display(), args.join(" ")),
				"running git command"
		);

		let output = cmd.output().map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				warn!(program = %self.config.program.display(), "git not found in PATH");
				GitError::GitNotInstalled
			} else {
				GitError::Io(e)
			}
		})?;

		if output.status.success() {
			let stdout = String::from_utf8_lossy(&output.stdout);
			Ok(strip_line_terminator(&stdout).to_string())
		} else {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
			Err(GitError::CommandFailed {
				cmd: self.config.program.display().to_string(),
				args: args.iter().map(|s| s.to_string()).collect(),
				stderr,
			})
		}
	}
}
