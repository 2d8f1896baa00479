// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::GitError;
use crate::query::{strip_line_terminator, GitQuery};
use crate::runner::GitRunner;

/// Scripted outcome for a single query.
#[derive(Clone, Debug, PartialEq, Eq)]
enum MockResponse {
	Output(String),
	Failure(String),
}

/// Mock git runner for testing.
///
/// Outputs are given as git would print them (trailing newline included)
/// and go through the same terminator stripping as the real runner. Queries
/// without a scripted response fail as if git exited non-zero.
#[derive(Clone, Default)]
pub struct MockGitRunner {
	responses: HashMap<GitQuery, MockResponse>,
	/// Track calls for verification.
	pub calls: Arc<Mutex<Vec<GitQuery>>>,
}

impl MockGitRunner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Script raw output for `query`.
	pub fn with_output(mut self, query: GitQuery, output: impl Into<String>) -> Self {
		self
			.responses
			.insert(query, MockResponse::Output(output.into()));
		self
	}

	/// Script a non-zero exit for `query`.
	pub fn with_failure(mut self, query: GitQuery, stderr: impl Into<String>) -> Self {
		self
			.responses
			.insert(query, MockResponse::Failure(stderr.into()));
		self
	}

	/// Returns the recorded calls.
	pub fn get_calls(&self) -> Vec<GitQuery> {
		self.calls.lock().unwrap().clone()
	}

	/// Clears recorded calls.
	pub fn clear_calls(&self) {
		self.calls.lock().unwrap().clear();
	}

	fn record(&self, query: &GitQuery) {
		self.calls.lock().unwrap().push(query.clone());
	}

	fn failed(query: &GitQuery, stderr: String) -> GitError {
		GitError::CommandFailed {
			cmd: "git".to_string(),
			args: query.args().iter().map(|s| s.to_string()).collect(),
			stderr,
		}
	}
}

impl GitRunner for MockGitRunner {
	fn run(&self, _path: &Path, query: &GitQuery) -> Result<String, GitError> {
		self.record(query);
		match self.responses.get(query) {
			Some(MockResponse::Output(output)) => Ok(strip_line_terminator(output).to_string()),
			Some(MockResponse::Failure(stderr)) => Err(Self::failed(query, stderr.clone())),
			None => Err(Self::failed(query, "no scripted response".to_string())),
		}
	}
}
