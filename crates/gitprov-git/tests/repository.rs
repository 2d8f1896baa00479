// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end checks against real repositories created with the git CLI.
//!
//! Every test returns early when git is not installed.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::thread;

use gitprov_git::{
	CommandRunner, DivergenceStatus, RepoInspector, RepoSnapshot, RunnerConfig, DETACHED_HEAD,
};
use tempfile::TempDir;

fn git_available() -> bool {
	Command::new("git").arg("--version").output().is_ok()
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn git(dir: &Path, args: &[&str]) -> String {
	let output = Command::new("git")
		.args(args)
		.current_dir(dir)
		.output()
		.expect("failed to spawn git");
	assert!(
		output.status.success(),
		"git {:?} failed: {}",
		args,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_git_repo(dir: &Path) {
	git(dir, &["init", "-q"]);
	git(dir, &["config", "user.email", "test@test.com"]);
	git(dir, &["config", "user.name", "Test"]);
	git(dir, &["config", "commit.gpgsign", "false"]);
	git(dir, &["config", "tag.gpgsign", "false"]);
}

fn commit_file(dir: &Path, name: &str, contents: &str) {
	fs::write(dir.join(name), contents).expect("write failed");
	git(dir, &["add", name]);
	git(dir, &["commit", "-q", "-m", &format!("update {name}")]);
}

/// A working copy tracking `main` on a local bare remote.
struct Fixture {
	_remote: TempDir,
	work: TempDir,
}

impl Fixture {
	fn new() -> Self {
		let remote = TempDir::new().unwrap();
		git(remote.path(), &["init", "-q", "--bare"]);

		let work = TempDir::new().unwrap();
		init_git_repo(work.path());
		commit_file(work.path(), "README.md", "# Test");
		git(work.path(), &["branch", "-M", "main"]);
		let remote_path = remote.path().to_string_lossy().to_string();
		git(work.path(), &["remote", "add", "origin", &remote_path]);
		git(work.path(), &["push", "-q", "-u", "origin", "main"]);

		Self {
			_remote: remote,
			work,
		}
	}

	fn path(&self) -> &Path {
		self.work.path()
	}
}

fn inspector() -> RepoInspector {
	init_tracing();
	RepoInspector::new(CommandRunner::new())
}

/// Test: A freshly pushed branch is clean and up to date.
///
/// Why this test is important: This is the "safe to publish" state. Every
/// fact must come back populated and the status must be UpToDate.
#[test]
fn test_pushed_branch_is_up_to_date() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	let inspector = inspector();

	let sha = inspector.sha(fixture.path());
	assert_eq!(sha.len(), 40);
	assert!(sha.chars().all(|c| c.is_ascii_hexdigit()));

	assert_eq!(inspector.branch(fixture.path()), "main");
	assert!(inspector.is_clean(fixture.path()));
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::UpToDate
	);

	let tag = inspector.tag(fixture.path());
	assert!(tag.len() >= 7);
	assert!(sha.starts_with(&tag), "untagged describe should be a short sha");
}

/// Test: Each ancestry relationship maps to its status.
///
/// Why this test is important: The classifier is exercised here with real
/// merge bases rather than scripted ones, covering push, pull and diverged.
#[test]
fn test_divergence_states() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	let inspector = inspector();

	commit_file(fixture.path(), "a.txt", "a");
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::NeedToPush
	);

	git(fixture.path(), &["push", "-q"]);
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::UpToDate
	);

	git(fixture.path(), &["reset", "-q", "--hard", "HEAD~1"]);
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::NeedToPull
	);

	commit_file(fixture.path(), "b.txt", "b");
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::Diverged
	);
}

/// Test: A branch without upstream is reported as diverged.
#[test]
fn test_branch_without_upstream_is_diverged() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	git(fixture.path(), &["checkout", "-q", "-b", "feature"]);

	let inspector = inspector();
	assert_eq!(inspector.branch(fixture.path()), "feature");
	assert_eq!(
		inspector.up_to_date(fixture.path()),
		DivergenceStatus::Diverged
	);
}

/// Test: Modified tracked files make the tree dirty; untracked files do not.
///
/// Why this test is important: `git diff --shortstat` only looks at tracked
/// content. Build outputs left in the tree must not flip cleanliness, but an
/// edited source file must, and describe must carry the dirty marker.
#[test]
fn test_cleanliness() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	let inspector = inspector();

	fs::write(fixture.path().join("untracked.txt"), "x").unwrap();
	assert!(inspector.is_clean(fixture.path()));

	fs::write(fixture.path().join("README.md"), "# Changed").unwrap();
	assert!(!inspector.is_clean(fixture.path()));
	assert!(inspector.tag(fixture.path()).ends_with("-dirty"));
}

#[test]
fn test_lightweight_tag_is_described() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	git(fixture.path(), &["tag", "v1.0.0"]);

	let inspector = inspector();
	assert_eq!(inspector.tag(fixture.path()), "v1.0.0");

	commit_file(fixture.path(), "c.txt", "c");
	assert!(inspector.tag(fixture.path()).starts_with("v1.0.0-1-g"));
}

/// Test: Detached HEAD resolves to a branch containing the commit.
///
/// Why this test is important: CI checkouts are detached. Without the
/// fallback every build would be labelled "HEAD".
#[test]
fn test_detached_head_resolves_branch() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	git(fixture.path(), &["checkout", "-q", "--detach"]);

	let inspector = inspector();
	assert_eq!(inspector.branch(fixture.path()), "main");
}

#[test]
fn test_detached_head_on_orphan_commit_keeps_sentinel() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	git(fixture.path(), &["checkout", "-q", "--detach"]);
	commit_file(fixture.path(), "orphan.txt", "o");

	let inspector = inspector();
	assert_eq!(inspector.branch(fixture.path()), DETACHED_HEAD);
}

#[test]
fn test_remote_account_from_origin() {
	if !git_available() {
		return;
	}
	let temp = TempDir::new().unwrap();
	init_git_repo(temp.path());
	git(
		temp.path(),
		&["remote", "add", "upstream", "https://github.com/parent/repo.git"],
	);
	git(
		temp.path(),
		&["remote", "add", "origin", "git@github.com:child/repo.git"],
	);

	let inspector = inspector();
	assert_eq!(inspector.remote_account(temp.path()), "child");
	assert!(inspector.remotes(temp.path()).contains("upstream"));
}

/// Test: A plain directory degrades every fact to its default.
///
/// Why this test is important: Tooling calls these helpers on arbitrary
/// paths. A non-repository must never error or panic.
#[test]
fn test_non_repository_defaults() {
	if !git_available() {
		return;
	}
	let temp = TempDir::new().unwrap();

	assert_eq!(
		inspector().snapshot(temp.path()),
		RepoSnapshot {
			branch: String::new(),
			sha: String::new(),
			tag: String::new(),
			is_clean: false,
			status: DivergenceStatus::Diverged,
			remote_account: String::new(),
		}
	);
}

#[test]
fn test_missing_git_binary_defaults() {
	let fixture_dir = TempDir::new().unwrap();
	let inspector = RepoInspector::new(CommandRunner::with_config(RunnerConfig::new(
		"gitprov-no-such-git-binary",
	)));

	let snapshot = inspector.snapshot(fixture_dir.path());
	assert_eq!(snapshot.status, DivergenceStatus::Diverged);
	assert!(!snapshot.is_clean);
	assert_eq!(snapshot.branch, "");
}

/// Test: Free functions agree with the inspector and with themselves.
#[test]
fn test_free_functions_are_idempotent() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	let path = fixture.path();

	assert_eq!(gitprov_git::branch(path), gitprov_git::branch(path));
	assert_eq!(gitprov_git::sha(path), inspector().sha(path));
	assert_eq!(gitprov_git::tag(path), gitprov_git::tag(path));
	assert_eq!(gitprov_git::is_clean(path), gitprov_git::is_clean(path));
	assert_eq!(gitprov_git::up_to_date(path), DivergenceStatus::UpToDate);
	assert_eq!(gitprov_git::remote_account(path), "");
	assert_eq!(gitprov_git::snapshot(path), gitprov_git::snapshot(path));
	assert!(gitprov_git::remotes(path).starts_with("origin\t"));
}

/// Test: One inspector can be shared across threads.
///
/// Why this test is important: Nothing is cached, so concurrent callers must
/// see the same answers as a single caller would.
#[test]
fn test_concurrent_snapshots() {
	if !git_available() {
		return;
	}
	let fixture = Fixture::new();
	let inspector = Arc::new(inspector());
	let expected = inspector.snapshot(fixture.path());

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let inspector = Arc::clone(&inspector);
			let path = fixture.path().to_path_buf();
			thread::spawn(move || inspector.snapshot(&path))
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
}
