//! Subprocess adapter for the `git` CLI.
//!
//! Everything the checks need from git goes through the [`Git`] trait so the
//! checks themselves can run against fixed inputs in tests. [`SystemGit`] is
//! the real implementation; it addresses the repository with `git -C <path>`
//! and strips `GIT_DIR`/`GIT_WORK_TREE` so inherited environment variables
//! cannot redirect it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub trait Git {
    /// Raw lines of `git branch -a` output.
    fn branches(&self) -> Result<Vec<String>>;
    /// Subject lines of the most recent commits, newest first.
    fn recent_subjects(&self, limit: usize) -> Result<Vec<String>>;
    /// Short name of the checked-out branch, `HEAD` when detached,
    /// `None` when there is no commit yet.
    fn current_branch(&self) -> Option<String>;
    /// `git status --porcelain` lines.
    fn changed_paths(&self) -> Result<Vec<String>>;
    /// Configured remote names.
    fn remotes(&self) -> Result<Vec<String>>;
    /// Quiet fetch; failures are swallowed.
    fn fetch(&self, remote: &str);
    /// Commit id for a revision, if it resolves.
    fn rev_parse(&self, revision: &str) -> Option<String>;
    /// `git rev-list --count <range>`.
    fn count_commits(&self, range: &str) -> Option<usize>;
}

pub struct SystemGit {
    root: PathBuf,
}

impl SystemGit {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
        cmd.arg("-C").arg(&self.root);
        cmd
    }

    fn stdout_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        let output = self
            .cmd()
            .args(args)
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))?;
        if !output.status.success() {
            anyhow::bail!("git {} exited with {}", args.join(" "), output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|l| l.to_string())
            .collect())
    }

    fn stdout_first(&self, args: &[&str]) -> Option<String> {
        let output = self.cmd().args(args).stderr(Stdio::null()).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let line = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()?
            .trim()
            .to_string();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

impl Git for SystemGit {
    fn branches(&self) -> Result<Vec<String>> {
        self.stdout_lines(&["branch", "-a"])
    }

    fn recent_subjects(&self, limit: usize) -> Result<Vec<String>> {
        let count = format!("-{limit}");
        // An unborn HEAD makes `git log` fail; treat that as an empty history.
        Ok(self
            .stdout_lines(&["log", &count, "--pretty=%s"])
            .unwrap_or_default())
    }

    fn current_branch(&self) -> Option<String> {
        self.stdout_first(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn changed_paths(&self) -> Result<Vec<String>> {
        self.stdout_lines(&["status", "--porcelain"])
    }

    fn remotes(&self) -> Result<Vec<String>> {
        self.stdout_lines(&["remote"])
    }

    fn fetch(&self, remote: &str) {
        let _ = self
            .cmd()
            .args(["fetch", "--quiet", remote])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }

    fn rev_parse(&self, revision: &str) -> Option<String> {
        self.stdout_first(&["rev-parse", "--verify", revision])
    }

    fn count_commits(&self, range: &str) -> Option<usize> {
        self.stdout_first(&["rev-list", "--count", range])?
            .parse()
            .ok()
    }
}
