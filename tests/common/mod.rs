use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub repo: PathBuf,
}

impl TestEnv {
    /// Fixture repository on a `main` branch, with the baseline files that
    /// keep the warning count at zero (.gitignore covering the expected
    /// patterns, a CI workflow).
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = tmp.path().join("repo");
        fs::create_dir_all(&repo).expect("create repo dir");

        git(&repo, &["init", "--quiet"]);
        git(&repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        fs::write(
            repo.join(".gitignore"),
            "node_modules\n.env\n*.log\ndist\nbuild\ntarget\n.DS_Store\n",
        )
        .expect("write .gitignore");
        fs::create_dir_all(repo.join(".github/workflows")).expect("create workflows dir");
        fs::write(repo.join(".github/workflows/ci.yml"), "name: ci\n").expect("write workflow");

        Self { _tmp: tmp, repo }
    }

    pub fn commit(&self, message: &str) {
        git(
            &self.repo,
            &["commit", "--quiet", "--allow-empty", "-m", message],
        );
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitward").expect("binary built");
        cmd.arg(self.repo.to_str().expect("repo path utf8"))
            .arg("--no-fetch");
        cmd
    }

    /// Run with `--json` and parse stdout, tolerating a non-zero exit.
    pub fn run_json(&self) -> Value {
        let out = self.cmd().arg("--json").output().expect("run gitward");
        serde_json::from_slice(&out.stdout).expect("valid json output")
    }
}

pub fn git(repo: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", "Fixture")
        .env("GIT_AUTHOR_EMAIL", "fixture@example.com")
        .env("GIT_COMMITTER_NAME", "Fixture")
        .env("GIT_COMMITTER_EMAIL", "fixture@example.com")
        .arg("-C")
        .arg(repo)
        .args(args)
        .status()
        .expect("run git");
    assert!(status.success(), "git {args:?} failed");
}

pub fn finding_texts(report: &Value) -> Vec<String> {
    report["data"]["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .map(|f| f["text"].as_str().unwrap_or_default().to_string())
        .collect()
}
