//! Presence checks for convention files: ignore file, hooks, code ownership,
//! PR template, CI configuration, release tooling.

use crate::domain::models::AuditReport;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Patterns a root `.gitignore` is commonly expected to carry. Absence is
/// reported as info, never as a warning.
pub const EXPECTED_IGNORES: &[&str] = &[
    "node_modules",
    ".env",
    "*.log",
    "dist",
    "build",
    "target",
    ".DS_Store",
];

const CODEOWNERS_CANDIDATES: &[&str] = &["CODEOWNERS", ".github/CODEOWNERS", "docs/CODEOWNERS"];

const CI_CANDIDATES: &[&str] = &[
    ".github/workflows",
    ".gitlab-ci.yml",
    ".circleci/config.yml",
    "Jenkinsfile",
    ".travis.yml",
];

const SEMANTIC_RELEASE_CANDIDATES: &[&str] = &[".releaserc", ".releaserc.json", "release.config.js"];

static PACKAGE_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""version"\s*:\s*"([^"]+)""#).expect("version pattern is valid"));

pub fn check_ignore_file(root: &Path, report: &mut AuditReport) {
    report.section("Ignore file");

    let path = root.join(".gitignore");
    if !path.is_file() {
        report.warn(".gitignore is missing");
        return;
    }
    report.pass(".gitignore present");

    let content = std::fs::read_to_string(&path).unwrap_or_default();
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    let missing: Vec<&str> = EXPECTED_IGNORES
        .iter()
        .copied()
        .filter(|pattern| !entries.iter().any(|entry| entry.contains(pattern)))
        .collect();
    if !missing.is_empty() {
        report.info(format!(
            "consider adding to .gitignore: {}",
            missing.join(", ")
        ));
    }
}

pub fn check_hooks(root: &Path, report: &mut AuditReport) {
    report.section("Hooks");

    let mut active = Vec::new();
    if let Ok(entries) = std::fs::read_dir(root.join(".git/hooks")) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(".sample") {
                continue;
            }
            let Ok(meta) = entry.metadata() else { continue };
            if meta.is_file() && is_executable(&meta) {
                active.push(name);
            }
        }
    }
    active.sort();

    if active.is_empty() {
        report.info("no active hooks in .git/hooks");
    } else {
        report.info(format!(
            "{} active hook(s): {}",
            active.len(),
            active.join(", ")
        ));
    }

    if root.join(".husky").is_dir() {
        report.info("husky hook management detected (.husky/)");
    }
    if root.join(".pre-commit-config.yaml").is_file() {
        report.info("pre-commit configuration detected");
    }
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &std::fs::Metadata) -> bool {
    true
}

pub fn check_codeowners(root: &Path, report: &mut AuditReport) {
    report.section("Code ownership");

    match CODEOWNERS_CANDIDATES
        .iter()
        .find(|c| root.join(c).is_file())
    {
        Some(found) => report.info(format!("CODEOWNERS found at {found}")),
        None => report.info("no CODEOWNERS file"),
    }
}

pub fn check_pr_template(root: &Path, report: &mut AuditReport) {
    report.section("PR template");

    let file = root.join(".github/PULL_REQUEST_TEMPLATE.md");
    let dir = root.join(".github/PULL_REQUEST_TEMPLATE");
    if file.is_file() {
        report.info("PR template found at .github/PULL_REQUEST_TEMPLATE.md");
    } else if dir.is_dir() {
        report.info("PR template directory found at .github/PULL_REQUEST_TEMPLATE/");
    } else {
        report.info("no PR template");
    }
}

pub fn check_ci_config(root: &Path, report: &mut AuditReport) {
    report.section("CI configuration");

    let found: Vec<&str> = CI_CANDIDATES
        .iter()
        .copied()
        .filter(|c| root.join(c).exists())
        .collect();
    if found.is_empty() {
        report.warn("no CI configuration found");
    } else {
        report.pass(format!("CI configuration: {}", found.join(", ")));
    }
}

pub fn check_release_tooling(root: &Path, report: &mut AuditReport) {
    report.section("Release tooling");

    match SEMANTIC_RELEASE_CANDIDATES
        .iter()
        .find(|c| root.join(c).is_file())
    {
        Some(found) => report.info(format!("semantic-release config found at {found}")),
        None => report.info("no semantic-release config"),
    }

    if root.join("CHANGELOG.md").is_file() {
        report.info("CHANGELOG.md present");
    } else {
        report.info("no CHANGELOG.md");
    }

    let manifest = root.join("package.json");
    if manifest.is_file() {
        let raw = std::fs::read_to_string(&manifest).unwrap_or_default();
        match PACKAGE_VERSION_RE.captures(&raw) {
            Some(caps) => report.info(format!("package.json version: {}", &caps[1])),
            None => report.info("package.json present, no version field"),
        }
    }
}
