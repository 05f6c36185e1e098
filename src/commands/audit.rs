use crate::cli::Cli;
use crate::domain::models::AuditReport;
use crate::services::git::SystemGit;
use crate::services::output::print_report;
use crate::services::{branches, commits, conflicts, repo_files, worktree};

/// Run every check in order and return the process exit code.
///
/// Only two findings are fatal: a path that is not a repository (which
/// aborts before any other check) and unresolved conflict markers (which
/// are collected, so the summary still prints before the non-zero exit).
pub fn run_audit(cli: &Cli) -> anyhow::Result<i32> {
    let root = cli.path.as_path();

    // `.git` is a directory in a normal checkout and a file in a worktree.
    if !root.join(".git").exists() {
        let mut report = AuditReport::new();
        report.fail(format!("{} is not a git repository", root.display()));
        print_report(cli.json, &report)?;
        return Ok(1);
    }

    let git = SystemGit::new(root);
    let mut report = AuditReport::new();

    branches::check_branch_naming(&git, &mut report);
    commits::check_commit_format(&git, &mut report);
    repo_files::check_ignore_file(root, &mut report);
    repo_files::check_hooks(root, &mut report);
    repo_files::check_codeowners(root, &mut report);
    repo_files::check_pr_template(root, &mut report);
    repo_files::check_ci_config(root, &mut report);
    repo_files::check_release_tooling(root, &mut report);
    worktree::check_working_tree(&git, &mut report);
    worktree::check_remote_sync(&git, cli.no_fetch, &mut report);
    conflicts::check_conflict_markers(root, &mut report);

    print_report(cli.json, &report)?;
    Ok(if report.errors > 0 { 1 } else { 0 })
}
