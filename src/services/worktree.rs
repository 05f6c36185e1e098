//! Working-tree status and remote comparison. Everything here is
//! informational; an unreachable remote degrades to stale data, never to a
//! failed run.

use crate::domain::models::AuditReport;
use crate::services::git::Git;

pub fn check_working_tree(git: &dyn Git, report: &mut AuditReport) {
    report.section("Working tree");

    match git.current_branch() {
        Some(branch) => report.info(format!("current branch: {branch}")),
        None => report.info("current branch unknown (unborn HEAD)"),
    }

    let changed = git.changed_paths().unwrap_or_default();
    if changed.is_empty() {
        report.info("working tree clean");
    } else {
        report.info(format!(
            "working tree dirty: {} changed path(s)",
            changed.len()
        ));
    }
}

pub fn check_remote_sync(git: &dyn Git, no_fetch: bool, report: &mut AuditReport) {
    report.section("Remote sync");

    let remotes = git.remotes().unwrap_or_default();
    if !remotes.iter().any(|r| r == "origin") {
        report.info("no origin remote configured");
        return;
    }

    if !no_fetch {
        git.fetch("origin");
    }

    let Some(branch) = git.current_branch() else {
        report.info("no commits yet, nothing to compare");
        return;
    };
    if branch == "HEAD" {
        report.info("detached HEAD, skipping remote comparison");
        return;
    }

    let local = git.rev_parse("HEAD");
    let remote = git.rev_parse(&format!("origin/{branch}"));
    match (local, remote) {
        (Some(local), Some(remote)) if local == remote => {
            report.info(format!("{branch} is up to date with origin"));
        }
        (Some(_), Some(_)) => {
            let ahead = git
                .count_commits(&format!("origin/{branch}..HEAD"))
                .unwrap_or(0);
            let behind = git
                .count_commits(&format!("HEAD..origin/{branch}"))
                .unwrap_or(0);
            report.info(format!(
                "{branch}: {ahead} ahead, {behind} behind origin/{branch}"
            ));
        }
        _ => report.info(format!("origin/{branch} not found, nothing to compare")),
    }
}
