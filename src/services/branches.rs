use crate::domain::models::AuditReport;
use crate::services::conventions::{branch_conforms, normalize_branch_line};
use crate::services::git::Git;
use std::collections::BTreeSet;

/// Branch naming check: every local and remote branch name must be one of
/// the accepted literals or carry an accepted prefix. Offenders produce one
/// collective warning, not one per branch.
pub fn check_branch_naming(git: &dyn Git, report: &mut AuditReport) {
    report.section("Branch naming");

    let lines = match git.branches() {
        Ok(lines) => lines,
        Err(_) => {
            report.info("could not list branches");
            return;
        }
    };

    let names: BTreeSet<String> = lines.iter().filter_map(|l| normalize_branch_line(l)).collect();
    let offenders: Vec<String> = names
        .iter()
        .filter(|n| !branch_conforms(n))
        .cloned()
        .collect();

    if offenders.is_empty() {
        report.pass(format!(
            "{} branch name(s) follow the naming convention",
            names.len()
        ));
    } else {
        report.warn(format!(
            "non-standard branch names: {}",
            offenders.join(", ")
        ));
    }
}
