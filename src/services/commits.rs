use crate::domain::models::AuditReport;
use crate::services::conventions::{classify_subject, SubjectKind};
use crate::services::git::Git;

/// How many recent commits the format check inspects.
pub const COMMIT_WINDOW: usize = 20;

const LISTED_OFFENDERS: usize = 3;

/// Conventional Commits compliance over the recent window. Merge subjects
/// are exempt. Sub-80% compliance is a warning, never an error, even at 0%.
pub fn check_commit_format(git: &dyn Git, report: &mut AuditReport) {
    report.section("Commit messages");

    let subjects = git.recent_subjects(COMMIT_WINDOW).unwrap_or_default();
    let mut conforming = 0usize;
    let mut offenders: Vec<&str> = Vec::new();
    let mut classifiable = 0usize;

    for subject in &subjects {
        match classify_subject(subject) {
            SubjectKind::Merge => {}
            SubjectKind::Conventional => {
                classifiable += 1;
                conforming += 1;
            }
            SubjectKind::Other => {
                classifiable += 1;
                offenders.push(subject.as_str());
            }
        }
    }

    if classifiable == 0 {
        report.info("no classifiable commits in the recent history");
        return;
    }

    let pct = conforming * 100 / classifiable;
    if pct >= 80 {
        report.pass(format!(
            "{pct}% of the last {classifiable} commits follow Conventional Commits"
        ));
    } else if pct >= 50 {
        report.warn(format!(
            "only {pct}% of the last {classifiable} commits follow Conventional Commits"
        ));
    } else {
        report.warn(format!(
            "{pct}% of the last {classifiable} commits follow Conventional Commits — \
             most recent commits ignore the format"
        ));
    }

    for subject in offenders.iter().take(LISTED_OFFENDERS) {
        report.info(format!("non-conforming: {subject}"));
    }
}
