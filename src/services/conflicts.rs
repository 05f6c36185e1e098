//! Conflict-marker scan. The one check besides repository presence that can
//! fail the run: an unresolved `<<<<<<<` / `=======` / `>>>>>>>` marker in a
//! tracked source extension is a hard error.

use crate::domain::models::AuditReport;
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Extensions the scan looks inside. Markdown is deliberately absent:
/// setext headings underline titles with `=======`.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cs", "go", "h", "hpp", "java", "js", "json", "jsx", "kt", "php", "py",
    "rb", "rs", "sh", "swift", "toml", "ts", "tsx", "yaml", "yml",
];

/// Dependency and build-output directories excluded from the scan.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", "vendor", "dist", "build", ".venv"];

const MAX_LISTED: usize = 5;

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:<{7}(?: |$)|>{7}(?: |$)|={7}$)").expect("marker pattern is valid"));

pub fn check_conflict_markers(root: &Path, report: &mut AuditReport) {
    report.section("Conflict markers");

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false);
    builder.filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            return name != ".git" && !EXCLUDED_DIRS.contains(&name.as_ref());
        }
        true
    });

    let mut offenders = Vec::new();
    for entry in builder.build().flatten() {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !SOURCE_EXTENSIONS.contains(&ext) {
            continue;
        }
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        if MARKER_RE.is_match(&String::from_utf8_lossy(&bytes)) {
            offenders.push(
                path.strip_prefix(root)
                    .unwrap_or(path)
                    .display()
                    .to_string(),
            );
        }
    }

    if offenders.is_empty() {
        report.pass("no unresolved conflict markers");
        return;
    }

    offenders.sort();
    let mut listed = offenders
        .iter()
        .take(MAX_LISTED)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if offenders.len() > MAX_LISTED {
        listed.push_str(&format!(" (+{} more)", offenders.len() - MAX_LISTED));
    }
    report.fail(format!(
        "unresolved conflict markers in {} file(s): {}",
        offenders.len(),
        listed
    ));
}
