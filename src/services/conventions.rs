//! Pure classification predicates for branch names and commit subjects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Branch names accepted verbatim.
pub const BRANCH_EXACT: &[&str] = &["main", "master", "develop"];

/// Accepted branch name prefixes.
pub const BRANCH_PREFIXES: &[&str] = &[
    "feature/", "fix/", "bugfix/", "hotfix/", "release/", "chore/", "docs/", "test/", "refactor/",
];

/// The Conventional Commits type enumeration.
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

// `type(scope)!: description` — scope and bang optional, description required.
static SUBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    let types = COMMIT_TYPES.join("|");
    Regex::new(&format!(r"^(?:{types})(?:\([^)\s]+\))?!?: .+"))
        .expect("commit subject pattern is valid")
});

pub fn branch_conforms(name: &str) -> bool {
    BRANCH_EXACT.contains(&name) || BRANCH_PREFIXES.iter().any(|p| name.starts_with(p))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Conventional,
    /// Merge commits are exempt from the format check.
    Merge,
    Other,
}

pub fn classify_subject(subject: &str) -> SubjectKind {
    if subject.starts_with("Merge") {
        return SubjectKind::Merge;
    }
    if SUBJECT_RE.is_match(subject) {
        SubjectKind::Conventional
    } else {
        SubjectKind::Other
    }
}

/// Normalize one line of `git branch -a` output to a bare branch name.
///
/// Strips the current-branch marker and the `remotes/<remote>/` prefix, and
/// drops symbolic `HEAD ->` pointer entries.
pub fn normalize_branch_line(line: &str) -> Option<String> {
    let name = line.trim_start_matches(['*', '+']).trim();
    if name.is_empty() || name.contains("->") {
        return None;
    }
    let name = match name.strip_prefix("remotes/") {
        Some(rest) => rest.split_once('/').map(|(_, b)| b).unwrap_or(rest),
        None => name,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_prefixed_branches_conform() {
        for name in ["main", "master", "develop", "feature/login", "fix/123", "release/1.2.0"] {
            assert!(branch_conforms(name), "{name} should conform");
        }
    }

    #[test]
    fn unrecognized_branches_do_not_conform() {
        for name in ["random-name", "feature", "wip", "FEATURE/login", "my/fix"] {
            assert!(!branch_conforms(name), "{name} should not conform");
        }
    }

    #[test]
    fn conventional_subjects_are_recognized() {
        for subject in [
            "feat: add login",
            "fix(parser): handle empty input",
            "refactor(core)!: drop legacy api",
            "chore: bump deps",
        ] {
            assert_eq!(classify_subject(subject), SubjectKind::Conventional);
        }
    }

    #[test]
    fn merge_subjects_are_exempt() {
        assert_eq!(
            classify_subject("Merge branch 'develop' into main"),
            SubjectKind::Merge
        );
        assert_eq!(
            classify_subject("Merge pull request #42"),
            SubjectKind::Merge
        );
    }

    #[test]
    fn non_conforming_subjects_are_other() {
        for subject in [
            "update stuff",
            "feat:missing space",
            "feat(): empty scope ok?",
            "unknown: type not in list",
            "feat",
        ] {
            assert_eq!(classify_subject(subject), SubjectKind::Other, "{subject}");
        }
    }

    #[test]
    fn branch_lines_normalize() {
        assert_eq!(normalize_branch_line("* main"), Some("main".to_string()));
        assert_eq!(
            normalize_branch_line("  feature/login"),
            Some("feature/login".to_string())
        );
        assert_eq!(
            normalize_branch_line("  remotes/origin/feature/login"),
            Some("feature/login".to_string())
        );
        assert_eq!(
            normalize_branch_line("  remotes/origin/HEAD -> origin/main"),
            None
        );
        assert_eq!(normalize_branch_line(""), None);
    }
}
