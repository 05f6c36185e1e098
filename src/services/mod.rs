//! Service layer containing the individual checks and their collaborators.
//!
//! ## Service map
//! - `git.rs` — narrow seam over the `git` CLI (`Git` trait + `SystemGit`).
//! - `conventions.rs` — pure branch-name / commit-subject predicates.
//! - `branches.rs` — branch naming check.
//! - `commits.rs` — Conventional Commits compliance check.
//! - `repo_files.rs` — convention-file presence checks (ignore file, hooks,
//!   CODEOWNERS, PR template, CI config, release tooling).
//! - `worktree.rs` — working-tree status and remote comparison.
//! - `conflicts.rs` — conflict-marker scan.
//! - `output.rs` — JSON/text report rendering.
//!
//! ## Conventions
//! - Checks append findings to the report; they never print or exit.
//! - Tolerated subprocess failures degrade to info lines, not errors.

pub mod branches;
pub mod commits;
pub mod conflicts;
pub mod conventions;
pub mod git;
pub mod output;
pub mod repo_files;
pub mod worktree;
