//! Command handler layer.
//!
//! ## Files
//! - `audit.rs` — the full check sequence and exit-code policy.
//!
//! ## Principles
//! - Orchestration only; each check lives in `services/*`.
//! - Checks run in a fixed order and never block one another.

pub mod audit;

pub use audit::run_audit;
