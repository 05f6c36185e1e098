//! Domain types shared across commands and services.
//!
//! ## Files
//! - `models.rs` — audit report accumulator, findings, JSON envelope.
//!
//! ## Principles
//! - Types here are plain data with no side effects.
//! - The report is threaded explicitly through checks; no global counters.

pub mod models;
