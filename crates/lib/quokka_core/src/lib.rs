//! # quokka_core
//!
//! Core answer resolution for Quokka QA.

pub mod answer;

pub use answer::{MatchKind, Resolution, resolve, resolve_detailed};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
