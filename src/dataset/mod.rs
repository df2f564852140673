//! Typo dataset parsing, statistics, and accuracy measurement.
//!
//! The analyzer is a downstream consumer of the correction engine: it loads
//! a flat typo dataset into a [`CorrectionMap`](crate::correction::map::CorrectionMap),
//! aggregates descriptive statistics, and scores the engine against the
//! dataset's ground-truth corrections.

pub mod parser;
pub mod stats;

// Re-export commonly used types
pub use parser::*;
pub use stats::*;
