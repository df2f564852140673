//! Spelling correction for short search-query strings.
//!
//! The engine prefers an external high-quality corrector when one is
//! attached at startup, and otherwise falls back to an immutable mapping of
//! known typos plus approximate sequence matching for unseen tokens.

pub mod engine;
pub mod map;
pub mod similarity;

// Re-export commonly used types
pub use engine::*;
pub use map::*;
pub use similarity::*;
