//! # respell
//!
//! Best-effort spelling correction for short search-query strings.
//!
//! ## Features
//!
//! - Dictionary of known typo -> correction pairs, including whole phrases
//! - Approximate sequence matching for unseen tokens
//! - Pluggable external corrector backend with automatic fallback
//! - Dataset statistics and accuracy measurement
//! - HTTP API and CLI front ends

pub mod cli;
pub mod correction;
pub mod dataset;
pub mod error;
pub mod server;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
