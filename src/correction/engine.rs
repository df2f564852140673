//! The correction engine and its backend selection.

use serde::{Deserialize, Serialize};

use crate::correction::map::CorrectionMap;
use crate::correction::similarity::closest_key;
use crate::error::Result;

/// Minimum similarity score for accepting an approximate key match.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Describes which correction strategy is active and why.
///
/// This is metadata only; it never affects how corrections are composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Name of the active backend.
    pub backend: String,
    /// Availability status, or the reason the primary backend is not in use.
    pub status: String,
}

/// An opaque high-quality corrector the engine may delegate whole texts to.
///
/// Implementations own their retries and timeouts; from the engine's
/// perspective the call either returns corrected text or fails, in which
/// case the original text is passed through unchanged.
pub trait ExternalCorrector: Send + Sync {
    /// Name of this corrector, reported in [`BackendInfo`].
    fn name(&self) -> &str;

    /// Correct the entire text in one call.
    fn correct(&self, text: &str) -> Result<String>;
}

/// Result of correcting a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    /// The input text, verbatim.
    pub original: String,
    /// The corrected text.
    pub corrected: String,
    /// Name of the backend that produced the correction.
    pub backend: String,
    /// Status of the backend at the time of the call.
    pub backend_status: String,
}

/// Spelling correction engine for short search-query strings.
///
/// Owns the immutable [`CorrectionMap`] and the strategy selected at
/// startup: delegate to an external corrector when one is attached,
/// otherwise use the dictionary plus approximate-matching fallback.
/// Stateless aside from the map, so a single engine can serve concurrent
/// callers without synchronization.
pub struct CorrectionEngine {
    map: CorrectionMap,
    external: Option<Box<dyn ExternalCorrector>>,
}

impl CorrectionEngine {
    /// Create an engine that uses the fallback strategy only.
    pub fn with_map(map: CorrectionMap) -> Self {
        CorrectionEngine {
            map,
            external: None,
        }
    }

    /// Create an engine that delegates to an external corrector, keeping
    /// the map available for callers that inspect it.
    pub fn with_external(map: CorrectionMap, external: Box<dyn ExternalCorrector>) -> Self {
        CorrectionEngine {
            map,
            external: Some(external),
        }
    }

    /// The correction map this engine reads from.
    pub fn map(&self) -> &CorrectionMap {
        &self.map
    }

    /// Correct spelling in the given text.
    ///
    /// Total over all string inputs: empty or whitespace-only input is
    /// returned unchanged, and no input ever produces an error. When the
    /// external backend fails mid-call the original text is returned.
    pub fn correct(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match &self.external {
            Some(corrector) => corrector.correct(text).unwrap_or_else(|e| {
                tracing::warn!("external corrector failed, passing text through: {e}");
                text.to_string()
            }),
            None => self.correct_fallback(text),
        }
    }

    /// Dictionary + approximate-matching correction.
    fn correct_fallback(&self, text: &str) -> String {
        // Whole multi-word typos resolve in one step.
        if let Some(correction) = self.map.get(text) {
            return correction.to_string();
        }

        let corrected: Vec<&str> = text
            .split_whitespace()
            .map(|token| self.correct_token(token))
            .collect();

        corrected.join(" ")
    }

    /// Correct one whitespace-delimited token.
    ///
    /// The mapped value may itself be a multi-word phrase, so the token
    /// count of the output can exceed the input's.
    fn correct_token<'a>(&'a self, token: &'a str) -> &'a str {
        if let Some(correction) = self.map.get(token) {
            return correction;
        }

        let lower = token.to_lowercase();
        match closest_key(&self.map, &lower, SIMILARITY_THRESHOLD) {
            Some(key) => self.map.get(key).unwrap_or(token),
            None => token,
        }
    }

    /// Report which correction strategy is active.
    pub fn backend_info(&self) -> BackendInfo {
        match &self.external {
            Some(corrector) => BackendInfo {
                backend: corrector.name().to_string(),
                status: "available".to_string(),
            },
            None => BackendInfo {
                backend: "fallback (dictionary + sequence matching)".to_string(),
                status: "no external corrector configured".to_string(),
            },
        }
    }

    /// Correct a text and package the result with backend metadata.
    pub fn correct_with_info(&self, text: &str) -> Correction {
        let corrected = self.correct(text);
        let info = self.backend_info();

        Correction {
            original: text.to_string(),
            corrected,
            backend: info.backend,
            backend_status: info.status,
        }
    }
}
