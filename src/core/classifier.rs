//! Love type classifier (triangular theory)
//!
//! A component counts as present when its score is >= 7.0. First match wins:
//! all three, I+P, I+C, P+C, I, P, C, none.

use crate::LOVE_TYPE_THRESHOLD;
use crate::types::{LoveType, NormalizedScores};

/// Classifies scores into one of eight love types
#[derive(Debug)]
pub struct LoveTypeClassifier {
    threshold: f64,
}

impl Default for LoveTypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LoveTypeClassifier {
    /// Create classifier with the standard 7.0 threshold
    pub fn new() -> Self {
        Self { threshold: LOVE_TYPE_THRESHOLD }
    }

    /// Classify raw intimacy / passion / commitment scores
    pub fn classify(&self, intimacy: f64, passion: f64, commitment: f64) -> LoveType {
        let is_i = intimacy >= self.threshold;
        let is_p = passion >= self.threshold;
        let is_c = commitment >= self.threshold;

        match (is_i, is_p, is_c) {
            (true, true, true) => LoveType::Consummate,
            (true, true, false) => LoveType::Romantic,
            (true, false, true) => LoveType::Companionate,
            (false, true, true) => LoveType::Fatuous,
            (true, false, false) => LoveType::Liking,
            (false, true, false) => LoveType::Infatuation,
            (false, false, true) => LoveType::Empty,
            (false, false, false) => LoveType::NonLove,
        }
    }

    /// Classify normalized scores
    pub fn classify_scores(&self, scores: &NormalizedScores) -> LoveType {
        self.classify(scores.intimacy, scores.passion, scores.commitment)
    }
}

// =============================================================================
// TESTS
// =============================================================================
