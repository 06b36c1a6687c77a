//! Score normalizer: three 1-5 sliders → one 1-10 composite score
//!
//! score = 1 + (sum - 3) / 12 * 9, a linear map of [3, 15] onto [1, 10]

use crate::types::{AssessmentError, AssessmentInput, Axis, NormalizedScores};
use crate::types::check_sliders;

/// Normalizer for slider triples
#[derive(Debug, Default)]
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Create new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Map a slider sum in [3, 15] onto [1, 10]
    pub fn score_from_sum(sum: u32) -> f64 {
        1.0 + (sum as f64 - 3.0) / 12.0 * 9.0
    }

    /// Normalize one axis, rejecting sliders outside [1, 5]
    pub fn normalize_axis(&self, axis: Axis, sliders: [u8; 3]) -> Result<f64, AssessmentError> {
        check_sliders(axis, sliders)?;
        let sum: u32 = sliders.iter().map(|&v| v as u32).sum();
        Ok(Self::score_from_sum(sum))
    }

    /// Normalize all three axes of a submission
    pub fn normalize(&self, input: &AssessmentInput) -> Result<NormalizedScores, AssessmentError> {
        NormalizedScores::new(
            self.normalize_axis(Axis::Intimacy, input.intimacy)?,
            self.normalize_axis(Axis::Passion, input.passion)?,
            self.normalize_axis(Axis::Commitment, input.commitment)?,
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
