//! Normalized scores and derived model parameters

use serde::{Deserialize, Serialize};
use crate::{SCORE_MAX, SCORE_MIN};
use crate::types::AssessmentError;

/// The three axes of the triangular theory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Intimacy,
    Passion,
    Commitment,
}

impl Axis {
    /// All axes in radar order
    pub const ALL: [Axis; 3] = [Axis::Intimacy, Axis::Passion, Axis::Commitment];

    /// Short label used on charts
    pub fn symbol(&self) -> &'static str {
        match self {
            Axis::Intimacy => "I",
            Axis::Passion => "P",
            Axis::Commitment => "C",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Intimacy => "intimacy",
            Axis::Passion => "passion",
            Axis::Commitment => "commitment",
        };
        write!(f, "{}", name)
    }
}

/// Composite 1-10 scores for intimacy, passion and commitment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub intimacy: f64,
    pub passion: f64,
    pub commitment: f64,
}

impl NormalizedScores {
    /// Create scores, rejecting anything outside [1, 10]
    pub fn new(intimacy: f64, passion: f64, commitment: f64) -> Result<Self, AssessmentError> {
        let scores = Self { intimacy, passion, commitment };
        for axis in Axis::ALL {
            let value = scores.get(axis);
            if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err(AssessmentError::ScoreOutOfRange { axis, value });
            }
        }
        Ok(scores)
    }

    /// Score on one axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Intimacy => self.intimacy,
            Axis::Passion => self.passion,
            Axis::Commitment => self.commitment,
        }
    }

    /// I + P + C
    pub fn total(&self) -> f64 {
        self.intimacy + self.passion + self.commitment
    }
}

/// Parameters of the Gaussian success curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Peak success probability, in [0.5, 0.95]
    pub amplitude: f64,
    /// Width of the success window (weeks), in [0.5, 2.0]
    pub sigma: f64,
    /// Fraction of the time anchor at which the peak sits, in [0.6, 1.0]
    pub alpha: f64,
    /// Ideal confession moment (weeks from now)
    pub t_peak: f64,
}

// =============================================================================
// TESTS
// =============================================================================
