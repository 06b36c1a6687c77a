//! Model parameter deriver
//!
//! - A     = 0.5 + (I+P+C)/30 * 0.45      higher scores, higher peak
//! - sigma = 0.5 + (C/10) * 1.5           more commitment, wider window
//! - alpha = 1 - ((I/10 + C/10)/2) * 0.4  more intimacy/commitment, earlier peak
//! - t_peak = t0 * alpha

use crate::{AMPLITUDE_BASE, AMPLITUDE_GAIN, SIGMA_BASE, SIGMA_GAIN, ALPHA_PULL};
use crate::types::{AssessmentError, ModelParameters, NormalizedScores};
use crate::types::check_time_anchor;

/// Derives Gaussian parameters from scores and the time anchor
#[derive(Debug, Default)]
pub struct ModelParameterDeriver;

impl ModelParameterDeriver {
    /// Create new deriver
    pub fn new() -> Self {
        Self
    }

    /// Derive parameters; `t0` must lie in (0, 20] weeks
    pub fn derive(
        &self,
        scores: &NormalizedScores,
        t0: f64,
    ) -> Result<ModelParameters, AssessmentError> {
        check_time_anchor(t0)?;

        let i = scores.intimacy;
        let c = scores.commitment;

        let amplitude = AMPLITUDE_BASE + scores.total() / 30.0 * AMPLITUDE_GAIN;
        let sigma = SIGMA_BASE + (c / 10.0) * SIGMA_GAIN;
        let alpha = 1.0 - ((i / 10.0 + c / 10.0) / 2.0) * ALPHA_PULL;

        Ok(ModelParameters {
            amplitude,
            sigma,
            alpha,
            t_peak: t0 * alpha,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
