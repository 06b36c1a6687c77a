//! Success curve, recommended time and stability analysis
//!
//! success_rate(t) = A * exp(-(t - t_peak)^2 / (2 * sigma^2))

use crate::{RECOMMENDED_TAIL, STABILITY_DELTA, STABILITY_TOLERANCE};
use crate::types::{ModelParameters, StabilityVerdict, Trajectory};

/// Gaussian success-probability curve
#[derive(Debug, Clone, Copy)]
pub struct GaussianSuccessModel {
    amplitude: f64,
    t_peak: f64,
    sigma: f64,
}

impl GaussianSuccessModel {
    /// Build the curve for a set of parameters
    pub fn new(params: &ModelParameters) -> Self {
        Self {
            amplitude: params.amplitude,
            t_peak: params.t_peak,
            sigma: params.sigma,
        }
    }

    /// Build the curve from its three shape values
    pub fn from_parts(amplitude: f64, t_peak: f64, sigma: f64) -> Self {
        Self { amplitude, t_peak, sigma }
    }

    /// Success probability at time `t` (weeks)
    pub fn success_rate(&self, t: f64) -> f64 {
        let offset = t - self.t_peak;
        self.amplitude * (-(offset * offset) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// Shifts the ideal moment by the simulated behavior
#[derive(Debug, Default)]
pub struct RecommendedTimeEstimator;

impl RecommendedTimeEstimator {
    /// Create new estimator
    pub fn new() -> Self {
        Self
    }

    /// t_now = t_peak + (mean(last 10) - 1) * sigma
    ///
    /// An empty trajectory leaves t_peak untouched.
    pub fn estimate(&self, params: &ModelParameters, trajectory: &Trajectory) -> f64 {
        let tail_mean = trajectory.tail_mean(RECOMMENDED_TAIL).unwrap_or(1.0);
        params.t_peak + (tail_mean - 1.0) * params.sigma
    }
}

/// Finite-difference sensitivity check around the recommended time
#[derive(Debug)]
pub struct StabilityAnalyzer {
    delta: f64,
    tolerance: f64,
}

impl Default for StabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityAnalyzer {
    /// Create analyzer with delta = 0.01 and tolerance = 1e-2
    pub fn new() -> Self {
        Self {
            delta: STABILITY_DELTA,
            tolerance: STABILITY_TOLERANCE,
        }
    }

    /// Compare the curve just before and just after `t_now`
    pub fn analyze(&self, model: &GaussianSuccessModel, t_now: f64) -> StabilityVerdict {
        let left = model.success_rate(t_now - self.delta);
        let right = model.success_rate(t_now + self.delta);

        if (left - right).abs() < self.tolerance {
            StabilityVerdict::Stable
        } else {
            StabilityVerdict::Critical
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
