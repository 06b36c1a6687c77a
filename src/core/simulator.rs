//! Behavior mode selection and confession-time simulation
//!
//! Mode table:
//! - Steady + Steady  → CONVERGING  (t_i = 1 + 1/i)
//! - any Impulsive    → DIVERGING   (t_i = 1 - 1/i)
//! - explicit override only → RANDOM (sorted uniform draws from [0, 10))

use rand::Rng;
use tracing::debug;
use crate::{RANDOM_MODE_MAX, TRAJECTORY_LEN};
use crate::types::{BehaviorFlag, SimulationMode, Trajectory};

/// Source of uniform draws for the random mode
pub trait UniformSource {
    /// Draw one value uniformly from [low, high)
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..high)
    }
}

/// Maps the two behavior answers to a simulation mode
#[derive(Debug, Default)]
pub struct BehaviorModeSelector;

impl BehaviorModeSelector {
    /// Create new selector
    pub fn new() -> Self {
        Self
    }

    /// Pick the mode for a pair of answers.
    ///
    /// The flags can only produce CONVERGING or DIVERGING; RANDOM is reachable
    /// through `mode_override` alone.
    pub fn select(
        &self,
        action_tendency: BehaviorFlag,
        plan_stability: BehaviorFlag,
        mode_override: Option<SimulationMode>,
    ) -> SimulationMode {
        if let Some(mode) = mode_override {
            return mode;
        }
        match (action_tendency, plan_stability) {
            (BehaviorFlag::Steady, BehaviorFlag::Steady) => SimulationMode::Converging,
            _ => SimulationMode::Diverging,
        }
    }
}

/// Produces the 50-step decision trajectory for a mode
#[derive(Debug)]
pub struct ConfessionTimeSimulator {
    len: usize,
}

impl Default for ConfessionTimeSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfessionTimeSimulator {
    /// Create simulator with the standard length (50)
    pub fn new() -> Self {
        Self { len: TRAJECTORY_LEN }
    }

    /// Create simulator with a custom length
    pub fn with_len(len: usize) -> Self {
        Self { len }
    }

    /// Simulate a trajectory; `source` is only consulted in RANDOM mode
    pub fn simulate<S: UniformSource + ?Sized>(&self, mode: SimulationMode, source: &mut S) -> Trajectory {
        let values: Vec<f64> = match mode {
            SimulationMode::Converging => (1..=self.len).map(|i| 1.0 + 1.0 / i as f64).collect(),
            SimulationMode::Diverging => (1..=self.len).map(|i| 1.0 - 1.0 / i as f64).collect(),
            SimulationMode::Random => {
                let mut draws: Vec<f64> = (0..self.len)
                    .map(|_| source.draw_uniform(0.0, RANDOM_MODE_MAX))
                    .collect();
                draws.sort_by(|a, b| a.total_cmp(b));
                draws
            }
        };

        debug!(%mode, len = values.len(), "simulated confession trajectory");
        Trajectory::new(mode, values)
    }
}

// =============================================================================
// TESTS
// =============================================================================
