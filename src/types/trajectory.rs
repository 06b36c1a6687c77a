//! Simulation modes and simulated decision trajectories

use serde::{Deserialize, Serialize};
use crate::{BRAVERY_EPSILON, BRAVERY_TAIL};

/// How the simulated decision process behaves
///
/// Both deterministic modes converge to 1 numerically. "Diverging" names the
/// impulsive, changeable behavior, not a mathematical divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    /// Steady planner: 1 + 1/i, approaching 1 from above
    Converging,
    /// Impulsive or changeable: 1 - 1/i, approaching 1 from below
    Diverging,
    /// Sorted uniform draws from [0, 10)
    Random,
}

impl SimulationMode {
    /// Only Random depends on the injected source
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, SimulationMode::Random)
    }
}

impl std::fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SimulationMode::Converging => "CONVERGING",
            SimulationMode::Diverging => "DIVERGING",
            SimulationMode::Random => "RANDOM",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SimulationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "converging" => Ok(SimulationMode::Converging),
            "diverging" => Ok(SimulationMode::Diverging),
            "random" => Ok(SimulationMode::Random),
            other => Err(format!("unknown simulation mode '{}'", other)),
        }
    }
}

/// Simulated confession-time sequence, immutable once produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    mode: SimulationMode,
    values: Vec<f64>,
}

impl Trajectory {
    /// Wrap already-generated values
    pub fn new(mode: SimulationMode, values: Vec<f64>) -> Self {
        Self { mode, values }
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last `n` values (all of them when shorter)
    pub fn tail(&self, n: usize) -> &[f64] {
        &self.values[self.values.len().saturating_sub(n)..]
    }

    /// Mean of the last `n` values, None when empty
    pub fn tail_mean(&self, n: usize) -> Option<f64> {
        let tail = self.tail(n);
        if tail.is_empty() {
            return None;
        }
        Some(tail.iter().sum::<f64>() / tail.len() as f64)
    }

    /// Bravery: every step among the last 5 values is below 1e-3.
    ///
    /// Diagnostic only; the recommended time does not depend on it.
    pub fn is_brave(&self) -> bool {
        if self.values.len() < BRAVERY_TAIL {
            return false;
        }
        self.tail(BRAVERY_TAIL)
            .windows(2)
            .all(|w| (w[1] - w[0]).abs() < BRAVERY_EPSILON)
    }
}
