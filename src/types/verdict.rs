//! Stability verdict definitions

use serde::{Deserialize, Serialize};

/// How sensitive the success rate is to the exact confession moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StabilityVerdict {
    /// Curve is flat around the recommended time, timing is forgiving
    Stable,
    /// Curve is steep, outcome hinges on exact timing
    Critical,
}

impl StabilityVerdict {
    /// Get emoji for verdict
    pub fn emoji(&self) -> &'static str {
        match self {
            StabilityVerdict::Stable => "🌱",
            StabilityVerdict::Critical => "🎁",
        }
    }

    /// One-line explanation
    pub fn description(&self) -> &'static str {
        match self {
            StabilityVerdict::Stable => "Stable: the timing window is forgiving",
            StabilityVerdict::Critical => "Critical: the outcome hinges on exact timing",
        }
    }
}

impl std::fmt::Display for StabilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StabilityVerdict::Stable => "STABLE",
            StabilityVerdict::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}
