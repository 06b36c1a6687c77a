//! Love Emergency: relationship questionnaire scoring and confession timing
//!
//! Pipeline: sliders → normalizer → model parameters → behavior simulation →
//! recommended time → Gaussian success curve → stability verdict, with the
//! triangular-theory classifier running alongside on the normalized scores.

pub mod core;
pub mod types;

// =============================================================================
// QUESTIONNAIRE DOMAIN
// =============================================================================

/// Lowest value a single slider can take
pub const SLIDER_MIN: u8 = 1;

/// Highest value a single slider can take
pub const SLIDER_MAX: u8 = 5;

/// Lowest composite score
pub const SCORE_MIN: f64 = 1.0;

/// Highest composite score
pub const SCORE_MAX: f64 = 10.0;

/// Largest accepted time anchor (weeks)
pub const TIME_ANCHOR_MAX_WEEKS: f64 = 20.0;

// =============================================================================
// MODEL COEFFICIENTS - fixed, never fitted
// =============================================================================

/// Floor of the peak success probability
pub const AMPLITUDE_BASE: f64 = 0.5;
/// How much the summed scores can add to the amplitude
pub const AMPLITUDE_GAIN: f64 = 0.45;

/// Narrowest success window (weeks)
pub const SIGMA_BASE: f64 = 0.5;
/// How much commitment widens the window
pub const SIGMA_GAIN: f64 = 1.5;

/// How far intimacy + commitment can pull the peak forward
pub const ALPHA_PULL: f64 = 0.4;

// =============================================================================
// SIMULATION & ANALYSIS
// =============================================================================

/// Length of every simulated trajectory
pub const TRAJECTORY_LEN: usize = 50;

/// Upper bound of random-mode draws
pub const RANDOM_MODE_MAX: f64 = 10.0;

/// Tail length inspected by the bravery test
pub const BRAVERY_TAIL: usize = 5;

/// Step tolerance for the bravery test
pub const BRAVERY_EPSILON: f64 = 1e-3;

/// Tail length averaged by the recommended-time estimator
pub const RECOMMENDED_TAIL: usize = 10;

/// Perturbation used by the stability analyzer (weeks)
pub const STABILITY_DELTA: f64 = 0.01;

/// Left/right difference below which timing is considered stable
pub const STABILITY_TOLERANCE: f64 = 1e-2;

/// Score a component needs to count as present
pub const LOVE_TYPE_THRESHOLD: f64 = 7.0;

/// Success rate below which the advisor raises a warning
pub const RISK_WARNING_RATE: f64 = 0.4;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "2.0.0";
