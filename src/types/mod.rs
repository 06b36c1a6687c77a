//! Core types for Love Emergency

mod error;
mod input;
mod scores;
mod trajectory;
mod verdict;
mod love_type;
mod report;

pub use error::{AssessmentError, RecordError};
pub use input::{AssessmentInput, AssessmentRequest, BehaviorFlag, TargetPersonality};
pub(crate) use input::{check_sliders, check_time_anchor};
pub use scores::{Axis, NormalizedScores, ModelParameters};
pub use trajectory::{SimulationMode, Trajectory};
pub use verdict::StabilityVerdict;
pub use love_type::LoveType;
pub use report::{Report, LogRecord, Guidance, RiskLevel, RenderInputs};
