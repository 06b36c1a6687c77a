//! Error types with stable reason codes
//!
//! R1xx: assessment input rejected
//! R2xx: report recording failed (always discarded by the assembler)

use thiserror::Error;
use crate::types::Axis;

/// Why an assessment input was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("{axis} slider #{position} is {value}, expected 1-5")]
    SliderOutOfRange { axis: Axis, position: usize, value: u8 },

    #[error("behavior flag must be 1 or 2, got {0}")]
    InvalidFlag(u8),

    #[error("time anchor must be within (0, 20] weeks, got {0}")]
    TimeAnchorOutOfRange(f64),

    #[error("{axis} score {value} is outside [1, 10]")]
    ScoreOutOfRange { axis: Axis, value: f64 },

    #[error("unknown target personality '{0}'")]
    UnknownPersonality(String),

    #[error("cannot parse slider triple '{0}', expected three values 1-5 like 5,4,3")]
    MalformedTriple(String),

    #[error("malformed submission: {0}")]
    MalformedBody(String),
}

impl AssessmentError {
    /// Get the code string (for logging and API bodies)
    pub fn code(&self) -> &'static str {
        match self {
            Self::SliderOutOfRange { .. } => "R101_SLIDER_OUT_OF_RANGE",
            Self::InvalidFlag(_) => "R102_INVALID_FLAG",
            Self::TimeAnchorOutOfRange(_) => "R103_TIME_ANCHOR_OUT_OF_RANGE",
            Self::ScoreOutOfRange { .. } => "R104_SCORE_OUT_OF_RANGE",
            Self::UnknownPersonality(_) => "R105_UNKNOWN_PERSONALITY",
            Self::MalformedTriple(_) => "R106_MALFORMED_TRIPLE",
            Self::MalformedBody(_) => "R107_MALFORMED_BODY",
        }
    }
}

/// Why a report could not be recorded
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record storage failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RecordError {
    /// Get the code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "R201_RECORD_STORAGE_ERROR",
            Self::Serialize(_) => "R202_RECORD_SERIALIZE_ERROR",
        }
    }
}
