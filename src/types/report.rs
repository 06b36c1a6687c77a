//! The assessment report and the views derived from it

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local, Utc};
use crate::types::{
    LoveType, ModelParameters, NormalizedScores, SimulationMode, StabilityVerdict,
    TargetPersonality, Trajectory,
};

/// Complete result of one questionnaire submission.
///
/// Built once by the assembler; read-only for everyone else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Content fingerprint (independent of the timestamp)
    pub(crate) fingerprint: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) target: TargetPersonality,
    pub(crate) event_label: String,
    pub(crate) scores: NormalizedScores,
    pub(crate) parameters: ModelParameters,
    pub(crate) trajectory: Trajectory,
    /// Recommended confession time (weeks from now)
    pub(crate) t_now: f64,
    /// Predicted success probability at t_now
    pub(crate) success_rate: f64,
    pub(crate) stability: StabilityVerdict,
    pub(crate) love_type: LoveType,
    pub(crate) guidance: Guidance,
}

impl Report {
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// When the report was produced
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Who the confession is aimed at
    pub fn target(&self) -> TargetPersonality {
        self.target
    }

    /// Name of the anchor event
    pub fn event_label(&self) -> &str {
        &self.event_label
    }

    pub fn scores(&self) -> NormalizedScores {
        self.scores
    }

    pub fn parameters(&self) -> ModelParameters {
        self.parameters
    }

    /// Simulation mode the trajectory was produced with
    pub fn mode(&self) -> SimulationMode {
        self.trajectory.mode()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Recommended confession time (weeks from now)
    pub fn t_now(&self) -> f64 {
        self.t_now
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn stability(&self) -> StabilityVerdict {
        self.stability
    }

    pub fn love_type(&self) -> LoveType {
        self.love_type
    }

    pub fn guidance(&self) -> &Guidance {
        &self.guidance
    }

    /// Success rate as shown to users, e.g. "74.7%"
    pub fn success_percent(&self) -> String {
        format!("{:.1}%", self.success_rate * 100.0)
    }

    /// Row handed to the persistence collaborator
    pub fn log_record(&self) -> LogRecord {
        LogRecord {
            timestamp: self
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            intimacy: round2(self.scores.intimacy),
            passion: round2(self.scores.passion),
            commitment: round2(self.scores.commitment),
            love_type: self.love_type.label().to_string(),
            success_rate: self.success_percent(),
            target: self.target.tag().to_string(),
            action_week: round2(self.t_now),
        }
    }

    /// Fields the rendering collaborator needs
    pub fn render_inputs(&self) -> RenderInputs {
        RenderInputs {
            intimacy: self.scores.intimacy,
            passion: self.scores.passion,
            commitment: self.scores.commitment,
            amplitude: self.parameters.amplitude,
            t_peak: self.parameters.t_peak,
            sigma: self.parameters.sigma,
            t_now: self.t_now,
            love_title: self.love_type.label().to_string(),
        }
    }
}

/// Anonymized persistence row; `timestamp` is local wall-clock time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub intimacy: f64,
    pub passion: f64,
    pub commitment: f64,
    pub love_type: String,
    pub success_rate: String,
    pub target: String,
    pub action_week: f64,
}

impl LogRecord {
    /// Ordered cells: [timestamp, I, P, C, type, rate, target, week]
    pub fn to_row(&self) -> Vec<serde_json::Value> {
        vec![
            self.timestamp.clone().into(),
            self.intimacy.into(),
            self.passion.into(),
            self.commitment.into(),
            self.love_type.clone().into(),
            self.success_rate.clone().into(),
            self.target.clone().into(),
            self.action_week.into(),
        ]
    }
}

/// Inputs of the radar chart and the success curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInputs {
    pub intimacy: f64,
    pub passion: f64,
    pub commitment: f64,
    pub amplitude: f64,
    pub t_peak: f64,
    pub sigma: f64,
    pub t_now: f64,
    pub love_title: String,
}

/// Whether the predicted success rate warrants a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Rate below 40%: keep building intimacy first
    Low,
    /// Conditions are mostly ripe
    Ready,
}

/// Advisor output attached to every report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    /// Advice tailored to the target's personality
    pub personality_tip: String,
    pub risk: RiskLevel,
    pub risk_message: String,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================
