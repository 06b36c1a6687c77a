//! Questionnaire input as handed over by the form / CLI / API

use serde::{Deserialize, Serialize};
use crate::{SLIDER_MAX, SLIDER_MIN, TIME_ANCHOR_MAX_WEEKS};
use crate::types::{AssessmentError, Axis, SimulationMode};

/// Answer to one of the two behavior questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BehaviorFlag {
    /// 1: plays it safe / sticks to the plan
    Steady,
    /// 2: strikes early / changes plans often
    Impulsive,
}

impl TryFrom<u8> for BehaviorFlag {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BehaviorFlag::Steady),
            2 => Ok(BehaviorFlag::Impulsive),
            other => Err(AssessmentError::InvalidFlag(other)),
        }
    }
}

impl From<BehaviorFlag> for u8 {
    fn from(flag: BehaviorFlag) -> u8 {
        match flag {
            BehaviorFlag::Steady => 1,
            BehaviorFlag::Impulsive => 2,
        }
    }
}

/// Personality of the person being confessed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPersonality {
    GentleReserved,
    WarmOutgoing,
    RationalLogical,
    MysteriousAloof,
}

impl TargetPersonality {
    pub const ALL: [TargetPersonality; 4] = [
        TargetPersonality::GentleReserved,
        TargetPersonality::WarmOutgoing,
        TargetPersonality::RationalLogical,
        TargetPersonality::MysteriousAloof,
    ];

    /// Stable tag written to records
    pub fn tag(&self) -> &'static str {
        match self {
            TargetPersonality::GentleReserved => "gentle-reserved",
            TargetPersonality::WarmOutgoing => "warm-outgoing",
            TargetPersonality::RationalLogical => "rational-logical",
            TargetPersonality::MysteriousAloof => "mysterious-aloof",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TargetPersonality::GentleReserved => "Gentle & reserved",
            TargetPersonality::WarmOutgoing => "Warm & outgoing",
            TargetPersonality::RationalLogical => "Rational & logical",
            TargetPersonality::MysteriousAloof => "Mysterious & aloof",
        }
    }
}

impl std::fmt::Display for TargetPersonality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for TargetPersonality {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| AssessmentError::UnknownPersonality(s.to_string()))
    }
}

/// One questionnaire submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Sliders: shared secrets, support in hard times, unspoken understanding
    pub intimacy: [u8; 3],
    /// Sliders: heartbeat when thinking of them, urge to surprise, physical longing
    pub passion: [u8; 3],
    /// Sliders: clarity of shared future, will to work through conflict, exclusivity
    pub commitment: [u8; 3],
    /// Q1: postpone (steady) or strike early (impulsive)
    pub action_tendency: BehaviorFlag,
    /// Q2: stick to the plan (steady) or keep changing it (impulsive)
    pub plan_stability: BehaviorFlag,
    /// Weeks until the anchor event
    pub time_anchor_weeks: f64,
    /// Name of the anchor event, e.g. "anniversary"
    pub event_label: String,
    pub target: TargetPersonality,
    /// Forces a simulation mode instead of deriving it from the flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_override: Option<SimulationMode>,
}

impl AssessmentInput {
    /// Sliders of one axis
    pub fn sliders(&self, axis: Axis) -> [u8; 3] {
        match axis {
            Axis::Intimacy => self.intimacy,
            Axis::Passion => self.passion,
            Axis::Commitment => self.commitment,
        }
    }

    /// Check every precondition the model relies on
    pub fn validate(&self) -> Result<(), AssessmentError> {
        for axis in Axis::ALL {
            check_sliders(axis, self.sliders(axis))?;
        }
        check_time_anchor(self.time_anchor_weeks)
    }
}

/// Submission as it arrives over the wire, before flags and target are checked.
///
/// Keeps the flags as `u8` and the target as a string so that bad values are
/// reported with their own reason codes instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssessmentRequest {
    pub intimacy: [u8; 3],
    pub passion: [u8; 3],
    pub commitment: [u8; 3],
    pub action_tendency: u8,
    pub plan_stability: u8,
    pub time_anchor_weeks: f64,
    pub event_label: String,
    pub target: String,
    #[serde(default)]
    pub mode_override: Option<SimulationMode>,
}

impl TryFrom<AssessmentRequest> for AssessmentInput {
    type Error = AssessmentError;

    fn try_from(request: AssessmentRequest) -> Result<Self, Self::Error> {
        let input = AssessmentInput {
            intimacy: request.intimacy,
            passion: request.passion,
            commitment: request.commitment,
            action_tendency: BehaviorFlag::try_from(request.action_tendency)?,
            plan_stability: BehaviorFlag::try_from(request.plan_stability)?,
            time_anchor_weeks: request.time_anchor_weeks,
            event_label: request.event_label,
            target: request.target.parse()?,
            mode_override: request.mode_override,
        };
        input.validate()?;
        Ok(input)
    }
}

impl std::str::FromStr for AssessmentRequest {
    type Err = AssessmentError;

    /// Parse a JSON submission; syntax and shape errors become `MalformedBody`
    fn from_str(json: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(json).map_err(|e| AssessmentError::MalformedBody(e.to_string()))
    }
}

/// Reject sliders outside [1, 5]
pub(crate) fn check_sliders(axis: Axis, sliders: [u8; 3]) -> Result<(), AssessmentError> {
    for (i, &value) in sliders.iter().enumerate() {
        if !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
            return Err(AssessmentError::SliderOutOfRange { axis, position: i + 1, value });
        }
    }
    Ok(())
}

/// Reject time anchors outside (0, 20]
pub(crate) fn check_time_anchor(t0: f64) -> Result<(), AssessmentError> {
    if t0.is_finite() && t0 > 0.0 && t0 <= TIME_ANCHOR_MAX_WEEKS {
        Ok(())
    } else {
        Err(AssessmentError::TimeAnchorOutOfRange(t0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssessmentInput {
        AssessmentInput {
            intimacy: [3, 3, 3],
            passion: [3, 3, 3],
            commitment: [3, 3, 3],
            action_tendency: BehaviorFlag::Steady,
            plan_stability: BehaviorFlag::Impulsive,
            time_anchor_weeks: 4.0,
            event_label: "Ordinary Friday".to_string(),
            target: TargetPersonality::WarmOutgoing,
            mode_override: None,
        }
    }

    #[test]
    fn test_flag_conversion() {
        assert_eq!(BehaviorFlag::try_from(1), Ok(BehaviorFlag::Steady));
        assert_eq!(BehaviorFlag::try_from(2), Ok(BehaviorFlag::Impulsive));
        assert_eq!(BehaviorFlag::try_from(0), Err(AssessmentError::InvalidFlag(0)));
        assert_eq!(u8::from(BehaviorFlag::Impulsive), 2);
    }

    #[test]
    fn test_personality_parsing() {
        assert_eq!("gentle-reserved".parse::<TargetPersonality>(), Ok(TargetPersonality::GentleReserved));
        assert_eq!("Mysterious_Aloof".parse::<TargetPersonality>(), Ok(TargetPersonality::MysteriousAloof));
        assert!("grumpy".parse::<TargetPersonality>().is_err());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_slider() {
        let mut input = sample();
        input.commitment = [3, 6, 3];
        assert_eq!(
            input.validate(),
            Err(AssessmentError::SliderOutOfRange { axis: Axis::Commitment, position: 2, value: 6 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_time_anchor() {
        for t0 in [0.0, -1.0, 20.5, f64::NAN] {
            let mut input = sample();
            input.time_anchor_weeks = t0;
            assert!(matches!(input.validate(), Err(AssessmentError::TimeAnchorOutOfRange(_))));
        }
    }

    #[test]
    fn test_json_flags_are_integers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["action_tendency"], 1);
        assert_eq!(json["plan_stability"], 2);
        assert_eq!(json["target"], "warm-outgoing");
        assert!(json.get("mode_override").is_none());
    }

    fn request() -> AssessmentRequest {
        r#"{
            "intimacy": [3, 3, 3], "passion": [3, 3, 3], "commitment": [3, 3, 3],
            "action_tendency": 1, "plan_stability": 2,
            "time_anchor_weeks": 4.0, "event_label": "Ordinary Friday",
            "target": "warm-outgoing"
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_request_converts_to_input() {
        assert_eq!(AssessmentInput::try_from(request()), Ok(sample()));
    }

    #[test]
    fn test_request_reports_flag_and_target_codes() {
        let mut bad_flag = request();
        bad_flag.plan_stability = 3;
        assert_eq!(AssessmentInput::try_from(bad_flag), Err(AssessmentError::InvalidFlag(3)));

        let mut bad_target = request();
        bad_target.target = "grumpy".to_string();
        assert_eq!(
            AssessmentInput::try_from(bad_target),
            Err(AssessmentError::UnknownPersonality("grumpy".to_string()))
        );
    }

    #[test]
    fn test_request_syntax_error_is_malformed_body() {
        let err = "{\"intimacy\": [3, 3]".parse::<AssessmentRequest>().unwrap_err();
        assert_eq!(err.code(), "R107_MALFORMED_BODY");
    }

    #[test]
    fn test_json_rejects_flag_three() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["action_tendency"] = serde_json::json!(3);
        assert!(serde_json::from_value::<AssessmentInput>(json).is_err());
    }
}
