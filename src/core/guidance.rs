//! Advisor guidance: personality-targeted advice and a risk warning

use crate::RISK_WARNING_RATE;
use crate::types::{Guidance, RiskLevel, TargetPersonality};

/// Builds the advisor section of a report
#[derive(Debug, Default)]
pub struct Advisor;

impl Advisor {
    /// Create new advisor
    pub fn new() -> Self {
        Self
    }

    /// Advice for a target personality and predicted success rate
    pub fn advise(&self, target: TargetPersonality, success_rate: f64) -> Guidance {
        let personality_tip = match target {
            TargetPersonality::GentleReserved => {
                "Spend more time together first, then confess somewhere quiet with soft lighting."
            }
            _ => "Be direct: show your decisiveness and confidence.",
        };

        let risk = if success_rate < RISK_WARNING_RATE {
            RiskLevel::Low
        } else {
            RiskLevel::Ready
        };

        Guidance {
            personality_tip: personality_tip.to_string(),
            risk,
            risk_message: risk_message(risk).to_string(),
        }
    }
}

fn risk_message(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "Success rate is still low; keep building intimacy before raising the stakes.",
        RiskLevel::Ready => "Conditions are mostly ripe; sincerity is your best move.",
    }
}
