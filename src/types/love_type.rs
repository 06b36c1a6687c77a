//! Triangular-theory relationship categories

use serde::{Deserialize, Serialize};

/// The eight combinations of intimacy, passion and commitment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoveType {
    Consummate,
    Romantic,
    Companionate,
    Fatuous,
    Liking,
    Infatuation,
    Empty,
    NonLove,
}

impl LoveType {
    pub const ALL: [LoveType; 8] = [
        LoveType::Consummate,
        LoveType::Romantic,
        LoveType::Companionate,
        LoveType::Fatuous,
        LoveType::Liking,
        LoveType::Infatuation,
        LoveType::Empty,
        LoveType::NonLove,
    ];

    /// Label shown to users and written to records
    pub fn label(&self) -> &'static str {
        match self {
            LoveType::Consummate => "Consummate Love",
            LoveType::Romantic => "Romantic Love",
            LoveType::Companionate => "Companionate Love",
            LoveType::Fatuous => "Fatuous Love",
            LoveType::Liking => "Liking",
            LoveType::Infatuation => "Infatuation",
            LoveType::Empty => "Empty Love",
            LoveType::NonLove => "Non-love",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoveType::Consummate => "Intimacy, passion and commitment in full harmony.",
            LoveType::Romantic => "Closeness and passion, but no long-term commitment yet.",
            LoveType::Companionate => "Deep friendship and commitment; passion has cooled.",
            LoveType::Fatuous => "Commitment built on passion, without real understanding.",
            LoveType::Liking => "A pure friendship.",
            LoveType::Infatuation => "Strong physical attraction.",
            LoveType::Empty => "Only duty and obligation remain.",
            LoveType::NonLove => "No substantial emotional bond has formed yet.",
        }
    }
}

impl std::fmt::Display for LoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
