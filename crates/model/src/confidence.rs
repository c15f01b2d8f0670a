use serde::{Deserialize, Serialize};

/// Integer match strength in `0..=100`; higher is stronger.
pub type Confidence = u8;

pub const MAX_CONFIDENCE: Confidence = 100;

/// Round half away from zero and clamp into `[0, 100]`.
///
/// Non-finite input collapses to 0.
pub fn clamp_confidence(value: f64) -> Confidence {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(MAX_CONFIDENCE)) as Confidence
}

/// Coarse bucket used by the rendering layer to color match strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    None,
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub const HIGH_THRESHOLD: Confidence = 70;
    pub const MEDIUM_THRESHOLD: Confidence = 40;

    pub fn of(confidence: Confidence) -> Self {
        match confidence {
            c if c >= Self::HIGH_THRESHOLD => ConfidenceBand::High,
            c if c >= Self::MEDIUM_THRESHOLD => ConfidenceBand::Medium,
            0 => ConfidenceBand::None,
            _ => ConfidenceBand::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::None => "none",
            ConfidenceBand::Low => "low",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::High => "high",
        }
    }
}
