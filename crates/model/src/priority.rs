use serde::{Deserialize, Deserializer, Serialize};

/// Coarse business-development priority label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityLabel {
    #[serde(alias = "critical", alias = "CRITICAL")]
    Critical,
    #[serde(alias = "high", alias = "HIGH")]
    High,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "low", alias = "LOW")]
    Low,
}

impl PriorityLabel {
    /// Case-insensitive label lookup.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [Self::Critical, Self::High, Self::Medium, Self::Low]
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::Critical => "Critical",
            PriorityLabel::High => "High",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::Low => "Low",
        }
    }

    /// Numeric equivalent used when ranking mixed numeric/label priorities.
    pub fn score(&self) -> u8 {
        match self {
            PriorityLabel::Critical => 90,
            PriorityLabel::High => 75,
            PriorityLabel::Medium => 50,
            PriorityLabel::Low => 25,
        }
    }
}

/// BD priority as delivered by the adapters: either a 0-100 score or a label.
///
/// Deserializes from either form. Numbers (and numeric strings) are rounded
/// and clamped into 0-100; labels are matched case-insensitively:
///
/// ```
/// use model::{BdPriority, PriorityLabel};
///
/// let numeric: BdPriority = serde_json::from_str("82").unwrap();
/// let fractional: BdPriority = serde_json::from_str("72.5").unwrap();
/// let label: BdPriority = serde_json::from_str("\"high\"").unwrap();
/// assert_eq!(numeric.score(), 82);
/// assert_eq!(fractional.score(), 73);
/// assert_eq!(label, BdPriority::Label(PriorityLabel::High));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BdPriority {
    Score(u8),
    Label(PriorityLabel),
}

impl BdPriority {
    pub fn score(&self) -> u8 {
        match self {
            BdPriority::Score(value) => (*value).min(100),
            BdPriority::Label(label) => label.score(),
        }
    }

    /// Score from an arbitrary number; `None` for NaN or infinities.
    pub fn from_number(value: f64) -> Option<Self> {
        value
            .is_finite()
            .then(|| BdPriority::Score(value.round().clamp(0.0, 100.0) as u8))
    }

    /// Label name or numeric text.
    pub fn parse(raw: &str) -> Option<Self> {
        PriorityLabel::parse(raw)
            .map(BdPriority::Label)
            .or_else(|| raw.trim().parse::<f64>().ok().and_then(Self::from_number))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriority {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for BdPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawPriority::deserialize(deserializer)? {
            RawPriority::Number(value) => BdPriority::from_number(value),
            RawPriority::Text(text) => BdPriority::parse(&text),
        };
        parsed.ok_or_else(|| serde::de::Error::custom("unrecognized BD priority"))
    }
}
