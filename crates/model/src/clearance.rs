use serde::{Deserialize, Serialize};

/// Security clearance ladder, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceLevel {
    None,
    PublicTrust,
    Secret,
    TopSecret,
    TsSci,
    TsSciPoly,
}

impl ClearanceLevel {
    /// Parse free-form clearance text as it appears in postings.
    ///
    /// Accepts the common spellings ("TS/SCI w/ Poly", "Top Secret",
    /// "Secret", "Public Trust", "Unclassified"). Returns `None` for blank or
    /// unrecognized text so callers can treat it as a non-matching signal.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.to_ascii_uppercase();
        let tokens: Vec<&str> = upper
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        let has = |needle: &str| tokens.iter().any(|t| *t == needle);

        let sci = has("SCI");
        let top_secret = has("TS") || upper.contains("TOP SECRET") || has("TOPSECRET");
        let poly = has("POLY") || has("POLYGRAPH") || has("FSP");

        if (sci || top_secret) && poly {
            return Some(ClearanceLevel::TsSciPoly);
        }
        if sci {
            return Some(ClearanceLevel::TsSci);
        }
        if top_secret {
            return Some(ClearanceLevel::TopSecret);
        }
        if has("SECRET") {
            return Some(ClearanceLevel::Secret);
        }
        if upper.contains("PUBLIC TRUST") || has("MBI") {
            return Some(ClearanceLevel::PublicTrust);
        }
        if has("NONE") || has("UNCLASSIFIED") || upper.contains("NO CLEARANCE") {
            return Some(ClearanceLevel::None);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearanceLevel::None => "None",
            ClearanceLevel::PublicTrust => "Public Trust",
            ClearanceLevel::Secret => "Secret",
            ClearanceLevel::TopSecret => "Top Secret",
            ClearanceLevel::TsSci => "TS/SCI",
            ClearanceLevel::TsSciPoly => "TS/SCI w/ Poly",
        }
    }
}
