//! Point tables for the signal matchers.
//!
//! Every matched signal contributes a bounded number of points; totals are
//! capped at 100. The tables are plain serde structs so they can be tuned
//! from configuration files, and [`SignalWeights::validate`] guards the
//! relative-ordering invariants the correlation layer relies on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating signal configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignalError {
    #[error("invalid signal config: {0}")]
    InvalidConfig(String),
}

/// Job -> program points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramWeights {
    /// Job program equals the program name or acronym.
    pub name_exact: u8,
    /// Job program and program name/acronym overlap as phrases, or the
    /// acronym appears in the job title.
    pub name_partial: u8,
    pub agency: u8,
    pub location: u8,
    /// Points per shared keyword between the job title/functional area and
    /// the program type/notes.
    pub keyword_per_hit: u8,
    /// Cap on keyword points.
    pub keyword_max: u8,
    /// Job clearance equals one of the program requirements.
    pub clearance_exact: u8,
    /// Job clearance sits below the program's allowance.
    pub clearance_compatible: u8,
}

impl Default for ProgramWeights {
    fn default() -> Self {
        Self {
            name_exact: 65,
            name_partial: 25,
            agency: 10,
            location: 10,
            keyword_per_hit: 2,
            keyword_max: 5,
            clearance_exact: 10,
            clearance_compatible: 5,
        }
    }
}

impl ProgramWeights {
    /// Best total reachable without an exact name match.
    pub fn max_without_exact_name(&self) -> u32 {
        u32::from(self.name_partial)
            + u32::from(self.agency)
            + u32::from(self.location)
            + u32::from(self.keyword_max)
            + u32::from(self.clearance_exact.max(self.clearance_compatible))
    }

    pub fn validate(&self) -> Result<(), SignalError> {
        if self.name_exact == 0 {
            return Err(SignalError::InvalidConfig(
                "program.name_exact must be greater than zero".into(),
            ));
        }
        if self.name_partial >= self.name_exact {
            return Err(SignalError::InvalidConfig(
                "program.name_partial must be lower than program.name_exact".into(),
            ));
        }
        if self.clearance_compatible > self.clearance_exact {
            return Err(SignalError::InvalidConfig(
                "program.clearance_compatible must not exceed program.clearance_exact".into(),
            ));
        }
        if self.keyword_max > 0 && self.keyword_per_hit == 0 {
            return Err(SignalError::InvalidConfig(
                "program.keyword_per_hit must be > 0 when keyword_max > 0".into(),
            ));
        }
        let rest = self.max_without_exact_name();
        if u32::from(self.name_exact) <= rest {
            return Err(SignalError::InvalidConfig(format!(
                "program.name_exact ({}) must exceed the best score without an exact name match ({rest})",
                self.name_exact
            )));
        }
        Ok(())
    }
}

/// Job/program -> contact points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactWeights {
    pub program_exact: u8,
    pub program_partial: u8,
    pub location: u8,
    pub company: u8,
    /// Bonus per tier above the lowest, granted only when another signal fired.
    pub seniority_per_tier: u8,
}

impl Default for ContactWeights {
    fn default() -> Self {
        Self {
            program_exact: 60,
            program_partial: 30,
            location: 25,
            company: 15,
            seniority_per_tier: 3,
        }
    }
}

impl ContactWeights {
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.program_partial > self.program_exact {
            return Err(SignalError::InvalidConfig(
                "contact.program_partial must not exceed contact.program_exact".into(),
            ));
        }
        if self.seniority_per_tier > 10 {
            return Err(SignalError::InvalidConfig(
                "contact.seniority_per_tier must be <= 10".into(),
            ));
        }
        Ok(())
    }
}

/// Job -> job confidence table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWeights {
    pub pts_base: f64,
    pub pts_overlap: f64,
    pub competitor_program_and_location: f64,
    pub competitor_program: f64,
    pub competitor_location: f64,
    pub similar_base: f64,
    pub similar_overlap: f64,
}

impl Default for RelatedWeights {
    fn default() -> Self {
        Self {
            pts_base: 60.0,
            pts_overlap: 40.0,
            competitor_program_and_location: 85.0,
            competitor_program: 75.0,
            competitor_location: 55.0,
            similar_base: 30.0,
            similar_overlap: 40.0,
        }
    }
}

impl RelatedWeights {
    pub fn validate(&self) -> Result<(), SignalError> {
        let all = [
            ("pts_base", self.pts_base),
            ("pts_overlap", self.pts_overlap),
            ("competitor_program_and_location", self.competitor_program_and_location),
            ("competitor_program", self.competitor_program),
            ("competitor_location", self.competitor_location),
            ("similar_base", self.similar_base),
            ("similar_overlap", self.similar_overlap),
        ];
        for (name, value) in all {
            if !(0.0..=100.0).contains(&value) {
                return Err(SignalError::InvalidConfig(format!(
                    "related.{name} must be between 0 and 100"
                )));
            }
        }
        Ok(())
    }
}

/// All signal point tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignalWeights {
    pub program: ProgramWeights,
    pub contact: ContactWeights,
    pub related: RelatedWeights,
}

impl SignalWeights {
    pub fn validate(&self) -> Result<(), SignalError> {
        self.program.validate()?;
        self.contact.validate()?;
        self.related.validate()
    }
}
