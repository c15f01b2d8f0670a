use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::priority::BdPriority;

/// Tier assigned to contacts whose seniority is unknown.
pub const DEFAULT_TIER: u8 = 6;
/// Most senior tier.
pub const MIN_TIER: u8 = 1;

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// A posted position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Declared target program.
    #[serde(default)]
    pub program: Option<String>,
    /// Legacy spelling of `program` still emitted by some exports.
    #[serde(default, alias = "programName")]
    pub program_name: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub clearance: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, alias = "functionalArea")]
    pub functional_area: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "bdPriority", deserialize_with = "lenient::optional")]
    pub bd_priority: Option<BdPriority>,
}

impl Job {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Resolve the job's target program name.
    ///
    /// Precedence: `program`, then `program_name`. Blank strings count as
    /// absent, so a blank `program` falls through to `program_name`.
    pub fn resolve_program_name(&self) -> Option<&str> {
        non_blank(self.program.as_ref()).or_else(|| non_blank(self.program_name.as_ref()))
    }

    /// Location text used for site matching: `location`, falling back to `city`.
    pub fn site(&self) -> Option<&str> {
        non_blank(self.location.as_ref()).or_else(|| non_blank(self.city.as_ref()))
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    pub fn with_clearance(mut self, clearance: impl Into<String>) -> Self {
        self.clearance = Some(clearance.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_functional_area(mut self, area: impl Into<String>) -> Self {
        self.functional_area = Some(area.into());
        self
    }

    pub fn with_priority(mut self, priority: BdPriority) -> Self {
        self.bd_priority = Some(priority);
        self
    }
}

/// A government or contract program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Program {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default, alias = "primeContractor")]
    pub prime_contractor: Option<String>,
    #[serde(default, alias = "contractValue", deserialize_with = "lenient::optional")]
    pub contract_value: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "clearanceRequirements")]
    pub clearance_requirements: Vec<String>,
    #[serde(default, alias = "recompeteDate", deserialize_with = "lenient::optional")]
    pub recompete_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub priority: Option<BdPriority>,
    #[serde(default, alias = "programType")]
    pub program_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Program {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn acronym(&self) -> Option<&str> {
        non_blank(self.acronym.as_ref())
    }

    /// Acronym when present, otherwise the full name.
    pub fn display_name(&self) -> &str {
        self.acronym().unwrap_or(self.name.as_str())
    }

    pub fn with_acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = Some(acronym.into());
        self
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_clearance_requirement(mut self, clearance: impl Into<String>) -> Self {
        self.clearance_requirements.push(clearance.into());
        self
    }

    pub fn with_program_type(mut self, program_type: impl Into<String>) -> Self {
        self.program_type = Some(program_type.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Ways to reach a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactChannels {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "linkedIn")]
    pub linkedin: Option<String>,
}

/// A person associated with a company or program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Program affiliation.
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Seniority rank; see [`Contact::tier`].
    #[serde(default, deserialize_with = "lenient::optional")]
    pub tier: Option<u8>,
    #[serde(default)]
    pub channels: ContactChannels,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Effective tier. Missing or out-of-range values fall back to
    /// [`DEFAULT_TIER`].
    pub fn tier(&self) -> u8 {
        self.tier
            .filter(|t| (MIN_TIER..=DEFAULT_TIER).contains(t))
            .unwrap_or(DEFAULT_TIER)
    }

    pub fn program(&self) -> Option<&str> {
        non_blank(self.program.as_ref())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = Some(tier);
        self
    }
}
