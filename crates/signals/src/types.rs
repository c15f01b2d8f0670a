use model::{Confidence, Contact, Job, Program};
use serde::{Deserialize, Serialize};

/// Which factor a [`MatchSignal`] measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    ProgramNameExact,
    ProgramNamePartial,
    Agency,
    Location,
    KeywordOverlap,
    ClearanceExact,
    ClearanceCompatible,
    ContactProgramExact,
    ContactProgramPartial,
    ContactLocation,
    ContactCompany,
    Seniority,
}

/// One contributing factor to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSignal {
    pub kind: SignalKind,
    /// Human-readable explanation shown next to the match.
    pub description: String,
    pub matched: bool,
    /// Points contributed toward the confidence; 0 when not matched.
    pub points: u8,
}

impl MatchSignal {
    pub fn fired(kind: SignalKind, points: u8, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            matched: true,
            points,
        }
    }

    pub fn missed(kind: SignalKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            matched: false,
            points: 0,
        }
    }
}

/// A program paired with its match confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMatch {
    pub program: Program,
    pub confidence: Confidence,
    /// Matched signals only.
    pub signals: Vec<MatchSignal>,
    /// Set on the single best program match of a job.
    pub is_primary: bool,
}

impl ProgramMatch {
    pub fn has_signal(&self, kind: SignalKind) -> bool {
        self.signals.iter().any(|s| s.kind == kind)
    }
}

/// Role label inferred for a matched contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    HiringManager,
    ProgramManager,
    TeamLead,
    TeamMember,
    RelatedContact,
}

impl ContactRole {
    pub fn label(&self) -> &'static str {
        match self {
            ContactRole::HiringManager => "Hiring Manager",
            ContactRole::ProgramManager => "Program Manager",
            ContactRole::TeamLead => "Team Lead",
            ContactRole::TeamMember => "Team Member",
            ContactRole::RelatedContact => "Related Contact",
        }
    }
}

/// A contact paired with its match confidence and inferred role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMatch {
    pub contact: Contact,
    pub confidence: Confidence,
    pub role: ContactRole,
    pub signals: Vec<MatchSignal>,
}

/// How another job relates to the job being correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Same company, overlapping functional area.
    PtsHistory,
    /// Different company on the same program or at the same site.
    Competitor,
    /// Same functional area elsewhere.
    SimilarRole,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::PtsHistory => "pts_history",
            RelationshipKind::Competitor => "competitor",
            RelationshipKind::SimilarRole => "similar_role",
        }
    }
}

/// Another job related to the one being correlated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedJob {
    pub job: Job,
    pub kind: RelationshipKind,
    pub label: String,
    pub confidence: Confidence,
}
