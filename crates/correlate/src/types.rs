use model::{Confidence, ConfidenceBand, Job};
use serde::{Deserialize, Serialize};
use signals::{ContactMatch, ProgramMatch, RelatedJob};

/// Everything known about one job: matched programs, contacts, related jobs,
/// and the overall confidence that ties them together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCorrelation {
    pub job: Job,
    /// Sorted by descending confidence; at most one entry is primary.
    pub programs: Vec<ProgramMatch>,
    /// Sorted by descending confidence.
    pub contacts: Vec<ContactMatch>,
    /// Sorted by descending confidence and capped.
    pub related_jobs: Vec<RelatedJob>,
    pub overall_confidence: Confidence,
}

impl JobCorrelation {
    /// The primary program match, if any program matched.
    pub fn primary_program(&self) -> Option<&ProgramMatch> {
        self.programs.iter().find(|p| p.is_primary)
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::of(self.overall_confidence)
    }

    pub fn has_matches(&self) -> bool {
        !(self.programs.is_empty() && self.contacts.is_empty() && self.related_jobs.is_empty())
    }
}

/// Aggregate statistics over a batch of correlations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationStats {
    pub total_jobs: usize,
    pub jobs_with_programs: usize,
    pub jobs_with_contacts: usize,
    pub jobs_with_related_jobs: usize,
    /// Jobs whose overall confidence sits in the high band.
    pub high_confidence_jobs: usize,
    /// Rounded mean of overall confidence; 0 for an empty batch.
    pub average_confidence: u8,
    /// Rounded percentage of jobs with at least one program match.
    pub program_match_rate: u8,
    /// Rounded percentage of jobs with at least one contact match.
    pub contact_match_rate: u8,
}

fn rounded_percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}

impl CorrelationStats {
    pub fn from_correlations(correlations: &[JobCorrelation]) -> Self {
        let total_jobs = correlations.len();
        let count = |pred: fn(&JobCorrelation) -> bool| correlations.iter().filter(|c| pred(c)).count();

        let jobs_with_programs = count(|c| !c.programs.is_empty());
        let jobs_with_contacts = count(|c| !c.contacts.is_empty());
        let jobs_with_related_jobs = count(|c| !c.related_jobs.is_empty());
        let high_confidence_jobs = count(|c| c.band() == ConfidenceBand::High);

        let average_confidence = if total_jobs == 0 {
            0
        } else {
            let sum: u64 = correlations
                .iter()
                .map(|c| u64::from(c.overall_confidence))
                .sum();
            (sum as f64 / total_jobs as f64).round() as u8
        };

        Self {
            total_jobs,
            jobs_with_programs,
            jobs_with_contacts,
            jobs_with_related_jobs,
            high_confidence_jobs,
            average_confidence,
            program_match_rate: rounded_percent(jobs_with_programs, total_jobs),
            contact_match_rate: rounded_percent(jobs_with_contacts, total_jobs),
        }
    }
}

/// Result of correlating a batch of jobs. `correlations` follows input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchCorrelation {
    pub correlations: Vec<JobCorrelation>,
    pub stats: CorrelationStats,
}
