//! Single-job correlation.
//!
//! [`correlate_job`] is pure: identical inputs always produce identical
//! output and nothing is cached here.

use model::{clamp_confidence, Confidence, Contact, Job, Program};
use signals::{
    find_related_jobs, is_affiliated, match_programs, score_contact, ContactMatch, ContactTarget,
    ProgramMatch, RelatedJob,
};

use crate::config::{CorrelationConfig, OverallWeights};
use crate::types::JobCorrelation;


/// Correlate one job against the candidate pools.
///
/// `all_jobs` is the batch used for related-job discovery; it may contain
/// `job` itself, which is always skipped.
pub fn correlate_job(
    job: &Job,
    programs: &[Program],
    contacts: &[Contact],
    all_jobs: &[Job],
    cfg: &CorrelationConfig,
) -> JobCorrelation {
    correlate_job_among(job, programs, contacts, all_jobs, cfg)
}

/// [`correlate_job`] over borrowed related-job candidates, for callers that
/// hold a filtered view of their jobs rather than a slice.
pub fn correlate_job_among<'a>(
    job: &Job,
    programs: &[Program],
    contacts: &[Contact],
    candidates: impl IntoIterator<Item = &'a Job>,
    cfg: &CorrelationConfig,
) -> JobCorrelation {
    let programs = rank_programs(match_programs(job, programs, &cfg.signals.program));
    let primary = programs.first().map(|p| &p.program);

    let contacts = rank_contacts(job, primary, contacts, cfg);

    let mut related_jobs = find_related_jobs(job, candidates, &cfg.signals.related);
    related_jobs.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    related_jobs.truncate(cfg.related_job_limit);

    let overall_confidence =
        overall_confidence(&programs, &contacts, &related_jobs, &cfg.overall);

    JobCorrelation {
        job: job.clone(),
        programs,
        contacts,
        related_jobs,
        overall_confidence,
    }
}

/// Stable descending sort; the first entry becomes primary.
fn rank_programs(mut matches: Vec<ProgramMatch>) -> Vec<ProgramMatch> {
    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    for (idx, m) in matches.iter_mut().enumerate() {
        m.is_primary = idx == 0;
    }
    matches
}

fn rank_contacts(
    job: &Job,
    primary: Option<&Program>,
    contacts: &[Contact],
    cfg: &CorrelationConfig,
) -> Vec<ContactMatch> {
    let pool = scope_contacts(primary, contacts);
    let target = ContactTarget::new(job, primary);
    let mut matches: Vec<ContactMatch> = pool
        .into_iter()
        .filter_map(|contact| score_contact(&target, contact, &cfg.signals.contact))
        .collect();
    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    matches
}

/// Contacts affiliated with the primary program, or the whole pool when
/// there is no primary program or nobody is affiliated with it.
pub fn scope_contacts<'a>(primary: Option<&Program>, contacts: &'a [Contact]) -> Vec<&'a Contact> {
    if let Some(program) = primary {
        let affiliated: Vec<&Contact> = contacts
            .iter()
            .filter(|c| is_affiliated(c, program))
            .collect();
        if !affiliated.is_empty() {
            return affiliated;
        }
    }
    contacts.iter().collect()
}

/// Combine ranked matches into one confidence.
///
/// Returns 0 when nothing matched. `programs` is expected ranked, so the
/// primary program is its first entry.
pub fn overall_confidence(
    programs: &[ProgramMatch],
    contacts: &[ContactMatch],
    related: &[RelatedJob],
    weights: &OverallWeights,
) -> Confidence {
    if programs.is_empty() && contacts.is_empty() && related.is_empty() {
        return 0;
    }

    let primary = programs
        .iter()
        .find(|p| p.is_primary)
        .or_else(|| programs.first())
        .map(|p| f64::from(p.confidence))
        .unwrap_or(0.0);

    let avg_contact = if contacts.is_empty() {
        0.0
    } else {
        contacts.iter().map(|c| f64::from(c.confidence)).sum::<f64>() / contacts.len() as f64
    };

    let boost = if related.is_empty() {
        0.0
    } else {
        weights.related_boost
    };

    clamp_confidence(primary * weights.program + avg_contact * weights.contact + boost)
}
