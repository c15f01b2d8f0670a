//! Related-job discovery.
//!
//! Relationship kinds are mutually exclusive and checked in precedence
//! order: PTS history, then competitor, then similar role.

use std::collections::BTreeSet;

use model::{clamp_confidence, Job};

use crate::config::RelatedWeights;
use crate::text::{jaccard, keywords, normalize_opt, same_text};
use crate::types::{RelatedJob, RelationshipKind};

/// Functional overlap in `(0, 1]`, or `None` when the two jobs share no
/// functional ground.
///
/// Equal functional areas count as full overlap; otherwise the keyword
/// Jaccard of the areas is used, falling back to the keyword Jaccard of the
/// titles when either area is missing or they share nothing.
pub fn functional_overlap(a: &Job, b: &Job) -> Option<f64> {
    if same_text(a.functional_area.as_deref(), b.functional_area.as_deref()) {
        return Some(1.0);
    }
    let area_a = keyword_set(a.functional_area.as_deref());
    let area_b = keyword_set(b.functional_area.as_deref());
    let area_overlap = jaccard(&area_a, &area_b);
    if area_overlap > 0.0 {
        return Some(area_overlap);
    }
    let title_overlap = jaccard(&keywords(&a.title), &keywords(&b.title));
    (title_overlap > 0.0).then_some(title_overlap)
}

fn keyword_set(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(keywords).unwrap_or_default()
}

fn same_program(a: &Job, b: &Job) -> bool {
    same_text(a.resolve_program_name(), b.resolve_program_name())
}

fn same_location(a: &Job, b: &Job) -> bool {
    match (normalize_opt(a.site()), normalize_opt(b.site())) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn company(job: &Job) -> Option<&str> {
    job.company.as_deref().map(str::trim).filter(|c| !c.is_empty())
}

/// Classify `other` relative to `job`. Self-matches are never related.
///
/// Every relationship compares employers, so both postings need a company;
/// a missing one never counts as a different company.
pub fn classify_relationship(job: &Job, other: &Job, weights: &RelatedWeights) -> Option<RelatedJob> {
    if job.id == other.id {
        return None;
    }
    let (own_company, other_company) = (company(job)?, company(other)?);

    let same_company = same_text(Some(own_company), Some(other_company));
    let overlap = functional_overlap(job, other);
    let program = same_program(job, other);
    let location = same_location(job, other);

    let (kind, label, score) = if let (true, Some(overlap)) = (same_company, overlap) {
        (
            RelationshipKind::PtsHistory,
            format!("PTS history at {other_company}"),
            weights.pts_base + weights.pts_overlap * overlap,
        )
    } else if !same_company && (program || location) {
        let score = match (program, location) {
            (true, true) => weights.competitor_program_and_location,
            (true, false) => weights.competitor_program,
            _ => weights.competitor_location,
        };
        (
            RelationshipKind::Competitor,
            format!("Competitor posting ({other_company})"),
            score,
        )
    } else if let (false, false, Some(overlap)) = (same_company, program, overlap) {
        (
            RelationshipKind::SimilarRole,
            format!("Similar role at {other_company}"),
            weights.similar_base + weights.similar_overlap * overlap,
        )
    } else {
        return None;
    };

    Some(RelatedJob {
        job: other.clone(),
        kind,
        label,
        confidence: clamp_confidence(score),
    })
}

/// Classify every candidate, keeping related ones in input order.
pub fn find_related_jobs<'a>(
    job: &Job,
    candidates: impl IntoIterator<Item = &'a Job>,
    weights: &RelatedWeights,
) -> Vec<RelatedJob> {
    candidates
        .into_iter()
        .filter_map(|other| classify_relationship(job, other, weights))
        .collect()
}
