//! Job -> program matching.
//!
//! Each signal is evaluated independently and contributes a bounded number
//! of points from [`ProgramWeights`]. A program with no matched signal is not
//! a match. Missing or unparseable fields simply leave their signal unmatched.

use std::collections::BTreeSet;

use model::{ClearanceLevel, Job, Program, MAX_CONFIDENCE};

use crate::config::ProgramWeights;
use crate::text::{contains_phrase, keywords_of, normalize, normalize_opt, phrase_overlap};
use crate::types::{MatchSignal, ProgramMatch, SignalKind};

/// Shortest normalized name fragment allowed to produce a partial match.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Normalized view of a job, computed once and reused across programs.
#[derive(Debug, Clone)]
pub struct JobProfile {
    program: Option<String>,
    title: String,
    agency: Option<String>,
    sites: Vec<String>,
    keywords: BTreeSet<String>,
    clearance: Option<ClearanceLevel>,
}

impl JobProfile {
    pub fn new(job: &Job) -> Self {
        let sites = [job.location.as_deref(), job.city.as_deref()]
            .into_iter()
            .filter_map(normalize_opt)
            .collect();
        Self {
            program: normalize_opt(job.resolve_program_name()),
            title: normalize(&job.title),
            agency: normalize_opt(job.agency.as_deref()),
            sites,
            keywords: keywords_of([Some(job.title.as_str()), job.functional_area.as_deref()]),
            clearance: job.clearance.as_deref().and_then(ClearanceLevel::parse),
        }
    }
}

/// Score one program against a job; `None` when no signal fired.
pub fn score_program(job: &Job, program: &Program, weights: &ProgramWeights) -> Option<ProgramMatch> {
    score_program_with_profile(&JobProfile::new(job), program, weights)
}

/// Score every candidate program, keeping matches in candidate order.
///
/// Ranking and primary selection belong to the caller.
pub fn match_programs(job: &Job, programs: &[Program], weights: &ProgramWeights) -> Vec<ProgramMatch> {
    let profile = JobProfile::new(job);
    programs
        .iter()
        .filter_map(|program| score_program_with_profile(&profile, program, weights))
        .collect()
}

pub fn score_program_with_profile(
    profile: &JobProfile,
    program: &Program,
    weights: &ProgramWeights,
) -> Option<ProgramMatch> {
    let signals: Vec<MatchSignal> = evaluate_signals(profile, program, weights)
        .into_iter()
        .filter(|s| s.matched)
        .collect();
    if signals.is_empty() {
        return None;
    }

    let total: u32 = signals.iter().map(|s| u32::from(s.points)).sum();
    let confidence = total.min(u32::from(MAX_CONFIDENCE)) as u8;

    Some(ProgramMatch {
        program: program.clone(),
        confidence,
        signals,
        is_primary: false,
    })
}

/// Evaluate every program signal, matched or not.
pub fn evaluate_signals(
    profile: &JobProfile,
    program: &Program,
    weights: &ProgramWeights,
) -> Vec<MatchSignal> {
    vec![
        name_signal(profile, program, weights),
        agency_signal(profile, program, weights),
        location_signal(profile, program, weights),
        keyword_signal(profile, program, weights),
        clearance_signal(profile, program, weights),
    ]
}

fn name_signal(profile: &JobProfile, program: &Program, weights: &ProgramWeights) -> MatchSignal {
    let display = program.display_name();
    let candidates: Vec<String> = [Some(program.name.as_str()), program.acronym()]
        .into_iter()
        .filter_map(normalize_opt)
        .collect();

    if let Some(job_program) = profile.program.as_deref() {
        if candidates.iter().any(|c| c == job_program) {
            return MatchSignal::fired(
                SignalKind::ProgramNameExact,
                weights.name_exact,
                format!("Job program matches {display}"),
            );
        }
        let partial = candidates.iter().any(|c| {
            c.len().min(job_program.len()) >= MIN_PARTIAL_LEN && phrase_overlap(c, job_program)
        });
        if partial {
            return MatchSignal::fired(
                SignalKind::ProgramNamePartial,
                weights.name_partial,
                format!("Job program partially matches {display}"),
            );
        }
    }

    if let Some(acronym) = normalize_opt(program.acronym()) {
        if acronym.len() >= MIN_PARTIAL_LEN && contains_phrase(&profile.title, &acronym) {
            return MatchSignal::fired(
                SignalKind::ProgramNamePartial,
                weights.name_partial,
                format!("Job title mentions {display}"),
            );
        }
    }

    MatchSignal::missed(SignalKind::ProgramNameExact, "No program name or acronym alignment")
}

fn agency_signal(profile: &JobProfile, program: &Program, weights: &ProgramWeights) -> MatchSignal {
    match (profile.agency.as_deref(), normalize_opt(program.agency.as_deref())) {
        (Some(job_agency), Some(program_agency)) if phrase_overlap(job_agency, &program_agency) => {
            MatchSignal::fired(
                SignalKind::Agency,
                weights.agency,
                format!(
                    "Agency alignment ({})",
                    program.agency.as_deref().unwrap_or_default().trim()
                ),
            )
        }
        _ => MatchSignal::missed(SignalKind::Agency, "Agency does not align"),
    }
}

fn location_signal(profile: &JobProfile, program: &Program, weights: &ProgramWeights) -> MatchSignal {
    let Some(program_site) = normalize_opt(program.location.as_deref()) else {
        return MatchSignal::missed(SignalKind::Location, "Program location unknown");
    };
    if profile
        .sites
        .iter()
        .any(|site| phrase_overlap(site, &program_site))
    {
        return MatchSignal::fired(
            SignalKind::Location,
            weights.location,
            format!(
                "Location alignment ({})",
                program.location.as_deref().unwrap_or_default().trim()
            ),
        );
    }
    MatchSignal::missed(SignalKind::Location, "Location does not align")
}

fn keyword_signal(profile: &JobProfile, program: &Program, weights: &ProgramWeights) -> MatchSignal {
    let program_keywords = keywords_of([program.program_type.as_deref(), program.notes.as_deref()]);
    let shared: Vec<&String> = profile.keywords.intersection(&program_keywords).collect();
    let hits = u32::try_from(shared.len()).unwrap_or(u32::MAX);
    let points = hits
        .saturating_mul(u32::from(weights.keyword_per_hit))
        .min(u32::from(weights.keyword_max)) as u8;

    if points == 0 {
        return MatchSignal::missed(SignalKind::KeywordOverlap, "No keyword overlap");
    }
    let listed: Vec<&str> = shared.iter().map(|s| s.as_str()).collect();
    MatchSignal::fired(
        SignalKind::KeywordOverlap,
        points,
        format!("Keyword overlap: {}", listed.join(", ")),
    )
}

fn clearance_signal(profile: &JobProfile, program: &Program, weights: &ProgramWeights) -> MatchSignal {
    let required: Vec<ClearanceLevel> = program
        .clearance_requirements
        .iter()
        .filter_map(|r| ClearanceLevel::parse(r))
        .collect();

    match (profile.clearance, required.iter().max()) {
        (Some(job_level), Some(_)) if required.contains(&job_level) => MatchSignal::fired(
            SignalKind::ClearanceExact,
            weights.clearance_exact,
            format!("Clearance matches ({})", job_level.as_str()),
        ),
        (Some(job_level), Some(allowed)) if job_level < *allowed => MatchSignal::fired(
            SignalKind::ClearanceCompatible,
            weights.clearance_compatible,
            format!(
                "Clearance compatible ({} within {})",
                job_level.as_str(),
                allowed.as_str()
            ),
        ),
        _ => MatchSignal::missed(SignalKind::ClearanceExact, "Clearance not compatible"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dcgs() -> Program {
        Program::new("P1", "Distributed Common Ground System - Army")
            .with_acronym("DCGS-A")
            .with_agency("U.S. Army")
            .with_location("Wright-Patterson AFB")
            .with_clearance_requirement("TS/SCI")
            .with_program_type("Intelligence Analysis")
    }

    #[test]
    fn acronym_clearance_and_location_score_high() {
        let job = Job::new("J1", "Intelligence Analyst")
            .with_program("DCGS-A")
            .with_clearance("TS/SCI")
            .with_location("Wright-Patterson AFB");

        let hit = score_program(&job, &dcgs(), &ProgramWeights::default()).expect("match");
        assert!(hit.confidence >= 80, "confidence {}", hit.confidence);
        assert!(hit.has_signal(SignalKind::ProgramNameExact));
        assert!(hit.has_signal(SignalKind::ClearanceExact));
        assert!(hit.has_signal(SignalKind::Location));
        assert!(hit.signals.iter().all(|s| s.matched));
    }

    #[test]
    fn full_name_matches_exactly_too() {
        let job = Job::new("J1", "Analyst").with_program("distributed common ground system army");
        let hit = score_program(&job, &dcgs(), &ProgramWeights::default()).expect("match");
        assert!(hit.has_signal(SignalKind::ProgramNameExact));
    }

    #[test]
    fn acronym_in_title_is_partial() {
        let job = Job::new("J1", "DCGS-A Systems Administrator");
        let hit = score_program(&job, &dcgs(), &ProgramWeights::default()).expect("match");
        assert!(hit.has_signal(SignalKind::ProgramNamePartial));
        assert_eq!(hit.confidence, ProgramWeights::default().name_partial);
    }

    #[test]
    fn program_without_any_signal_is_excluded() {
        let job = Job::new("J1", "Chef").with_location("Honolulu");
        assert!(score_program(&job, &dcgs(), &ProgramWeights::default()).is_none());
    }

    #[test]
    fn looser_clearance_scores_below_exact() {
        let weights = ProgramWeights::default();
        let exact = Job::new("J1", "Analyst").with_clearance("TS/SCI");
        let looser = Job::new("J2", "Analyst").with_clearance("Secret");
        let stricter = Job::new("J3", "Analyst").with_clearance("TS/SCI w/ Poly");

        let exact_hit = score_program(&exact, &dcgs(), &weights).expect("exact");
        let looser_hit = score_program(&looser, &dcgs(), &weights).expect("looser");
        assert!(exact_hit.confidence > looser_hit.confidence);
        assert!(looser_hit.has_signal(SignalKind::ClearanceCompatible));
        assert!(score_program(&stricter, &dcgs(), &weights).is_none());
    }

    #[test]
    fn malformed_optional_fields_never_match() {
        let job = Job::new("J1", "")
            .with_agency("   ")
            .with_clearance("pending")
            .with_program("");
        let program = Program::new("P9", "").with_clearance_requirement("");
        assert!(score_program(&job, &program, &ProgramWeights::default()).is_none());
    }

    #[test]
    fn keyword_points_are_capped() {
        let weights = ProgramWeights::default();
        let job = Job::new("J1", "Cyber network defense analyst")
            .with_functional_area("Network Operations");
        let program = Program::new("P2", "Shield")
            .with_program_type("Cyber network defense")
            .with_notes("analyst operations");
        let hit = score_program(&job, &program, &weights).expect("keywords");
        assert!(hit.has_signal(SignalKind::KeywordOverlap));
        assert_eq!(hit.confidence, weights.keyword_max);
    }

    #[test]
    fn agency_partial_phrase_counts() {
        let job = Job::new("J1", "Analyst").with_agency("Army");
        let hit = score_program(&job, &dcgs(), &ProgramWeights::default()).expect("agency");
        assert!(hit.has_signal(SignalKind::Agency));
    }

    #[test]
    fn empty_candidate_list_yields_nothing() {
        let job = Job::new("J1", "Analyst").with_program("DCGS-A");
        assert!(match_programs(&job, &[], &ProgramWeights::default()).is_empty());
    }

    #[test]
    fn match_programs_keeps_candidate_order() {
        let job = Job::new("J1", "Analyst").with_location("Fort Meade");
        let a = Program::new("PA", "Alpha").with_location("Fort Meade");
        let b = Program::new("PB", "Bravo").with_location("Fort Meade, MD");
        let c = Program::new("PC", "Charlie").with_location("Tampa");
        let hits = match_programs(&job, &[a, b, c], &ProgramWeights::default());
        let ids: Vec<&str> = hits.iter().map(|h| h.program.id.as_str()).collect();
        assert_eq!(ids, vec!["PA", "PB"]);
        assert!(hits.iter().all(|h| !h.is_primary));
    }
}
