//! Job/program -> contact matching.
//!
//! A contact is scored on program affiliation, location, and company.
//! Seniority only adds points on top of another matched signal, so a
//! contact who shares nothing with the job is never returned.

use model::{Contact, Job, Program, DEFAULT_TIER, MAX_CONFIDENCE};

use crate::config::ContactWeights;
use crate::program::MIN_PARTIAL_LEN;
use crate::role::{infer_role, is_senior_title, RoleContext};
use crate::text::{normalize_opt, phrase_overlap};
use crate::types::{ContactMatch, MatchSignal, SignalKind};

/// Normalized job/program facts a contact is compared against.
#[derive(Debug, Clone, Default)]
pub struct ContactTarget {
    program_names: Vec<String>,
    sites: Vec<String>,
    company: Option<String>,
}

impl ContactTarget {
    pub fn new(job: &Job, primary: Option<&Program>) -> Self {
        let mut program_names: Vec<String> = Vec::new();
        let candidates = [
            job.resolve_program_name(),
            primary.map(|p| p.name.as_str()),
            primary.and_then(Program::acronym),
        ];
        for name in candidates.into_iter().filter_map(normalize_opt) {
            if !program_names.contains(&name) {
                program_names.push(name);
            }
        }
        let sites = [job.location.as_deref(), job.city.as_deref()]
            .into_iter()
            .filter_map(normalize_opt)
            .collect();
        Self {
            program_names,
            sites,
            company: normalize_opt(job.company.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Affiliation {
    Exact,
    Partial,
    None,
}

fn affiliation(contact_program: Option<&str>, names: &[String]) -> Affiliation {
    let Some(program) = normalize_opt(contact_program) else {
        return Affiliation::None;
    };
    if names.iter().any(|n| *n == program) {
        return Affiliation::Exact;
    }
    let partial = names
        .iter()
        .any(|n| n.len().min(program.len()) >= MIN_PARTIAL_LEN && phrase_overlap(n, &program));
    if partial {
        Affiliation::Partial
    } else {
        Affiliation::None
    }
}

/// Whether the contact's program affiliation points at `program`.
pub fn is_affiliated(contact: &Contact, program: &Program) -> bool {
    let names: Vec<String> = [Some(program.name.as_str()), program.acronym()]
        .into_iter()
        .filter_map(normalize_opt)
        .collect();
    affiliation(contact.program(), &names) != Affiliation::None
}

/// Score one contact; `None` when nothing matched.
pub fn score_contact(
    target: &ContactTarget,
    contact: &Contact,
    weights: &ContactWeights,
) -> Option<ContactMatch> {
    let mut signals = Vec::new();

    let affiliation = affiliation(contact.program(), &target.program_names);
    let program_label = contact.program().unwrap_or_default();
    match affiliation {
        Affiliation::Exact => signals.push(MatchSignal::fired(
            SignalKind::ContactProgramExact,
            weights.program_exact,
            format!("Works on {program_label}"),
        )),
        Affiliation::Partial => signals.push(MatchSignal::fired(
            SignalKind::ContactProgramPartial,
            weights.program_partial,
            format!("Works on related program {program_label}"),
        )),
        Affiliation::None => {}
    }

    let location_matched = match normalize_opt(contact.location.as_deref()) {
        Some(location) => target.sites.iter().any(|site| phrase_overlap(site, &location)),
        None => false,
    };
    if location_matched {
        signals.push(MatchSignal::fired(
            SignalKind::ContactLocation,
            weights.location,
            format!(
                "Located at {}",
                contact.location.as_deref().unwrap_or_default().trim()
            ),
        ));
    }

    let company_matched = match (&target.company, normalize_opt(contact.company.as_deref())) {
        (Some(job_company), Some(company)) => *job_company == company,
        _ => false,
    };
    if company_matched {
        signals.push(MatchSignal::fired(
            SignalKind::ContactCompany,
            weights.company,
            format!(
                "Same company ({})",
                contact.company.as_deref().unwrap_or_default().trim()
            ),
        ));
    }

    if signals.is_empty() {
        return None;
    }

    let tier = contact.tier();
    let seniority = (DEFAULT_TIER - tier).saturating_mul(weights.seniority_per_tier);
    if seniority > 0 {
        signals.push(MatchSignal::fired(
            SignalKind::Seniority,
            seniority,
            format!("Tier {tier} contact"),
        ));
    }

    let total: u32 = signals.iter().map(|s| u32::from(s.points)).sum();
    let confidence = total.min(u32::from(MAX_CONFIDENCE)) as u8;

    let role = infer_role(&RoleContext {
        program_exact: affiliation == Affiliation::Exact,
        program_matched: affiliation != Affiliation::None,
        location_matched,
        company_matched,
        tier,
        senior_title: is_senior_title(contact.title.as_deref()),
    });

    Some(ContactMatch {
        contact: contact.clone(),
        confidence,
        role,
        signals,
    })
}

/// Score every candidate contact, keeping matches in candidate order.
pub fn match_contacts(
    job: &Job,
    primary: Option<&Program>,
    contacts: &[Contact],
    weights: &ContactWeights,
) -> Vec<ContactMatch> {
    let target = ContactTarget::new(job, primary);
    contacts
        .iter()
        .filter_map(|contact| score_contact(&target, contact, weights))
        .collect()
}
