use std::sync::Arc;
use std::time::Duration;

use bdcorr::{
    Contact, CorrelationCache, CorrelationOptions, Correlator, Job, ManualClock, Program,
    TOP_MATCH_LIMIT,
};

mod common;

fn correlator(options: CorrelationOptions) -> Correlator {
    Correlator::new(common::jobs(), common::programs(), common::contacts(), options)
        .expect("valid options")
}

fn ids<'a>(correlations: impl IntoIterator<Item = &'a bdcorr::JobCorrelation>) -> Vec<&'a str> {
    correlations
        .into_iter()
        .map(|c| c.job.id.as_str())
        .collect()
}

fn with_manual_clock() -> (Correlator, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(CorrelationCache::with_clock(
        Duration::from_secs(300),
        clock.clone(),
    ));
    let correlator = Correlator::with_cache(
        common::jobs(),
        common::programs(),
        common::contacts(),
        CorrelationOptions::default(),
        cache,
    )
    .expect("valid options");
    (correlator, clock)
}

#[test]
fn auto_correlates_on_construction() {
    let correlator = correlator(CorrelationOptions::default());
    assert_eq!(correlator.correlations().len(), 6);
    assert_eq!(correlator.stats().total_jobs, 6);
    assert!(correlator.error().is_none());
    assert!(correlator.cache().is_valid());
    assert_eq!(correlator.cache().len(), 6);
}

#[test]
fn manual_mode_waits_for_refresh() {
    let mut correlator = correlator(CorrelationOptions::default().with_auto_correlate(false));
    assert!(correlator.correlations().is_empty());
    assert!(correlator.cache().is_empty());

    let on_demand = correlator
        .get_correlation("J1")
        .expect("no failure")
        .expect("known job");
    assert_eq!(on_demand.job.id, "J1");
    assert_eq!(correlator.cache().len(), 1);
    assert!(correlator.correlations().is_empty());

    let stats = correlator.refresh().expect("refresh");
    assert_eq!(stats.total_jobs, 6);
    assert_eq!(correlator.correlations().len(), 6);
}

#[test]
fn filter_then_limit_bound_the_input() {
    let acme_only = correlator(
        CorrelationOptions::default()
            .with_filter(|job: &Job| job.company.as_deref() == Some("Acme")),
    );
    assert_eq!(ids(acme_only.correlations()), vec!["J1", "J3"]);
    // Related jobs only come from the filtered set.
    assert!(acme_only.correlations()[0].related_jobs.is_empty());

    let limited = correlator(CorrelationOptions::default().with_limit(2));
    assert_eq!(ids(limited.correlations()), vec!["J1", "J2"]);
    assert_eq!(limited.stats().total_jobs, 2);

    let both = correlator(
        CorrelationOptions::default()
            .with_filter(|job: &Job| job.company.is_some())
            .with_limit(3),
    );
    assert_eq!(ids(both.correlations()), vec!["J1", "J2", "J3"]);
}

#[test]
fn lookups_respect_filter_and_limit() {
    let mut acme_only = correlator(
        CorrelationOptions::default()
            .with_auto_correlate(false)
            .with_filter(|job: &Job| job.company.as_deref() == Some("Acme")),
    );
    assert!(acme_only.get_correlation("J2").expect("ok").is_none());
    assert!(acme_only.cache().is_empty());
    let j3 = acme_only.get_correlation("J3").expect("ok").expect("kept");
    assert!(j3.related_jobs.iter().all(|r| r.job.id == "J1"));
    assert_eq!(acme_only.cache().len(), 1);

    let mut limited = correlator(CorrelationOptions::default().with_limit(2));
    limited.clear_cache();
    assert!(limited.get_correlation("J4").expect("ok").is_none());
    assert!(limited.get_correlation("J2").expect("ok").is_some());
    assert!(limited.error().is_none());
}

#[test]
fn repeated_lookups_hit_the_cache() {
    let mut correlator = correlator(CorrelationOptions::default());
    let first = correlator.get_correlation("J2").expect("ok").expect("known");
    let second = correlator.get_correlation("J2").expect("ok").expect("known");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(correlator.cache().stats().hits, 2);
    assert_eq!(correlator.cache().stats().populations, 1);
}

#[test]
fn unknown_job_is_none() {
    let mut correlator = correlator(CorrelationOptions::default());
    assert!(correlator.get_correlation("nope").expect("ok").is_none());
    assert!(correlator.get_top_matches("nope").expect("ok").is_none());
    assert!(correlator.error().is_none());
}

#[test]
fn expired_cache_recomputes() {
    let (mut correlator, clock) = with_manual_clock();
    let before = correlator.get_correlation("J3").expect("ok").expect("known");

    clock.advance(Duration::from_secs(299));
    let still = correlator.get_correlation("J3").expect("ok").expect("known");
    assert!(Arc::ptr_eq(&before, &still));

    clock.advance(Duration::from_secs(1));
    assert!(correlator.cache().is_expired());
    let after = correlator.get_correlation("J3").expect("ok").expect("known");
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
    assert!(correlator.cache().is_valid());
    assert_eq!(correlator.cache().stats().populations, 2);
}

#[test]
fn cleared_cache_recomputes_single_job() {
    let (mut correlator, _clock) = with_manual_clock();
    let before = correlator.get_correlation("J1").expect("ok").expect("known");
    correlator.clear_cache();
    assert!(correlator.cache().is_empty());
    assert_eq!(correlator.correlations().len(), 6);

    let after = correlator.get_correlation("J1").expect("ok").expect("known");
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
    assert_eq!(correlator.cache().len(), 1);
}

#[test]
fn refresh_overwrites_cache() {
    let mut correlator = correlator(CorrelationOptions::default());
    let before = correlator.get_correlation("J4").expect("ok").expect("known");
    correlator.refresh().expect("refresh");
    let after = correlator.get_correlation("J4").expect("ok").expect("known");
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(correlator.cache().stats().populations, 2);
}

#[test]
fn set_inputs_replaces_dataset() {
    let mut correlator = correlator(CorrelationOptions::default());
    correlator
        .set_inputs(vec![Job::new("N1", "Pastry Chef")], common::programs(), Vec::new())
        .expect("set inputs");
    assert_eq!(ids(correlator.correlations()), vec!["N1"]);
    assert_eq!(correlator.cache().len(), 1);
    assert!(correlator.get_correlation("J1").expect("ok").is_none());
}

#[test]
fn top_matches_are_capped() {
    let job = Job::new("J1", "Intelligence Analyst")
        .with_program("DCGS-A")
        .with_company("Acme");
    let program = Program::new("P1", "Distributed Common Ground System - Army").with_acronym("DCGS-A");
    let contacts: Vec<Contact> = (0..8)
        .map(|i| Contact::new(format!("C{i}"), format!("Analyst {i}")).with_program("DCGS-A"))
        .collect();
    let mut related_jobs: Vec<Job> = (0..8)
        .map(|i| Job::new(format!("R{i}"), "Cook").with_program("DCGS-A").with_company(format!("Co{i}")))
        .collect();
    related_jobs.insert(0, job);

    let mut correlator = Correlator::new(
        related_jobs,
        vec![program],
        contacts,
        CorrelationOptions::default(),
    )
    .expect("valid");
    let top = correlator.get_top_matches("J1").expect("ok").expect("known");
    assert_eq!(top.primary_program.expect("primary").program.id, "P1");
    assert_eq!(top.contacts.len(), TOP_MATCH_LIMIT);
    assert_eq!(top.related_jobs.len(), TOP_MATCH_LIMIT);

    let full = correlator.get_correlation("J1").expect("ok").expect("known");
    assert_eq!(full.contacts.len(), 8);
    assert_eq!(full.related_jobs.len(), 8);
}

#[test]
fn top_matches_without_program() {
    let mut correlator = correlator(CorrelationOptions::default());
    let top = correlator.get_top_matches("J5").expect("ok").expect("known");
    assert!(top.primary_program.is_none());
    assert!(top.contacts.is_empty());
    assert!(top.related_jobs.is_empty());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let correlator = correlator(CorrelationOptions::default());
    assert_eq!(correlator.search_correlations("").len(), 6);
    assert_eq!(correlator.search_correlations("   ").len(), 6);
    // company
    assert_eq!(ids(correlator.search_correlations("ACME")), vec!["J1", "J3"]);
    // title
    assert_eq!(ids(correlator.search_correlations("pastry")), vec!["J5"]);
    // matched contact name
    assert_eq!(ids(correlator.search_correlations("alex kim")), vec!["J1", "J2"]);
    // matched program name
    assert_eq!(
        ids(correlator.search_correlations("regional security")),
        vec!["J3", "J4", "J6"]
    );
    assert!(correlator.search_correlations("zzz").is_empty());
}

#[test]
fn program_and_confidence_queries() {
    let correlator = correlator(CorrelationOptions::default());
    assert_eq!(ids(correlator.correlations_for_program("P2")), vec!["J3", "J6"]);
    assert!(correlator.correlations_for_program("P404").is_empty());

    let strong = correlator.with_min_confidence(80);
    assert_eq!(ids(strong.iter().copied()), vec!["J1", "J2", "J3"]);
    assert_eq!(correlator.with_min_confidence(0).len(), 6);
}

#[test]
fn priority_ranking_then_confidence() {
    let correlator = correlator(CorrelationOptions::default());
    let ranked = correlator.ranked_by_priority();
    assert_eq!(ids(ranked), vec!["J1", "J3", "J2", "J4", "J6", "J5"]);
}
