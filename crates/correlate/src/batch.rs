use std::time::Instant;

use model::{Contact, Job, Program};
use rayon::prelude::*;
use tracing::{info, warn, Level};

use crate::builder::correlate_job;
use crate::config::CorrelationConfig;
use crate::error::CorrelateError;
use crate::metrics::metrics_recorder;
use crate::types::{BatchCorrelation, CorrelationStats, JobCorrelation};

/// Correlate every job against the full candidate pools.
///
/// Each job sees every program and contact, and related-job discovery runs
/// against the whole `jobs` slice. `correlations` keeps the order of `jobs`
/// whether or not the batch runs in parallel.
pub fn correlate_all_jobs(
    jobs: &[Job],
    programs: &[Program],
    contacts: &[Contact],
    cfg: &CorrelationConfig,
) -> Result<BatchCorrelation, CorrelateError> {
    let start = Instant::now();
    if let Err(err) = cfg.validate() {
        warn!(error = %err, job_count = jobs.len(), "correlate_failure");
        return Err(err);
    }

    let span = tracing::span!(
        Level::INFO,
        "correlate.batch",
        job_count = jobs.len(),
        program_count = programs.len(),
        contact_count = contacts.len(),
        parallel = cfg.use_parallel
    );
    let _guard = span.enter();

    let correlations: Vec<JobCorrelation> = if cfg.use_parallel {
        jobs.par_iter()
            .map(|job| correlate_job(job, programs, contacts, jobs, cfg))
            .collect()
    } else {
        jobs.iter()
            .map(|job| correlate_job(job, programs, contacts, jobs, cfg))
            .collect()
    };
    let stats = CorrelationStats::from_correlations(&correlations);

    let latency = start.elapsed();
    info!(
        total_jobs = stats.total_jobs,
        jobs_with_programs = stats.jobs_with_programs,
        jobs_with_contacts = stats.jobs_with_contacts,
        average_confidence = stats.average_confidence,
        elapsed_micros = latency.as_micros() as u64,
        "correlate_success"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_batch(jobs.len(), latency, &stats);
    }

    Ok(BatchCorrelation {
        correlations,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J1", "Intelligence Analyst")
                .with_program("DCGS-A")
                .with_company("Acme")
                .with_location("Fort Belvoir"),
            Job::new("J2", "Pastry Chef"),
            Job::new("J3", "Systems Engineer")
                .with_program("GCCS-J")
                .with_company("Globex")
                .with_location("Fort Belvoir"),
        ]
    }

    fn sample_programs() -> Vec<Program> {
        vec![
            Program::new("P1", "Distributed Common Ground System - Army").with_acronym("DCGS-A"),
            Program::new("P2", "Global Command and Control System - Joint").with_acronym("GCCS-J"),
        ]
    }

    #[test]
    fn empty_batch_yields_zero_stats() {
        let batch = correlate_all_jobs(&[], &sample_programs(), &[], &CorrelationConfig::default())
            .expect("batch");
        assert!(batch.correlations.is_empty());
        assert_eq!(batch.stats.total_jobs, 0);
        assert_eq!(batch.stats.program_match_rate, 0);
        assert_eq!(batch.stats.average_confidence, 0);
    }

    #[test]
    fn order_and_stats_follow_input() {
        let jobs = sample_jobs();
        let contacts = vec![Contact::new("C1", "Alex").with_program("DCGS-A")];
        let batch = correlate_all_jobs(&jobs, &sample_programs(), &contacts, &CorrelationConfig::default())
            .expect("batch");

        let ids: Vec<&str> = batch.correlations.iter().map(|c| c.job.id.as_str()).collect();
        assert_eq!(ids, vec!["J1", "J2", "J3"]);
        assert_eq!(batch.stats.total_jobs, jobs.len());
        assert_eq!(batch.stats.jobs_with_programs, 2);
        assert_eq!(batch.stats.program_match_rate, 67);
        assert_eq!(batch.stats.jobs_with_contacts, 1);
        assert_eq!(batch.stats.contact_match_rate, 33);
        // J1 and J3 share a location across companies.
        assert_eq!(batch.stats.jobs_with_related_jobs, 2);
    }

    #[test]
    fn parallel_matches_sequential() {
        let jobs = sample_jobs();
        let programs = sample_programs();
        let sequential = correlate_all_jobs(&jobs, &programs, &[], &CorrelationConfig::default())
            .expect("sequential");
        let parallel = correlate_all_jobs(
            &jobs,
            &programs,
            &[],
            &CorrelationConfig::default().with_parallel(true),
        )
        .expect("parallel");
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = CorrelationConfig::default().with_related_job_limit(0);
        let err = correlate_all_jobs(&sample_jobs(), &[], &[], &cfg).expect_err("invalid");
        assert!(matches!(err, CorrelateError::InvalidConfig(_)));
    }
}
