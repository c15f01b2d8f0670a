//! The [`Correlator`] facade.
//!
//! Owns one dataset (jobs, programs, contacts), correlates it in batch, and
//! answers per-job queries through a shared [`CorrelationCache`]. Failures
//! during scoring, including panics, are caught here: the facade reports a
//! [`CorrelatorError`], records its message in [`Correlator::error`], and
//! keeps serving its last good correlations.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use cache::CorrelationCache;
use correlate::{
    correlate_all_jobs, correlate_job_among, CorrelationConfig, CorrelationStats, JobCorrelation,
};
use model::{Confidence, Contact, Job, Program};
use serde::{Deserialize, Serialize};
use signals::{ContactMatch, ProgramMatch, RelatedJob};
use tracing::{debug, info, warn};

use crate::error::CorrelatorError;

/// Predicate deciding which jobs take part in correlation.
pub type JobFilter = Arc<dyn Fn(&Job) -> bool + Send + Sync>;

/// Entries kept per list by [`Correlator::get_top_matches`].
pub const TOP_MATCH_LIMIT: usize = 5;

/// Facade options.
///
/// `filter` is applied to the job input first, then `limit` truncates what
/// remains; only the surviving jobs are correlated.
#[derive(Clone)]
pub struct CorrelationOptions {
    /// Correlate automatically when inputs or options change. When off,
    /// only [`Correlator::refresh`] recomputes the batch.
    pub auto_correlate: bool,
    pub limit: Option<usize>,
    pub filter: Option<JobFilter>,
    pub config: CorrelationConfig,
}

impl fmt::Debug for CorrelationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorrelationOptions")
            .field("auto_correlate", &self.auto_correlate)
            .field("limit", &self.limit)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("config", &self.config)
            .finish()
    }
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            auto_correlate: true,
            limit: None,
            filter: None,
            config: CorrelationConfig::default(),
        }
    }
}

impl CorrelationOptions {
    pub fn with_auto_correlate(mut self, auto_correlate: bool) -> Self {
        self.auto_correlate = auto_correlate;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Job) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    pub fn with_config(mut self, config: CorrelationConfig) -> Self {
        self.config = config;
        self
    }
}

/// The strongest matches for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMatches {
    pub primary_program: Option<ProgramMatch>,
    pub contacts: Vec<ContactMatch>,
    pub related_jobs: Vec<RelatedJob>,
}

impl TopMatches {
    fn from_correlation(correlation: &JobCorrelation) -> Self {
        Self {
            primary_program: correlation.primary_program().cloned(),
            contacts: correlation
                .contacts
                .iter()
                .take(TOP_MATCH_LIMIT)
                .cloned()
                .collect(),
            related_jobs: correlation
                .related_jobs
                .iter()
                .take(TOP_MATCH_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn guarded<T>(work: impl FnOnce() -> Result<T, CorrelatorError>) -> Result<T, CorrelatorError> {
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(result) => result,
        Err(payload) => Err(CorrelatorError::Panicked(panic_message(payload.as_ref()))),
    }
}

/// Correlation facade over one dataset.
#[derive(Debug)]
pub struct Correlator {
    jobs: Vec<Job>,
    programs: Vec<Program>,
    contacts: Vec<Contact>,
    options: CorrelationOptions,
    cache: Arc<CorrelationCache>,
    correlations: Vec<JobCorrelation>,
    stats: CorrelationStats,
    error: Option<String>,
}

impl Correlator {
    /// Build a correlator with its own cache.
    ///
    /// Returns an error only for an invalid configuration. A failure during
    /// the initial correlation is recorded in [`Correlator::error`].
    pub fn new(
        jobs: Vec<Job>,
        programs: Vec<Program>,
        contacts: Vec<Contact>,
        options: CorrelationOptions,
    ) -> Result<Self, CorrelatorError> {
        Self::with_cache(
            jobs,
            programs,
            contacts,
            options,
            Arc::new(CorrelationCache::new()),
        )
    }

    /// Build a correlator around an injected cache.
    pub fn with_cache(
        jobs: Vec<Job>,
        programs: Vec<Program>,
        contacts: Vec<Contact>,
        options: CorrelationOptions,
        cache: Arc<CorrelationCache>,
    ) -> Result<Self, CorrelatorError> {
        options.config.validate()?;
        let mut correlator = Self {
            jobs,
            programs,
            contacts,
            options,
            cache,
            correlations: Vec::new(),
            stats: CorrelationStats::default(),
            error: None,
        };
        if correlator.options.auto_correlate {
            // Recorded in `error()` on failure.
            let _ = correlator.refresh();
        }
        Ok(correlator)
    }

    /// Current best-known correlations, in effective job order.
    pub fn correlations(&self) -> &[JobCorrelation] {
        &self.correlations
    }

    pub fn stats(&self) -> CorrelationStats {
        self.stats
    }

    /// Message of the most recent failure; cleared by a successful refresh.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cache(&self) -> &Arc<CorrelationCache> {
        &self.cache
    }

    pub fn options(&self) -> &CorrelationOptions {
        &self.options
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Replace the dataset. The cache is cleared, and the batch is
    /// recomputed when `auto_correlate` is set.
    pub fn set_inputs(
        &mut self,
        jobs: Vec<Job>,
        programs: Vec<Program>,
        contacts: Vec<Contact>,
    ) -> Result<(), CorrelatorError> {
        self.jobs = jobs;
        self.programs = programs;
        self.contacts = contacts;
        self.cache.clear();
        if self.options.auto_correlate {
            self.refresh()?;
        }
        Ok(())
    }

    /// Replace the options. Same invalidation rules as [`Self::set_inputs`].
    pub fn set_options(&mut self, options: CorrelationOptions) -> Result<(), CorrelatorError> {
        if let Err(err) = options.config.validate() {
            return Err(self.record_failure(err.into()));
        }
        self.options = options;
        self.cache.clear();
        if self.options.auto_correlate {
            self.refresh()?;
        }
        Ok(())
    }

    /// Jobs that pass the filter, then the limit.
    fn effective_jobs(&self) -> Vec<&Job> {
        let filtered = self
            .jobs
            .iter()
            .filter(|&job| self.options.filter.as_ref().is_none_or(|keep| keep(job)));
        match self.options.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }

    fn record_failure(&mut self, err: CorrelatorError) -> CorrelatorError {
        warn!(error = %err, "correlator_failure");
        self.error = Some(err.to_string());
        err
    }

    /// Recompute every correlation and repopulate the cache.
    pub fn refresh(&mut self) -> Result<CorrelationStats, CorrelatorError> {
        let start = Instant::now();
        let outcome = guarded(|| {
            let jobs: Vec<Job> = self.effective_jobs().into_iter().cloned().collect();
            correlate_all_jobs(&jobs, &self.programs, &self.contacts, &self.options.config)
                .map_err(CorrelatorError::from)
        });

        match outcome {
            Ok(batch) => {
                self.cache.replace_all(batch.correlations.iter().cloned());
                self.correlations = batch.correlations;
                self.stats = batch.stats;
                self.error = None;
                info!(
                    total_jobs = self.stats.total_jobs,
                    elapsed_micros = start.elapsed().as_micros() as u64,
                    "correlator_refresh"
                );
                Ok(self.stats)
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Drop every cached entry. Current correlations are kept.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Correlation for one job id.
    ///
    /// An expired cache is refreshed first. A miss computes this job alone
    /// and caches it. Ids that are unknown, or excluded by the filter or
    /// limit, yield `Ok(None)`.
    pub fn get_correlation(
        &mut self,
        job_id: &str,
    ) -> Result<Option<Arc<JobCorrelation>>, CorrelatorError> {
        if self.cache.is_expired() {
            debug!(job_id, "cache_expired");
            // A failed refresh is recorded; fall through to on-demand work.
            let _ = self.refresh();
        }
        if let Some(hit) = self.cache.get(job_id) {
            return Ok(Some(hit));
        }

        let outcome = guarded(|| {
            self.options.config.validate()?;
            let candidates = self.effective_jobs();
            let correlation = candidates.iter().find(|job| job.id == job_id).map(|&job| {
                correlate_job_among(
                    job,
                    &self.programs,
                    &self.contacts,
                    candidates.iter().copied(),
                    &self.options.config,
                )
            });
            Ok(correlation)
        });

        match outcome {
            Ok(Some(correlation)) => Ok(Some(self.cache.insert(correlation))),
            Ok(None) => Ok(None),
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Primary program plus the top contacts and related jobs for one job.
    pub fn get_top_matches(&mut self, job_id: &str) -> Result<Option<TopMatches>, CorrelatorError> {
        Ok(self
            .get_correlation(job_id)?
            .map(|correlation| TopMatches::from_correlation(&correlation)))
    }

    /// Case-insensitive substring search over job title, company, matched
    /// program names and acronyms, and matched contact names. A blank query
    /// returns every correlation.
    pub fn search_correlations(&self, query: &str) -> Vec<&JobCorrelation> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.correlations.iter().collect();
        }
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        self.correlations
            .iter()
            .filter(|c| {
                hit(c.job.title.as_str())
                    || c.job.company.as_deref().is_some_and(hit)
                    || c.programs
                        .iter()
                        .any(|p| hit(p.program.name.as_str()) || p.program.acronym().is_some_and(hit))
                    || c.contacts.iter().any(|m| hit(m.contact.name.as_str()))
            })
            .collect()
    }

    /// Correlations where `program_id` is among the matched programs.
    pub fn correlations_for_program(&self, program_id: &str) -> Vec<&JobCorrelation> {
        self.correlations
            .iter()
            .filter(|c| c.programs.iter().any(|p| p.program.id == program_id))
            .collect()
    }

    pub fn with_min_confidence(&self, min: Confidence) -> Vec<&JobCorrelation> {
        self.correlations
            .iter()
            .filter(|c| c.overall_confidence >= min)
            .collect()
    }

    /// Correlations ordered by job BD priority, then overall confidence.
    /// Jobs without a priority rank as 0; ties keep their current order.
    pub fn ranked_by_priority(&self) -> Vec<&JobCorrelation> {
        let priority = |c: &JobCorrelation| c.job.bd_priority.as_ref().map_or(0, |p| p.score());
        let mut ranked: Vec<&JobCorrelation> = self.correlations.iter().collect();
        ranked.sort_by(|a, b| {
            priority(*b)
                .cmp(&priority(*a))
                .then_with(|| b.overall_confidence.cmp(&a.overall_confidence))
        });
        ranked
    }
}
