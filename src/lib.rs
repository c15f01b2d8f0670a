//! Workspace umbrella crate for the BD correlation engine.
//!
//! Links job postings to the programs they likely support, the contacts
//! worth reaching, and related postings (past performance, competitors,
//! similar roles). The stages live in their own crates and are re-exported
//! here:
//!
//! | Crate       | Role                                                   |
//! |-------------|--------------------------------------------------------|
//! | `model`     | jobs, programs, contacts, confidence and priority types |
//! | `signals`   | per-candidate matchers and role inference              |
//! | `correlate` | single-job builder, batch correlator, stats, metrics   |
//! | `cache`     | all-or-nothing TTL cache of correlations               |
//!
//! This crate adds the [`Correlator`] facade, YAML configuration
//! ([`BdcorrConfig`]) and JSON dataset loading ([`Dataset`]).
//!
//! ```
//! use bdcorr::{CorrelationOptions, Correlator, Job, Program};
//!
//! let jobs = vec![Job::new("J1", "Intelligence Analyst").with_program("DCGS-A")];
//! let programs = vec![Program::new("P1", "Distributed Common Ground System - Army")
//!     .with_acronym("DCGS-A")];
//!
//! let mut correlator = Correlator::new(jobs, programs, Vec::new(), CorrelationOptions::default())?;
//! assert_eq!(correlator.stats().jobs_with_programs, 1);
//!
//! let top = correlator.get_top_matches("J1")?.expect("known job");
//! assert_eq!(top.primary_program.map(|p| p.program.id), Some("P1".to_string()));
//! # Ok::<(), bdcorr::CorrelatorError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod facade;

pub use cache::{CacheStats, Clock, CorrelationCache, ManualClock, SystemClock, DEFAULT_TTL};
pub use correlate::{
    correlate_all_jobs, correlate_job, correlate_job_among, overall_confidence,
    set_correlation_metrics, BatchCorrelation, CorrelateError, CorrelationConfig, CorrelationMetrics, CorrelationStats,
    JobCorrelation, OverallWeights, DEFAULT_OVERALL_WEIGHTS,
};
pub use model::{
    clamp_confidence, BdPriority, ClearanceLevel, Confidence, ConfidenceBand, Contact,
    ContactChannels, Job, PriorityLabel, Program, DEFAULT_TIER, MAX_CONFIDENCE, MIN_TIER,
};
pub use signals::{
    ContactMatch, ContactRole, ContactWeights, MatchSignal, ProgramMatch, ProgramWeights,
    RelatedJob, RelatedWeights, RelationshipKind, SignalError, SignalKind, SignalWeights,
};

pub use crate::config::{
    BdcorrConfig, CacheYamlConfig, ConfigLoadError, CorrelationYamlConfig, FacadeYamlConfig,
};
pub use crate::dataset::Dataset;
pub use crate::error::{CorrelatorError, DatasetError};
pub use crate::facade::{CorrelationOptions, Correlator, JobFilter, TopMatches, TOP_MATCH_LIMIT};
