//! # Job Correlation (`correlate`)
//!
//! Turns the per-candidate scores from the `signals` crate into one
//! [`JobCorrelation`] per job and aggregates a batch into
//! [`CorrelationStats`].
//!
//! ## Pipeline
//!
//! 1. Match programs, rank them by confidence (stable, so ties favor the
//!    program listed first) and mark the top entry primary.
//! 2. Match contacts, scoped to the primary program's affiliates when any
//!    exist, otherwise against the whole pool.
//! 3. Discover related jobs in the batch, rank and cap them at
//!    [`CorrelationConfig::related_job_limit`].
//! 4. Combine everything into an overall confidence with
//!    [`OverallWeights`].
//!
//! [`correlate_job`] is pure. [`correlate_all_jobs`] validates the config,
//! optionally fans out across rayon, logs a `correlate_success` event and
//! reports to the installed [`CorrelationMetrics`] recorder.
//!
//! ## Example
//!
//! ```
//! use correlate::{correlate_all_jobs, CorrelationConfig};
//! use model::{Job, Program};
//!
//! let jobs = vec![Job::new("J1", "Analyst").with_program("DCGS-A")];
//! let programs = vec![Program::new("P1", "Distributed Common Ground System - Army")
//!     .with_acronym("DCGS-A")];
//!
//! let batch = correlate_all_jobs(&jobs, &programs, &[], &CorrelationConfig::default())?;
//! assert_eq!(batch.stats.total_jobs, 1);
//! assert!(batch.correlations[0].primary_program().is_some());
//! # Ok::<(), correlate::CorrelateError>(())
//! ```

mod batch;
mod builder;
mod config;
mod error;
mod metrics;
mod types;

pub use crate::batch::correlate_all_jobs;
pub use crate::builder::{correlate_job, correlate_job_among, overall_confidence, scope_contacts};
pub use crate::config::{CorrelationConfig, OverallWeights, DEFAULT_OVERALL_WEIGHTS};
pub use crate::error::CorrelateError;
pub use crate::metrics::{set_correlation_metrics, CorrelationMetrics};
pub use crate::types::{BatchCorrelation, CorrelationStats, JobCorrelation};
