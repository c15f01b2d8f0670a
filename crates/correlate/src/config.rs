use serde::{Deserialize, Serialize};
use signals::SignalWeights;

use crate::error::CorrelateError;

/// Weights combining a job's matches into its overall confidence.
///
/// `overall = primary_program * program + avg_contact * contact
///            + related_boost (when any related job exists)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    /// Share of the primary program confidence.
    pub program: f64,
    /// Share of the average contact confidence.
    pub contact: f64,
    /// Flat points added when at least one related job was found.
    pub related_boost: f64,
}

/// Default weight table for [`OverallWeights`].
pub const DEFAULT_OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    program: 0.7,
    contact: 0.2,
    related_boost: 10.0,
};

impl Default for OverallWeights {
    fn default() -> Self {
        DEFAULT_OVERALL_WEIGHTS
    }
}

impl OverallWeights {
    pub fn validate(&self) -> Result<(), CorrelateError> {
        for (name, value) in [
            ("program", self.program),
            ("contact", self.contact),
            ("related_boost", self.related_boost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CorrelateError::InvalidConfig(format!(
                    "overall.{name} must be a non-negative number"
                )));
            }
        }
        if self.program + self.contact > 1.0 + f64::EPSILON {
            return Err(CorrelateError::InvalidConfig(
                "overall.program + overall.contact must be <= 1.0".into(),
            ));
        }
        if self.program <= self.contact {
            return Err(CorrelateError::InvalidConfig(
                "overall.program must outweigh overall.contact".into(),
            ));
        }
        if self.related_boost > 20.0 {
            return Err(CorrelateError::InvalidConfig(
                "overall.related_boost must be <= 20".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for building correlations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Configuration schema version. Bump when scoring changes.
    pub version: u32,
    #[serde(default)]
    pub signals: SignalWeights,
    #[serde(default)]
    pub overall: OverallWeights,
    /// Maximum related jobs kept per correlation.
    #[serde(default = "CorrelationConfig::default_related_job_limit")]
    pub related_job_limit: usize,
    /// Run batch correlation across the rayon thread pool. Output order is
    /// identical either way.
    #[serde(default)]
    pub use_parallel: bool,
}

impl CorrelationConfig {
    pub(crate) fn default_related_job_limit() -> usize {
        10
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_related_job_limit(mut self, limit: usize) -> Self {
        self.related_job_limit = limit;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_signals(mut self, signals: SignalWeights) -> Self {
        self.signals = signals;
        self
    }

    pub fn with_overall(mut self, overall: OverallWeights) -> Self {
        self.overall = overall;
        self
    }

    pub fn validate(&self) -> Result<(), CorrelateError> {
        if self.version == 0 {
            return Err(CorrelateError::InvalidConfig(
                "version must be >= 1".into(),
            ));
        }
        if self.related_job_limit == 0 {
            return Err(CorrelateError::InvalidConfig(
                "related_job_limit must be greater than zero".into(),
            ));
        }
        self.signals.validate()?;
        self.overall.validate()
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            version: 1,
            signals: SignalWeights::default(),
            overall: OverallWeights::default(),
            related_job_limit: Self::default_related_job_limit(),
            use_parallel: false,
        }
    }
}
