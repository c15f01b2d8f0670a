//! YAML configuration file support.
//!
//! A single file tunes every stage: signal point tables, overall-confidence
//! weights, cache TTL and facade defaults. Every section is optional and
//! falls back to the library defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "capture team"
//!
//! signals:
//!   program:
//!     name_exact: 65
//!     name_partial: 25
//!     agency: 10
//!     location: 10
//!   contact:
//!     program_exact: 60
//!     seniority_per_tier: 3
//!   related:
//!     competitor_program: 75
//!
//! correlation:
//!   version: 1
//!   related_job_limit: 10
//!   use_parallel: false
//!   overall:
//!     program: 0.7
//!     contact: 0.2
//!     related_boost: 10
//!
//! cache:
//!   ttl_secs: 300
//!
//! facade:
//!   auto_correlate: true
//!   limit: 500
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use cache::{CorrelationCache, DEFAULT_TTL};
use correlate::{CorrelateError, CorrelationConfig, OverallWeights};
use serde::{Deserialize, Serialize};
use signals::SignalWeights;
use thiserror::Error;

use crate::facade::CorrelationOptions;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Correlation(#[from] CorrelateError),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BdcorrConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub signals: SignalWeights,

    #[serde(default)]
    pub correlation: CorrelationYamlConfig,

    #[serde(default)]
    pub cache: CacheYamlConfig,

    #[serde(default)]
    pub facade: FacadeYamlConfig,
}

impl BdcorrConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: BdcorrConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.cache.validate()?;
        self.facade.validate()?;
        self.correlation_config().validate()?;
        Ok(())
    }

    /// Builder configuration assembled from the `signals` and `correlation`
    /// sections.
    pub fn correlation_config(&self) -> CorrelationConfig {
        CorrelationConfig {
            version: self.correlation.version,
            signals: self.signals,
            overall: self.correlation.overall,
            related_job_limit: self.correlation.related_job_limit,
            use_parallel: self.correlation.use_parallel,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    pub fn build_cache(&self) -> CorrelationCache {
        CorrelationCache::with_ttl(self.cache_ttl())
    }

    /// Facade options; filters are code-only and start unset.
    pub fn correlation_options(&self) -> CorrelationOptions {
        let mut options = CorrelationOptions::default()
            .with_auto_correlate(self.facade.auto_correlate)
            .with_config(self.correlation_config());
        if let Some(limit) = self.facade.limit {
            options = options.with_limit(limit);
        }
        options
    }
}

impl Default for BdcorrConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            signals: SignalWeights::default(),
            correlation: CorrelationYamlConfig::default(),
            cache: CacheYamlConfig::default(),
            facade: FacadeYamlConfig::default(),
        }
    }
}

/// Correlation builder YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub overall: OverallWeights,

    #[serde(default = "default_related_job_limit")]
    pub related_job_limit: usize,

    #[serde(default)]
    pub use_parallel: bool,
}

impl Default for CorrelationYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            overall: OverallWeights::default(),
            related_job_limit: default_related_job_limit(),
            use_parallel: false,
        }
    }
}

/// Cache YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheYamlConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.ttl_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "cache.ttl_secs must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheYamlConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Facade YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacadeYamlConfig {
    #[serde(default = "true_value")]
    pub auto_correlate: bool,

    /// Maximum number of jobs correlated; unset means all.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl FacadeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.limit == Some(0) {
            return Err(ConfigLoadError::Validation(
                "facade.limit must be >= 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FacadeYamlConfig {
    fn default() -> Self {
        Self {
            auto_correlate: true,
            limit: None,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_related_job_limit() -> usize {
    CorrelationConfig::default().related_job_limit
}
fn default_ttl_secs() -> u64 {
    DEFAULT_TTL.as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
signals:
  program:
    agency: 12
correlation:
  related_job_limit: 5
facade:
  limit: 25
"#;

        let config = BdcorrConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.signals.program.agency, 12);
        assert_eq!(config.signals.program.name_exact, 65);
        assert_eq!(config.correlation.related_job_limit, 5);
        assert!(config.facade.auto_correlate);

        let options = config.correlation_options();
        assert_eq!(options.limit, Some(25));
        assert_eq!(options.config.related_job_limit, 5);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
cache:
  ttl_secs: 60
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = BdcorrConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.build_cache().ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_default_config() {
        let config = BdcorrConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.correlation_config(), CorrelationConfig::default());
        assert_eq!(config.cache_ttl(), DEFAULT_TTL);
    }

    #[test]
    fn test_unsupported_version() {
        let result = BdcorrConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let yaml = r#"
version: "1.0"
cache:
  ttl_secs: 0
"#;
        let result = BdcorrConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("ttl_secs"));
    }

    #[test]
    fn test_weight_ordering_enforced() {
        let yaml = r#"
version: "1.0"
signals:
  program:
    name_exact: 20
"#;
        let result = BdcorrConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Correlation(_))));
    }

    #[test]
    fn test_overall_weights_validated() {
        let yaml = r#"
version: "1.0"
correlation:
  overall:
    program: 0.2
    contact: 0.5
"#;
        let result = BdcorrConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("outweigh"));
    }

    #[test]
    fn test_missing_file() {
        let result = BdcorrConfig::from_file("/nonexistent/bdcorr.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }
}
