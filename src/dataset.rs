//! JSON dataset loading for the binary and tests.
//!
//! Inputs are expected to be already-normalized arrays of jobs, programs and
//! contacts. Mapping source-specific shapes into them belongs to adapters.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use model::{Contact, Job, Program};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CorrelatorError, DatasetError};
use crate::facade::{CorrelationOptions, Correlator};

/// Jobs, programs and contacts loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

fn parse<T: DeserializeOwned>(what: &'static str, raw: &str) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(raw).map_err(|source| DatasetError::Parse { what, source })
}

fn read(path: &Path) -> Result<String, DatasetError> {
    fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl Dataset {
    pub fn new(jobs: Vec<Job>, programs: Vec<Program>, contacts: Vec<Contact>) -> Self {
        Self {
            jobs,
            programs,
            contacts,
        }
    }

    /// Parse three JSON arrays.
    pub fn from_json_strs(jobs: &str, programs: &str, contacts: &str) -> Result<Self, DatasetError> {
        let dataset = Self {
            jobs: parse("jobs", jobs)?,
            programs: parse("programs", programs)?,
            contacts: parse("contacts", contacts)?,
        };
        dataset.warn_duplicate_job_ids();
        Ok(dataset)
    }

    /// Read and parse three JSON array files.
    pub fn from_json_files<J, P, C>(jobs: J, programs: P, contacts: C) -> Result<Self, DatasetError>
    where
        J: AsRef<Path>,
        P: AsRef<Path>,
        C: AsRef<Path>,
    {
        let dataset = Self::from_json_strs(
            &read(jobs.as_ref())?,
            &read(programs.as_ref())?,
            &read(contacts.as_ref())?,
        )?;
        info!(
            jobs = dataset.jobs.len(),
            programs = dataset.programs.len(),
            contacts = dataset.contacts.len(),
            "dataset_loaded"
        );
        Ok(dataset)
    }

    /// Hand the dataset to a new [`Correlator`].
    pub fn into_correlator(self, options: CorrelationOptions) -> Result<Correlator, CorrelatorError> {
        Correlator::new(self.jobs, self.programs, self.contacts, options)
    }

    // Lookups by id resolve to the first job with that id.
    fn warn_duplicate_job_ids(&self) {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                warn!(job_id = %job.id, "duplicate_job_id");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const JOBS: &str = r#"[
        {"id": "J1", "title": "Intelligence Analyst", "programName": "DCGS-A", "bdPriority": "high"},
        {"id": "J2", "title": "Network Engineer", "company": "Acme", "bd_priority": 80}
    ]"#;
    const PROGRAMS: &str = r#"[
        {"id": "P1", "name": "Distributed Common Ground System - Army", "acronym": "DCGS-A",
         "clearanceRequirements": ["TS/SCI"]}
    ]"#;
    const CONTACTS: &str = r#"[{"id": "C1", "name": "Alex Kim", "program": "DCGS-A"}]"#;

    #[test]
    fn parses_camel_case_inputs() {
        let dataset = Dataset::from_json_strs(JOBS, PROGRAMS, CONTACTS).expect("dataset");
        assert_eq!(dataset.jobs.len(), 2);
        assert_eq!(dataset.jobs[0].resolve_program_name(), Some("DCGS-A"));
        assert_eq!(dataset.programs[0].clearance_requirements, vec!["TS/SCI"]);
        assert_eq!(dataset.contacts[0].tier(), 6);
    }

    #[test]
    fn reports_which_array_failed() {
        let err = Dataset::from_json_strs(JOBS, "{not json", CONTACTS).expect_err("bad programs");
        assert!(matches!(err, DatasetError::Parse { what: "programs", .. }));
        assert!(err.to_string().contains("programs"));
    }

    #[test]
    fn loads_from_files() {
        let mut files = Vec::new();
        for body in [JOBS, PROGRAMS, CONTACTS] {
            let mut file = NamedTempFile::new().expect("temp file");
            file.write_all(body.as_bytes()).expect("write");
            files.push(file);
        }
        let dataset = Dataset::from_json_files(files[0].path(), files[1].path(), files[2].path())
            .expect("dataset");
        assert_eq!(dataset.programs[0].acronym(), Some("DCGS-A"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Dataset::from_json_files("/nonexistent/jobs.json", "b", "c").expect_err("missing");
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
