//! # BD Signal Matchers (`signals`)
//!
//! Pure scoring functions that compare a job against candidate programs,
//! contacts, and other jobs. Every matcher returns a confidence in
//! `0..=100` together with the signals that fired, so the rendering layer
//! can explain why a match was made.
//!
//! ## Contract
//!
//! - Matchers never fail for data-quality reasons. Absent or malformed
//!   optional fields leave the corresponding signal unmatched.
//! - A candidate with zero matched signals is not a match.
//! - An empty candidate list yields an empty result.
//! - Matchers return results in candidate order; ranking is left to the
//!   correlation layer so ties can be broken by input order.
//!
//! ## Signals
//!
//! | Matcher   | Signals                                                        |
//! |-----------|----------------------------------------------------------------|
//! | program   | name/acronym (exact or partial), agency, location, keywords, clearance |
//! | contact   | program affiliation, location, company, seniority bonus        |
//! | related   | PTS history, competitor, similar role (first match wins)       |
//!
//! Point values live in [`SignalWeights`]; [`SignalWeights::validate`]
//! guarantees an exact program name or acronym always outranks any
//! combination of weaker program signals.
//!
//! ## Example
//!
//! ```
//! use model::{Job, Program};
//! use signals::{match_programs, ProgramWeights, SignalKind};
//!
//! let job = Job::new("J1", "Analyst").with_program("DCGS-A").with_clearance("TS/SCI");
//! let program = Program::new("P1", "Distributed Common Ground System - Army")
//!     .with_acronym("DCGS-A")
//!     .with_clearance_requirement("TS/SCI");
//!
//! let hits = match_programs(&job, &[program], &ProgramWeights::default());
//! assert_eq!(hits.len(), 1);
//! assert!(hits[0].has_signal(SignalKind::ProgramNameExact));
//! ```

pub mod config;
pub mod contact;
pub mod program;
pub mod related;
pub mod role;
pub mod text;
pub mod types;

pub use crate::config::{ContactWeights, ProgramWeights, RelatedWeights, SignalError, SignalWeights};
pub use crate::contact::{is_affiliated, match_contacts, score_contact, ContactTarget};
pub use crate::program::{match_programs, score_program, score_program_with_profile, JobProfile};
pub use crate::related::{classify_relationship, find_related_jobs, functional_overlap};
pub use crate::role::{infer_role, is_senior_title, RoleContext, RoleRule, ROLE_RULES};
pub use crate::types::{
    ContactMatch, ContactRole, MatchSignal, ProgramMatch, RelatedJob, RelationshipKind, SignalKind,
};
