//! BD Correlation Data Model
//!
//! Normalized records consumed by the correlation engine. Data adapters
//! (workspace APIs, local JSON exports) are responsible for mapping their
//! source shapes into these types; everything downstream assumes the
//! records are already normalized and treats them as immutable.
//!
//! ## What lives here
//!
//! - [`Job`], [`Program`], [`Contact`] - the three input record kinds.
//! - [`BdPriority`] - numeric or labelled business-development priority.
//! - [`ClearanceLevel`] - ordered clearance ladder with a lenient parser.
//! - [`Confidence`] and [`ConfidenceBand`] - the 0-100 score used by every
//!   match result, plus the rounding/clamping helper that produces it.
//!
//! ## Example
//!
//! ```
//! use model::{Contact, Job, DEFAULT_TIER};
//!
//! let job = Job::new("J1", "Intelligence Analyst").with_program("DCGS-A");
//! assert_eq!(job.resolve_program_name(), Some("DCGS-A"));
//!
//! let contact = Contact::new("C1", "Pat Doe");
//! assert_eq!(contact.tier(), DEFAULT_TIER);
//! ```

mod clearance;
mod confidence;
mod lenient;
mod priority;
mod types;

pub use crate::clearance::ClearanceLevel;
pub use crate::confidence::{clamp_confidence, Confidence, ConfidenceBand, MAX_CONFIDENCE};
pub use crate::priority::{BdPriority, PriorityLabel};
pub use crate::types::{Contact, ContactChannels, Job, Program, DEFAULT_TIER, MIN_TIER};
