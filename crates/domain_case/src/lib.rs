//! Appraisal Case Domain
//!
//! This crate implements the case record an appraisal accumulates across the
//! intake wizard, the lead captured by the free-estimate flow, and the chat
//! response rule table.
//!
//! # Case Lifecycle
//!
//! ```text
//! Draft -> ReadyForDownload -> Completed
//! ```
//!
//! Transitions are strictly forward; a backward transition is a caller
//! error.

pub mod case;
pub mod lead;
pub mod chat;
pub mod ports;
pub mod error;

pub use case::{Case, CaseStatus, AccidentDetails, RepairDetails, ValuationOutcome};
pub use lead::{Lead, LeadContact};
pub use chat::{ChatMessage, Sender, ResponseRule, ResponseRuleTable};
pub use ports::{CaseStore, LeadStore};
pub use error::CaseError;
