//! Diminished Value Estimation Domain
//!
//! This crate implements the valuation core of the appraisal product:
//!
//! - The estimation formula mapping pre-accident value, repair cost, and
//!   mileage to a diminished-value dollar figure
//! - The pre-qualification flow that substitutes a market-value lookup and
//!   produces an estimate range plus a qualification flag
//! - The guarantee-eligibility predicate over bucketed pre-accident values
//!
//! The engine is a stateless transform: every call is independent and may
//! run on any number of concurrent request handlers.

pub mod engine;
pub mod prequalify;
pub mod eligibility;
pub mod vehicle;
pub mod ports;
pub mod adapters;
pub mod error;

pub use engine::estimate;
pub use prequalify::{PreQualifier, PreQualificationRequest, PreQualification};
pub use eligibility::{PreAccidentValueBucket, is_guarantee_eligible};
pub use vehicle::{Vehicle, UsState, FaultStatus};
pub use ports::MarketValuePort;
pub use error::ValuationError;
