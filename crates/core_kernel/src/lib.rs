//! Core Kernel - Foundational types for the appraisal system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic (fixed-point USD)
//! - Strongly-typed entity identifiers
//! - Shared error and port abstractions

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, MoneyError};
pub use identifiers::{CaseId, LeadId, ChatMessageId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
