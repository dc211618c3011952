//! Data transfer objects

pub mod case;
pub mod chat;
pub mod estimate;
pub mod lead;
