//! Request handlers

pub mod case;
pub mod chat;
pub mod estimate;
pub mod health;
pub mod lead;
