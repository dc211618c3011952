//! Vehicle and accident value objects
//!
//! These types form the boundary of the engine: state and fault strings are
//! parsed here, and anything outside the supported set is rejected before
//! the formula ever runs.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValuationError;

/// Oldest model year the product will appraise.
const MIN_MODEL_YEAR: i32 = 1900;

/// A vehicle descriptor as collected by the intake wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Model year (4-digit, not in the future)
    pub year: i32,
    /// Manufacturer, free text from the vehicle lookup
    pub make: String,
    /// Model, free text from the vehicle lookup
    pub model: String,
    /// Optional trim level
    pub trim: Option<String>,
}

impl Vehicle {
    /// Creates a vehicle descriptor, validating the model year against the
    /// current clock
    pub fn new(
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        trim: Option<String>,
    ) -> Result<Self, ValuationError> {
        validate_year(year)?;

        let make = make.into();
        let model = model.into();
        if make.trim().is_empty() {
            return Err(ValuationError::invalid_input("make", "make is required"));
        }
        if model.trim().is_empty() {
            return Err(ValuationError::invalid_input("model", "model is required"));
        }

        Ok(Self {
            year,
            make,
            model,
            trim,
        })
    }

    /// Vehicle age in years relative to the current clock
    pub fn age_years(&self) -> i32 {
        (Utc::now().year() - self.year).max(0)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}

/// Validates that a model year is a 4-digit year not in the future
pub fn validate_year(year: i32) -> Result<(), ValuationError> {
    let current_year = Utc::now().year();
    if year < MIN_MODEL_YEAR || year > current_year {
        return Err(ValuationError::invalid_input(
            "year",
            format!("year must be between {MIN_MODEL_YEAR} and {current_year}"),
        ));
    }
    Ok(())
}

/// Jurisdictions the service operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsState {
    #[serde(rename = "GA")]
    Georgia,
    #[serde(rename = "FL")]
    Florida,
    #[serde(rename = "NC")]
    NorthCarolina,
}

impl UsState {
    /// Returns the two-letter postal code
    pub fn code(&self) -> &'static str {
        match self {
            UsState::Georgia => "GA",
            UsState::Florida => "FL",
            UsState::NorthCarolina => "NC",
        }
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for UsState {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GA" => Ok(UsState::Georgia),
            "FL" => Ok(UsState::Florida),
            "NC" => Ok(UsState::NorthCarolina),
            other => Err(ValuationError::invalid_input(
                "state",
                format!("unsupported state: {other}"),
            )),
        }
    }
}

/// Who caused the accident, as reported by the requester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultStatus {
    NotAtFault,
    AtFault,
    Unsure,
}

impl FromStr for FaultStatus {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_at_fault" => Ok(FaultStatus::NotAtFault),
            "at_fault" => Ok(FaultStatus::AtFault),
            "unsure" => Ok(FaultStatus::Unsure),
            other => Err(ValuationError::invalid_input(
                "fault",
                format!("unrecognized fault value: {other}"),
            )),
        }
    }
}
