//! Case aggregate
//!
//! An appraisal case starts as a draft and accumulates wizard sections
//! (vehicle, accident, repair) until a valuation can be recorded. The status
//! lifecycle is strictly forward: `Draft -> ReadyForDownload -> Completed`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, Money};
use domain_valuation::vehicle::{FaultStatus, UsState, Vehicle};

use crate::error::CaseError;

/// Case status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Intake in progress; sections still accumulating
    Draft,
    /// Valuation recorded, report available for download
    ReadyForDownload,
    /// Report delivered and case closed out
    Completed,
}

/// Accident details collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentDetails {
    /// Odometer reading at the time of loss
    pub mileage: u32,
    /// Jurisdiction of the loss
    pub state: UsState,
    /// Who caused the accident
    pub fault: FaultStatus,
    /// Date of the accident, if known
    pub accident_date: Option<NaiveDate>,
}

/// Repair details collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairDetails {
    /// Total repair invoice
    pub repair_cost: Money,
    /// Repairing body shop, if provided
    pub shop_name: Option<String>,
    /// Whether repairs are complete
    pub completed: bool,
}

/// The recorded valuation for a case
///
/// The estimation engine produces the numbers; the caller persists them here.
/// The engine never mutates a case directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationOutcome {
    pub pre_accident_value: Money,
    pub diminished_value: Money,
    pub estimated_at: DateTime<Utc>,
}

/// An appraisal case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier
    pub id: CaseId,
    /// Human-facing case number
    pub case_number: String,
    /// Status
    pub status: CaseStatus,
    /// Requester contact email
    pub owner_email: Option<String>,
    /// Requester name
    pub owner_name: Option<String>,
    /// Vehicle section
    pub vehicle: Option<Vehicle>,
    /// Accident section
    pub accident: Option<AccidentDetails>,
    /// Repair section
    pub repair: Option<RepairDetails>,
    /// Recorded valuation
    pub valuation: Option<ValuationOutcome>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Opens a new draft case
    pub fn open(owner_email: Option<String>, owner_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CaseId::new_v7(),
            case_number: generate_case_number(),
            status: CaseStatus::Draft,
            owner_email,
            owner_name,
            vehicle: None,
            accident: None,
            repair: None,
            valuation: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records the vehicle section
    pub fn apply_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
        self.touch();
    }

    /// Records the accident section
    pub fn apply_accident(&mut self, accident: AccidentDetails) {
        self.accident = Some(accident);
        self.touch();
    }

    /// Records the repair section
    pub fn apply_repair(&mut self, repair: RepairDetails) {
        self.repair = Some(repair);
        self.touch();
    }

    /// Returns true once every section the valuation needs is present
    pub fn is_ready_for_valuation(&self) -> bool {
        self.vehicle.is_some() && self.accident.is_some() && self.repair.is_some()
    }

    /// Persists a valuation produced by the estimation engine.
    ///
    /// Requires the repair and accident sections; the engine inputs must
    /// have come from somewhere.
    pub fn record_valuation(&mut self, outcome: ValuationOutcome) -> Result<(), CaseError> {
        if self.accident.is_none() {
            return Err(CaseError::MissingSection("accident"));
        }
        if self.repair.is_none() {
            return Err(CaseError::MissingSection("repair"));
        }
        self.valuation = Some(outcome);
        self.touch();
        Ok(())
    }

    /// Moves the case forward in its lifecycle
    pub fn update_status(&mut self, status: CaseStatus) -> Result<(), CaseError> {
        if !self.can_transition_to(status) {
            return Err(CaseError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.status = status;
        self.touch();
        Ok(())
    }

    /// Checks if a transition is valid (forward-only)
    fn can_transition_to(&self, target: CaseStatus) -> bool {
        use CaseStatus::*;
        matches!(
            (self.status, target),
            (Draft, ReadyForDownload) | (ReadyForDownload, Completed)
        )
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn generate_case_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("DV-{}", duration.as_millis() % 10_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_case() -> Case {
        Case::open(Some("driver@example.com".to_string()), None)
    }

    fn accident() -> AccidentDetails {
        AccidentDetails {
            mileage: 25_400,
            state: UsState::Georgia,
            fault: FaultStatus::NotAtFault,
            accident_date: None,
        }
    }

    fn repair() -> RepairDetails {
        RepairDetails {
            repair_cost: Money::from_major(4_500),
            shop_name: Some("Peach State Collision".to_string()),
            completed: true,
        }
    }

    #[test]
    fn test_open_case_is_draft() {
        let case = draft_case();
        assert_eq!(case.status, CaseStatus::Draft);
        assert!(case.case_number.starts_with("DV-"));
        assert!(!case.is_ready_for_valuation());
    }

    #[test]
    fn test_sections_accumulate() {
        let mut case = draft_case();
        case.apply_vehicle(Vehicle::new(2021, "Honda", "Accord", None).unwrap());
        case.apply_accident(accident());
        assert!(!case.is_ready_for_valuation());

        case.apply_repair(repair());
        assert!(case.is_ready_for_valuation());
    }

    #[test]
    fn test_record_valuation_requires_sections() {
        let mut case = draft_case();
        let outcome = ValuationOutcome {
            pre_accident_value: Money::from_major(28_500),
            diminished_value: Money::from_major(1_140),
            estimated_at: Utc::now(),
        };

        let err = case.record_valuation(outcome.clone()).unwrap_err();
        assert!(matches!(err, CaseError::MissingSection("accident")));

        case.apply_accident(accident());
        case.apply_repair(repair());
        assert!(case.record_valuation(outcome).is_ok());
        assert!(case.valuation.is_some());
    }

    #[test]
    fn test_forward_transitions() {
        let mut case = draft_case();
        assert!(case.update_status(CaseStatus::ReadyForDownload).is_ok());
        assert!(case.update_status(CaseStatus::Completed).is_ok());
        assert_eq!(case.status, CaseStatus::Completed);
    }

    #[test]
    fn test_skipping_ready_for_download_rejected() {
        let mut case = draft_case();
        assert!(case.update_status(CaseStatus::Completed).is_err());
    }

    #[test]
    fn test_backward_transition_rejected() {
        let mut case = draft_case();
        case.update_status(CaseStatus::ReadyForDownload).unwrap();

        let err = case.update_status(CaseStatus::Draft).unwrap_err();
        assert!(matches!(err, CaseError::InvalidStatusTransition { .. }));
        assert_eq!(case.status, CaseStatus::ReadyForDownload);
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&CaseStatus::ReadyForDownload).unwrap();
        assert_eq!(json, "\"ready_for_download\"");
    }
}
