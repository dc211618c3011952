//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use core_kernel::Money;
use domain_case::case::{AccidentDetails, Case, RepairDetails};
use domain_case::lead::{Lead, LeadContact};
use domain_valuation::prequalify::{PreQualification, PreQualificationRequest};
use domain_valuation::vehicle::{FaultStatus, UsState, Vehicle};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use crate::fixtures::{MoneyFixtures, StringFixtures, VehicleFixtures};

/// Builder for constructing test cases
///
/// Defaults to a fully populated draft ready for valuation; call the
/// `without_*` methods to exercise missing-section paths.
pub struct TestCaseBuilder {
    owner_email: Option<String>,
    owner_name: Option<String>,
    vehicle: Option<Vehicle>,
    accident: Option<AccidentDetails>,
    repair: Option<RepairDetails>,
}

impl Default for TestCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCaseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            owner_email: Some(StringFixtures::email().to_string()),
            owner_name: Some(StringFixtures::owner_name().to_string()),
            vehicle: Some(VehicleFixtures::accord()),
            accident: Some(AccidentDetails {
                mileage: 25_400,
                state: UsState::Georgia,
                fault: FaultStatus::NotAtFault,
                accident_date: None,
            }),
            repair: Some(RepairDetails {
                repair_cost: MoneyFixtures::typical_repair(),
                shop_name: Some(StringFixtures::shop_name().to_string()),
                completed: true,
            }),
        }
    }

    /// Sets the owner email
    pub fn with_owner_email(mut self, email: impl Into<String>) -> Self {
        self.owner_email = Some(email.into());
        self
    }

    /// Sets the vehicle section
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Sets the accident section
    pub fn with_accident(mut self, accident: AccidentDetails) -> Self {
        self.accident = Some(accident);
        self
    }

    /// Sets the accident mileage, keeping the rest of the section
    pub fn with_mileage(mut self, mileage: u32) -> Self {
        if let Some(accident) = self.accident.as_mut() {
            accident.mileage = mileage;
        }
        self
    }

    /// Sets the fault status, keeping the rest of the section
    pub fn with_fault(mut self, fault: FaultStatus) -> Self {
        if let Some(accident) = self.accident.as_mut() {
            accident.fault = fault;
        }
        self
    }

    /// Sets the repair section
    pub fn with_repair(mut self, repair: RepairDetails) -> Self {
        self.repair = Some(repair);
        self
    }

    /// Sets the repair cost, keeping the rest of the section
    pub fn with_repair_cost(mut self, cost: Money) -> Self {
        if let Some(repair) = self.repair.as_mut() {
            repair.repair_cost = cost;
        }
        self
    }

    /// Omits the accident section
    pub fn without_accident(mut self) -> Self {
        self.accident = None;
        self
    }

    /// Omits the repair section
    pub fn without_repair(mut self) -> Self {
        self.repair = None;
        self
    }

    /// Builds the case by replaying the wizard steps
    pub fn build(self) -> Case {
        let mut case = Case::open(self.owner_email, self.owner_name);
        if let Some(vehicle) = self.vehicle {
            case.apply_vehicle(vehicle);
        }
        if let Some(accident) = self.accident {
            case.apply_accident(accident);
        }
        if let Some(repair) = self.repair {
            case.apply_repair(repair);
        }
        case
    }
}

/// Builder for constructing pre-qualification requests
pub struct PreQualificationRequestBuilder {
    vehicle: Vehicle,
    mileage: u32,
    state: UsState,
    fault: FaultStatus,
}

impl Default for PreQualificationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PreQualificationRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            vehicle: VehicleFixtures::accord(),
            mileage: 25_400,
            state: UsState::Georgia,
            fault: FaultStatus::NotAtFault,
        }
    }

    /// Sets the vehicle
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Sets the mileage
    pub fn with_mileage(mut self, mileage: u32) -> Self {
        self.mileage = mileage;
        self
    }

    /// Sets the state
    pub fn with_state(mut self, state: UsState) -> Self {
        self.state = state;
        self
    }

    /// Sets the fault status
    pub fn with_fault(mut self, fault: FaultStatus) -> Self {
        self.fault = fault;
        self
    }

    /// Builds the request
    pub fn build(self) -> PreQualificationRequest {
        PreQualificationRequest {
            vehicle: self.vehicle,
            mileage: self.mileage,
            state: self.state,
            fault: self.fault,
        }
    }
}

/// Generates a lead contact with randomized but plausible details
pub fn fake_contact() -> LeadContact {
    LeadContact {
        name: Some(Name().fake()),
        email: SafeEmail().fake(),
        phone: Some(PhoneNumber().fake()),
    }
}

/// Captures a lead with default request and quote values
pub fn sample_lead() -> Lead {
    Lead::capture(
        fake_contact(),
        PreQualificationRequestBuilder::new().build(),
        PreQualification {
            estimate_min: Money::from_major(969),
            estimate_max: Money::from_major(1_311),
            qualified: true,
        },
    )
}
