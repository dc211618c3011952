//! Lead DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_case::lead::Lead;

/// Contact details plus the same basics the pre-qualification form collects.
/// The quote is recomputed server-side so the stored lead always carries a
/// range the engine actually produced.
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub mileage: u32,
    pub state: String,
    pub fault: String,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle: String,
    pub estimate_min: Decimal,
    pub estimate_max: Decimal,
    pub qualified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.into(),
            name: lead.contact.name,
            email: lead.contact.email,
            phone: lead.contact.phone,
            vehicle: lead.request.vehicle.to_string(),
            estimate_min: lead.quote.estimate_min.amount(),
            estimate_max: lead.quote.estimate_max.amount(),
            qualified: lead.quote.qualified,
            created_at: lead.created_at,
        }
    }
}
