//! Lead capture
//!
//! The free-estimate form produces a lead: who asked, what they drive, and
//! the range they were quoted. Leads feed the sales follow-up list and are
//! persisted through `LeadStore`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::LeadId;
use domain_valuation::prequalify::{PreQualification, PreQualificationRequest};

/// Contact details supplied with a free-estimate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

/// A captured pre-qualification lead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier
    pub id: LeadId,
    /// Contact details
    pub contact: LeadContact,
    /// The request that produced the quote
    pub request: PreQualificationRequest,
    /// The quoted outcome
    pub quote: PreQualification,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Captures a lead from a completed pre-qualification
    pub fn capture(
        contact: LeadContact,
        request: PreQualificationRequest,
        quote: PreQualification,
    ) -> Self {
        Self {
            id: LeadId::new_v7(),
            contact,
            request,
            quote,
            created_at: Utc::now(),
        }
    }
}
