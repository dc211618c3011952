//! Lead handlers

use axum::{extract::State, Json};

use domain_case::lead::{Lead, LeadContact};
use domain_valuation::prequalify::{PreQualificationRequest, PreQualifier};
use domain_valuation::vehicle::Vehicle;

use crate::dto::lead::*;
use crate::{error::ApiError, AppState};

/// Captures a pre-qualification lead.
///
/// The quote stored with the lead is recomputed from the submitted basics,
/// never taken from the client.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<Json<LeadResponse>, ApiError> {
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ApiError::Validation("a valid email is required".to_string()));
    }

    let vehicle = Vehicle::new(request.year, request.make, request.model, request.trim)?;
    let prequalify_request = PreQualificationRequest {
        vehicle,
        mileage: request.mileage,
        state: request.state.parse()?,
        fault: request.fault.parse()?,
    };

    let quote = PreQualifier::new(state.market_values.clone())
        .prequalify(&prequalify_request)
        .await?;

    let lead = Lead::capture(
        LeadContact {
            name: request.name,
            email: request.email,
            phone: request.phone,
        },
        prequalify_request,
        quote,
    );
    tracing::info!(lead_id = %lead.id, "lead captured");

    let created = state.leads.create_lead(lead).await?;
    Ok(Json(created.into()))
}

/// Lists captured leads, newest first
pub async fn list_leads(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadResponse>>, ApiError> {
    let leads = state.leads.list_leads().await?;
    Ok(Json(leads.into_iter().map(LeadResponse::from).collect()))
}
