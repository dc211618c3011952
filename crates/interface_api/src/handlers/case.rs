//! Case handlers
//!
//! The wizard submits sections incrementally via PUT; the valuation route
//! runs the engine against the accumulated sections and persists the
//! outcome, advancing a draft case to ready_for_download.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use core_kernel::{CaseId, Money};
use domain_case::case::{AccidentDetails, Case, CaseStatus, RepairDetails, ValuationOutcome};
use domain_valuation::engine;
use domain_valuation::vehicle::Vehicle;

use crate::dto::case::*;
use crate::{error::ApiError, AppState};

/// Opens a new draft case
pub async fn create_case(
    State(state): State<AppState>,
    Json(request): Json<CreateCaseRequest>,
) -> Result<Json<CaseResponse>, ApiError> {
    let case = Case::open(request.owner_email, request.owner_name);
    tracing::info!(case_id = %case.id, case_number = %case.case_number, "case opened");

    let created = state.cases.create_case(case).await?;
    Ok(Json(created.into()))
}

/// Lists cases, newest first
pub async fn list_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseResponse>>, ApiError> {
    let cases = state.cases.list_cases().await?;
    Ok(Json(cases.into_iter().map(CaseResponse::from).collect()))
}

/// Gets a case by ID
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseResponse>, ApiError> {
    let case = state.cases.get_case(CaseId::from(id)).await?;
    Ok(Json(case.into()))
}

/// Applies wizard sections to a case
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCaseRequest>,
) -> Result<Json<CaseResponse>, ApiError> {
    let mut case = state.cases.get_case(CaseId::from(id)).await?;

    if let Some(section) = request.vehicle {
        let vehicle = Vehicle::new(section.year, section.make, section.model, section.trim)?;
        case.apply_vehicle(vehicle);
    }
    if let Some(section) = request.accident {
        case.apply_accident(AccidentDetails {
            mileage: section.mileage,
            state: section.state.parse()?,
            fault: section.fault.parse()?,
            accident_date: section.accident_date,
        });
    }
    if let Some(section) = request.repair {
        case.apply_repair(RepairDetails {
            repair_cost: Money::new(section.repair_cost),
            shop_name: section.shop_name,
            completed: section.completed,
        });
    }

    let updated = state.cases.update_case(case).await?;
    Ok(Json(updated.into()))
}

/// Moves a case forward in its lifecycle
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<CaseResponse>, ApiError> {
    let target = parse_status(&request.status)?;
    let mut case = state.cases.get_case(CaseId::from(id)).await?;

    case.update_status(target)?;
    tracing::info!(case_id = %case.id, status = %request.status, "case status updated");

    let updated = state.cases.update_case(case).await?;
    Ok(Json(updated.into()))
}

/// Runs the valuation against the case's accumulated sections
pub async fn record_valuation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordValuationRequest>,
) -> Result<Json<CaseResponse>, ApiError> {
    let mut case = state.cases.get_case(CaseId::from(id)).await?;

    let accident = case
        .accident
        .clone()
        .ok_or_else(|| ApiError::Validation("accident section is required".to_string()))?;
    let repair = case
        .repair
        .clone()
        .ok_or_else(|| ApiError::Validation("repair section is required".to_string()))?;

    let pre_accident_value = Money::new(request.pre_accident_value);
    let diminished_value =
        engine::estimate(pre_accident_value, repair.repair_cost, accident.mileage)?;

    case.record_valuation(ValuationOutcome {
        pre_accident_value,
        diminished_value,
        estimated_at: Utc::now(),
    })?;
    if case.status == CaseStatus::Draft {
        case.update_status(CaseStatus::ReadyForDownload)?;
    }
    tracing::info!(case_id = %case.id, %diminished_value, "valuation recorded");

    let updated = state.cases.update_case(case).await?;
    Ok(Json(updated.into()))
}

fn parse_status(value: &str) -> Result<CaseStatus, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "draft" => Ok(CaseStatus::Draft),
        "ready_for_download" => Ok(CaseStatus::ReadyForDownload),
        "completed" => Ok(CaseStatus::Completed),
        other => Err(ApiError::Validation(format!("unknown status: {other}"))),
    }
}
