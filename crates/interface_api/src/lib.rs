//! HTTP API Layer
//!
//! This crate provides the REST API for the diminished value appraisal
//! service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for estimates, cases, leads, and chat
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_case::chat::ResponseRuleTable;
use domain_case::ports::{CaseStore, LeadStore};
use domain_valuation::ports::MarketValuePort;

use crate::config::ApiConfig;
use crate::handlers::{case, chat, estimate, health, lead};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub market_values: Arc<dyn MarketValuePort>,
    pub cases: Arc<dyn CaseStore>,
    pub leads: Arc<dyn LeadStore>,
    pub chat_rules: Arc<ResponseRuleTable>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state (ports, chat rules, config)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Estimate routes
    let estimate_routes = Router::new()
        .route("/", post(estimate::create_estimate))
        .route("/prequalify", post(estimate::prequalify));

    // Case routes
    let case_routes = Router::new()
        .route("/", post(case::create_case))
        .route("/", get(case::list_cases))
        .route("/:id", get(case::get_case))
        .route("/:id", put(case::update_case))
        .route("/:id/status", put(case::update_status))
        .route("/:id/valuation", post(case::record_valuation));

    // Lead routes
    let lead_routes = Router::new()
        .route("/", post(lead::create_lead))
        .route("/", get(lead::list_leads));

    // API routes
    let api_routes = Router::new()
        .nest("/estimate", estimate_routes)
        .nest("/cases", case_routes)
        .nest("/leads", lead_routes)
        .route("/chat", post(chat::respond));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
