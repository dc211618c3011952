//! Case domain ports
//!
//! The wizard's persistence goes through `CaseStore` and `LeadStore`.
//! Relational CRUD is deliberately outside this repo; the traits are the
//! contract, and the in-memory adapters in [`memory`] are the shipped
//! implementation.

use async_trait::async_trait;

use core_kernel::{CaseId, DomainPort, LeadId, PortError};

use crate::case::Case;
use crate::lead::Lead;

/// Persistence port for appraisal cases
#[async_trait]
pub trait CaseStore: DomainPort {
    /// Persists a newly opened case
    async fn create_case(&self, case: Case) -> Result<Case, PortError>;

    /// Retrieves a case by ID, or `PortError::NotFound`
    async fn get_case(&self, id: CaseId) -> Result<Case, PortError>;

    /// Replaces a persisted case with the given state
    async fn update_case(&self, case: Case) -> Result<Case, PortError>;

    /// Lists all cases, newest first
    async fn list_cases(&self) -> Result<Vec<Case>, PortError>;
}

/// Persistence port for captured leads
#[async_trait]
pub trait LeadStore: DomainPort {
    /// Persists a captured lead
    async fn create_lead(&self, lead: Lead) -> Result<Lead, PortError>;

    /// Retrieves a lead by ID, or `PortError::NotFound`
    async fn get_lead(&self, id: LeadId) -> Result<Lead, PortError>;

    /// Lists all leads, newest first
    async fn list_leads(&self) -> Result<Vec<Lead>, PortError>;
}

/// In-memory adapters
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory implementation of `CaseStore`
    #[derive(Debug, Default)]
    pub struct InMemoryCaseStore {
        cases: Arc<RwLock<HashMap<CaseId, Case>>>,
    }

    impl InMemoryCaseStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for InMemoryCaseStore {}

    #[async_trait]
    impl CaseStore for InMemoryCaseStore {
        async fn create_case(&self, case: Case) -> Result<Case, PortError> {
            let mut cases = self.cases.write().await;
            if cases.contains_key(&case.id) {
                return Err(PortError::conflict(format!("case {} already exists", case.id)));
            }
            cases.insert(case.id, case.clone());
            Ok(case)
        }

        async fn get_case(&self, id: CaseId) -> Result<Case, PortError> {
            self.cases
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Case", id))
        }

        async fn update_case(&self, case: Case) -> Result<Case, PortError> {
            let mut cases = self.cases.write().await;
            if !cases.contains_key(&case.id) {
                return Err(PortError::not_found("Case", case.id));
            }
            cases.insert(case.id, case.clone());
            Ok(case)
        }

        async fn list_cases(&self) -> Result<Vec<Case>, PortError> {
            let cases = self.cases.read().await;
            let mut all: Vec<_> = cases.values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }
    }

    /// In-memory implementation of `LeadStore`
    #[derive(Debug, Default)]
    pub struct InMemoryLeadStore {
        leads: Arc<RwLock<HashMap<LeadId, Lead>>>,
    }

    impl InMemoryLeadStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for InMemoryLeadStore {}

    #[async_trait]
    impl LeadStore for InMemoryLeadStore {
        async fn create_lead(&self, lead: Lead) -> Result<Lead, PortError> {
            self.leads.write().await.insert(lead.id, lead.clone());
            Ok(lead)
        }

        async fn get_lead(&self, id: LeadId) -> Result<Lead, PortError> {
            self.leads
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Lead", id))
        }

        async fn list_leads(&self) -> Result<Vec<Lead>, PortError> {
            let leads = self.leads.read().await;
            let mut all: Vec<_> = leads.values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }
    }
}
