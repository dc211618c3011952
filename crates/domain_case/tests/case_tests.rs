//! Comprehensive tests for domain_case

use core_kernel::Money;

use domain_case::case::{Case, CaseStatus, ValuationOutcome};
use domain_case::chat::ResponseRuleTable;
use domain_case::ports::memory::{InMemoryCaseStore, InMemoryLeadStore};
use domain_case::ports::{CaseStore, LeadStore};

use test_utils::{sample_lead, MoneyFixtures, TemporalFixtures, TestCaseBuilder, VehicleFixtures};

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_full_wizard_to_completion() {
        let mut case = TestCaseBuilder::new()
            .with_owner_email("driver@example.com")
            .build();
        assert!(case.is_ready_for_valuation());

        case.record_valuation(ValuationOutcome {
            pre_accident_value: MoneyFixtures::accord_value(),
            diminished_value: Money::from_major(1_140),
            estimated_at: TemporalFixtures::estimated_at(),
        })
        .unwrap();

        case.update_status(CaseStatus::ReadyForDownload).unwrap();
        case.update_status(CaseStatus::Completed).unwrap();
        assert_eq!(case.status, CaseStatus::Completed);
    }

    #[test]
    fn test_valuation_requires_repair_section() {
        let mut case = TestCaseBuilder::new().without_repair().build();
        assert!(!case.is_ready_for_valuation());

        let result = case.record_valuation(ValuationOutcome {
            pre_accident_value: MoneyFixtures::accord_value(),
            diminished_value: Money::from_major(1_140),
            estimated_at: TemporalFixtures::estimated_at(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_no_transition_out_of_completed() {
        let mut case = TestCaseBuilder::new().build();
        case.update_status(CaseStatus::ReadyForDownload).unwrap();
        case.update_status(CaseStatus::Completed).unwrap();

        assert!(case.update_status(CaseStatus::Draft).is_err());
        assert!(case.update_status(CaseStatus::ReadyForDownload).is_err());
    }

    #[test]
    fn test_updated_at_advances_on_mutation() {
        let mut case = Case::open(None, None);
        let before = case.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));

        case.apply_vehicle(VehicleFixtures::camry());
        assert!(case.updated_at > before);
    }
}

// ============================================================================
// Store Tests
// ============================================================================

mod store_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_cases_newest_first() {
        let store = InMemoryCaseStore::new();

        let first = Case::open(None, None);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = Case::open(None, None);

        store.create_case(first.clone()).await.unwrap();
        store.create_case(second.clone()).await.unwrap();

        let all = store.list_cases().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_lead_store_roundtrip() {
        let store = InMemoryLeadStore::new();

        let lead = sample_lead();
        let id = lead.id;
        let email = lead.contact.email.clone();

        store.create_lead(lead).await.unwrap();
        let retrieved = store.get_lead(id).await.unwrap();
        assert_eq!(retrieved.contact.email, email);
        assert!(retrieved.quote.qualified);
        assert_eq!(store.list_leads().await.unwrap().len(), 1);
    }
}

// ============================================================================
// Chat Rule Tests
// ============================================================================

mod chat_tests {
    use super::*;

    #[test]
    fn test_builtin_rules_cover_core_questions() {
        let table = ResponseRuleTable::builtin();

        assert!(table.respond("how long does it take?").contains("two business days"));
        assert!(table.respond("do you serve Florida?").contains("Georgia, Florida"));
        assert!(table.respond("tell me about the guarantee").contains("money-back") || table.respond("tell me about the guarantee").contains("free"));
    }

    #[test]
    fn test_serialized_table_roundtrips() {
        // The table is configuration; it must survive a serde roundtrip so a
        // deployment can override it.
        let table = ResponseRuleTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let back: ResponseRuleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.respond("what is diminished value"), table.respond("what is diminished value"));
    }
}
