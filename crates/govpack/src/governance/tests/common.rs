use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::governance::domain::{FirmId, FirmProfile, FitnessAnswer};
use crate::governance::draft::{AssignmentDraft, IndividualDraft, PackDraft};
use crate::governance::keys::FitnessKey;
use crate::governance::service::GovernancePackService;
use crate::governance::store::{FirmRecord, GovernanceStore, StoreError};

pub(super) fn core_bank_profile() -> FirmProfile {
    FirmProfile {
        firm_name: "Harbourgate Bank".to_string(),
        firm_type: "bank".to_string(),
        category: "core".to_string(),
        jurisdictions: vec!["UK".to_string()],
        is_cass_firm: false,
        opted_up: false,
    }
}

pub(super) fn enhanced_investment_profile() -> FirmProfile {
    FirmProfile {
        firm_name: "Blackfriars Asset Management".to_string(),
        firm_type: "investment".to_string(),
        category: "enhanced".to_string(),
        jurisdictions: vec!["UK".to_string(), "IE".to_string()],
        is_cass_firm: true,
        opted_up: true,
    }
}

pub(super) fn payments_profile() -> FirmProfile {
    FirmProfile {
        firm_name: "Moorfield Payments".to_string(),
        firm_type: "payments".to_string(),
        category: "api".to_string(),
        jurisdictions: vec!["UK".to_string()],
        is_cass_firm: false,
        opted_up: false,
    }
}

pub(super) fn individual_draft(local_id: &str, name: &str, roles: &[&str]) -> IndividualDraft {
    IndividualDraft {
        local_id: local_id.to_string(),
        name: name.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        email: Some(format!(
            "{}@example.co.uk",
            local_id.replace(' ', ".").to_ascii_lowercase()
        )),
        job_title: None,
        department: None,
        manager: None,
    }
}

pub(super) fn assignment_draft(
    responsibility: &str,
    selected: bool,
    owner: Option<&str>,
) -> AssignmentDraft {
    AssignmentDraft {
        responsibility: responsibility.to_string(),
        selected,
        owner: owner.map(|local| local.to_string()),
        evidence: None,
    }
}

pub(super) fn answer(response: &str) -> FitnessAnswer {
    FitnessAnswer {
        response: response.to_string(),
        details: None,
        date: None,
        evidence: None,
    }
}

pub(super) fn evidenced_answer(response: &str, evidence: &str) -> FitnessAnswer {
    FitnessAnswer {
        response: response.to_string(),
        details: None,
        date: None,
        evidence: Some(evidence.to_string()),
    }
}

pub(super) fn fitness_entry(
    local_id: &str,
    section: &str,
    question: &str,
    payload: FitnessAnswer,
) -> (String, FitnessAnswer) {
    (FitnessKey::new(local_id, section, question).encode(), payload)
}

/// Draft with one individual answering every catalog question negatively.
pub(super) fn complete_negative_fitness(local_id: &str) -> BTreeMap<String, FitnessAnswer> {
    let mut answers = BTreeMap::new();
    for question in crate::governance::catalog::fitness::questions() {
        let (key, payload) = fitness_entry(local_id, question.section, question.code, answer("no"));
        answers.insert(key, payload);
    }
    answers
}

pub(super) fn firm() -> FirmId {
    FirmId("firm-001".to_string())
}

pub(super) fn build_service() -> (
    GovernancePackService<MemoryStore>,
    Arc<MemoryStore>,
) {
    let store = Arc::new(MemoryStore::default());
    let service = GovernancePackService::new(store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<FirmId, FirmRecord>>>,
}

impl GovernanceStore for MemoryStore {
    fn load(&self, firm: &FirmId) -> Result<Option<FirmRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(firm).cloned())
    }

    fn replace(&self, firm: &FirmId, record: FirmRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(firm.clone(), record);
        Ok(())
    }

    fn delete(&self, firm: &FirmId) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        match guard.remove(firm) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    fn list(&self) -> Result<Vec<FirmId>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        let mut firms: Vec<FirmId> = guard.keys().cloned().collect();
        firms.sort();
        Ok(firms)
    }
}

pub(super) struct UnavailableStore;

impl GovernanceStore for UnavailableStore {
    fn load(&self, _firm: &FirmId) -> Result<Option<FirmRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn replace(&self, _firm: &FirmId, _record: FirmRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _firm: &FirmId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<FirmId>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Draft for a core bank with two seniors, one owned mandatory
/// responsibility, and a handful of answers.
pub(super) fn starter_draft() -> PackDraft {
    let mut draft = PackDraft::new(core_bank_profile());
    draft.set_individuals(vec![
        individual_draft("alice", "Alice Hargreaves", &["smf1"]),
        individual_draft("bikram", "Bikram Shah", &["smf16", "smf17"]),
    ]);
    draft.set_assignments(vec![
        assignment_draft("pr_a", true, Some("alice")),
        assignment_draft("pr_b", true, Some("bikram")),
        assignment_draft("pr_b1", true, Some("bikram")),
        assignment_draft("pr_d", true, Some("bikram")),
    ]);
    draft.record_answer("alice", "integrity", "criminal_convictions", answer("no"));
    draft.record_answer("alice", "financial", "bankruptcy", answer("no"));
    draft
}

pub(super) fn router_with_service(service: GovernancePackService<MemoryStore>) -> axum::Router {
    crate::governance::router::governance_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
