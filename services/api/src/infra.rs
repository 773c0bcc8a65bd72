use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use govpack::governance::{FirmId, FirmRecord, GovernanceStore, StoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryGovernanceStore {
    records: Arc<Mutex<HashMap<FirmId, FirmRecord>>>,
}

impl GovernanceStore for InMemoryGovernanceStore {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
