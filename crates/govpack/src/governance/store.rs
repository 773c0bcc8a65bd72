//! Storage abstraction for firm pack records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    FirmId, FirmProfile, FitnessResponse, Individual, IndividualId, ResponsibilityAssignment,
};

/// Persisted shape of one firm's governance pack. Derived values (risk
/// assessments, readiness) are never stored; they are recomputed from this
/// record on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirmRecord {
    pub profile: FirmProfile,
    #[serde(default)]
    pub assignments: Vec<ResponsibilityAssignment>,
    #[serde(default)]
    pub individuals: Vec<Individual>,
    #[serde(default)]
    pub fitness: Vec<FitnessResponse>,
}

impl FirmRecord {
    pub fn individual_ids(&self) -> BTreeSet<IndividualId> {
        self.individuals
            .iter()
            .map(|individual| individual.id.clone())
            .collect()
    }

    pub fn individual(&self, id: &IndividualId) -> Option<&Individual> {
        self.individuals
            .iter()
            .find(|individual| &individual.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("firm record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Backing store for firm records.
///
/// `replace` swaps a firm's entire record in one atomic unit, so a
/// concurrent reader observes either the previous pack or the new one and
/// never a mix. Concurrent writers are last-writer-wins at whole-record
/// granularity; there is no optimistic version check.
pub trait GovernanceStore: Send + Sync {
    fn load(&self, firm: &FirmId) -> Result<Option<FirmRecord>, StoreError>;
    fn replace(&self, firm: &FirmId, record: FirmRecord) -> Result<(), StoreError>;
    fn delete(&self, firm: &FirmId) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<FirmId>, StoreError>;
}
