//! Pack service composing validation, identity reconciliation, scoring,
//! and the atomic store replace.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{FirmId, IndividualId};
use super::draft::PackDraft;
use super::reconcile::{reconcile, DraftValidationError};
use super::report::{self, PackView};
use super::scoring::{assess_all, board_readiness, BoardReadiness, RiskAssessment};
use super::store::{FirmRecord, GovernanceStore, StoreError};

static INDIVIDUAL_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_individual_id() -> IndividualId {
    let id = INDIVIDUAL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    IndividualId(format!("ind-{id:06}"))
}

/// Non-fatal inconsistency detected while saving a draft. The save still
/// succeeds; warnings are returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyWarning {
    /// A selected responsibility is no longer applicable under the saved
    /// profile.
    OrphanedSelection { responsibility: String },
    /// A fitness answer referenced an individual absent from the
    /// submission and was not persisted.
    DroppedFitnessResponse { key: String },
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    pub firm: FirmId,
    pub record: FirmRecord,
    /// Client-local id to durable id for every submitted individual.
    pub identity_map: BTreeMap<String, IndividualId>,
    pub warnings: Vec<ConsistencyWarning>,
}

#[derive(Debug, thiserror::Error)]
pub enum PackServiceError {
    #[error(transparent)]
    Validation(#[from] DraftValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application service for firm governance packs, generic over the
/// backing store.
pub struct GovernancePackService<S> {
    store: Arc<S>,
}

impl<S> GovernancePackService<S>
where
    S: GovernanceStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate, reconcile, and persist a submitted draft, replacing the
    /// firm's stored record wholesale. Validation failures reject the
    /// whole submission; nothing is written.
    pub fn save_draft(
        &self,
        firm: &FirmId,
        draft: PackDraft,
    ) -> Result<SaveOutcome, PackServiceError> {
        let existing = self
            .store
            .load(firm)?
            .map(|record| record.individual_ids())
            .unwrap_or_default();
        let reconciled = reconcile(&existing, &draft, next_individual_id)?;
        let record = FirmRecord {
            profile: draft.profile,
            assignments: reconciled.assignments,
            individuals: reconciled.individuals,
            fitness: reconciled.fitness,
        };

        let mut warnings: Vec<ConsistencyWarning> =
            report::orphaned_selections(&record.profile, &record.assignments)
                .into_iter()
                .map(|responsibility| ConsistencyWarning::OrphanedSelection { responsibility })
                .collect();
        warnings.extend(
            reconciled
                .dropped_responses
                .iter()
                .map(|key| ConsistencyWarning::DroppedFitnessResponse { key: key.clone() }),
        );

        self.store.replace(firm, record.clone())?;
        info!(
            firm = firm.as_str(),
            individuals = record.individuals.len(),
            warnings = warnings.len(),
            "governance pack saved"
        );
        Ok(SaveOutcome {
            firm: firm.clone(),
            record,
            identity_map: reconciled.identity_map,
            warnings,
        })
    }

    pub fn load_pack(&self, firm: &FirmId) -> Result<PackView, PackServiceError> {
        let record = self.store.load(firm)?.ok_or(StoreError::NotFound)?;
        Ok(report::build_pack_view(firm, &record))
    }

    pub fn readiness(&self, firm: &FirmId) -> Result<BoardReadiness, PackServiceError> {
        let record = self.store.load(firm)?.ok_or(StoreError::NotFound)?;
        let assessments = assess_all(&record.individuals, &record.fitness);
        Ok(board_readiness(&record, &assessments))
    }

    pub fn assessments(&self, firm: &FirmId) -> Result<Vec<RiskAssessment>, PackServiceError> {
        let record = self.store.load(firm)?.ok_or(StoreError::NotFound)?;
        Ok(assess_all(&record.individuals, &record.fitness))
    }

    /// Remove register rows whose selection no longer matches the firm's
    /// profile. Returns the number of rows removed.
    pub fn clear_orphaned_selections(&self, firm: &FirmId) -> Result<usize, PackServiceError> {
        let mut record = self.store.load(firm)?.ok_or(StoreError::NotFound)?;
        let orphaned: Vec<String> =
            report::orphaned_selections(&record.profile, &record.assignments);
        if orphaned.is_empty() {
            return Ok(0);
        }
        let before = record.assignments.len();
        record
            .assignments
            .retain(|row| !(row.selected && orphaned.contains(&row.responsibility)));
        let removed = before - record.assignments.len();
        self.store.replace(firm, record)?;
        info!(firm = firm.as_str(), removed, "orphaned selections cleared");
        Ok(removed)
    }

    pub fn delete_firm(&self, firm: &FirmId) -> Result<(), PackServiceError> {
        self.store.delete(firm)?;
        info!(firm = firm.as_str(), "governance pack deleted");
        Ok(())
    }

    pub fn list_firms(&self) -> Result<Vec<FirmId>, PackServiceError> {
        Ok(self.store.list()?)
    }
}
