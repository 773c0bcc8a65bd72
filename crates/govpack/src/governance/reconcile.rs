//! Identity reconciliation between client-local draft ids and durable
//! stored ids.
//!
//! At save time every individual in the draft is mapped to a durable id:
//! local ids that already exist in the firm's stored record are kept
//! verbatim, everything else receives a freshly minted id. The resulting
//! mapping is injective for one submission, and every reference in the
//! draft (responsibility owners, reporting lines, fitness answer keys) is
//! rewritten through it before anything is persisted.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use super::domain::{FitnessResponse, Individual, IndividualId, ResponsibilityAssignment};
use super::draft::PackDraft;
use super::keys::{FitnessKey, FitnessKeyError};

/// Draft rejected before any persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftValidationError {
    #[error("duplicate individual id '{0}' in submission")]
    DuplicateIndividual(String),
    #[error(transparent)]
    MalformedFitnessKey(#[from] FitnessKeyError),
}

/// Persistable form of a draft after identity reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledDraft {
    pub individuals: Vec<Individual>,
    pub assignments: Vec<ResponsibilityAssignment>,
    pub fitness: Vec<FitnessResponse>,
    /// Client-local id to durable id, one entry per submitted individual.
    pub identity_map: BTreeMap<String, IndividualId>,
    /// Encoded keys of fitness answers that referenced no submitted
    /// individual and were therefore not persisted.
    pub dropped_responses: Vec<String>,
}

/// Reconcile a draft against the ids already persisted for the firm.
///
/// `existing` is the set of durable ids in the firm's stored record (empty
/// for a first save). `mint` produces candidate ids for new individuals;
/// candidates colliding with an existing or already-allocated id are
/// discarded and minting retries, so the returned map never assigns one
/// durable id to two individuals.
pub fn reconcile<F>(
    existing: &BTreeSet<IndividualId>,
    draft: &PackDraft,
    mut mint: F,
) -> Result<ReconciledDraft, DraftValidationError>
where
    F: FnMut() -> IndividualId,
{
    let mut seen = BTreeSet::new();
    for individual in &draft.individuals {
        if !seen.insert(individual.local_id.as_str()) {
            return Err(DraftValidationError::DuplicateIndividual(
                individual.local_id.clone(),
            ));
        }
    }

    let mut decoded_fitness = Vec::with_capacity(draft.fitness.len());
    for (raw, answer) in &draft.fitness {
        decoded_fitness.push((raw, FitnessKey::decode(raw)?, answer));
    }

    let mut identity_map = BTreeMap::new();
    let mut allocated: BTreeSet<IndividualId> = existing.clone();
    for individual in &draft.individuals {
        let submitted = IndividualId(individual.local_id.clone());
        let durable = if existing.contains(&submitted) {
            submitted
        } else {
            loop {
                let candidate = mint();
                if !allocated.contains(&candidate) {
                    break candidate;
                }
            }
        };
        allocated.insert(durable.clone());
        identity_map.insert(individual.local_id.clone(), durable);
    }

    let mut individuals = Vec::with_capacity(draft.individuals.len());
    for individual in &draft.individuals {
        let durable = match identity_map.get(&individual.local_id) {
            Some(durable) => durable.clone(),
            None => continue,
        };
        let manager = individual
            .manager
            .as_deref()
            .and_then(|local| identity_map.get(local).cloned());
        individuals.push(Individual {
            id: durable,
            name: individual.name.clone(),
            roles: individual.roles.clone(),
            email: individual.email.clone(),
            job_title: individual.job_title.clone(),
            department: individual.department.clone(),
            manager,
        });
    }

    let assignments = draft
        .assignments
        .iter()
        .map(|row| ResponsibilityAssignment {
            responsibility: row.responsibility.clone(),
            selected: row.selected,
            owner: row
                .owner
                .as_deref()
                .and_then(|local| identity_map.get(local).cloned()),
            evidence: row.evidence.clone(),
        })
        .collect();

    let mut fitness = Vec::with_capacity(decoded_fitness.len());
    let mut dropped_responses = Vec::new();
    for (raw, key, answer) in decoded_fitness {
        match identity_map.get(&key.individual) {
            Some(durable) => fitness.push(FitnessResponse {
                individual: durable.clone(),
                section: key.section,
                question: key.question,
                response: answer.response.clone(),
                details: answer.details.clone(),
                date: answer.date,
                evidence: answer.evidence.clone(),
            }),
            None => {
                warn!(
                    key = raw.as_str(),
                    "dropping fitness answer for individual absent from submission"
                );
                dropped_responses.push(raw.clone());
            }
        }
    }

    Ok(ReconciledDraft {
        individuals,
        assignments,
        fitness,
        identity_map,
        dropped_responses,
    })
}
