//! Client-side shape of a pack under edit.
//!
//! A draft carries everything the wizard has captured for one firm:
//! profile, responsibility register rows, individuals, and flattened
//! fitness answers. Individuals are identified by client-local ids chosen
//! by the caller; durable ids are assigned during reconciliation at save
//! time. Fitness answers are keyed by the encoded
//! `individual::section::question` key with the client-local id in the
//! first segment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{FirmProfile, FitnessAnswer};
use super::keys::FitnessKey;

/// Register row as submitted, with the owner as a client-local id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    pub responsibility: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
}

/// Individual as submitted, identified by a client-local id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualDraft {
    pub local_id: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Client-local id of the individual's manager, if any.
    #[serde(default)]
    pub manager: Option<String>,
}

/// A complete pack draft. Saving replaces the firm's stored record with
/// the reconciled form of this value; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackDraft {
    pub profile: FirmProfile,
    #[serde(default)]
    pub assignments: Vec<AssignmentDraft>,
    #[serde(default)]
    pub individuals: Vec<IndividualDraft>,
    /// Encoded fitness key to answer.
    #[serde(default)]
    pub fitness: BTreeMap<String, FitnessAnswer>,
}

impl PackDraft {
    pub fn new(profile: FirmProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn set_profile(&mut self, profile: FirmProfile) {
        self.profile = profile;
    }

    pub fn set_assignments(&mut self, assignments: Vec<AssignmentDraft>) {
        self.assignments = assignments;
    }

    fn assignment_mut(&mut self, responsibility: &str) -> &mut AssignmentDraft {
        let position = self
            .assignments
            .iter()
            .position(|row| row.responsibility == responsibility);
        let index = match position {
            Some(index) => index,
            None => {
                self.assignments.push(AssignmentDraft {
                    responsibility: responsibility.to_string(),
                    ..AssignmentDraft::default()
                });
                self.assignments.len() - 1
            }
        };
        &mut self.assignments[index]
    }

    /// Mark a responsibility as taken up or relinquished, preserving any
    /// recorded owner and evidence.
    pub fn select_responsibility(&mut self, responsibility: &str, selected: bool) {
        self.assignment_mut(responsibility).selected = selected;
    }

    /// Point a responsibility at an owner by client-local id, or clear it.
    pub fn assign_owner(&mut self, responsibility: &str, owner: Option<String>) {
        self.assignment_mut(responsibility).owner = owner;
    }

    pub fn attach_evidence(&mut self, responsibility: &str, evidence: Option<String>) {
        self.assignment_mut(responsibility).evidence = evidence;
    }

    pub fn set_individuals(&mut self, individuals: Vec<IndividualDraft>) {
        self.individuals = individuals;
    }

    /// Add an individual, or update the one already carrying the same
    /// client-local id.
    pub fn upsert_individual(&mut self, individual: IndividualDraft) {
        match self
            .individuals
            .iter_mut()
            .find(|existing| existing.local_id == individual.local_id)
        {
            Some(existing) => *existing = individual,
            None => self.individuals.push(individual),
        }
    }

    /// Remove an individual and everything that referenced them: their
    /// fitness answers, any responsibility ownership, and any reporting
    /// lines pointing at them.
    pub fn remove_individual(&mut self, local_id: &str) {
        self.individuals.retain(|existing| existing.local_id != local_id);
        for individual in &mut self.individuals {
            if individual.manager.as_deref() == Some(local_id) {
                individual.manager = None;
            }
        }
        for row in &mut self.assignments {
            if row.owner.as_deref() == Some(local_id) {
                row.owner = None;
            }
        }
        self.fitness.retain(|key, _| {
            FitnessKey::decode(key)
                .map(|decoded| decoded.individual != local_id)
                .unwrap_or(true)
        });
    }

    pub fn set_fitness(&mut self, fitness: BTreeMap<String, FitnessAnswer>) {
        self.fitness = fitness;
    }

    /// Record one questionnaire answer for an individual by client-local
    /// id. Overwrites any previous answer to the same question.
    pub fn record_answer(
        &mut self,
        local_id: &str,
        section: &str,
        question: &str,
        answer: FitnessAnswer,
    ) {
        let key = FitnessKey::new(local_id, section, question);
        self.fitness.insert(key.encode(), answer);
    }
}
