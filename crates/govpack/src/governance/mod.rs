//! Governance pack assembly: rule catalog, applicability resolution,
//! draft reconciliation, scoring, and the HTTP surface over them.

pub mod applicability;
pub mod catalog;
pub mod domain;
pub mod draft;
pub mod export;
pub mod keys;
pub mod reconcile;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    FirmId, FirmProfile, FitnessAnswer, FitnessResponse, Individual, IndividualId,
    ResponsibilityAssignment,
};
pub use draft::{AssignmentDraft, IndividualDraft, PackDraft};
pub use report::PackView;
pub use router::governance_router;
pub use scoring::{BoardReadiness, ReadinessLabel, RiskAssessment, RiskLevel};
pub use service::{ConsistencyWarning, GovernancePackService, PackServiceError, SaveOutcome};
pub use store::{FirmRecord, GovernanceStore, StoreError};
