//! Read-side assembly of the board pack view.
//!
//! Builds everything the presentation layer needs from one stored record:
//! the responsibility register with resolved owners, orphaned selections
//! left behind by profile changes, ownership suggestions, per-individual
//! risk assessments, and the readiness summary.

use serde::Serialize;

use super::applicability;
use super::catalog::responsibilities;
use super::catalog::roles;
use super::domain::{FirmId, FirmProfile, Individual, IndividualId, ResponsibilityAssignment};
use super::scoring::{assess_all, board_readiness, BoardReadiness, RiskAssessment};
use super::store::FirmRecord;

/// Owner of a register row, resolved to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerView {
    pub id: IndividualId,
    pub name: String,
}

/// One row of the rendered responsibility register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsibilityStatusView {
    pub responsibility: String,
    /// Catalog text; absent when the stored code is no longer in the
    /// catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'static str>,
    pub mandatory: bool,
    pub applicable: bool,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    /// Selected but no longer applicable to the firm's current profile.
    pub orphaned: bool,
}

/// Candidate owner for an unassigned responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedOwner {
    pub individual: IndividualId,
    pub name: String,
    pub via_role: &'static str,
    pub role_label: &'static str,
}

/// An applicable responsibility with no owner, with the individuals whose
/// roles conventionally carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipSuggestion {
    pub responsibility: &'static str,
    pub text: &'static str,
    pub candidates: Vec<SuggestedOwner>,
}

/// The complete pack view for one firm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackView {
    pub firm: FirmId,
    pub profile: FirmProfile,
    pub individuals: Vec<Individual>,
    pub responsibilities: Vec<ResponsibilityStatusView>,
    pub orphaned_selections: Vec<String>,
    pub suggestions: Vec<OwnershipSuggestion>,
    pub assessments: Vec<RiskAssessment>,
    pub readiness: BoardReadiness,
}

/// Codes of assignment rows that are selected but not applicable under the
/// given profile, in register order.
pub fn orphaned_selections(
    profile: &FirmProfile,
    assignments: &[ResponsibilityAssignment],
) -> Vec<String> {
    let applicable = applicability::applicable_codes(profile);
    assignments
        .iter()
        .filter(|row| row.selected && !applicable.contains(row.responsibility.as_str()))
        .map(|row| row.responsibility.clone())
        .collect()
}

fn owner_view(record: &FirmRecord, owner: Option<&IndividualId>) -> Option<OwnerView> {
    let id = owner?;
    record.individual(id).map(|individual| OwnerView {
        id: individual.id.clone(),
        name: individual.name.clone(),
    })
}

fn register_rows(record: &FirmRecord) -> Vec<ResponsibilityStatusView> {
    let applicable = applicability::profile_responsibilities(&record.profile);
    let mut rows = Vec::with_capacity(applicable.len());
    for entry in &applicable {
        let assignment = record
            .assignments
            .iter()
            .find(|row| row.responsibility == entry.code);
        rows.push(ResponsibilityStatusView {
            responsibility: entry.code.to_string(),
            text: Some(entry.text),
            mandatory: entry.mandatory,
            applicable: true,
            selected: assignment.map(|row| row.selected).unwrap_or(false),
            owner: owner_view(record, assignment.and_then(|row| row.owner.as_ref())),
            evidence: assignment.and_then(|row| row.evidence.clone()),
            orphaned: false,
        });
    }
    let applicable_codes = applicability::applicable_codes(&record.profile);
    for row in &record.assignments {
        if applicable_codes.contains(row.responsibility.as_str()) {
            continue;
        }
        let entry = responsibilities::by_code(&row.responsibility);
        rows.push(ResponsibilityStatusView {
            responsibility: row.responsibility.clone(),
            text: entry.map(|entry| entry.text),
            mandatory: entry.map(|entry| entry.mandatory).unwrap_or(false),
            applicable: false,
            selected: row.selected,
            owner: owner_view(record, row.owner.as_ref()),
            evidence: row.evidence.clone(),
            orphaned: row.selected,
        });
    }
    rows
}

/// Suggestions for applicable responsibilities that are not yet owned.
/// Convention only; the caller is free to assign anyone.
pub fn ownership_suggestions(record: &FirmRecord) -> Vec<OwnershipSuggestion> {
    let applicable = applicability::profile_responsibilities(&record.profile);
    let mut suggestions = Vec::new();
    for entry in &applicable {
        let already_owned = record.assignments.iter().any(|row| {
            row.responsibility == entry.code && row.selected && row.owner.is_some()
        });
        if already_owned {
            continue;
        }
        let mut candidates = Vec::new();
        for individual in &record.individuals {
            for role_code in &individual.roles {
                if !roles::suggested_responsibilities(role_code).contains(&entry.code) {
                    continue;
                }
                if let Some(role) = roles::by_code(role_code) {
                    candidates.push(SuggestedOwner {
                        individual: individual.id.clone(),
                        name: individual.name.clone(),
                        via_role: role.code,
                        role_label: role.label,
                    });
                }
            }
        }
        if !candidates.is_empty() {
            suggestions.push(OwnershipSuggestion {
                responsibility: entry.code,
                text: entry.text,
                candidates,
            });
        }
    }
    suggestions
}

pub fn build_pack_view(firm: &FirmId, record: &FirmRecord) -> PackView {
    let assessments = assess_all(&record.individuals, &record.fitness);
    let readiness = board_readiness(record, &assessments);
    PackView {
        firm: firm.clone(),
        profile: record.profile.clone(),
        individuals: record.individuals.clone(),
        responsibilities: register_rows(record),
        orphaned_selections: orphaned_selections(&record.profile, &record.assignments),
        suggestions: ownership_suggestions(record),
        assessments,
        readiness,
    }
}
