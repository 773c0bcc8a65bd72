//! Board-readiness scoring for a firm's pack.
//!
//! The score is the sum of four independently rounded components: coverage
//! of mandatory responsibilities (40 points), questionnaire completion
//! (30), evidence coverage (20), and a risk deduction component (10). A
//! component with nothing to measure contributes zero rather than its full
//! budget, so an empty pack scores zero.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::governance::applicability;
use crate::governance::catalog::fitness;
use crate::governance::domain::{IndividualId, ResponsibilityAssignment};
use crate::governance::store::FirmRecord;

use super::risk::{RiskAssessment, RiskLevel};

const MANDATORY_OWNERSHIP_BUDGET: f64 = 40.0;
const FITNESS_COMPLETION_BUDGET: f64 = 30.0;
const EVIDENCE_BUDGET: f64 = 20.0;
const RISK_BUDGET: i64 = 10;
const HIGH_RISK_PENALTY: i64 = 5;
const MEDIUM_RISK_PENALTY: i64 = 2;
const BOARD_READY_THRESHOLD: u8 = 85;
const MAX_SCORE: u8 = 100;

/// Coarse pack state shown on the firm dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLabel {
    NotStarted,
    InProgress,
    BoardReady,
}

impl ReadinessLabel {
    pub const fn label(self) -> &'static str {
        match self {
            ReadinessLabel::NotStarted => "Not started",
            ReadinessLabel::InProgress => "In progress",
            ReadinessLabel::BoardReady => "Board-ready",
        }
    }
}

/// Points earned per component, each already rounded to whole points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessComponents {
    pub mandatory_ownership: u8,
    pub fitness_completion: u8,
    pub evidence: u8,
    pub risk: u8,
}

/// Derived readiness summary. Never stored; recomputed per read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReadiness {
    pub score: u8,
    pub label: ReadinessLabel,
    pub label_text: &'static str,
    pub components: ReadinessComponents,
    pub mandatory_total: usize,
    pub mandatory_owned: usize,
    pub expected_answers: usize,
    pub recorded_answers: usize,
    pub high_risk_individuals: usize,
    pub medium_risk_individuals: usize,
}

fn scaled(numerator: usize, denominator: usize, budget: f64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    ((numerator as f64 / denominator as f64) * budget).round() as u8
}

fn owned(assignments: &[ResponsibilityAssignment], code: &str) -> bool {
    assignments
        .iter()
        .any(|row| row.responsibility == code && row.selected && row.owner.is_some())
}

pub fn board_readiness(record: &FirmRecord, assessments: &[RiskAssessment]) -> BoardReadiness {
    let applicable = applicability::profile_responsibilities(&record.profile);
    let applicable_codes: BTreeSet<&str> = applicable.iter().map(|entry| entry.code).collect();

    let mandatory: Vec<&str> = applicable
        .iter()
        .filter(|entry| entry.mandatory)
        .map(|entry| entry.code)
        .collect();
    let mandatory_owned = mandatory
        .iter()
        .filter(|code| owned(&record.assignments, code))
        .count();
    let mandatory_points = scaled(mandatory_owned, mandatory.len(), MANDATORY_OWNERSHIP_BUDGET);

    let individual_ids: BTreeSet<&IndividualId> =
        record.individuals.iter().map(|individual| &individual.id).collect();
    let mut answered_pairs: BTreeSet<(&IndividualId, &'static str)> = BTreeSet::new();
    for row in &record.fitness {
        if !row.is_answered() || !individual_ids.contains(&row.individual) {
            continue;
        }
        if let Some(question) = fitness::question_by_code(&row.question) {
            answered_pairs.insert((&row.individual, question.code));
        }
    }
    let expected_answers = record.individuals.len() * fitness::question_count();
    let fitness_points = scaled(
        answered_pairs.len(),
        expected_answers,
        FITNESS_COMPLETION_BUDGET,
    );

    let selected: Vec<&ResponsibilityAssignment> = record
        .assignments
        .iter()
        .filter(|row| row.selected && applicable_codes.contains(row.responsibility.as_str()))
        .collect();
    let answered_rows: Vec<_> = record
        .fitness
        .iter()
        .filter(|row| {
            row.is_answered()
                && individual_ids.contains(&row.individual)
                && fitness::question_by_code(&row.question).is_some()
        })
        .collect();
    let mut coverage = Vec::new();
    if !selected.is_empty() {
        let with_evidence = selected.iter().filter(|row| row.has_evidence()).count();
        coverage.push(with_evidence as f64 / selected.len() as f64);
    }
    if !answered_rows.is_empty() {
        let with_evidence = answered_rows
            .iter()
            .filter(|row| row.answer().has_evidence())
            .count();
        coverage.push(with_evidence as f64 / answered_rows.len() as f64);
    }
    let evidence_points = if coverage.is_empty() {
        0
    } else {
        ((coverage.iter().sum::<f64>() / coverage.len() as f64) * EVIDENCE_BUDGET).round() as u8
    };

    let high_risk_individuals = assessments
        .iter()
        .filter(|assessment| assessment.level == RiskLevel::High)
        .count();
    let medium_risk_individuals = assessments
        .iter()
        .filter(|assessment| assessment.level == RiskLevel::Medium)
        .count();
    // Risk is not assessable until at least one answer is recorded.
    let risk_points = if answered_pairs.is_empty() {
        0
    } else {
        (RISK_BUDGET
            - HIGH_RISK_PENALTY * high_risk_individuals as i64
            - MEDIUM_RISK_PENALTY * medium_risk_individuals as i64)
            .max(0) as u8
    };

    let components = ReadinessComponents {
        mandatory_ownership: mandatory_points,
        fitness_completion: fitness_points,
        evidence: evidence_points,
        risk: risk_points,
    };
    let score =
        (mandatory_points + fitness_points + evidence_points + risk_points).min(MAX_SCORE);

    let mandatory_complete = mandatory_owned == mandatory.len();
    let fitness_complete = expected_answers > 0 && answered_pairs.len() == expected_answers;
    let label = if score == 0 {
        ReadinessLabel::NotStarted
    } else if score >= BOARD_READY_THRESHOLD
        && mandatory_complete
        && fitness_complete
        && high_risk_individuals == 0
    {
        ReadinessLabel::BoardReady
    } else {
        ReadinessLabel::InProgress
    };

    BoardReadiness {
        score,
        label,
        label_text: label.label(),
        components,
        mandatory_total: mandatory.len(),
        mandatory_owned,
        expected_answers,
        recorded_answers: answered_pairs.len(),
        high_risk_individuals,
        medium_risk_individuals,
    }
}
