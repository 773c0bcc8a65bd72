//! Per-individual fitness risk scoring.
//!
//! Each affirmative answer to a weighted question contributes that
//! question's points. Unanswered and unknown questions contribute nothing,
//! so an individual with no answers scores zero and classifies as clear.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::governance::catalog::fitness;
use crate::governance::domain::{FitnessAnswer, FitnessResponse, Individual, IndividualId};

/// Risk band for an overall score. Band edges are inclusive at the bottom:
/// ten points or more is high, five to nine medium, one to four low, zero
/// clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Clear,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn classify(score: u32) -> RiskLevel {
        match score {
            0 => RiskLevel::Clear,
            1..=4 => RiskLevel::Low,
            5..=9 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Clear => "Clear",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Points accumulated within one questionnaire section. Sections with no
/// affirmative answers appear with a zero score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section: &'static str,
    pub title: &'static str,
    pub score: u32,
}

/// A weighted question answered affirmatively, with the disclosure the
/// individual attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedQuestion {
    pub question: &'static str,
    pub text: &'static str,
    pub section: &'static str,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Derived assessment for one individual. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub individual: IndividualId,
    pub overall: u32,
    pub level: RiskLevel,
    /// One entry per questionnaire section, in catalog order.
    pub sections: Vec<SectionScore>,
    pub flags: Vec<FlaggedQuestion>,
}

impl RiskAssessment {
    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }
}

/// Score one individual from their answers keyed by question code.
pub fn assess(individual: IndividualId, answers: &BTreeMap<String, FitnessAnswer>) -> RiskAssessment {
    let mut sections = Vec::with_capacity(fitness::sections().len());
    let mut flags = Vec::new();
    let mut overall = 0;
    for section in fitness::sections() {
        let mut score = 0;
        for question in fitness::questions()
            .iter()
            .filter(|question| question.section == section.code)
        {
            if question.weight == 0 {
                continue;
            }
            let answer = match answers.get(question.code) {
                Some(answer) => answer,
                None => continue,
            };
            if answer.is_affirmative() {
                score += question.weight;
                flags.push(FlaggedQuestion {
                    question: question.code,
                    text: question.text,
                    section: section.code,
                    weight: question.weight,
                    details: answer.details.clone(),
                    date: answer.date,
                });
            }
        }
        overall += score;
        sections.push(SectionScore {
            section: section.code,
            title: section.title,
            score,
        });
    }
    RiskAssessment {
        individual,
        overall,
        level: RiskLevel::classify(overall),
        sections,
        flags,
    }
}

/// Assess every individual in a firm's pack, preserving the order of the
/// individual list. Stored answers to questions no longer in the catalog
/// are ignored.
pub fn assess_all(individuals: &[Individual], fitness: &[FitnessResponse]) -> Vec<RiskAssessment> {
    let mut per_individual: BTreeMap<&IndividualId, BTreeMap<String, FitnessAnswer>> =
        BTreeMap::new();
    for row in fitness {
        per_individual
            .entry(&row.individual)
            .or_default()
            .insert(row.question.clone(), row.answer());
    }
    let empty = BTreeMap::new();
    individuals
        .iter()
        .map(|individual| {
            let answers = per_individual.get(&individual.id).unwrap_or(&empty);
            assess(individual.id.clone(), answers)
        })
        .collect()
}
