use super::common::*;

use crate::governance::domain::{
    FitnessResponse, Individual, IndividualId, ResponsibilityAssignment,
};
use crate::governance::catalog::fitness;
use crate::governance::scoring::readiness::{board_readiness, ReadinessLabel};
use crate::governance::scoring::risk::assess_all;
use crate::governance::store::FirmRecord;

fn individual(id: &str, name: &str) -> Individual {
    Individual {
        id: IndividualId(id.to_string()),
        name: name.to_string(),
        roles: Vec::new(),
        email: None,
        job_title: None,
        department: None,
        manager: None,
    }
}

fn assignment(
    responsibility: &str,
    selected: bool,
    owner: Option<&str>,
    evidence: Option<&str>,
) -> ResponsibilityAssignment {
    ResponsibilityAssignment {
        responsibility: responsibility.to_string(),
        selected,
        owner: owner.map(|id| IndividualId(id.to_string())),
        evidence: evidence.map(|reference| reference.to_string()),
    }
}

fn response(
    id: &str,
    section: &str,
    question: &str,
    answer: &str,
    evidence: Option<&str>,
) -> FitnessResponse {
    FitnessResponse {
        individual: IndividualId(id.to_string()),
        section: section.to_string(),
        question: question.to_string(),
        response: answer.to_string(),
        details: None,
        date: None,
        evidence: evidence.map(|reference| reference.to_string()),
    }
}

fn full_negative_responses(id: &str, evidence: Option<&str>) -> Vec<FitnessResponse> {
    fitness::questions()
        .iter()
        .map(|question| response(id, question.section, question.code, "no", evidence))
        .collect()
}

fn readiness_of(record: &FirmRecord) -> crate::governance::scoring::BoardReadiness {
    let assessments = assess_all(&record.individuals, &record.fitness);
    board_readiness(record, &assessments)
}

#[test]
fn empty_pack_scores_zero_and_reads_not_started() {
    let record = FirmRecord {
        profile: core_bank_profile(),
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.score, 0);
    assert_eq!(readiness.label, ReadinessLabel::NotStarted);
    assert_eq!(readiness.label_text, "Not started");
    assert_eq!(readiness.components.mandatory_ownership, 0);
    assert_eq!(readiness.components.fitness_completion, 0);
    assert_eq!(readiness.components.evidence, 0);
    assert_eq!(readiness.components.risk, 0);
    assert_eq!(readiness.mandatory_total, 4);
}

#[test]
fn complete_pack_scores_one_hundred_and_reads_board_ready() {
    let mut fitness_rows = full_negative_responses("ind-000001", Some("dbs-check.pdf"));
    fitness_rows.extend(full_negative_responses("ind-000002", Some("dbs-check.pdf")));
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b", true, Some("ind-000002"), Some("sor-2026.pdf")),
            assignment("pr_b1", true, Some("ind-000002"), Some("sor-2026.pdf")),
            assignment("pr_d", true, Some("ind-000002"), Some("sor-2026.pdf")),
        ],
        individuals: vec![
            individual("ind-000001", "Alice Hargreaves"),
            individual("ind-000002", "Bikram Shah"),
        ],
        fitness: fitness_rows,
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.components.mandatory_ownership, 40);
    assert_eq!(readiness.components.fitness_completion, 30);
    assert_eq!(readiness.components.evidence, 20);
    assert_eq!(readiness.components.risk, 10);
    assert_eq!(readiness.score, 100);
    assert_eq!(readiness.label, ReadinessLabel::BoardReady);
    assert_eq!(readiness.expected_answers, 2 * fitness::question_count());
    assert_eq!(readiness.recorded_answers, readiness.expected_answers);
}

#[test]
fn ownership_fraction_rounds_to_nearest_point() {
    // Payments firms carry exactly three mandatory responsibilities, so
    // two owned out of three lands on 26.67 and rounds up.
    let record = FirmRecord {
        profile: payments_profile(),
        assignments: vec![
            assignment("psd_governance", true, Some("ind-000001"), None),
            assignment("psd_safeguarding", true, Some("ind-000001"), None),
            assignment("psd_financial_crime", true, None, None),
        ],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.mandatory_total, 3);
    assert_eq!(readiness.mandatory_owned, 2);
    assert_eq!(readiness.components.mandatory_ownership, 27);
}

#[test]
fn selection_without_owner_earns_no_ownership_credit() {
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, None, None),
            assignment("pr_b", false, Some("ind-000001"), None),
        ],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.mandatory_owned, 0);
    assert_eq!(readiness.components.mandatory_ownership, 0);
}

#[test]
fn limited_firm_with_no_mandatory_entries_earns_no_ownership_points() {
    let mut profile = core_bank_profile();
    profile.category = "limited".to_string();
    let record = FirmRecord {
        profile,
        assignments: vec![assignment(
            "or_operational_resilience",
            true,
            Some("ind-000001"),
            None,
        )],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.mandatory_total, 0);
    assert_eq!(readiness.components.mandatory_ownership, 0);
}

#[test]
fn fitness_completion_scales_with_answered_questions() {
    let record = FirmRecord {
        profile: core_bank_profile(),
        individuals: vec![
            individual("ind-000001", "Alice Hargreaves"),
            individual("ind-000002", "Bikram Shah"),
        ],
        fitness: full_negative_responses("ind-000001", None),
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.components.fitness_completion, 15);
    assert_eq!(readiness.recorded_answers, fitness::question_count());
}

#[test]
fn blank_and_unknown_answers_do_not_count_as_recorded() {
    let record = FirmRecord {
        profile: core_bank_profile(),
        individuals: vec![individual("ind-000001", "Alice Hargreaves")],
        fitness: vec![
            response("ind-000001", "integrity", "criminal_convictions", "  ", None),
            response("ind-000001", "integrity", "withdrawn_question", "no", None),
        ],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.recorded_answers, 0);
    assert_eq!(readiness.components.fitness_completion, 0);
    assert_eq!(readiness.components.risk, 0, "risk is unassessable with no answers");
}

#[test]
fn owned_register_without_answers_earns_no_risk_credit() {
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b1", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_d", true, Some("ind-000001"), Some("sor-2026.pdf")),
        ],
        individuals: vec![individual("ind-000001", "Alice Hargreaves")],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.components.mandatory_ownership, 40);
    assert_eq!(readiness.components.fitness_completion, 0);
    assert_eq!(readiness.components.evidence, 20);
    assert_eq!(readiness.components.risk, 0);
    assert_eq!(readiness.score, 60);
    assert_eq!(readiness.label, ReadinessLabel::InProgress);
}

#[test]
fn evidence_component_averages_register_and_questionnaire_coverage() {
    // Two selected applicable rows, one evidenced: register coverage 0.5.
    // Two answered questions, both evidenced: questionnaire coverage 1.0.
    // Average 0.75 of the twenty-point budget is fifteen.
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b", true, Some("ind-000001"), None),
        ],
        individuals: vec![individual("ind-000001", "Alice Hargreaves")],
        fitness: vec![
            response(
                "ind-000001",
                "integrity",
                "criminal_convictions",
                "no",
                Some("dbs-check.pdf"),
            ),
            response(
                "ind-000001",
                "financial",
                "bankruptcy",
                "no",
                Some("credit-report.pdf"),
            ),
        ],
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.components.evidence, 15);
}

#[test]
fn orphaned_selections_stay_out_of_evidence_coverage() {
    // pr_j is enhanced-only; for a core firm the evidenced row must not
    // rescue the coverage ratio of the applicable register.
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), None),
            assignment("pr_j", true, Some("ind-000001"), Some("audit-charter.pdf")),
        ],
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.components.evidence, 0);
}

#[test]
fn high_risk_individual_blocks_board_ready_despite_the_score() {
    let mut fitness_rows = full_negative_responses("ind-000001", Some("dbs-check.pdf"));
    fitness_rows.extend(full_negative_responses("ind-000002", Some("dbs-check.pdf")));
    for row in &mut fitness_rows {
        if row.individual.as_str() == "ind-000002" && row.question == "criminal_convictions" {
            row.response = "yes".to_string();
        }
    }
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b", true, Some("ind-000002"), Some("sor-2026.pdf")),
            assignment("pr_b1", true, Some("ind-000002"), Some("sor-2026.pdf")),
            assignment("pr_d", true, Some("ind-000002"), Some("sor-2026.pdf")),
        ],
        individuals: vec![
            individual("ind-000001", "Alice Hargreaves"),
            individual("ind-000002", "Bikram Shah"),
        ],
        fitness: fitness_rows,
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.high_risk_individuals, 1);
    assert_eq!(readiness.components.risk, 5);
    assert_eq!(readiness.score, 95);
    assert_eq!(readiness.label, ReadinessLabel::InProgress);
}

#[test]
fn risk_component_floors_at_zero() {
    let mut fitness_rows = Vec::new();
    for id in ["ind-000001", "ind-000002", "ind-000003"] {
        let mut rows = full_negative_responses(id, None);
        for row in &mut rows {
            if row.question == "criminal_convictions" {
                row.response = "yes".to_string();
            }
        }
        fitness_rows.extend(rows);
    }
    let record = FirmRecord {
        profile: core_bank_profile(),
        individuals: vec![
            individual("ind-000001", "Alice Hargreaves"),
            individual("ind-000002", "Bikram Shah"),
            individual("ind-000003", "Carol Danvers"),
        ],
        fitness: fitness_rows,
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.high_risk_individuals, 3);
    assert_eq!(readiness.components.risk, 0);
}

#[test]
fn medium_risk_individuals_deduct_two_points_each() {
    let mut rows = full_negative_responses("ind-000001", None);
    for row in &mut rows {
        if row.question == "ccj_orders" {
            row.response = "yes".to_string();
        }
    }
    let record = FirmRecord {
        profile: core_bank_profile(),
        individuals: vec![individual("ind-000001", "Alice Hargreaves")],
        fitness: rows,
        ..FirmRecord::default()
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.medium_risk_individuals, 1);
    assert_eq!(readiness.components.risk, 8);
}

#[test]
fn incomplete_fitness_blocks_board_ready_at_the_threshold() {
    // One of two individuals fully answered: 40 + 15 + 20 + 10 = 85
    // meets the threshold but the completion gate still fails.
    let record = FirmRecord {
        profile: core_bank_profile(),
        assignments: vec![
            assignment("pr_a", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_b1", true, Some("ind-000001"), Some("sor-2026.pdf")),
            assignment("pr_d", true, Some("ind-000001"), Some("sor-2026.pdf")),
        ],
        individuals: vec![
            individual("ind-000001", "Alice Hargreaves"),
            individual("ind-000002", "Bikram Shah"),
        ],
        fitness: full_negative_responses("ind-000001", Some("dbs-check.pdf")),
    };

    let readiness = readiness_of(&record);

    assert_eq!(readiness.score, 85);
    assert_eq!(readiness.label, ReadinessLabel::InProgress);
}
