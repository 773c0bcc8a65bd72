use super::common::*;

use std::collections::BTreeSet;

use crate::governance::domain::IndividualId;
use crate::governance::draft::PackDraft;
use crate::governance::keys::FitnessKeyError;
use crate::governance::reconcile::{reconcile, DraftValidationError};

fn sequential_mint() -> impl FnMut() -> IndividualId {
    let mut counter = 0;
    move || {
        counter += 1;
        IndividualId(format!("minted-{counter:03}"))
    }
}

fn no_existing() -> BTreeSet<IndividualId> {
    BTreeSet::new()
}

#[test]
fn first_save_mints_a_durable_id_per_individual() {
    let draft = starter_draft();

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    assert_eq!(reconciled.identity_map.len(), 2);
    assert_eq!(
        reconciled.identity_map.get("alice"),
        Some(&IndividualId("minted-001".to_string()))
    );
    assert_eq!(
        reconciled.identity_map.get("bikram"),
        Some(&IndividualId("minted-002".to_string()))
    );
    let durable: BTreeSet<_> = reconciled.identity_map.values().collect();
    assert_eq!(durable.len(), 2, "identity map must be injective");
}

#[test]
fn resubmitted_durable_ids_are_preserved_verbatim() {
    let mut existing = BTreeSet::new();
    existing.insert(IndividualId("ind-000042".to_string()));

    let mut draft = PackDraft::new(core_bank_profile());
    draft.set_individuals(vec![
        individual_draft("ind-000042", "Alice Hargreaves", &["smf1"]),
        individual_draft("new-person", "Carol Danvers", &["smf16"]),
    ]);

    let reconciled = reconcile(&existing, &draft, sequential_mint()).expect("draft reconciles");

    assert_eq!(
        reconciled.identity_map.get("ind-000042"),
        Some(&IndividualId("ind-000042".to_string()))
    );
    assert_eq!(
        reconciled.identity_map.get("new-person"),
        Some(&IndividualId("minted-001".to_string()))
    );
}

#[test]
fn minting_skips_candidates_that_collide_with_existing_ids() {
    let mut existing = BTreeSet::new();
    existing.insert(IndividualId("minted-001".to_string()));

    let mut draft = PackDraft::new(core_bank_profile());
    draft.set_individuals(vec![individual_draft("fresh", "Dana Scott", &[])]);

    let reconciled = reconcile(&existing, &draft, sequential_mint()).expect("draft reconciles");

    assert_eq!(
        reconciled.identity_map.get("fresh"),
        Some(&IndividualId("minted-002".to_string())),
        "first candidate collides with a persisted id and must be discarded"
    );
}

#[test]
fn duplicate_local_ids_reject_the_whole_submission() {
    let mut draft = PackDraft::new(core_bank_profile());
    draft.individuals = vec![
        individual_draft("alice", "Alice Hargreaves", &[]),
        individual_draft("alice", "A. Hargreaves", &[]),
    ];

    let error = reconcile(&no_existing(), &draft, sequential_mint())
        .expect_err("duplicate ids must not reconcile");

    assert_eq!(
        error,
        DraftValidationError::DuplicateIndividual("alice".to_string())
    );
}

#[test]
fn malformed_fitness_keys_reject_the_whole_submission() {
    let mut draft = starter_draft();
    draft
        .fitness
        .insert("alice::integrity".to_string(), answer("no"));

    let error = reconcile(&no_existing(), &draft, sequential_mint())
        .expect_err("two-segment key must not reconcile");
    assert!(matches!(
        error,
        DraftValidationError::MalformedFitnessKey(FitnessKeyError::SegmentCount { found: 2, .. })
    ));

    let mut draft = starter_draft();
    draft
        .fitness
        .insert("alice::::criminal_convictions".to_string(), answer("no"));

    let error = reconcile(&no_existing(), &draft, sequential_mint())
        .expect_err("empty segment must not reconcile");
    assert!(matches!(
        error,
        DraftValidationError::MalformedFitnessKey(FitnessKeyError::EmptySegment(_))
    ));
}

#[test]
fn owner_references_are_rewritten_to_durable_ids() {
    let draft = starter_draft();

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    let pr_a = reconciled
        .assignments
        .iter()
        .find(|row| row.responsibility == "pr_a")
        .expect("pr_a row present");
    assert_eq!(pr_a.owner, Some(IndividualId("minted-001".to_string())));
}

#[test]
fn owner_references_to_unknown_individuals_are_cleared() {
    let mut draft = PackDraft::new(core_bank_profile());
    draft.set_individuals(vec![individual_draft("alice", "Alice Hargreaves", &[])]);
    draft.set_assignments(vec![assignment_draft("pr_a", true, Some("ghost"))]);

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    let pr_a = &reconciled.assignments[0];
    assert!(pr_a.selected, "selection survives an unresolvable owner");
    assert_eq!(pr_a.owner, None);
}

#[test]
fn manager_references_are_rewritten_or_cleared() {
    let mut draft = PackDraft::new(core_bank_profile());
    let mut alice = individual_draft("alice", "Alice Hargreaves", &["smf1"]);
    alice.manager = Some("bikram".to_string());
    let mut ghost_report = individual_draft("carol", "Carol Danvers", &[]);
    ghost_report.manager = Some("ghost".to_string());
    draft.set_individuals(vec![
        alice,
        individual_draft("bikram", "Bikram Shah", &["smf9"]),
        ghost_report,
    ]);

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    let alice = &reconciled.individuals[0];
    assert_eq!(alice.manager, Some(IndividualId("minted-002".to_string())));
    let carol = &reconciled.individuals[2];
    assert_eq!(carol.manager, None);
}

#[test]
fn fitness_keys_are_rewritten_to_durable_ids() {
    let draft = starter_draft();

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    assert_eq!(reconciled.fitness.len(), 2);
    assert!(reconciled
        .fitness
        .iter()
        .all(|row| row.individual == IndividualId("minted-001".to_string())));
    assert!(reconciled.dropped_responses.is_empty());
}

#[test]
fn answers_for_absent_individuals_are_dropped_and_reported() {
    let mut draft = starter_draft();
    draft.record_answer("ghost", "integrity", "criminal_convictions", answer("yes"));

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    assert_eq!(
        reconciled.dropped_responses,
        vec!["ghost::integrity::criminal_convictions".to_string()]
    );
    assert_eq!(reconciled.fitness.len(), 2, "only mapped answers persist");
}

#[test]
fn empty_draft_reconciles_to_an_empty_record() {
    let draft = PackDraft::new(core_bank_profile());

    let reconciled =
        reconcile(&no_existing(), &draft, sequential_mint()).expect("draft reconciles");

    assert!(reconciled.individuals.is_empty());
    assert!(reconciled.assignments.is_empty());
    assert!(reconciled.fitness.is_empty());
    assert!(reconciled.identity_map.is_empty());
}
