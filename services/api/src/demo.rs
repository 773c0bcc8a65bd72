use crate::infra::InMemoryGovernanceStore;
use chrono::{Local, NaiveDate};
use clap::Args;
use govpack::error::AppError;
use govpack::governance::catalog::fitness;
use govpack::governance::export::{register_csv, register_filename};
use govpack::governance::{
    ConsistencyWarning, FirmId, FirmProfile, FitnessAnswer, GovernancePackService, IndividualDraft,
    IndividualId, PackDraft, PackView,
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Firm identifier used for the demo pack.
    #[arg(long, default_value = "demo-firm")]
    pub(crate) firm: String,
    /// Date stamped on questionnaire disclosures (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) disclosure_date: Option<NaiveDate>,
    /// Record an affirmative disclosure so the scoring portion has findings to show.
    #[arg(long)]
    pub(crate) with_findings: bool,
    /// Print the responsibilities register CSV at the end of the demo.
    #[arg(long)]
    pub(crate) include_register: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RegisterExportArgs {
    /// Pack draft JSON to export. The built-in sample pack is used when omitted.
    #[arg(long)]
    pub(crate) draft: Option<PathBuf>,
    /// Write the CSV here instead of standard output.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_register_export(args: RegisterExportArgs) -> Result<(), AppError> {
    let RegisterExportArgs { draft, output } = args;

    let draft = match draft {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<PackDraft>(&raw)?
        }
        None => sample_pack_draft(Local::now().date_naive(), false),
    };

    let service = GovernancePackService::new(Arc::new(InMemoryGovernanceStore::default()));
    let firm = FirmId("register-export".to_string());
    if let Err(err) = service.save_draft(&firm, draft) {
        println!("Draft rejected: {}", err);
        return Ok(());
    }
    let view = match service.load_pack(&firm) {
        Ok(view) => view,
        Err(err) => {
            println!("Pack unavailable: {}", err);
            return Ok(());
        }
    };

    let bytes = register_csv(&view)?;
    match output {
        Some(path) => {
            fs::write(&path, &bytes)?;
            println!(
                "Wrote {} register rows to {}",
                view.responsibilities.len(),
                path.display()
            );
        }
        None => print!("{}", String::from_utf8_lossy(&bytes)),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        firm,
        disclosure_date,
        with_findings,
        include_register,
    } = args;

    let disclosure_date = disclosure_date.unwrap_or_else(|| Local::now().date_naive());

    println!("Governance pack demo");

    let draft = sample_pack_draft(disclosure_date, with_findings);
    println!(
        "Firm: {} ({}, {} / {})",
        firm, draft.profile.firm_name, draft.profile.firm_type, draft.profile.category
    );

    let service = GovernancePackService::new(Arc::new(InMemoryGovernanceStore::default()));
    let firm_id = FirmId(firm);
    let outcome = match service.save_draft(&firm_id, draft) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Draft rejected: {}", err);
            return Ok(());
        }
    };

    println!(
        "\nSaved pack: {} individuals, {} register rows",
        outcome.record.individuals.len(),
        outcome.record.assignments.len()
    );
    println!("Durable identities");
    for (local_id, durable) in &outcome.identity_map {
        println!("- {} -> {}", local_id, durable.as_str());
    }

    if outcome.warnings.is_empty() {
        println!("Warnings: none");
    } else {
        println!("Warnings");
        for warning in &outcome.warnings {
            match warning {
                ConsistencyWarning::OrphanedSelection { responsibility } => {
                    println!("- orphaned selection: {}", responsibility)
                }
                ConsistencyWarning::DroppedFitnessResponse { key } => {
                    println!("- dropped fitness response: {}", key)
                }
            }
        }
    }

    let view = match service.load_pack(&firm_id) {
        Ok(view) => view,
        Err(err) => {
            println!("  Pack unavailable: {}", err);
            return Ok(());
        }
    };

    render_pack_view(&view);

    if include_register {
        println!("\nRegister export ({})", register_filename(&view.profile.firm_name));
        let bytes = register_csv(&view)?;
        print!("{}", String::from_utf8_lossy(&bytes));
    }

    Ok(())
}

/// Seed the running service with the sample firm so a fresh process has
/// something to browse. Used behind the APP_SEED_DEMO flag.
pub(crate) fn seed_demo_firm(service: &GovernancePackService<InMemoryGovernanceStore>) {
    let firm = FirmId("demo-firm".to_string());
    let draft = sample_pack_draft(Local::now().date_naive(), false);
    match service.save_draft(&firm, draft) {
        Ok(outcome) => info!(
            firm = outcome.firm.as_str(),
            individuals = outcome.record.individuals.len(),
            "seeded demo governance pack"
        ),
        Err(err) => warn!(error = %err, "demo seed failed"),
    }
}

fn individual_name<'a>(view: &'a PackView, id: &IndividualId) -> &'a str {
    view.individuals
        .iter()
        .find(|individual| &individual.id == id)
        .map(|individual| individual.name.as_str())
        .unwrap_or("(unknown)")
}

pub(crate) fn render_pack_view(view: &PackView) {
    println!("\nResponsibilities register");
    for row in &view.responsibilities {
        let status = if row.orphaned {
            "orphaned"
        } else if !row.selected {
            "not selected"
        } else if row.owner.is_none() {
            "unassigned"
        } else {
            "assigned"
        };
        let owner = row
            .owner
            .as_ref()
            .map(|owner| owner.name.as_str())
            .unwrap_or("-");
        let evidence = row.evidence.as_deref().unwrap_or("-");
        let mandatory = if row.mandatory { "mandatory" } else { "optional" };
        println!(
            "- {} [{}] {} | owner {} | evidence {}",
            row.responsibility, mandatory, status, owner, evidence
        );
    }

    if view.suggestions.is_empty() {
        println!("\nOwnership suggestions: none");
    } else {
        println!("\nOwnership suggestions");
        for suggestion in &view.suggestions {
            println!("- {}", suggestion.responsibility);
            for candidate in &suggestion.candidates {
                println!("  - {} (holds {})", candidate.name, candidate.role_label);
            }
        }
    }

    println!("\nFitness and propriety assessments");
    for assessment in &view.assessments {
        println!(
            "- {}: {} points ({})",
            individual_name(view, &assessment.individual),
            assessment.overall,
            assessment.level.label()
        );
        for flag in &assessment.flags {
            let detail = flag.details.as_deref().unwrap_or("no details given");
            match flag.date {
                Some(date) => println!("  - {} (+{}): {} ({})", flag.question, flag.weight, detail, date),
                None => println!("  - {} (+{}): {}", flag.question, flag.weight, detail),
            }
        }
    }

    let readiness = &view.readiness;
    println!(
        "\nBoard readiness: {}/100 ({})",
        readiness.score, readiness.label_text
    );
    println!(
        "- Mandatory ownership: {} pts ({}/{} owned)",
        readiness.components.mandatory_ownership,
        readiness.mandatory_owned,
        readiness.mandatory_total
    );
    println!(
        "- Fitness completion: {} pts ({}/{} answers recorded)",
        readiness.components.fitness_completion,
        readiness.recorded_answers,
        readiness.expected_answers
    );
    println!("- Evidence coverage: {} pts", readiness.components.evidence);
    println!(
        "- Risk posture: {} pts ({} high, {} medium)",
        readiness.components.risk,
        readiness.high_risk_individuals,
        readiness.medium_risk_individuals
    );
}

/// Pack for a core-tier investment firm holding client assets: four senior
/// managers, every mandatory responsibility owned and evidenced, and the
/// questionnaire fully answered. One optional responsibility is selected
/// without an owner so the demo has a suggestion to surface.
fn sample_pack_draft(disclosure_date: NaiveDate, with_findings: bool) -> PackDraft {
    let mut draft = PackDraft::new(FirmProfile {
        firm_name: "Harbourgate Capital Partners".to_string(),
        firm_type: "investment".to_string(),
        category: "core".to_string(),
        jurisdictions: vec!["UK".to_string()],
        is_cass_firm: true,
        opted_up: false,
    });

    draft.upsert_individual(IndividualDraft {
        local_id: "ceo".to_string(),
        name: "Priya Nandra".to_string(),
        roles: vec!["smf1".to_string()],
        email: Some("priya.nandra@harbourgate.example".to_string()),
        job_title: Some("Chief Executive".to_string()),
        ..IndividualDraft::default()
    });
    draft.upsert_individual(IndividualDraft {
        local_id: "compliance".to_string(),
        name: "Dominic Afolabi".to_string(),
        roles: vec!["smf16".to_string(), "smf17".to_string()],
        job_title: Some("Head of Compliance".to_string()),
        manager: Some("ceo".to_string()),
        ..IndividualDraft::default()
    });
    draft.upsert_individual(IndividualDraft {
        local_id: "chair".to_string(),
        name: "Eleanor Moss".to_string(),
        roles: vec!["smf9".to_string()],
        job_title: Some("Chair".to_string()),
        ..IndividualDraft::default()
    });
    draft.upsert_individual(IndividualDraft {
        local_id: "director".to_string(),
        name: "Tom Whitfield".to_string(),
        roles: vec!["smf3".to_string()],
        job_title: Some("Executive Director, Operations".to_string()),
        manager: Some("ceo".to_string()),
        ..IndividualDraft::default()
    });

    let owned = [
        ("pr_a", "ceo", "sor-priya-nandra-v3.pdf"),
        ("pr_b", "compliance", "smcr-policy-2026.pdf"),
        ("pr_b1", "compliance", "cert-regime-register.xlsx"),
        ("pr_d", "compliance", "fin-crime-mi-q2.pdf"),
        ("pr_z", "director", "cass-resolution-pack.pdf"),
    ];
    for (responsibility, owner, evidence) in owned {
        draft.select_responsibility(responsibility, true);
        draft.assign_owner(responsibility, Some(owner.to_string()));
        draft.attach_evidence(responsibility, Some(evidence.to_string()));
    }
    draft.select_responsibility("or_operational_resilience", true);

    for local_id in ["ceo", "compliance", "chair", "director"] {
        for question in fitness::questions() {
            let response = if question.weight == 0 { "yes" } else { "no" };
            draft.record_answer(
                local_id,
                question.section,
                question.code,
                FitnessAnswer {
                    response: response.to_string(),
                    evidence: Some("annual-declaration-2026.pdf".to_string()),
                    ..FitnessAnswer::default()
                },
            );
        }
    }

    if with_findings {
        draft.record_answer(
            "director",
            "integrity",
            "regulatory_investigations",
            FitnessAnswer {
                response: "yes".to_string(),
                details: Some(
                    "Conduct investigation at a previous employer, closed without action"
                        .to_string(),
                ),
                date: Some(disclosure_date),
                evidence: Some("regulator-closure-letter.pdf".to_string()),
            },
        );
    }

    draft
}
