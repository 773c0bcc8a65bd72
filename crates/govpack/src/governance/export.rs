//! CSV export of the responsibility register.

use serde::Serialize;

use super::report::PackView;

#[derive(Debug, Serialize)]
struct RegisterRow<'a> {
    responsibility: &'a str,
    title: &'a str,
    mandatory: bool,
    selected: bool,
    owner: &'a str,
    evidence: &'a str,
    orphaned: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer finalize failed: {0}")]
    Finalize(String),
}

/// Render the register rows of a pack view as CSV, one row per
/// responsibility, headers from the field names.
pub fn register_csv(view: &PackView) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &view.responsibilities {
        writer.serialize(RegisterRow {
            responsibility: &row.responsibility,
            title: row.text.unwrap_or(""),
            mandatory: row.mandatory,
            selected: row.selected,
            owner: row
                .owner
                .as_ref()
                .map(|owner| owner.name.as_str())
                .unwrap_or(""),
            evidence: row.evidence.as_deref().unwrap_or(""),
            orphaned: row.orphaned,
        })?;
    }
    writer
        .into_inner()
        .map_err(|error| ExportError::Finalize(error.to_string()))
}

/// File name offered for a register download.
pub fn register_filename(firm_name: &str) -> String {
    let slug: String = firm_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "responsibility-register.csv".to_string()
    } else {
        format!("{slug}-responsibility-register.csv")
    }
}
