use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::fitness::AFFIRMATIVE_ANSWER;
use super::keys::FitnessKey;

/// Identifier for a firm's governance pack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FirmId(pub String);

impl FirmId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Durable identifier for an individual. Assigned once by reconciliation
/// and stable across every later save of the same firm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndividualId(pub String);

impl IndividualId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Profile captured on the first wizard step. Replaced wholesale on every
/// save together with the rest of the pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirmProfile {
    pub firm_name: String,
    /// Firm type code (`bank`, `investment`, `insurance`, `payments`).
    /// Unknown codes are stored as submitted and resolve to an empty
    /// applicable set rather than an error.
    pub firm_type: String,
    /// Category code within the firm type (`limited`, `core`, `enhanced`
    /// for the three-tier firm types; `spi`, `api`, `emi` for payments).
    pub category: String,
    #[serde(default)]
    pub jurisdictions: Vec<String>,
    /// Whether the firm holds client money or custody assets.
    #[serde(default)]
    pub is_cass_firm: bool,
    /// Whether the firm elected the enhanced tier voluntarily. Recorded for
    /// the pack cover sheet; the category code already reflects the
    /// elected tier.
    #[serde(default)]
    pub opted_up: bool,
}

/// An individual named in the pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub id: IndividualId,
    pub name: String,
    /// Senior-management function codes held.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Reporting line for the organisation chart.
    #[serde(default)]
    pub manager: Option<IndividualId>,
}

impl Individual {
    pub fn holds_role(&self, role_code: &str) -> bool {
        self.roles.iter().any(|role| role == role_code)
    }
}

/// One row of the responsibility register: whether a responsibility is
/// taken up, who owns it, and the evidence reference backing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilityAssignment {
    pub responsibility: String,
    pub selected: bool,
    #[serde(default)]
    pub owner: Option<IndividualId>,
    #[serde(default)]
    pub evidence: Option<String>,
}

impl ResponsibilityAssignment {
    pub fn has_evidence(&self) -> bool {
        self.evidence
            .as_deref()
            .map(|reference| !reference.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Answer payload shared by draft submissions and stored responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessAnswer {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub evidence: Option<String>,
}

impl FitnessAnswer {
    /// An answer counts as recorded once the response text is non-blank.
    pub fn is_answered(&self) -> bool {
        !self.response.trim().is_empty()
    }

    pub fn is_affirmative(&self) -> bool {
        self.response == AFFIRMATIVE_ANSWER
    }

    pub fn has_evidence(&self) -> bool {
        self.evidence
            .as_deref()
            .map(|reference| !reference.trim().is_empty())
            .unwrap_or(false)
    }
}

/// One stored questionnaire answer, keyed by individual, section, and
/// question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessResponse {
    pub individual: IndividualId,
    pub section: String,
    pub question: String,
    pub response: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub evidence: Option<String>,
}

impl FitnessResponse {
    pub fn key(&self) -> FitnessKey {
        FitnessKey::new(&self.individual.0, &self.section, &self.question)
    }

    pub fn answer(&self) -> FitnessAnswer {
        FitnessAnswer {
            response: self.response.clone(),
            details: self.details.clone(),
            date: self.date,
            evidence: self.evidence.clone(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.response.trim().is_empty()
    }
}
