use serde::Serialize;

use super::firms::FirmType;
use super::ApplicabilityTier;

/// A prescribed (or optional overall) responsibility in the reference
/// catalog. Rows here are immutable rule data; firm packs refer to them by
/// `code` only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrescribedResponsibility {
    pub code: &'static str,
    pub text: &'static str,
    pub tier: ApplicabilityTier,
    /// Mandatory responsibilities gate the board-readiness score; optional
    /// ones only contribute to evidence coverage once selected.
    pub mandatory: bool,
    pub firm_types: &'static [FirmType],
    /// Only shown to firms that hold client money or custody assets.
    pub cass_only: bool,
}

const SMCR_FIRM_TYPES: &[FirmType] = &[FirmType::Bank, FirmType::Investment, FirmType::Insurance];
const CASS_FIRM_TYPES: &[FirmType] = &[FirmType::Bank, FirmType::Investment];
const PAYMENTS_FIRM_TYPES: &[FirmType] = &[FirmType::Payments];
const ALL_FIRM_TYPES: &[FirmType] = &[
    FirmType::Bank,
    FirmType::Investment,
    FirmType::Insurance,
    FirmType::Payments,
];

static RESPONSIBILITIES: &[PrescribedResponsibility] = &[
    PrescribedResponsibility {
        code: "pr_a",
        text: "Performance by the firm of its obligations under the senior managers regime, \
               including implementation and oversight",
        tier: ApplicabilityTier::Core,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_b",
        text: "Performance by the firm of its obligations under the employee certification regime",
        tier: ApplicabilityTier::Core,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_b1",
        text: "Compliance by the firm with its obligations to notify and train staff on the \
               conduct rules",
        tier: ApplicabilityTier::Core,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_d",
        text: "Responsibility for the firm's policies and procedures for countering the risk \
               that the firm might be used to further financial crime",
        tier: ApplicabilityTier::Core,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_z",
        text: "Responsibility for the firm's compliance with the client assets rules",
        tier: ApplicabilityTier::Core,
        mandatory: true,
        firm_types: CASS_FIRM_TYPES,
        cass_only: true,
    },
    PrescribedResponsibility {
        code: "pr_j",
        text: "Safeguarding and overseeing the independence and performance of the internal \
               audit function",
        tier: ApplicabilityTier::Enhanced,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_k",
        text: "Safeguarding and overseeing the independence and performance of the compliance \
               function",
        tier: ApplicabilityTier::Enhanced,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_l",
        text: "Safeguarding and overseeing the independence and performance of the risk \
               function",
        tier: ApplicabilityTier::Enhanced,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "pr_m",
        text: "Developing and overseeing the firm's remuneration policies and practices",
        tier: ApplicabilityTier::Enhanced,
        mandatory: true,
        firm_types: SMCR_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "or_operational_resilience",
        text: "Overall responsibility for the firm's operational resilience and its important \
               business services",
        tier: ApplicabilityTier::All,
        mandatory: false,
        firm_types: ALL_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "or_technology",
        text: "Overall responsibility for the firm's technology systems and information \
               security",
        tier: ApplicabilityTier::All,
        mandatory: false,
        firm_types: ALL_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "psd_governance",
        text: "Responsibility for the firm's governance arrangements and regulatory reporting \
               under the payment services regime",
        tier: ApplicabilityTier::All,
        mandatory: true,
        firm_types: PAYMENTS_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "psd_safeguarding",
        text: "Responsibility for safeguarding relevant funds received in exchange for \
               electronic money or for the execution of payment transactions",
        tier: ApplicabilityTier::All,
        mandatory: true,
        firm_types: PAYMENTS_FIRM_TYPES,
        cass_only: false,
    },
    PrescribedResponsibility {
        code: "psd_financial_crime",
        text: "Responsibility for the firm's anti-money laundering and counter-terrorist \
               financing controls",
        tier: ApplicabilityTier::All,
        mandatory: true,
        firm_types: PAYMENTS_FIRM_TYPES,
        cass_only: false,
    },
];

pub fn all() -> &'static [PrescribedResponsibility] {
    RESPONSIBILITIES
}

pub fn by_code(code: &str) -> Option<&'static PrescribedResponsibility> {
    RESPONSIBILITIES.iter().find(|entry| entry.code == code)
}
