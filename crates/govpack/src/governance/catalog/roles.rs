use serde::Serialize;

use super::firms::FirmType;
use super::ApplicabilityTier;

/// A senior-management function an individual can hold.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SmfRole {
    pub code: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub firm_types: &'static [FirmType],
    pub tier: ApplicabilityTier,
    /// Executive functions run the business day to day; the rest are
    /// oversight functions held by non-executives.
    pub executive: bool,
}

const SMCR_FIRM_TYPES: &[FirmType] = &[FirmType::Bank, FirmType::Investment, FirmType::Insurance];
const PAYMENTS_FIRM_TYPES: &[FirmType] = &[FirmType::Payments];

static ROLES: &[SmfRole] = &[
    SmfRole {
        code: "smf1",
        label: "SMF1 Chief Executive",
        description: "Has responsibility, under the immediate authority of the governing body, \
                      for the conduct of the whole of the firm's business",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: true,
    },
    SmfRole {
        code: "smf2",
        label: "SMF2 Chief Finance Function",
        description: "Has responsibility for the management of the firm's financial resources \
                      and reporting to the governing body on its financial affairs",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: true,
    },
    SmfRole {
        code: "smf3",
        label: "SMF3 Executive Director",
        description: "A director of the firm who exercises significant influence over the \
                      management or conduct of its affairs",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: true,
    },
    SmfRole {
        code: "smf4",
        label: "SMF4 Chief Risk Function",
        description: "Has overall responsibility for the risk management function and for \
                      reporting directly to the governing body on the firm's risk exposure",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: true,
    },
    SmfRole {
        code: "smf5",
        label: "SMF5 Head of Internal Audit",
        description: "Has overall responsibility for the internal audit function and for \
                      reporting to the audit committee on its findings",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: true,
    },
    SmfRole {
        code: "smf9",
        label: "SMF9 Chair",
        description: "Chairs, and oversees the performance of, the firm's governing body",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: false,
    },
    SmfRole {
        code: "smf10",
        label: "SMF10 Chair of the Risk Committee",
        description: "Chairs, and oversees the performance of, the committee responsible for \
                      risk oversight",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: false,
    },
    SmfRole {
        code: "smf11",
        label: "SMF11 Chair of the Audit Committee",
        description: "Chairs, and oversees the performance of, the committee responsible for \
                      audit oversight",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: false,
    },
    SmfRole {
        code: "smf12",
        label: "SMF12 Chair of the Remuneration Committee",
        description: "Chairs, and oversees the performance of, the committee responsible for \
                      remuneration oversight",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: false,
    },
    SmfRole {
        code: "smf14",
        label: "SMF14 Senior Independent Director",
        description: "Leads the assessment of the chair's performance and acts as a sounding \
                      board for the other non-executive directors",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: false,
    },
    SmfRole {
        code: "smf16",
        label: "SMF16 Compliance Oversight",
        description: "Has responsibility for the compliance oversight function set out in the \
                      regulator's handbook",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: true,
    },
    SmfRole {
        code: "smf17",
        label: "SMF17 Money Laundering Reporting Officer",
        description: "Has responsibility for overseeing the firm's compliance with the money \
                      laundering regulations",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: true,
    },
    SmfRole {
        code: "smf24",
        label: "SMF24 Chief Operations Function",
        description: "Has responsibility for managing the internal operations, systems and \
                      technology of the firm",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Enhanced,
        executive: true,
    },
    SmfRole {
        code: "smf27",
        label: "SMF27 Partner",
        description: "A partner in a firm constituted as a partnership",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Core,
        executive: true,
    },
    SmfRole {
        code: "smf29",
        label: "SMF29 Limited Scope Function",
        description: "Senior manager of a limited scope firm with responsibility for its \
                      regulated activities",
        firm_types: SMCR_FIRM_TYPES,
        tier: ApplicabilityTier::Limited,
        executive: true,
    },
    SmfRole {
        code: "psd_director",
        label: "PSD Individual Responsible for Payment Services",
        description: "Individual responsible for the management of the institution's payment \
                      services or e-money activities",
        firm_types: PAYMENTS_FIRM_TYPES,
        tier: ApplicabilityTier::All,
        executive: true,
    },
    SmfRole {
        code: "psd_mlro",
        label: "PSD Money Laundering Reporting Officer",
        description: "Individual responsible for the institution's anti-money laundering and \
                      counter-terrorist financing controls",
        firm_types: PAYMENTS_FIRM_TYPES,
        tier: ApplicabilityTier::All,
        executive: true,
    },
];

pub fn all() -> &'static [SmfRole] {
    ROLES
}

pub fn by_code(code: &str) -> Option<&'static SmfRole> {
    ROLES.iter().find(|role| role.code == code)
}

/// Responsibilities conventionally carried by a role, used to suggest
/// owners for unassigned responsibilities. Convention only; any individual
/// may own any responsibility.
pub fn suggested_responsibilities(role_code: &str) -> &'static [&'static str] {
    match role_code {
        "smf1" => &["pr_a", "or_operational_resilience"],
        "smf3" => &["pr_z"],
        "smf4" => &["pr_l"],
        "smf5" => &["pr_j"],
        "smf12" => &["pr_m"],
        "smf16" => &["pr_b", "pr_b1", "pr_k"],
        "smf17" => &["pr_d"],
        "smf24" => &["or_technology", "or_operational_resilience"],
        "smf27" => &["pr_a"],
        "psd_director" => &["psd_governance", "psd_safeguarding"],
        "psd_mlro" => &["psd_financial_crime"],
        _ => &[],
    }
}
