use serde::{Deserialize, Serialize};

/// Regulated firm types the wizard supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmType {
    Bank,
    Investment,
    Insurance,
    Payments,
}

impl FirmType {
    pub const fn ordered() -> [FirmType; 4] {
        [
            FirmType::Bank,
            FirmType::Investment,
            FirmType::Insurance,
            FirmType::Payments,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            FirmType::Bank => "bank",
            FirmType::Investment => "investment",
            FirmType::Insurance => "insurance",
            FirmType::Payments => "payments",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FirmType::Bank => "Bank or building society",
            FirmType::Investment => "Investment firm",
            FirmType::Insurance => "Insurer",
            FirmType::Payments => "Payments or e-money institution",
        }
    }

    /// Parse a stored code. Unknown codes return `None`; callers treat an
    /// unrecognised firm type as matching no catalog entries.
    pub fn from_code(code: &str) -> Option<FirmType> {
        match code.trim().to_ascii_lowercase().as_str() {
            "bank" => Some(FirmType::Bank),
            "investment" => Some(FirmType::Investment),
            "insurance" => Some(FirmType::Insurance),
            "payments" => Some(FirmType::Payments),
            _ => None,
        }
    }
}

/// Category within a firm type. SMCR firm types use the three-tier scheme;
/// payments firms use the registration classes from the payment services
/// regime instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmCategory {
    Limited,
    Core,
    Enhanced,
    SmallPaymentInstitution,
    AuthorisedPaymentInstitution,
    EmoneyInstitution,
}

impl FirmCategory {
    pub const fn code(self) -> &'static str {
        match self {
            FirmCategory::Limited => "limited",
            FirmCategory::Core => "core",
            FirmCategory::Enhanced => "enhanced",
            FirmCategory::SmallPaymentInstitution => "spi",
            FirmCategory::AuthorisedPaymentInstitution => "api",
            FirmCategory::EmoneyInstitution => "emi",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FirmCategory::Limited => "Limited scope",
            FirmCategory::Core => "Core",
            FirmCategory::Enhanced => "Enhanced",
            FirmCategory::SmallPaymentInstitution => "Small payment institution",
            FirmCategory::AuthorisedPaymentInstitution => "Authorised payment institution",
            FirmCategory::EmoneyInstitution => "E-money institution",
        }
    }

    pub fn from_code(code: &str) -> Option<FirmCategory> {
        match code.trim().to_ascii_lowercase().as_str() {
            "limited" => Some(FirmCategory::Limited),
            "core" => Some(FirmCategory::Core),
            "enhanced" => Some(FirmCategory::Enhanced),
            "spi" => Some(FirmCategory::SmallPaymentInstitution),
            "api" => Some(FirmCategory::AuthorisedPaymentInstitution),
            "emi" => Some(FirmCategory::EmoneyInstitution),
            _ => None,
        }
    }

    /// Categories offered for a firm type on the profile step.
    pub fn for_firm_type(firm_type: FirmType) -> &'static [FirmCategory] {
        match firm_type {
            FirmType::Bank | FirmType::Investment | FirmType::Insurance => &[
                FirmCategory::Limited,
                FirmCategory::Core,
                FirmCategory::Enhanced,
            ],
            FirmType::Payments => &[
                FirmCategory::SmallPaymentInstitution,
                FirmCategory::AuthorisedPaymentInstitution,
                FirmCategory::EmoneyInstitution,
            ],
        }
    }
}
