//! Static rule tables backing the governance pack wizard.
//!
//! Everything in this module is reference data: firm taxonomy, prescribed
//! responsibilities, senior-management functions, and the fitness
//! questionnaire with its scoring weights. Firm packs store only reference
//! codes; presentation metadata lives with the front end, not here.

pub mod firms;
pub mod fitness;
pub mod responsibilities;
pub mod roles;

pub use firms::{FirmCategory, FirmType};

use serde::Serialize;

/// Applicability tag carried by catalog entries.
///
/// Matching against a firm category is cumulative, not exact: `All` matches
/// every category, `Core` matches the core and enhanced tiers (enhanced
/// firms inherit core obligations), `Enhanced` matches only the enhanced
/// tier, and `Limited` matches only the limited tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicabilityTier {
    All,
    Limited,
    Core,
    Enhanced,
}

impl ApplicabilityTier {
    pub fn matches(self, category: FirmCategory) -> bool {
        match self {
            ApplicabilityTier::All => true,
            ApplicabilityTier::Limited => category == FirmCategory::Limited,
            ApplicabilityTier::Core => {
                matches!(category, FirmCategory::Core | FirmCategory::Enhanced)
            }
            ApplicabilityTier::Enhanced => category == FirmCategory::Enhanced,
        }
    }
}
