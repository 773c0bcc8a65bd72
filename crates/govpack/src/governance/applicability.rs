//! Pure filters that resolve which catalog entries apply to a firm
//! profile. Evaluated fresh on every call; nothing here reads stored
//! state.

use std::collections::BTreeSet;

use super::catalog::firms::{FirmCategory, FirmType};
use super::catalog::responsibilities::{self, PrescribedResponsibility};
use super::catalog::roles::{self, SmfRole};
use super::domain::FirmProfile;

fn resolve_codes(firm_type: &str, category: &str) -> Option<(FirmType, FirmCategory)> {
    let firm_type = FirmType::from_code(firm_type)?;
    let category = FirmCategory::from_code(category)?;
    Some((firm_type, category))
}

/// Responsibilities applicable to a firm, in catalog order. Unknown firm
/// type or category codes resolve to an empty set rather than an error.
pub fn applicable_responsibilities(
    firm_type: &str,
    category: &str,
    is_cass_firm: bool,
) -> Vec<&'static PrescribedResponsibility> {
    let (firm_type, category) = match resolve_codes(firm_type, category) {
        Some(resolved) => resolved,
        None => return Vec::new(),
    };
    responsibilities::all()
        .iter()
        .filter(|entry| {
            entry.firm_types.contains(&firm_type)
                && entry.tier.matches(category)
                && (!entry.cass_only || is_cass_firm)
        })
        .collect()
}

/// Roles an individual can hold at a firm, in catalog order.
pub fn applicable_roles(firm_type: &str, category: &str) -> Vec<&'static SmfRole> {
    let (firm_type, category) = match resolve_codes(firm_type, category) {
        Some(resolved) => resolved,
        None => return Vec::new(),
    };
    roles::all()
        .iter()
        .filter(|role| role.firm_types.contains(&firm_type) && role.tier.matches(category))
        .collect()
}

pub fn profile_responsibilities(profile: &FirmProfile) -> Vec<&'static PrescribedResponsibility> {
    applicable_responsibilities(&profile.firm_type, &profile.category, profile.is_cass_firm)
}

pub fn profile_roles(profile: &FirmProfile) -> Vec<&'static SmfRole> {
    applicable_roles(&profile.firm_type, &profile.category)
}

/// Codes of the applicable responsibilities, for set-membership checks.
pub fn applicable_codes(profile: &FirmProfile) -> BTreeSet<&'static str> {
    profile_responsibilities(profile)
        .into_iter()
        .map(|entry| entry.code)
        .collect()
}
