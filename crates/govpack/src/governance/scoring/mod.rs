//! Derived scoring over stored pack state. Both scorers are pure
//! functions of the record; nothing here is persisted.

pub mod readiness;
pub mod risk;

pub use readiness::{board_readiness, BoardReadiness, ReadinessComponents, ReadinessLabel};
pub use risk::{assess, assess_all, FlaggedQuestion, RiskAssessment, RiskLevel, SectionScore};
