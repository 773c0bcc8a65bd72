//! Governance pack assembly for UK regulated firms.
//!
//! The `governance` module owns the business semantics: the SMCR/PSD rule
//! catalog, applicability filtering, draft reconciliation, fitness risk
//! scoring, and board-readiness reporting, together with the HTTP router
//! that exposes them. `config`, `telemetry`, and `error` carry the process
//! concerns shared with the service binary.

pub mod config;
pub mod error;
pub mod governance;
pub mod telemetry;
