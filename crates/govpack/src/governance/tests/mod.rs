mod common;

mod readiness;
mod reconcile;
