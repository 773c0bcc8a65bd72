//! HTTP surface for the governance pack API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::applicability;
use super::catalog::firms::{FirmCategory, FirmType};
use super::catalog::responsibilities::PrescribedResponsibility;
use super::catalog::roles::SmfRole;
use super::domain::FirmId;
use super::draft::PackDraft;
use super::service::{GovernancePackService, PackServiceError};
use super::store::{GovernanceStore, StoreError};

pub fn governance_router<S>(service: Arc<GovernancePackService<S>>) -> Router
where
    S: GovernanceStore + 'static,
{
    Router::new()
        .route("/api/v1/catalog/firms", get(catalog_firms))
        .route("/api/v1/catalog/applicability", get(catalog_applicability))
        .route("/api/v1/firms", get(list_firms::<S>))
        .route(
            "/api/v1/firms/:firm_id/pack",
            put(save_pack::<S>).get(get_pack::<S>),
        )
        .route("/api/v1/firms/:firm_id/readiness", get(get_readiness::<S>))
        .route(
            "/api/v1/firms/:firm_id/assessments",
            get(get_assessments::<S>),
        )
        .route(
            "/api/v1/firms/:firm_id/pack/clear-orphans",
            axum::routing::post(clear_orphans::<S>),
        )
        .route("/api/v1/firms/:firm_id", delete(delete_firm::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicabilityQuery {
    #[serde(default)]
    pub(crate) firm_type: String,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) cass: bool,
}

#[derive(Debug, Serialize)]
struct ApplicabilityView {
    firm_type: String,
    category: String,
    cass: bool,
    responsibilities: Vec<&'static PrescribedResponsibility>,
    roles: Vec<&'static SmfRole>,
}

#[derive(Debug, Serialize)]
struct CategoryView {
    code: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct FirmTypeView {
    code: &'static str,
    label: &'static str,
    categories: Vec<CategoryView>,
}

/// Firm taxonomy for the profile step: every firm type with the
/// categories it offers.
pub(crate) async fn catalog_firms() -> Response {
    let firm_types: Vec<FirmTypeView> = FirmType::ordered()
        .into_iter()
        .map(|firm_type| FirmTypeView {
            code: firm_type.code(),
            label: firm_type.label(),
            categories: FirmCategory::for_firm_type(firm_type)
                .iter()
                .map(|category| CategoryView {
                    code: category.code(),
                    label: category.label(),
                })
                .collect(),
        })
        .collect();
    (StatusCode::OK, Json(json!({ "firm_types": firm_types }))).into_response()
}

pub(crate) async fn catalog_applicability(Query(query): Query<ApplicabilityQuery>) -> Response {
    let responsibilities =
        applicability::applicable_responsibilities(&query.firm_type, &query.category, query.cass);
    let roles = applicability::applicable_roles(&query.firm_type, &query.category);
    (
        StatusCode::OK,
        Json(ApplicabilityView {
            firm_type: query.firm_type,
            category: query.category,
            cass: query.cass,
            responsibilities,
            roles,
        }),
    )
        .into_response()
}

pub(crate) async fn save_pack<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
    Json(draft): Json<PackDraft>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.save_draft(&firm, draft) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(PackServiceError::Validation(error)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn get_pack<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.load_pack(&firm) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(PackServiceError::Store(StoreError::NotFound)) => firm_not_found(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn get_readiness<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.readiness(&firm) {
        Ok(readiness) => (StatusCode::OK, Json(readiness)).into_response(),
        Err(PackServiceError::Store(StoreError::NotFound)) => firm_not_found(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn get_assessments<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.assessments(&firm) {
        Ok(assessments) => {
            (StatusCode::OK, Json(json!({ "assessments": assessments }))).into_response()
        }
        Err(PackServiceError::Store(StoreError::NotFound)) => firm_not_found(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn clear_orphans<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.clear_orphaned_selections(&firm) {
        Ok(removed) => (StatusCode::OK, Json(json!({ "removed": removed }))).into_response(),
        Err(PackServiceError::Store(StoreError::NotFound)) => firm_not_found(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn delete_firm<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    match service.delete_firm(&firm) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(PackServiceError::Store(StoreError::NotFound)) => firm_not_found(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn list_firms<S>(State(service): State<Arc<GovernancePackService<S>>>) -> Response
where
    S: GovernanceStore + 'static,
{
    match service.list_firms() {
        Ok(firms) => (StatusCode::OK, Json(json!({ "firms": firms }))).into_response(),
        Err(error) => internal_error(error),
    }
}

fn firm_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "firm not found" })),
    )
        .into_response()
}

fn internal_error(error: PackServiceError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}
