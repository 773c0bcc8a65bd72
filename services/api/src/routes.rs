use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use govpack::governance::export::{register_csv, register_filename};
use govpack::governance::{
    governance_router, FirmId, GovernancePackService, GovernanceStore, PackServiceError,
    StoreError,
};

pub(crate) fn with_governance_routes<S>(service: Arc<GovernancePackService<S>>) -> axum::Router
where
    S: GovernanceStore + 'static,
{
    let register = axum::Router::new()
        .route(
            "/api/v1/firms/:firm_id/register.csv",
            axum::routing::get(register_export_endpoint::<S>),
        )
        .with_state(service.clone());

    governance_router(service)
        .merge(register)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn register_export_endpoint<S>(
    State(service): State<Arc<GovernancePackService<S>>>,
    Path(firm_id): Path<String>,
) -> Response
where
    S: GovernanceStore + 'static,
{
    let firm = FirmId(firm_id);
    let view = match service.load_pack(&firm) {
        Ok(view) => view,
        Err(PackServiceError::Store(StoreError::NotFound)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "firm not found" })),
            )
                .into_response()
        }
        Err(error) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    };

    match register_csv(&view) {
        Ok(bytes) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                register_filename(&view.profile.firm_name)
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}
