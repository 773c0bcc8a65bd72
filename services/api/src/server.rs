use crate::cli::ServeArgs;
use crate::demo;
use crate::infra::{AppState, InMemoryGovernanceStore};
use crate::routes::with_governance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use govpack::config::AppConfig;
use govpack::error::AppError;
use govpack::governance::GovernancePackService;
use govpack::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryGovernanceStore::default());
    let pack_service = Arc::new(GovernancePackService::new(store));

    if config.seed_demo {
        demo::seed_demo_firm(&pack_service);
    }

    let app = with_governance_routes(pack_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "governance pack service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
