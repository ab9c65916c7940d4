use crate::cli::ServeArgs;
use crate::infra::{AppState, MemoryRecordStore};
use crate::routes::advisor_router;
use auto_advisor::config::AppConfig;
use auto_advisor::error::AppError;
use auto_advisor::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        records: Arc::new(MemoryRecordStore::new(config.advisor.history_retention)),
        entropy: config.advisor.entropy(),
        history_limit: config.advisor.history_limit,
    };

    let app = advisor_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.advisor.rng_seed.is_some(),
        "auto advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
