use crate::infra::AppState;
use auto_advisor::catalog::{self, Brand};
use auto_advisor::diagnosis::{self, Category};
use auto_advisor::emissions::{self, EmissionEstimate};
use auto_advisor::error::AppError;
use auto_advisor::forms::{ChatForm, EstimateForm, RequestError};
use auto_advisor::history::{
    ChatRecord, EmissionRecord, NewChatRecord, NewEmissionRecord, RecordId,
};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    #[serde(flatten)]
    pub(crate) estimate: EmissionEstimate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings: Vec<String>,
    /// Absent when the estimate fell back and nothing was stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) record_id: Option<RecordId>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) response: String,
    pub(crate) category: Category,
}

pub(crate) fn advisor_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/emissions/predict", post(predict_emissions_endpoint))
        .route("/api/v1/emissions/history", get(emission_history_endpoint))
        .route("/api/v1/chat", post(chat_endpoint))
        .route("/api/v1/chat/history", get(chat_history_endpoint))
        .route("/api/v1/brands", get(brands_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
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

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn malformed(rejection: FormRejection) -> RequestError {
    RequestError::MalformedForm(rejection.body_text())
}

pub(crate) async fn predict_emissions_endpoint(
    State(state): State<AppState>,
    form: Result<Form<EstimateForm>, FormRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Form(form) = form.map_err(malformed)?;
    let profile = form.into_profile()?;
    let mut rng = state.entropy.rng();

    let estimate = match emissions::try_estimate(&profile, &mut rng) {
        Ok(estimate) => estimate,
        Err(err) => {
            error!(error = %err, ?profile, "emissions estimate failed; returning fallback");
            return Ok(Json(EstimateResponse {
                estimate: EmissionEstimate::fallback(),
                warnings: Vec::new(),
                record_id: None,
            }));
        }
    };

    let record = state
        .records
        .save_emission(NewEmissionRecord::from_estimate(&profile, &estimate))
        .map_err(|err| {
            error!(error = %err, "failed to store emission record");
            err
        })?;

    Ok(Json(EstimateResponse {
        warnings: estimate.warnings(),
        estimate,
        record_id: Some(record.id),
    }))
}

pub(crate) async fn emission_history_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmissionRecord>>, AppError> {
    let records = state.records.recent_emissions(state.history_limit)?;
    Ok(Json(records))
}

pub(crate) async fn chat_endpoint(
    State(state): State<AppState>,
    form: Result<Form<ChatForm>, FormRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Form(form) = form.map_err(malformed)?;
    let message = form.into_message()?;
    let mut rng = state.entropy.rng();
    let diagnosis = diagnosis::diagnose_detailed(&message, &mut rng);

    state
        .records
        .save_chat(NewChatRecord::from_diagnosis(&message, &diagnosis))
        .map_err(|err| {
            error!(error = %err, "failed to store chat record");
            err
        })?;

    Ok(Json(ChatResponse {
        response: diagnosis.response,
        category: diagnosis.category,
    }))
}

pub(crate) async fn chat_history_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatRecord>>, AppError> {
    let records = state.records.recent_chats(state.history_limit)?;
    Ok(Json(records))
}

pub(crate) async fn brands_endpoint() -> Json<Vec<Brand>> {
    Json(catalog::brands())
}
