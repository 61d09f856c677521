use crate::error::ApiError;
use crate::state::AppState;
use crate::validate::OptimizeRequest;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use po_core::{presets, OptimizationResult, PRESETS};
use serde_json::{json, Map, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/system/health", get(health))
}

pub fn config_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/config/presets", get(list_presets))
        .route("/api/v1/config/presets/{name}", get(get_preset))
}

pub fn optimization_routes() -> Router<AppState> {
    Router::new().route("/api/v1/optimization/optimize", post(optimize))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_presets() -> Json<Value> {
    let presets: Map<String, Value> = PRESETS
        .iter()
        .map(|p| {
            (
                p.name.to_string(),
                json!({ "description": p.description, "config": p.config }),
            )
        })
        .collect();
    Json(Value::Object(presets))
}

async fn get_preset(Path(name): Path<String>) -> Result<Json<Value>, ApiError> {
    let preset = presets::get(&name)?;
    Ok(Json(json!({ "description": preset.description, "config": preset.config })))
}

async fn optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizationResult>, ApiError> {
    let Json(request) = payload?;
    let job = request.into_job()?;
    tracing::info!(chars = job.text.chars().count(), "optimize request");

    let optimizer = state.optimizer.clone();
    let result = tokio::task::spawn_blocking(move || optimizer.optimize(&job.text, &job.config))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "optimize task failed");
            ApiError::internal("internal error while optimizing")
        })?;

    tracing::info!(
        saved = result.stats.characters_saved,
        ratio = result.stats.compression_ratio_percent,
        "optimize done"
    );
    Ok(Json(result))
}
