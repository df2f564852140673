//! HTTP API for the correction engine.
//!
//! ## Endpoints
//! - `POST /api/correct` - correct a text, reporting the active backend
//! - `GET /api/info` - backend descriptor
//! - `GET /api/dataset/stats` - dataset statistics
//! - `GET /api/dataset/samples` - random scored samples
//! - `POST /api/dataset/test-accuracy` - accuracy over a random subset
//!
//! The only surfaced validation error is a missing `text` field on
//! `/api/correct`; everything else degrades to pass-through behavior
//! inside the engine.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::correction::engine::CorrectionEngine;
use crate::correction::map::CorrectionMap;
use crate::dataset::stats::{compute_stats, draw_samples, measure_accuracy};
use crate::error::{RespellError, Result};

/// Default number of samples returned by `/api/dataset/samples`.
const DEFAULT_SAMPLE_COUNT: usize = 10;
/// Upper bound on `/api/dataset/samples` count.
const MAX_SAMPLE_COUNT: usize = 50;
/// Default sample size for `/api/dataset/test-accuracy`.
const DEFAULT_ACCURACY_SIZE: usize = 50;
/// Upper bound on `/api/dataset/test-accuracy` sample size.
const MAX_ACCURACY_SIZE: usize = 100;

/// Shared, read-only application state.
///
/// Built once at startup; the engine and its map never change afterwards,
/// so handlers share it through an [`Arc`] without locking.
pub struct AppContext {
    /// The correction engine serving all requests.
    pub engine: CorrectionEngine,
    /// Ground-truth dataset used by the statistics and accuracy endpoints.
    pub dataset: CorrectionMap,
    /// Display name of the loaded dataset.
    pub dataset_name: String,
}

impl AppContext {
    /// Create a context for the given engine and dataset.
    pub fn new(
        engine: CorrectionEngine,
        dataset: CorrectionMap,
        dataset_name: impl Into<String>,
    ) -> Self {
        AppContext {
            engine,
            dataset,
            dataset_name: dataset_name.into(),
        }
    }
}

/// Build the API router over the shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/correct", post(api_correct))
        .route("/api/info", get(api_info))
        .route("/api/dataset/stats", get(api_dataset_stats))
        .route("/api/dataset/samples", get(api_dataset_samples))
        .route("/api/dataset/test-accuracy", post(api_test_accuracy))
        .layer(cors)
        .with_state(ctx)
}

/// Run the API server until shutdown.
pub async fn serve(ctx: Arc<AppContext>, addr: SocketAddr) -> Result<()> {
    let info = ctx.engine.backend_info();
    tracing::info!("spell correction API listening on {addr}");
    tracing::info!("backend: {} ({})", info.backend, info.status);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(ctx))
        .await
        .map_err(|e| RespellError::server(e.to_string()))?;

    Ok(())
}

/// `POST /api/correct` - correct spelling in a text.
async fn api_correct(
    State(ctx): State<Arc<AppContext>>,
    body: Option<Json<serde_json::Value>>,
) -> Response {
    let text = body
        .as_ref()
        .and_then(|Json(value)| value.get("text"))
        .and_then(|t| t.as_str());

    let Some(text) = text else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing \"text\" field in request" })),
        )
            .into_response();
    };

    let correction = ctx.engine.correct_with_info(text);
    Json(correction).into_response()
}

/// `GET /api/info` - describe the active correction backend.
async fn api_info(State(ctx): State<Arc<AppContext>>) -> Response {
    Json(ctx.engine.backend_info()).into_response()
}

/// `GET /api/dataset/stats` - dataset statistics.
async fn api_dataset_stats(State(ctx): State<Arc<AppContext>>) -> Response {
    let stats = compute_stats(&ctx.dataset);

    let mut value = match serde_json::to_value(&stats) {
        Ok(value) => value,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };
    value["dataset_name"] = json!(ctx.dataset_name);

    Json(value).into_response()
}

/// Query parameters for `/api/dataset/samples`.
#[derive(Debug, Deserialize)]
struct SamplesParams {
    count: Option<usize>,
}

/// `GET /api/dataset/samples` - random dataset entries with corrections.
async fn api_dataset_samples(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SamplesParams>,
) -> Response {
    let count = params
        .count
        .unwrap_or(DEFAULT_SAMPLE_COUNT)
        .min(MAX_SAMPLE_COUNT);

    let samples = draw_samples(&ctx.dataset, &ctx.engine, count, &mut rand::rng());
    Json(json!({ "count": samples.len(), "samples": samples })).into_response()
}

/// Body parameters for `/api/dataset/test-accuracy`.
#[derive(Debug, Default, Deserialize)]
struct AccuracyParams {
    sample_size: Option<usize>,
}

/// `POST /api/dataset/test-accuracy` - score the engine on a random subset.
async fn api_test_accuracy(
    State(ctx): State<Arc<AppContext>>,
    body: Option<Json<AccuracyParams>>,
) -> Response {
    let params = body.map(|Json(p)| p).unwrap_or_default();
    let sample_size = params
        .sample_size
        .unwrap_or(DEFAULT_ACCURACY_SIZE)
        .min(MAX_ACCURACY_SIZE);

    let report = measure_accuracy(&ctx.dataset, &ctx.engine, sample_size, &mut rand::rng());
    Json(report).into_response()
}
