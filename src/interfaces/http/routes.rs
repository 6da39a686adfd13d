use super::dto::{PointsResponse, ProcessResponse};
use super::error::{ApiError, ApiResult};
use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::Receipt;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<ReceiptProcessor>,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

/// Builds the receipt API. Unmatched paths fall through to axum's 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable receipt payload");
        ApiError::InvalidPayload
    })?;

    let id = state.processor.process(&receipt).await?;
    Ok(Json(id.into()))
}

async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.processor.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}
