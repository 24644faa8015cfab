//! One handler per route. Each sees the collection as reloaded for the current request
//! and saves it back before answering a successful write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use fruit_core::{FruitPatch, NewFruit};
use tracing::{debug, info, instrument, warn};

use super::extract::{parse_id, JsonObject};
use super::response::{messages, ApiFailure, ApiResponse, ApiResult};
use crate::state::AppState;

fn require_id(raw: &str) -> Result<i64, ApiFailure> {
    parse_id(raw).ok_or_else(|| {
        warn!(raw_id = %raw, "Rejected non-numeric fruit id");
        ApiFailure::invalid_id()
    })
}

/// GET `/`
#[instrument(skip(state))]
pub async fn list_fruits(State(state): State<AppState>) -> ApiResult {
    let fruits = state.collection.lock().await.clone();
    info!(count = fruits.len(), "Listing fruits");
    Ok(ApiResponse::with_data(StatusCode::OK, fruits, messages::LIST_OK).into_response())
}

/// GET `/id/:id`
#[instrument(skip(state))]
pub async fn get_fruit(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = require_id(&raw_id)?;
    let fruits = state.collection.lock().await;
    let fruit = fruits
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| ApiFailure::not_found(id))?;

    Ok(ApiResponse::with_data(StatusCode::OK, fruit, messages::GET_OK).into_response())
}

/// POST `/`
#[instrument(skip(state, body))]
pub async fn create_fruit(State(state): State<AppState>, JsonObject(body): JsonObject) -> ApiResult {
    let new_fruit = NewFruit::from_body(&body).map_err(|e| {
        warn!(error = %e, "Rejected fruit creation");
        e
    })?;

    let mut fruits = state.collection.lock().await;
    let id = fruits.insert(new_fruit).id;
    state.store.save(&fruits).await?;

    info!(fruit_id = id, count = fruits.len(), "Fruit created");
    Ok(ApiResponse::message(StatusCode::CREATED, messages::CREATE_OK).into_response())
}

/// PUT `/id/:id`
///
/// Checks run in order: id format, existence, non-empty body.
#[instrument(skip(state, body))]
pub async fn update_fruit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonObject(body): JsonObject,
) -> ApiResult {
    let id = require_id(&raw_id)?;

    let mut fruits = state.collection.lock().await;
    let fruit = fruits
        .find_by_id_mut(id)
        .ok_or_else(|| ApiFailure::not_found(id))?;
    let patch = FruitPatch::from_body(&body)?;
    if patch.is_noop() {
        debug!(fruit_id = id, "Update carries no usable fields");
    }
    patch.apply(fruit);
    state.store.save(&fruits).await?;

    info!(fruit_id = id, "Fruit updated");
    Ok(ApiResponse::message(StatusCode::OK, messages::updated(id)).into_response())
}

/// DELETE `/id/:id`
#[instrument(skip(state))]
pub async fn delete_fruit(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = require_id(&raw_id)?;

    let mut fruits = state.collection.lock().await;
    fruits
        .remove_by_id(id)
        .ok_or_else(|| ApiFailure::delete_not_found(id))?;
    state.store.save(&fruits).await?;

    info!(fruit_id = id, count = fruits.len(), "Fruit deleted");
    Ok(ApiResponse::message(StatusCode::OK, messages::deleted(id)).into_response())
}

/// Fallback for any unmatched path.
pub async fn route_not_found() -> ApiFailure {
    ApiFailure::route_not_found()
}
