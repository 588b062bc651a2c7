//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    error::ApiError,
    types::{GenerationParams, HealthResponse, IconParams, ListParams},
};
use axum::{
    Json,
    extract::{Path, Query as QueryString, State},
};
use pokedex_core::{
    CaptureStatus, PageResult, Query, icon_url, primitives::DEFAULT_ICON_GENERATION,
};

/// Liveness text served at `/`.
pub const LIVENESS_MESSAGE: &str = "Pokédex API is running!";

// =============================================================================
// LIVENESS / HEALTH
// =============================================================================

/// Plain-text liveness probe.
pub async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG
// =============================================================================

/// One page of the catalog.
pub async fn list_handler(
    State(state): State<AppState>,
    QueryString(params): QueryString<ListParams>,
) -> Result<Json<PageResult>, ApiError> {
    let query = Query::from_params(
        params.page,
        params.page_size,
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        params.type_filter.as_deref(),
        params.search.as_deref(),
    )?;

    let captured = state.captured.read().await;
    let result = query.execute(&state.dataset, &captured);

    tracing::debug!(
        page = result.page,
        page_size = result.page_size,
        total = result.total,
        "Served catalog page"
    );
    Ok(Json(result))
}

/// Every type tag in the dataset.
pub async fn types_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.types().into_iter().collect())
}

// =============================================================================
// CAPTURE TRACKER
// =============================================================================

/// Mark a creature as captured.
pub async fn capture_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CaptureStatus> {
    let mut captured = state.captured.write().await;
    tracing::info!(name = %name, "Captured");
    Json(captured.capture(name))
}

/// Release a captured creature.
pub async fn release_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CaptureStatus> {
    let mut captured = state.captured.write().await;
    tracing::info!(name = %name, "Released");
    Json(captured.release(&name))
}

/// Names of all captured creatures.
pub async fn captured_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.captured.read().await.list())
}

// =============================================================================
// ICONS
// =============================================================================

/// Sprite URL for `?name=..&generation=..`.
pub async fn icon_handler(QueryString(params): QueryString<IconParams>) -> Result<String, ApiError> {
    let name = params.name.ok_or(ApiError::MissingParameter("name"))?;
    Ok(icon_url(
        &name,
        params.generation.unwrap_or(DEFAULT_ICON_GENERATION),
    ))
}

/// Sprite URL for `/api/icon/{name}?generation=..`.
pub async fn icon_path_handler(
    Path(name): Path<String>,
    QueryString(params): QueryString<GenerationParams>,
) -> String {
    icon_url(&name, params.generation.unwrap_or(DEFAULT_ICON_GENERATION))
}
