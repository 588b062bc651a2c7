//! # Pokédex HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /` - Plain-text liveness string
//! - `GET /health` - Health check
//! - `GET /api/pokemon` - Filtered, sorted, paginated catalog page
//! - `GET /api/pokemon/types` - Every type tag in the dataset
//! - `POST /api/pokemon/capture/{name}` - Mark a creature as captured
//! - `POST /api/pokemon/release/{name}` - Release a creature
//! - `GET /api/pokemon/captured` - Names of captured creatures
//! - `GET /api/icon` - Sprite URL (`name`, `generation` query parameters)
//! - `GET /api/icon/{name}` - Sprite URL (`generation` query parameter)
//!
//! ## CORS Configuration
//!
//! - `POKEDEX_CORS_ORIGINS` / `cors_origins`: "*" (default) for all origins,
//!   or a comma-separated allow-list

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use handlers::{
    LIVENESS_MESSAGE, capture_handler, captured_handler, health_handler, icon_handler,
    icon_path_handler, list_handler, release_handler, root_handler, types_handler,
};
pub use types::{
    CaptureStatus, CapturedRecord, ErrorResponse, GenerationParams, HealthResponse, IconParams,
    ListParams, PageResult,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use pokedex_core::{CaptureSet, Dataset, PokedexError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the read-only dataset and the capture set.
#[derive(Clone)]
pub struct AppState {
    /// The catalog, shared by every request.
    pub dataset: Arc<Dataset>,
    /// Names marked as captured. Lives as long as the process.
    pub captured: Arc<RwLock<CaptureSet>>,
}

impl AppState {
    /// Create new app state with an empty capture set.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            captured: Arc::new(RwLock::new(CaptureSet::new())),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer.
///
/// - `None` or `"*"`: allows all origins
/// - Otherwise: parses a comma-separated list of allowed origins; if none of
///   them is a valid header value, falls back to allowing all origins
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins.map(str::trim) {
        None | Some("*") => {
            tracing::info!("CORS: Allowing all origins");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) if !trimmed.is_empty() => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Ok(_) => None,
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!("CORS: No valid origins configured, allowing all origins");
                CorsLayer::permissive()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
    }
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the router with CORS open to all origins.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, None)
}

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
pub fn create_router_with_cors(state: AppState, cors_origins: Option<&str>) -> Router {
    let cors = build_cors_layer(cors_origins);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/pokemon", get(handlers::list_handler))
        .route("/api/pokemon/types", get(handlers::types_handler))
        .route("/api/pokemon/capture/{name}", post(handlers::capture_handler))
        .route("/api/pokemon/release/{name}", post(handlers::release_handler))
        .route("/api/pokemon/captured", get(handlers::captured_handler))
        .route("/api/icon", get(handlers::icon_handler))
        .route("/api/icon/{name}", get(handlers::icon_path_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(
    addr: &str,
    state: AppState,
    cors_origins: Option<&str>,
) -> Result<(), PokedexError> {
    let router = create_router_with_cors(state, cors_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PokedexError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Pokédex HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PokedexError::IoError(format!("Server error: {}", e)))
}

/// Resolve when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
