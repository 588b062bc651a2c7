//! # API Request/Response Types
//!
//! This module defines the JSON structures and query strings of the HTTP API.
//! Page and capture payloads come straight from the core (`PageResult`,
//! `CaptureStatus`) so the wire shape has a single definition.

use serde::{Deserialize, Serialize};

pub use pokedex_core::{CaptureStatus, CapturedRecord, PageResult};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// LIST PARAMETERS
// =============================================================================

/// Query string of `GET /api/pokemon`. Every parameter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub search: Option<String>,
}

// =============================================================================
// ICON PARAMETERS
// =============================================================================

/// Query string of `GET /api/icon`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconParams {
    pub name: Option<String>,
    pub generation: Option<i64>,
}

/// Query string of `GET /api/icon/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationParams {
    pub generation: Option<i64>,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every non-2xx response produced by a handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
