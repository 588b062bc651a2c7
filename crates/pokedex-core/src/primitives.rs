//! # Catalog Primitives
//!
//! Hardcoded defaults and limits for the Pokédex core.
//!
//! These are compiled into the binary and are immutable at runtime.
//! Request parameters that are absent fall back to the defaults below;
//! parameters that are present but out of range are rejected.

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Number of records per page when the caller does not ask for a size.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a single request may ask for.
///
/// Requests above this are rejected rather than clamped.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Default sort column (wire name).
pub const DEFAULT_SORT_BY: &str = "number";

/// Default sort direction (wire name).
pub const DEFAULT_SORT_ORDER: &str = "asc";

// =============================================================================
// ICON PRIMITIVES
// =============================================================================

/// Generation assumed by the icon resolver when none is given.
pub const DEFAULT_ICON_GENERATION: i64 = 1;

/// First generation served from the modern sprite set.
pub const MODERN_SPRITE_GENERATION: i64 = 5;

/// Root of the external sprite host.
pub const SPRITE_BASE_URL: &str = "https://img.pokemondb.net/sprites";

// =============================================================================
// DATASET LIMITS
// =============================================================================

/// Maximum dataset file size (64 MB).
///
/// This prevents memory exhaustion from an accidental or malicious file.
pub const MAX_DATASET_FILE_SIZE: u64 = 64 * 1024 * 1024;
