//! # pokedex-core
//!
//! The catalog engine for the Pokédex server - THE LOGIC.
//!
//! This crate owns everything that does not touch the network:
//! - `types`: records, sort keys, errors
//! - `dataset`: the read-only record collection and type enumeration
//! - `query`: filter → search → sort → paginate → annotate
//! - `capture`: the in-memory set of captured names
//! - `icon`: sprite URL construction
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network dependencies (pure Rust)
//! - The dataset is never mutated after construction
//! - The capture set is not synchronized here; the server wraps it in a lock

// =============================================================================
// MODULES
// =============================================================================

pub mod capture;
pub mod dataset;
pub mod icon;
pub mod primitives;
pub mod query;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use capture::{CaptureSet, CaptureStatus};
pub use dataset::Dataset;
pub use icon::icon_url;
pub use query::{PageResult, Query};
pub use types::{CapturedRecord, CreatureRecord, PokedexError, SortField, SortOrder};
