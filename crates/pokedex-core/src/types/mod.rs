//! # Core Type Definitions
//!
//! This module contains the core types of the Pokédex catalog:
//! - Catalog entries (`CreatureRecord`) and their response-time view (`CapturedRecord`)
//! - Sort keys (`SortField`, `SortOrder`)
//! - Error types (`PokedexError`)
//!
//! ## Ordering Guarantees
//!
//! Sort keys are a closed enumeration. Every variant maps to an explicit
//! accessor, so an unknown column is rejected while parsing the request
//! instead of faulting in the middle of a sort.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CREATURE RECORD
// =============================================================================

/// One catalog entry.
///
/// `number` and `name` are the stable identifiers. `type_two` may be absent.
/// The statistics columns default to zero so that minimal records
/// (`number`, `name`, `type_one`, `type_two`) are accepted by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// National catalog number.
    pub number: u32,
    /// Display name, unique across the dataset.
    pub name: String,
    /// Primary type tag.
    pub type_one: String,
    /// Secondary type tag, if any.
    pub type_two: Option<String>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub hit_points: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub special_attack: u32,
    #[serde(default)]
    pub special_defense: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub generation: u32,
    #[serde(default)]
    pub legendary: bool,
}

impl CreatureRecord {
    /// Create a record with identity and types only; statistics are zero.
    #[must_use]
    pub fn new(
        number: u32,
        name: impl Into<String>,
        type_one: impl Into<String>,
        type_two: Option<&str>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            type_one: type_one.into(),
            type_two: type_two.map(str::to_string),
            total: 0,
            hit_points: 0,
            attack: 0,
            defense: 0,
            special_attack: 0,
            special_defense: 0,
            speed: 0,
            generation: 0,
            legendary: false,
        }
    }

    /// True if either type tag equals `type_name` exactly.
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_one == type_name || self.type_two.as_deref() == Some(type_name)
    }

    /// Case-insensitive substring match against name, number and type tags.
    ///
    /// `needle` must already be trimmed and lower-cased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.number.to_string().contains(needle)
            || self.type_one.to_lowercase().contains(needle)
            || self
                .type_two
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(needle))
    }
}

// =============================================================================
// CAPTURED RECORD
// =============================================================================

/// A record annotated with its capture state at response time.
///
/// Serialized flat: the record's fields followed by `captured`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRecord {
    #[serde(flatten)]
    pub record: CreatureRecord,
    pub captured: bool,
}

impl CapturedRecord {
    #[must_use]
    pub fn new(record: CreatureRecord, captured: bool) -> Self {
        Self { record, captured }
    }
}

// =============================================================================
// SORT FIELD
// =============================================================================

/// Columns a page can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Number,
    Name,
    TypeOne,
    TypeTwo,
    Total,
    HitPoints,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Generation,
}

impl SortField {
    /// Every sortable column, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Number,
        Self::Name,
        Self::TypeOne,
        Self::TypeTwo,
        Self::Total,
        Self::HitPoints,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
        Self::Generation,
    ];

    /// Wire name of the column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::TypeOne => "type_one",
            Self::TypeTwo => "type_two",
            Self::Total => "total",
            Self::HitPoints => "hit_points",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special_attack",
            Self::SpecialDefense => "special_defense",
            Self::Speed => "speed",
            Self::Generation => "generation",
        }
    }

    /// Ascending comparison of two records on this column.
    ///
    /// An absent `type_two` orders before any present value.
    #[must_use]
    pub fn compare(self, a: &CreatureRecord, b: &CreatureRecord) -> Ordering {
        match self {
            Self::Number => a.number.cmp(&b.number),
            Self::Name => a.name.cmp(&b.name),
            Self::TypeOne => a.type_one.cmp(&b.type_one),
            Self::TypeTwo => a.type_two.cmp(&b.type_two),
            Self::Total => a.total.cmp(&b.total),
            Self::HitPoints => a.hit_points.cmp(&b.hit_points),
            Self::Attack => a.attack.cmp(&b.attack),
            Self::Defense => a.defense.cmp(&b.defense),
            Self::SpecialAttack => a.special_attack.cmp(&b.special_attack),
            Self::SpecialDefense => a.special_defense.cmp(&b.special_defense),
            Self::Speed => a.speed.cmp(&b.speed),
            Self::Generation => a.generation.cmp(&b.generation),
        }
    }
}

impl FromStr for SortField {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PokedexError::UnknownSortField(s.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SORT ORDER
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Parse a direction. Only `desc` (any case) is descending.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Apply this direction to an ascending comparison.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Pokédex core.
///
/// - No silent failures
/// - Use `Result<T, PokedexError>` for fallible operations
/// - The core never panics on caller input
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The requested sort column does not exist.
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// The page number is below 1.
    #[error("Invalid page: {0} (must be at least 1)")]
    InvalidPage(i64),

    /// The page size is outside the accepted range.
    #[error("Invalid page size: {size} (must be between 1 and {max})")]
    InvalidPageSize { size: i64, max: usize },

    /// The dataset could not be parsed.
    #[error("Dataset parse error: {0}")]
    DatasetParse(String),

    /// Two records share a number or a name.
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PokedexError {
    /// True for errors caused by the caller's request parameters.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSortField(_) | Self::InvalidPage(_) | Self::InvalidPageSize { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
