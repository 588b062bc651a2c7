//! # Dataset Provider
//!
//! The complete, ordered collection of catalog records.
//!
//! A `Dataset` is built once at startup and is read-only afterwards. The
//! query pipeline borrows records from it and never mutates the source.
//!
//! ## Sources
//!
//! - `Dataset::builtin()`: an embedded first-generation sample
//! - `Dataset::load(path)`: a JSON array of records on disk
//! - `Dataset::from_json(bytes)` / `Dataset::from_records(vec)`: in-process

use crate::primitives::MAX_DATASET_FILE_SIZE;
use crate::{CreatureRecord, PokedexError};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Embedded sample dataset.
const BUILTIN_DATASET: &str = include_str!("../data/pokemon.json");

/// Ordered, read-only collection of records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CreatureRecord>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate numbers or names.
    pub fn from_records(records: Vec<CreatureRecord>) -> Result<Self, PokedexError> {
        let mut numbers = HashSet::with_capacity(records.len());
        let mut names = HashSet::with_capacity(records.len());

        for record in &records {
            if !numbers.insert(record.number) {
                return Err(PokedexError::DuplicateRecord(format!(
                    "number {}",
                    record.number
                )));
            }
            if !names.insert(record.name.as_str()) {
                return Err(PokedexError::DuplicateRecord(format!(
                    "name {}",
                    record.name
                )));
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PokedexError> {
        let records: Vec<CreatureRecord> = serde_json::from_slice(bytes)
            .map_err(|e| PokedexError::DatasetParse(e.to_string()))?;
        Self::from_records(records)
    }

    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self, PokedexError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PokedexError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(PokedexError::IoError(format!(
                "Path '{}' is not a regular file",
                path.display()
            )));
        }

        if metadata.len() > MAX_DATASET_FILE_SIZE {
            return Err(PokedexError::DatasetParse(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_DATASET_FILE_SIZE
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            PokedexError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        Self::from_json(&bytes)
    }

    /// The embedded sample dataset.
    pub fn builtin() -> Result<Self, PokedexError> {
        Self::from_json(BUILTIN_DATASET.as_bytes())
    }

    /// Records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of every primary and present secondary type, sorted.
    #[must_use]
    pub fn types(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| std::iter::once(&r.type_one).chain(r.type_two.as_ref()))
            .cloned()
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
