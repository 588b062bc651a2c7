//! # Configuration
//!
//! Server settings, resolved in three layers (later layers win):
//!
//! 1. Built-in defaults (`127.0.0.1:8080`, embedded dataset, open CORS)
//! 2. An optional TOML file passed with `--config`
//! 3. Environment (`POKEDEX_CORS_ORIGINS`) and command-line flags
//!
//! ## Example file
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! dataset = "data/pokemon.json"
//! cors_origins = "http://localhost:3000"
//! ```

use pokedex_core::PokedexError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the CORS allow-list.
pub const CORS_ORIGINS_ENV: &str = "POKEDEX_CORS_ORIGINS";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Dataset file; the embedded sample is used when absent.
    pub dataset: Option<PathBuf>,
    /// `*` for all origins, or a comma-separated allow-list.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dataset: None,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, PokedexError> {
        toml::from_str(text).map_err(|e| PokedexError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    ///
    /// A relative `dataset` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, PokedexError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PokedexError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PokedexError::Config(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            PokedexError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let mut config = Self::from_toml(&text)?;

        if let (Some(dataset), Some(dir)) = (config.dataset.as_ref(), path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }

        Ok(config)
    }

    /// Apply `POKEDEX_CORS_ORIGINS` if it is set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origins) = std::env::var(CORS_ORIGINS_ENV) {
            self.cors_origins = Some(origins);
        }
        self
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
