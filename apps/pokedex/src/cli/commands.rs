//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, AppState};
use crate::config::ServerConfig;
use pokedex_core::{
    CaptureSet, Dataset, PageResult, PokedexError, Query, icon_url,
    primitives::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER},
};
use std::path::{Path, PathBuf};

// =============================================================================
// CONFIG & DATASET LOADING
// =============================================================================

/// Merge the config file (if any), the environment and the `--dataset` flag.
pub fn resolve_config(
    config_path: Option<&Path>,
    dataset: Option<PathBuf>,
) -> Result<ServerConfig, PokedexError> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    }
    .with_env_overrides();

    if dataset.is_some() {
        config.dataset = dataset;
    }
    Ok(config)
}

/// Load the configured dataset, or the embedded sample.
pub fn load_dataset(config: &ServerConfig) -> Result<Dataset, PokedexError> {
    match config.dataset.as_deref() {
        Some(path) => {
            let dataset = Dataset::load(path)?;
            tracing::info!("Loaded {} records from {:?}", dataset.len(), path);
            Ok(dataset)
        }
        None => {
            let dataset = Dataset::builtin()?;
            tracing::info!("Using embedded dataset ({} records)", dataset.len());
            Ok(dataset)
        }
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), PokedexError> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let dataset = load_dataset(&config)?;

    println!("Pokédex Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.host);
    println!("  Port:     {}", config.port);
    println!(
        "  Dataset:  {}",
        config
            .dataset
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string())
    );
    println!("  Records:  {}", dataset.len());
    println!(
        "  CORS:     {}",
        config.cors_origins.as_deref().unwrap_or("*")
    );
    println!();
    println!("Endpoints:");
    println!("  GET  /api/pokemon                - Catalog page");
    println!("  GET  /api/pokemon/types          - Type tags");
    println!("  POST /api/pokemon/capture/{{name}} - Capture");
    println!("  POST /api/pokemon/release/{{name}} - Release");
    println!("  GET  /api/pokemon/captured       - Captured names");
    println!("  GET  /api/icon                   - Sprite URL");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = config.bind_addr();
    api::run_server(&addr, AppState::new(dataset), config.cors_origins.as_deref()).await
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Arguments of the `list` command.
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub page: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub sort_order: String,
    pub type_filter: Option<String>,
    pub search: Option<String>,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER.to_string(),
            type_filter: None,
            search: None,
        }
    }
}

/// Run the query pipeline once, against an empty capture set.
pub fn run_list(dataset: &Dataset, args: &ListArgs) -> Result<PageResult, PokedexError> {
    let query = Query::from_params(
        Some(args.page),
        Some(args.page_size),
        Some(&args.sort_by),
        Some(&args.sort_order),
        args.type_filter.as_deref(),
        args.search.as_deref(),
    )?;
    Ok(query.execute(dataset, &CaptureSet::new()))
}

/// Print one page of the catalog.
pub fn cmd_list(config: &ServerConfig, json_mode: bool, args: &ListArgs) -> Result<(), PokedexError> {
    let dataset = load_dataset(config)?;
    let result = run_list(&dataset, args)?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
        return Ok(());
    }

    println!(
        "Page {} of {} ({} matching)",
        result.page, result.total_pages, result.total
    );
    println!("==========================");
    for item in &result.pokemon {
        let r = &item.record;
        let types = match &r.type_two {
            Some(second) => format!("{}/{}", r.type_one, second),
            None => r.type_one.clone(),
        };
        println!("#{:<4} {:<12} {:<16} total {}", r.number, r.name, types, r.total);
    }

    Ok(())
}

// =============================================================================
// TYPES COMMAND
// =============================================================================

/// Print every type tag.
pub fn cmd_types(config: &ServerConfig, json_mode: bool) -> Result<(), PokedexError> {
    let dataset = load_dataset(config)?;
    let types: Vec<String> = dataset.types().into_iter().collect();

    if json_mode {
        println!("{}", serde_json::json!(types));
    } else {
        for t in types {
            println!("{}", t);
        }
    }
    Ok(())
}

// =============================================================================
// ICON COMMAND
// =============================================================================

/// Print a sprite URL.
pub fn cmd_icon(name: &str, generation: i64) {
    println!("{}", icon_url(name, generation));
}

// =============================================================================
// TESTS
// =============================================================================
