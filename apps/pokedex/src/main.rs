//! # Pokédex - catalog server
//!
//! The main binary for the Pokédex catalog.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog queries
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │             apps/pokedex (THE BINARY)         │
//! │                                               │
//! │   ┌─────────────┐        ┌─────────────┐      │
//! │   │    CLI      │        │  HTTP API   │      │
//! │   │   (clap)    │        │   (axum)    │      │
//! │   └──────┬──────┘        └──────┬──────┘      │
//! │          └───────────┬──────────┘             │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │ pokedex-core  │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! pokedex server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! pokedex list --type Fire --sort-by attack --sort-order desc
//! pokedex types
//! pokedex icon pikachu --generation 6
//! ```

use clap::Parser;
use pokedex::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — POKEDEX_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("POKEDEX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pokedex=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Banner only for the server; list/types/icon output stays pipeable
    if !cli.quiet && matches!(cli.command, Some(cli::Commands::Server { .. })) {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Pokédex startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┬┌─┌─┐┌┬┐┌─┐─┐ ┬
  ├─┘│ │├┴┐├┤  ││├┤ ┌┴┬┘
  ┴  └─┘┴ ┴└─┘─┴┘└─┘┴ └─

  Catalog Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
