//! # Pokédex CLI Module
//!
//! This module implements the CLI interface for the Pokédex server.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `list` - Print one page of the catalog
//! - `types` - Print every type tag
//! - `icon` - Print the sprite URL of a creature

mod commands;

use clap::{Parser, Subcommand};
use pokedex_core::{
    PokedexError,
    primitives::{
        DEFAULT_ICON_GENERATION, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY,
        DEFAULT_SORT_ORDER,
    },
};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Pokédex - catalog server
///
/// Serves a filterable, sortable, paginated creature catalog and tracks
/// which creatures have been captured.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a JSON dataset (defaults to the embedded sample)
    #[arg(short = 'D', long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print one page of the catalog
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = DEFAULT_PAGE, allow_negative_numbers = true)]
        page: i64,

        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
        page_size: i64,

        /// Column to sort by
        #[arg(short, long, default_value = DEFAULT_SORT_BY)]
        sort_by: String,

        /// Sort direction (asc, desc)
        #[arg(short = 'o', long, default_value = DEFAULT_SORT_ORDER)]
        sort_order: String,

        /// Keep only creatures with this type
        #[arg(short = 't', long = "type")]
        type_filter: Option<String>,

        /// Case-insensitive search over name, number and types
        #[arg(long)]
        search: Option<String>,
    },

    /// Print every type tag in the dataset
    Types,

    /// Print the sprite URL of a creature
    Icon {
        /// Creature name as it appears in the sprite path
        name: String,

        /// Game generation
        #[arg(short, long, default_value_t = DEFAULT_ICON_GENERATION, allow_negative_numbers = true)]
        generation: i64,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PokedexError> {
    let config = resolve_config(cli.config.as_deref(), cli.dataset)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(config, host, port).await,
        Some(Commands::List {
            page,
            page_size,
            sort_by,
            sort_order,
            type_filter,
            search,
        }) => cmd_list(
            &config,
            json_mode,
            &ListArgs {
                page,
                page_size,
                sort_by,
                sort_order,
                type_filter,
                search,
            },
        ),
        Some(Commands::Types) => cmd_types(&config, json_mode),
        Some(Commands::Icon { name, generation }) => {
            cmd_icon(&name, generation);
            Ok(())
        }
        None => {
            // No subcommand - show the first page by default
            cmd_list(&config, json_mode, &ListArgs::default())
        }
    }
}
