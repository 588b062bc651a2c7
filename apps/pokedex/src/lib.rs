//! # Pokédex application library
//!
//! Exposes the HTTP API, CLI and configuration so the binary and the
//! integration tests share one router.

pub mod api;
pub mod cli;
pub mod config;
