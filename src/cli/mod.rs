//! CLI module - Command-line interface for the Planetary API
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Planetary API - planets and user accounts over HTTP
#[derive(Parser)]
#[command(name = "planetary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ./config.toml and friends)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create the database tables
    #[command(alias = "db_create")]
    DbCreate,

    /// Drop the database tables
    #[command(alias = "db_drop")]
    DbDrop,

    /// Insert sample planets and a sample user
    #[command(alias = "db_seed")]
    DbSeed,
}

pub use commands::*;
