//! CLI module for the Team Records API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Team Records API - season records for sports teams over HTTP
#[derive(Parser)]
#[command(name = "team-records-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}
