//! CLI module for the registrar API

pub mod serve;

use clap::{Parser, Subcommand};

/// Registrar API - accounts, company settings and academic records
#[derive(Parser)]
#[command(name = "registrar-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
