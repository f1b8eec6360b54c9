//! Command-line interface

pub mod serve;

use clap::{Parser, Subcommand};

/// Guardian Account API - account backend for guardians
#[derive(Parser)]
#[command(name = "guardian-account-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
