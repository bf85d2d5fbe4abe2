//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and validate the frontend environment configuration
#[derive(Parser, Debug)]
#[command(name = "envctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file (environment variables are used when omitted)
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the validated configuration as JSON
    Show(ShowArgs),

    /// Validate the configuration
    Check,

    /// Print the Auth0 login link
    LoginUrl,

    /// Resolve a request path against the API server URL
    Endpoint(EndpointArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the endpoint command
#[derive(Parser, Debug)]
pub struct EndpointArgs {
    /// Request path (e.g., "drinks-detail")
    pub path: String,
}
