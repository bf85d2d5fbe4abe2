//! envctl - Inspect the frontend environment configuration.
//!
//! CLI-based entry point that loads the record and dispatches to commands.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use environment::{EnvResult, Environment};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EnvResult<()> {
    let environment = match &cli.config {
        Some(path) => Environment::from_json_file(path)?,
        None => Environment::from_env()?,
    };
    let environment = environment::init(environment)?;
    tracing::debug!("Configuration loaded");

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, environment),
        Commands::Check => commands::check::execute(environment),
        Commands::LoginUrl => commands::urls::login_url(environment),
        Commands::Endpoint(args) => commands::urls::endpoint(args, environment),
    }
}

/// Send logs to stderr so `show`, `login-url` and `endpoint` output can be
/// piped. `--verbose` overrides `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
