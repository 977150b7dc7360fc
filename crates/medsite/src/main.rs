//! medsite CLI - static medicine price comparison site generator.
//!
//! Provides commands for:
//! - `build`: Generate detail pages, the category index and the sitemap
//!   (default when no command is given)
//! - `check`: Load the embedded dataset and report counts without writing

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// medsite - static medicine price comparison site generator.
#[derive(Parser)]
#[command(name = "medsite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate medicine pages, the index page and the sitemap.
    Build(BuildArgs),
    /// Load the dataset and report what would be generated.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()));

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match command {
        Commands::Build(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
