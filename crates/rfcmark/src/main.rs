//! rfcmark CLI - xml2rfc title block and citation tooling.
//!
//! Provides commands for:
//! - `resolve`: Print bibliography URLs for citations
//! - `references`: Print the back-matter reference sections for citations
//! - `title-block`: Render a TOML title block as xml2rfc fragments

mod commands;
mod error;
mod front_matter;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ReferencesArgs, ResolveArgs, TitleBlockArgs};
use output::Output;

/// rfcmark - xml2rfc title block and citation tooling.
#[derive(Parser)]
#[command(name = "rfcmark", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bibliography URL of each citation.
    Resolve(ResolveArgs),
    /// Print normative and informative reference sections.
    References(ReferencesArgs),
    /// Render a TOML title block as xml2rfc fragments.
    TitleBlock(TitleBlockArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::References(args) => args.execute(),
        Commands::TitleBlock(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
