//! # provenir CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Provenir — provenance annotation toolchain.
///
/// Mints annotation records and inspects annotation documents produced by
/// pipeline nodes.
#[derive(Parser, Debug)]
#[command(name = "provenir", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Construct an annotation and print its wire JSON.
    Annotate(provenir_cli::annotate::AnnotateArgs),
    /// Parse and summarize an annotation document.
    Inspect(provenir_cli::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate(args) => provenir_cli::annotate::run(args),
        Commands::Inspect(args) => provenir_cli::inspect::run(args),
    }
}
