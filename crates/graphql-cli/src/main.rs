mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-explorer")]
#[command(about = "Introspect GraphQL endpoints and map document positions to explorer nodes", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to GraphQL config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Project name (for multi-project configs)
    #[arg(short, long, global = true)]
    project: Option<String>,

    /// Log bootstrap and resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the schema from the configured endpoint
    Schema {
        /// Print the schema as SDL instead of a summary
        #[arg(long)]
        sdl: bool,
    },

    /// Find the definition enclosing a position in a document
    Resolve {
        /// Document to read, `-` for stdin. Defaults to the configured
        /// document, then to the built-in sample.
        #[arg(value_name = "FILE")]
        document: Option<String>,

        /// Line number (1-based)
        #[arg(short, long)]
        line: usize,

        /// Column number (1-based)
        #[arg(long)]
        column: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the top-level definitions of a document and their keys
    Definitions {
        /// Document to read, `-` for stdin
        #[arg(value_name = "FILE")]
        document: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Schema { sdl } => {
            commands::schema::run(cli.config, cli.project, sdl).await?;
        }
        Commands::Resolve {
            document,
            line,
            column,
            format,
        } => {
            commands::resolve::run(cli.config, cli.project, document, line, column, format)?;
        }
        Commands::Definitions { document, format } => {
            commands::definitions::run(cli.config, cli.project, document, format)?;
        }
    }

    Ok(())
}
