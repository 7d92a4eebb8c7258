//! `codegraph` — a thin binary driving the core pipeline end-to-end. One subcommand, no shell, no LSP, no MCP: the
//! orchestrator is a synchronous batch pass, so there is no server loop to
//! host.

mod index;
mod sink;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codegraph",
    version,
    about = "Syntax-aware code indexer for Kotlin, Java, TypeScript and JavaScript",
    long_about = "Parses a repository into a normalized symbol model, resolves cross-file \
                  references, and emits a code graph as newline-delimited JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a project directory into a code graph
    #[command(
        long_about = "Discovers supported source files under the project root, extracts and \
                      resolves them, and appends the resulting nodes and edges to the output file \
                      as newline-delimited JSON. Prints the run's statistics record as JSON on stdout."
    )]
    Index {
        /// Path to the project root directory to index
        #[arg(value_name = "PROJECT_PATH")]
        path: PathBuf,

        /// Where to write the JSON-lines node/edge output
        #[arg(long, value_name = "FILE", default_value = "codegraph.jsonl")]
        output: PathBuf,

        /// Path to a TOML domain-configuration document. Absent
        /// or malformed falls back to pure inference.
        #[arg(long, value_name = "FILE")]
        domain_config: Option<PathBuf>,

        /// Sink batch size
        #[arg(long, default_value_t = codegraph_core::sink::DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Filename substring identifying a test file to skip (repeatable)
        #[arg(long = "skip-test-pattern", value_name = "PATTERN")]
        test_file_patterns: Vec<String>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            path,
            output,
            domain_config,
            batch_size,
            test_file_patterns,
        } => index::run(index::IndexArgs {
            path,
            output,
            domain_config,
            batch_size,
            test_file_patterns,
        }),
    }
}
