//! `codegraph index <path>` — wires up the language extractors, the
//! `JsonlSink`, and `codegraph_core::pipeline::Orchestrator`, then reports
//! the run.

use crate::sink::JsonlSink;
use codegraph_core::config::load_domain_config;
use codegraph_core::pipeline::{Orchestrator, RunOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

pub struct IndexArgs {
    pub path: PathBuf,
    pub output: PathBuf,
    pub domain_config: Option<PathBuf>,
    pub batch_size: usize,
    pub test_file_patterns: Vec<String>,
}

pub fn run(args: IndexArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.path.exists() {
        error!(path = %args.path.display(), "no input path");
        std::process::exit(1);
    }

    let domain_config = match &args.domain_config {
        Some(path) => match load_domain_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), error = %e, "ConfigError: falling back to pure inference");
                None
            }
        },
        None => None,
    };

    let mut orchestrator = Orchestrator::new();
    orchestrator.register(Arc::new(codegraph_lang_java::JavaExtractor::new()));
    orchestrator.register(Arc::new(codegraph_lang_kotlin::KotlinExtractor::new()));
    orchestrator.register(Arc::new(codegraph_lang_typescript::TypeScriptExtractor::new()));
    orchestrator.register(Arc::new(codegraph_lang_typescript::JavaScriptExtractor::new()));

    let options = RunOptions {
        domain_config,
        batch_size: args.batch_size,
        test_file_patterns: args.test_file_patterns,
    };

    let mut sink = match JsonlSink::create(&args.output) {
        Ok(sink) => sink,
        Err(e) => {
            error!(path = %args.output.display(), error = %e, "SinkFailure: could not open output file");
            std::process::exit(1);
        }
    };

    info!(path = %args.path.display(), "starting index run");
    let report = orchestrator.run(&args.path, &options, &mut sink, &|| false)?;

    if report.stats.files_found == 0 {
        error!("no supported files found under project root");
        println!("{}", serde_json::to_string_pretty(&report)?);
        std::process::exit(1);
    }

    info!(
        files_parsed = report.stats.files_parsed,
        nodes = report.stats.nodes_created,
        edges = report.stats.relationships_created,
        "index run complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
