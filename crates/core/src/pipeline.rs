//! Pipeline orchestrator: file discovery, parse, extract,
//! resolve, emit; reports per-phase statistics.

use crate::domain::{self, DomainConfig};
use crate::error::CoreError;
use crate::extract::LanguageExtractor;
use crate::model::{Language, ParsedFile};
use crate::resolve::resolve_file;
use crate::sink::{self, EdgeKind, EdgeRecord, GraphSink, NodeRecord};
use crate::stats::{RunReport, Statistics};
use crate::symtab::SymbolTableBuilder;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const VENDORED_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    "target",
    "out",
    ".gradle",
    ".idea",
];

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub domain_config: Option<DomainConfig>,
    pub batch_size: usize,
    /// Directory- or filename-level patterns identifying test files to skip
    /// during discovery (e.g. `*Test.java`, `__tests__`).
    pub test_file_patterns: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            domain_config: None,
            batch_size: sink::DEFAULT_BATCH_SIZE,
            test_file_patterns: Vec::new(),
        }
    }
}

/// Drives the full batch pipeline over a project root. Holds no per-run
/// state itself; each [`Orchestrator::run`] call is independent.
pub struct Orchestrator {
    extractors: Vec<Arc<dyn LanguageExtractor>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn register(&mut self, extractor: Arc<dyn LanguageExtractor>) {
        self.extractors.push(extractor);
    }

    fn extractor_for(&self, extension: &str) -> Option<&Arc<dyn LanguageExtractor>> {
        self.extractors
            .iter()
            .find(|e| e.extensions().contains(&extension))
    }

    /// Runs the full pipeline. `cancel` is polled between files and between
    /// phases; in-flight file extraction always runs to completion.
    pub fn run(
        &self,
        project_root: &Path,
        options: &RunOptions,
        sink: &mut dyn GraphSink,
        cancel: &dyn Fn() -> bool,
    ) -> Result<RunReport, CoreError> {
        let mut stats = Statistics::default();

        let discovered = self.discover(project_root, options);
        stats.files_found = discovered.len();
        debug!(count = discovered.len(), "discovered source files");

        if cancel() {
            stats.finalize();
            return Ok(RunReport::with_hint(stats, "cancelled during discovery"));
        }

        let (parsed_files, parse_errors) = self.extract_all(&discovered);
        stats.files_parsed = parsed_files.len();
        stats.parse_errors = parse_errors;

        if cancel() {
            stats.finalize();
            return Ok(RunReport::with_hint(stats, "cancelled after extraction"));
        }

        let table = SymbolTableBuilder::build(&parsed_files);
        stats.symbols_resolved = table.by_fqn.len();

        let resolved_files: Vec<_> = parsed_files
            .iter()
            .map(|f| resolve_file(f, &table))
            .collect();

        for resolved in &resolved_files {
            stats.resolved_calls += resolved.resolved_calls.len();
            let total_calls: usize = resolved
                .parsed
                .all_classes()
                .flat_map(|c| c.functions.iter())
                .map(|f| f.calls.len())
                .sum::<usize>()
                + resolved
                    .parsed
                    .top_level_functions
                    .iter()
                    .map(|f| f.calls.len())
                    .sum::<usize>();
            stats.unresolved_calls += total_calls.saturating_sub(resolved.resolved_calls.len());
        }

        let domains = domain::infer_domains(&parsed_files, true, options.domain_config.as_ref());
        let dependencies = domain::compute_dependencies(&resolved_files, &table, &domains);
        debug!(
            domains = domains.len(),
            dependencies = dependencies.len(),
            "domain inference complete"
        );

        if cancel() {
            stats.finalize();
            return Ok(RunReport::with_hint(stats, "cancelled before sink emission"));
        }

        self.emit(&table, &parsed_files, &resolved_files, sink, options.batch_size, &mut stats)?;

        stats.finalize();
        Ok(RunReport::ok(stats))
    }

    fn discover(&self, project_root: &Path, options: &RunOptions) -> Vec<PathBuf> {
        let mut walker = WalkBuilder::new(project_root);
        walker.hidden(false);
        let mut files = Vec::new();

        for entry in walker.build() {
            let Ok(entry) = entry else { continue };
            let path = entry.path();

            if path
                .components()
                .any(|c| VENDORED_DIRECTORIES.contains(&c.as_os_str().to_string_lossy().as_ref()))
            {
                continue;
            }

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if self.extractor_for(ext).is_none() {
                continue;
            }

            if is_test_file(path, &options.test_file_patterns) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files
    }

    fn extract_all(&self, paths: &[PathBuf]) -> (Vec<ParsedFile>, usize) {
        let results: Vec<Option<ParsedFile>> = paths
            .par_iter()
            .map(|path| {
                let source = match std::fs::read_to_string(path) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "ParseFailure: could not read file");
                        return None;
                    }
                };
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                let Some(extractor) = self.extractor_for(ext) else {
                    return None;
                };
                match extractor.extract_file(&source, path) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "ParseFailure: extraction rejected");
                        None
                    }
                }
            })
            .collect();

        let errors = results.iter().filter(|r| r.is_none()).count();
        (results.into_iter().flatten().collect(), errors)
    }

    fn emit(
        &self,
        table: &crate::symtab::SymbolTable,
        parsed_files: &[ParsedFile],
        resolved_files: &[crate::model::ResolvedFile],
        sink: &mut dyn GraphSink,
        batch_size: usize,
        stats: &mut Statistics,
    ) -> Result<(), CoreError> {
        let nodes: Vec<NodeRecord> = table
            .by_fqn
            .values()
            .map(|s| NodeRecord {
                fqn: s.fqn.clone(),
                name: s.name.clone(),
                kind: s.kind,
                location: s.location.clone(),
            })
            .collect();

        for batch in sink::batches(&nodes, batch_size) {
            if let Err(e) = sink.upsert_nodes(batch) {
                warn!(error = %e, "SinkFailure on node batch, retrying once");
                sink.upsert_nodes(batch)?;
            }
            stats.nodes_created += batch.len();
        }

        let mut edges = crate::graph_edges::structural_edges(parsed_files, table);
        for resolved in resolved_files {
            for call in &resolved.resolved_calls {
                edges.push(EdgeRecord {
                    source_fqn: call.from_fqn.clone(),
                    target_fqn: call.to_fqn.clone(),
                    kind: EdgeKind::Calls,
                    location: Some(call.location.clone()),
                });
            }
        }

        for batch in sink::batches(&edges, batch_size) {
            if let Err(e) = sink.upsert_edges(batch) {
                warn!(error = %e, "SinkFailure on edge batch, retrying once");
                sink.upsert_edges(batch)?;
            }
            stats.relationships_created += batch.len();
        }

        Ok(())
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_test_file(path: &Path, patterns: &[String]) -> bool {
    let path_text = path.to_string_lossy();
    patterns.iter().any(|p| path_text.contains(p.as_str()))
}

pub fn language_for_extension(ext: &str) -> Option<Language> {
    Language::from_extension(ext)
}
