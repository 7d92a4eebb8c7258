//! Domain inference: groups packages observed across
//! `ParsedFile`s into named domains, and builds a weighted inter-domain
//! dependency graph from the resolved call graph.

use super::pattern;
use crate::model::{Language, ParsedFile, ResolvedFile};
use crate::symtab::SymbolTable;
use indexmap::IndexMap;
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SKIP_SEGMENTS: &[&str] = &["domain", "infrastructure", "application"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfigEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainConfig {
    #[serde(default)]
    pub domains: Vec<DomainConfigEntry>,
}

#[derive(Debug, Clone)]
pub struct Domain {
    pub name: String,
    pub description: Option<String>,
    pub patterns: Vec<String>,
    pub packages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DomainDependency {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// Assigns every observed package to a domain: configured patterns win
/// first-match, unmatched packages fall through to segment inference.
pub fn infer_domains(files: &[ParsedFile], separator_by_language: bool, config: Option<&DomainConfig>) -> Vec<Domain> {
    let packages = observed_packages(files);

    let mut domains: IndexMap<String, Domain> = IndexMap::new();
    if let Some(config) = config {
        for entry in &config.domains {
            domains.insert(
                entry.name.to_lowercase(),
                Domain {
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                    patterns: entry.patterns.clone(),
                    packages: Vec::new(),
                },
            );
        }
    }

    let mut unmatched = Vec::new();
    for (package, language) in &packages {
        let separator = if separator_by_language {
            language.package_separator()
        } else {
            '.'
        };
        let mut matched = false;
        if let Some(config) = config {
            for entry in &config.domains {
                if entry
                    .patterns
                    .iter()
                    .any(|p| pattern::matches(p, package, separator))
                {
                    domains
                        .get_mut(&entry.name.to_lowercase())
                        .expect("configured domain inserted above")
                        .packages
                        .push(package.clone());
                    matched = true;
                    break;
                }
            }
        }
        if !matched {
            unmatched.push((package.clone(), *language));
        }
    }

    for (package, language) in unmatched {
        if let Some(name) = infer_domain_name(&package, language) {
            let key = name.to_lowercase();
            domains
                .entry(key)
                .or_insert_with(|| Domain {
                    name,
                    description: None,
                    patterns: Vec::new(),
                    packages: Vec::new(),
                })
                .packages
                .push(package);
        }
    }

    domains.into_values().collect()
}

fn observed_packages(files: &[ParsedFile]) -> Vec<(String, Language)> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for file in files {
        if let Some(pkg) = &file.package_name {
            if !pkg.is_empty() && seen.insert(pkg.clone()) {
                out.push((pkg.clone(), file.language));
            }
        } else if matches!(file.language, Language::TypeScript | Language::JavaScript) {
            if let Some(parent) = file.file_path.parent() {
                let pkg = parent.to_string_lossy().replace('\\', "/");
                if !pkg.is_empty() && seen.insert(pkg.clone()) {
                    out.push((pkg, file.language));
                }
            }
        }
    }
    out
}

/// Segment index: dotted Kotlin/Java packages use
/// index 2; slash-delimited TypeScript/JavaScript paths use index 1.
/// Segments in the skip set (`domain`, `infrastructure`, `application`) are
/// passed over in favor of the next segment.
fn infer_domain_name(package: &str, language: Language) -> Option<String> {
    let separator = language.package_separator();
    let start_index = match language {
        Language::Kotlin | Language::Java => 2,
        Language::TypeScript | Language::JavaScript => 1,
    };

    let segments: Vec<&str> = package.split(separator).collect();
    let mut index = start_index;
    while index < segments.len() {
        let segment = segments[index];
        if !SKIP_SEGMENTS.contains(&segment.to_lowercase().as_str()) {
            return Some(capitalize(segment));
        }
        index += 1;
    }
    None
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the weighted inter-domain dependency graph from resolved calls.
/// Self-edges are never emitted; the result is sorted by weight descending,
/// ties broken by source then target name.
pub fn compute_dependencies(
    resolved_files: &[ResolvedFile],
    table: &SymbolTable,
    domains: &[Domain],
) -> Vec<DomainDependency> {
    let package_to_domain: HashMap<&str, &str> = domains
        .iter()
        .flat_map(|d| d.packages.iter().map(move |p| (p.as_str(), d.name.as_str())))
        .collect();

    let mut graph: DiGraph<String, u32> = DiGraph::new();
    let mut node_index = HashMap::new();

    for resolved in resolved_files {
        for call in &resolved.resolved_calls {
            let Some(from_domain) = domain_for_fqn(&call.from_fqn, table, &package_to_domain) else {
                continue;
            };
            let Some(to_domain) = domain_for_fqn(&call.to_fqn, table, &package_to_domain) else {
                continue;
            };
            if from_domain == to_domain {
                continue;
            }

            let from_idx = *node_index
                .entry(from_domain.clone())
                .or_insert_with(|| graph.add_node(from_domain.clone()));
            let to_idx = *node_index
                .entry(to_domain.clone())
                .or_insert_with(|| graph.add_node(to_domain.clone()));

            if let Some(edge) = graph.find_edge(from_idx, to_idx) {
                graph[edge] += 1;
            } else {
                graph.add_edge(from_idx, to_idx, 1);
            }
        }
    }

    let mut dependencies: Vec<DomainDependency> = graph
        .edge_indices()
        .map(|e| {
            let (from_idx, to_idx) = graph.edge_endpoints(e).unwrap();
            DomainDependency {
                from: graph[from_idx].clone(),
                to: graph[to_idx].clone(),
                weight: graph[e],
            }
        })
        .collect();

    dependencies.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });
    dependencies
}

/// Looks up the package owning `fqn`. Synthesized targets (constructors,
/// enum `values`/`valueOf`/`entries`) are not themselves symbol-table
/// entries, so this falls back to the owning type's package when the exact
/// FQN isn't found.
fn domain_for_fqn(
    fqn: &str,
    table: &SymbolTable,
    package_to_domain: &HashMap<&str, &str>,
) -> Option<String> {
    let package = match table.get(fqn) {
        Some(symbol) => symbol.package_name.clone(),
        None => {
            let owning_type = fqn.rsplit_once('.').map(|(prefix, _)| prefix)?;
            table.get(owning_type)?.package_name.clone()
        }
    }?;
    package_to_domain.get(package.as_str()).map(|s| s.to_string())
}
