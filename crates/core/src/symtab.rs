//! Whole-program symbol table builder: a single batch pass over
//! every [`ParsedFile`] producing lookup indices and the type-hierarchy map.

use crate::model::{
    ClassKind, FunctionSymbolDetail, ParsedClass, ParsedFile, Symbol, SymbolKind,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// `byFqn` is authoritative: any lookup in another index must yield a symbol
/// also present here. All other indices preserve insertion order so that
/// "first match wins" rules (wildcard imports, `byName` disambiguation) are
/// reproducible across runs on the same input.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub by_fqn: HashMap<String, Symbol>,
    pub by_name: IndexMap<String, Vec<String>>,
    pub functions_by_name: IndexMap<String, Vec<String>>,
    pub by_package: IndexMap<String, Vec<String>>,
    /// Type FQN -> ordered parent FQNs (superclass first, then interfaces in
    /// declaration order).
    pub type_hierarchy: IndexMap<String, Vec<String>>,
}

impl SymbolTable {
    pub fn get(&self, fqn: &str) -> Option<&Symbol> {
        self.by_fqn.get(fqn)
    }

    pub fn names(&self, simple_name: &str) -> &[String] {
        self.by_name
            .get(simple_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn functions_named(&self, name: &str) -> &[String] {
        self.functions_by_name
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn package(&self, package_name: &str) -> &[String] {
        self.by_package
            .get(package_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Maps each declaration's exact source position to its FQN. Used by
    /// structural-edge emission to recover the FQN a particular
    /// `ParsedFunction`/`ParsedProperty`/`ParsedClass` was assigned during
    /// symbol-table construction, without re-deriving the disambiguation
    /// counters in [`SymbolTableBuilder::build`].
    pub fn fqn_by_location(&self) -> HashMap<(std::path::PathBuf, usize, usize), &str> {
        self.by_fqn
            .values()
            .map(|s| {
                (
                    (s.location.file_path.clone(), s.location.start_line, s.location.start_column),
                    s.fqn.as_str(),
                )
            })
            .collect()
    }

    /// Breadth-first walk of `type_hierarchy`, finding the first ancestor
    /// (in declaration order, closer ancestors first) whose FQN matches
    /// `predicate`. Used for hierarchy-based method lookup.
    pub fn find_in_hierarchy<'a, F>(&'a self, start_fqn: &str, mut predicate: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        let mut queue: std::collections::VecDeque<String> = std::collections::VecDeque::new();
        let mut visited = std::collections::HashSet::new();
        if let Some(parents) = self.type_hierarchy.get(start_fqn) {
            for p in parents {
                queue.push_back(p.clone());
            }
        }
        while let Some(fqn) = queue.pop_front() {
            if !visited.insert(fqn.clone()) {
                continue;
            }
            if predicate(&fqn) {
                return Some(fqn);
            }
            if let Some(parents) = self.type_hierarchy.get(&fqn) {
                for p in parents {
                    queue.push_back(p.clone());
                }
            }
        }
        None
    }

    fn insert(&mut self, symbol: Symbol) {
        let fqn = symbol.fqn.clone();
        let name = symbol.name.clone();
        let package = symbol.package_name.clone();
        let is_function = matches!(symbol.kind, SymbolKind::Function);

        self.by_name.entry(name).or_default().push(fqn.clone());
        if is_function {
            self.functions_by_name
                .entry(symbol.name.clone())
                .or_default()
                .push(fqn.clone());
        }
        if let Some(pkg) = package {
            self.by_package.entry(pkg).or_default().push(fqn.clone());
        }
        self.by_fqn.insert(fqn, symbol);
    }
}

/// Builds a [`SymbolTable`] from the corpus of parsed files. One batch pass,
/// as specified: enumerate declarations, compute FQNs, insert into every
/// index, then resolve the type hierarchy.
pub struct SymbolTableBuilder;

impl SymbolTableBuilder {
    pub fn build(files: &[ParsedFile]) -> SymbolTable {
        let mut table = SymbolTable::default();
        let mut fqn_collisions: HashMap<String, usize> = HashMap::new();

        for file in files {
            for func in &file.top_level_functions {
                let prefix = file.package_name.clone().unwrap_or_default();
                let fqn = disambiguate_fqn(
                    &join_fqn(&prefix, &func.name),
                    &mut fqn_collisions,
                );
                table.insert(Symbol {
                    name: func.name.clone(),
                    fqn,
                    kind: SymbolKind::Function,
                    file_path: file.file_path.clone(),
                    location: func.location.clone(),
                    package_name: file.package_name.clone(),
                    function_detail: Some(FunctionSymbolDetail {
                        parameter_types: func.parameter_types(),
                        required_parameter_count: func.required_parameter_count(),
                        is_extension: func.is_extension,
                        declaring_type_fqn: None,
                    }),
                });
            }

            for prop in &file.top_level_properties {
                let prefix = file.package_name.clone().unwrap_or_default();
                let fqn = disambiguate_fqn(
                    &join_fqn(&prefix, &prop.name),
                    &mut fqn_collisions,
                );
                table.insert(Symbol {
                    name: prop.name.clone(),
                    fqn,
                    kind: SymbolKind::Property,
                    file_path: file.file_path.clone(),
                    location: prop.location.clone(),
                    package_name: file.package_name.clone(),
                    function_detail: None,
                });
            }

            for alias in &file.type_aliases {
                let prefix = file.package_name.clone().unwrap_or_default();
                let fqn = disambiguate_fqn(
                    &join_fqn(&prefix, &alias.name),
                    &mut fqn_collisions,
                );
                table.insert(Symbol {
                    name: alias.name.clone(),
                    fqn,
                    kind: SymbolKind::TypeAlias,
                    file_path: file.file_path.clone(),
                    location: alias.location.clone(),
                    package_name: file.package_name.clone(),
                    function_detail: None,
                });
            }

            for class in &file.classes {
                insert_class_recursive(
                    &mut table,
                    &mut fqn_collisions,
                    class,
                    file,
                    file.package_name.clone().unwrap_or_default(),
                );
            }
        }

        build_type_hierarchy(&mut table, files);
        table
    }
}

fn join_fqn(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Overloads share `functionsByName[name]` but must have distinct FQNs; a
/// textual collision (two overloads of the same name in the same scope) is
/// disambiguated with an ordinal suffix.
fn disambiguate_fqn(base: &str, collisions: &mut HashMap<String, usize>) -> String {
    let count = collisions.entry(base.to_string()).or_insert(0);
    let fqn = if *count == 0 {
        base.to_string()
    } else {
        format!("{base}#{count}")
    };
    *count += 1;
    fqn
}

fn insert_class_recursive(
    table: &mut SymbolTable,
    collisions: &mut HashMap<String, usize>,
    class: &ParsedClass,
    file: &crate::model::ParsedFile,
    scope_prefix: String,
) {
    let fqn = join_fqn(&scope_prefix, &class.name);
    let kind = match class.kind {
        ClassKind::Class => SymbolKind::Class,
        ClassKind::Interface => SymbolKind::Interface,
        ClassKind::Object => SymbolKind::Object,
        ClassKind::Enum => SymbolKind::Enum,
        ClassKind::Annotation => SymbolKind::Annotation,
    };

    table.insert(Symbol {
        name: class.name.clone(),
        fqn: fqn.clone(),
        kind,
        file_path: file.file_path.clone(),
        location: class.location.clone(),
        package_name: file.package_name.clone(),
        function_detail: None,
    });

    for func in &class.functions {
        let func_fqn = disambiguate_fqn(&join_fqn(&fqn, &func.name), collisions);
        table.insert(Symbol {
            name: func.name.clone(),
            fqn: func_fqn,
            kind: SymbolKind::Function,
            file_path: file.file_path.clone(),
            location: func.location.clone(),
            package_name: file.package_name.clone(),
            function_detail: Some(FunctionSymbolDetail {
                parameter_types: func.parameter_types(),
                required_parameter_count: func.required_parameter_count(),
                is_extension: func.is_extension,
                declaring_type_fqn: Some(fqn.clone()),
            }),
        });
    }

    for ctor in &class.secondary_constructors {
        let ctor_fqn = disambiguate_fqn(&format!("{fqn}.<init>"), collisions);
        table.insert(Symbol {
            name: "<init>".to_string(),
            fqn: ctor_fqn,
            kind: SymbolKind::Function,
            file_path: file.file_path.clone(),
            location: ctor.location.clone(),
            package_name: file.package_name.clone(),
            function_detail: Some(FunctionSymbolDetail {
                parameter_types: ctor
                    .parameters
                    .iter()
                    .map(|p| p.type_text.clone())
                    .collect(),
                required_parameter_count: ctor
                    .parameters
                    .iter()
                    .filter(|p| !p.has_default)
                    .count(),
                is_extension: false,
                declaring_type_fqn: Some(fqn.clone()),
            }),
        });
    }

    for prop in &class.properties {
        let prop_fqn = disambiguate_fqn(&join_fqn(&fqn, &prop.name), collisions);
        table.insert(Symbol {
            name: prop.name.clone(),
            fqn: prop_fqn,
            kind: SymbolKind::Property,
            file_path: file.file_path.clone(),
            location: prop.location.clone(),
            package_name: file.package_name.clone(),
            function_detail: None,
        });
    }

    if let Some(companion) = &class.companion_object {
        insert_class_recursive(table, collisions, companion, file, fqn.clone());
    }

    for nested in &class.nested_classes {
        insert_class_recursive(table, collisions, nested, file, fqn.clone());
    }
}

/// Resolves each class-like symbol's parent *type names* against: (a)
/// symbols in the same package, (b) symbols whose `byName` is unique, (c)
/// explicit imports. Unresolved parents are retained verbatim — they may be
/// external (e.g. `java.lang.Object`) and are never an error.
fn build_type_hierarchy(table: &mut SymbolTable, files: &[ParsedFile]) {
    for file in files {
        let imports = file_import_map(file);

        for class in file.all_classes() {
            let self_fqn = find_class_fqn(table, file, &class.name);
            let Some(self_fqn) = self_fqn else { continue };

            let mut parents = Vec::new();
            if let Some(super_name) = &class.super_class {
                parents.push(resolve_parent_name(
                    table,
                    file,
                    &imports,
                    super_name,
                ));
            }
            for iface in &class.interfaces {
                parents.push(resolve_parent_name(table, file, &imports, iface));
            }
            table.type_hierarchy.insert(self_fqn, parents);
        }
    }
}

fn find_class_fqn(table: &SymbolTable, file: &ParsedFile, simple_name: &str) -> Option<String> {
    table
        .names(simple_name)
        .iter()
        .find(|fqn| {
            table
                .by_fqn
                .get(*fqn)
                .map(|s| s.file_path == file.file_path && s.is_type())
                .unwrap_or(false)
        })
        .cloned()
}

fn resolve_parent_name(
    table: &SymbolTable,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    raw_name: &str,
) -> String {
    resolve_type_ref(table, file, imports, raw_name).unwrap_or_else(|| {
        raw_name.split(['<', '?']).next().unwrap_or(raw_name).trim().to_string()
    })
}

/// Resolves a raw type-reference string (a parameter type, return type,
/// property type or annotation name) to a known type FQN, using the same
/// precedence as parent-type resolution in [`build_type_hierarchy`]: same
/// package, unique simple name, then explicit imports. Returns `None` rather
/// than a verbatim fallback — callers use this for *edges*, where an
/// unresolved reference simply produces no edge.
pub(crate) fn resolve_type_ref(
    table: &SymbolTable,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    raw_name: &str,
) -> Option<String> {
    let simple = raw_name.split(['<', '?']).next().unwrap_or(raw_name).trim();
    if simple.is_empty() {
        return None;
    }

    if let Some(pkg) = &file.package_name {
        let candidate = join_fqn(pkg, simple);
        if table.by_fqn.contains_key(&candidate) {
            return Some(candidate);
        }
    }

    let names = table.names(simple);
    if names.len() == 1 {
        return Some(names[0].clone());
    }

    if let Some(imported) = imports.get(simple) {
        if table.by_fqn.contains_key(*imported) {
            return Some(imported.to_string());
        }
    }

    None
}

/// Builds the per-file import map (local name -> resolved path) used for
/// both hierarchy resolution and structural-edge type resolution.
pub(crate) fn file_import_map(file: &ParsedFile) -> HashMap<&str, &str> {
    file.imports
        .iter()
        .filter(|i| !i.is_wildcard)
        .map(|i| {
            let local = i.alias.as_deref().unwrap_or_else(|| {
                i.resolved_path().rsplit(['.', '/']).next().unwrap_or(&i.path)
            });
            (local, i.resolved_path())
        })
        .collect()
}
