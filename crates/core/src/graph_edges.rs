//! Structural graph edges: `DECLARES`, `CONTAINS`, `EXTENDS`,
//! `IMPLEMENTS`, `HAS_PARAMETER`, `RETURNS`, `ANNOTATED_WITH`, `USES`.
//!
//! These sit alongside the `CALLS` edges the resolver produces
//! (`resolve::resolve_file`): they are derived directly from the parsed
//! structure and the symbol table's FQN assignment, not from call-site
//! resolution, and follow the same "no match, no edge" policy as the
//! resolver rather than ever failing the run.

use crate::model::{ParsedClass, ParsedFile, ParsedFunction, ParsedProperty};
use crate::sink::{EdgeKind, EdgeRecord};
use crate::symtab::{file_import_map, resolve_type_ref, SymbolTable};
use std::collections::HashMap;
use std::path::PathBuf;

type LocationIndex<'a> = HashMap<(PathBuf, usize, usize), &'a str>;

fn fqn_at(index: &LocationIndex, file_path: &std::path::Path, location: &crate::model::SourceLocation) -> Option<String> {
    index
        .get(&(file_path.to_path_buf(), location.start_line, location.start_column))
        .map(|s| s.to_string())
}

/// Builds every structural edge observed across the corpus. Emits nothing
/// for a declaration whose FQN can't be recovered from `table` (this can
/// only happen for a location collision, which the builder treats as a
/// best-effort miss rather than a panic).
pub fn structural_edges(files: &[ParsedFile], table: &SymbolTable) -> Vec<EdgeRecord> {
    let index = table.fqn_by_location();
    let mut edges = Vec::new();

    for file in files {
        let imports = file_import_map(file);

        for func in &file.top_level_functions {
            if let Some(from) = fqn_at(&index, &file.file_path, &func.location) {
                emit_function_edges(&mut edges, file, &imports, table, &from, func);
            }
        }
        for prop in &file.top_level_properties {
            if let Some(from) = fqn_at(&index, &file.file_path, &prop.location) {
                emit_property_edges(&mut edges, file, &imports, table, &from, prop);
            }
        }

        for class in file.all_classes() {
            emit_class_edges(&mut edges, file, &imports, table, &index, class);
        }
    }

    edges
}

fn emit_class_edges(
    edges: &mut Vec<EdgeRecord>,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    table: &SymbolTable,
    index: &LocationIndex,
    class: &ParsedClass,
) {
    let Some(class_fqn) = fqn_at(index, &file.file_path, &class.location) else {
        return;
    };

    for annotation in &class.annotations {
        push_annotated_with(edges, file, imports, table, &class_fqn, annotation, &class.location);
    }

    if let Some(parents) = table.type_hierarchy.get(&class_fqn) {
        let extends_count = class.super_class.is_some() as usize;
        for (i, parent) in parents.iter().enumerate() {
            let kind = if i < extends_count { EdgeKind::Extends } else { EdgeKind::Implements };
            edges.push(EdgeRecord {
                source_fqn: class_fqn.clone(),
                target_fqn: parent.clone(),
                kind,
                location: Some(class.location.clone()),
            });
        }
    }

    for func in &class.functions {
        if let Some(func_fqn) = fqn_at(index, &file.file_path, &func.location) {
            edges.push(EdgeRecord {
                source_fqn: class_fqn.clone(),
                target_fqn: func_fqn.clone(),
                kind: EdgeKind::Declares,
                location: Some(func.location.clone()),
            });
            emit_function_edges(edges, file, imports, table, &func_fqn, func);
        }
    }

    for prop in &class.properties {
        if let Some(prop_fqn) = fqn_at(index, &file.file_path, &prop.location) {
            edges.push(EdgeRecord {
                source_fqn: class_fqn.clone(),
                target_fqn: prop_fqn.clone(),
                kind: EdgeKind::Declares,
                location: Some(prop.location.clone()),
            });
            emit_property_edges(edges, file, imports, table, &prop_fqn, prop);
        }
    }

    for nested in &class.nested_classes {
        if let Some(nested_fqn) = fqn_at(index, &file.file_path, &nested.location) {
            edges.push(EdgeRecord {
                source_fqn: class_fqn.clone(),
                target_fqn: nested_fqn,
                kind: EdgeKind::Contains,
                location: Some(nested.location.clone()),
            });
        }
    }

    if let Some(companion) = &class.companion_object {
        if let Some(companion_fqn) = fqn_at(index, &file.file_path, &companion.location) {
            edges.push(EdgeRecord {
                source_fqn: class_fqn,
                target_fqn: companion_fqn,
                kind: EdgeKind::Contains,
                location: Some(companion.location.clone()),
            });
        }
    }
}

fn emit_function_edges(
    edges: &mut Vec<EdgeRecord>,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    table: &SymbolTable,
    from: &str,
    func: &ParsedFunction,
) {
    for annotation in &func.annotations {
        push_annotated_with(edges, file, imports, table, from, annotation, &func.location);
    }
    for param in &func.parameters {
        let Some(type_text) = &param.type_text else { continue };
        if let Some(target) = resolve_type_ref(table, file, imports, type_text) {
            edges.push(EdgeRecord {
                source_fqn: from.to_string(),
                target_fqn: target,
                kind: EdgeKind::HasParameter,
                location: Some(func.location.clone()),
            });
        }
    }
    if let Some(return_type) = &func.return_type {
        if let Some(target) = resolve_type_ref(table, file, imports, return_type) {
            edges.push(EdgeRecord {
                source_fqn: from.to_string(),
                target_fqn: target,
                kind: EdgeKind::Returns,
                location: Some(func.location.clone()),
            });
        }
    }
}

fn emit_property_edges(
    edges: &mut Vec<EdgeRecord>,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    table: &SymbolTable,
    from: &str,
    prop: &ParsedProperty,
) {
    for annotation in &prop.annotations {
        push_annotated_with(edges, file, imports, table, from, annotation, &prop.location);
    }
    let Some(type_text) = &prop.type_text else { return };
    if let Some(target) = resolve_type_ref(table, file, imports, type_text) {
        edges.push(EdgeRecord {
            source_fqn: from.to_string(),
            target_fqn: target,
            kind: EdgeKind::Uses,
            location: Some(prop.location.clone()),
        });
    }
}

fn push_annotated_with(
    edges: &mut Vec<EdgeRecord>,
    file: &ParsedFile,
    imports: &HashMap<&str, &str>,
    table: &SymbolTable,
    from: &str,
    annotation: &str,
    location: &crate::model::SourceLocation,
) {
    let name = annotation.trim_start_matches('@');
    let name = name.split('(').next().unwrap_or(name).trim();
    if let Some(target) = resolve_type_ref(table, file, imports, name) {
        edges.push(EdgeRecord {
            source_fqn: from.to_string(),
            target_fqn: target,
            kind: EdgeKind::AnnotatedWith,
            location: Some(location.clone()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassKind, Language, ParsedClass, SourceLocation, Visibility};

    fn loc(file: &str, line: usize) -> SourceLocation {
        SourceLocation {
            file_path: PathBuf::from(file),
            start_line: line,
            start_column: 1,
            end_line: line,
            end_column: 1,
        }
    }

    fn empty_class(name: &str, location: SourceLocation) -> ParsedClass {
        ParsedClass {
            name: name.to_string(),
            kind: ClassKind::Class,
            visibility: Visibility::Public,
            is_abstract: false,
            is_data: false,
            is_sealed: false,
            super_class: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            annotations: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            nested_classes: Vec::new(),
            companion_object: None,
            secondary_constructors: Vec::new(),
            enum_constants: Vec::new(),
            location,
        }
    }

    #[test]
    fn extends_and_implements_are_split_at_the_superclass_boundary() {
        let mut parent = empty_class("Parent", loc("f.kt", 1));
        let mut child = empty_class("Child", loc("f.kt", 5));
        child.super_class = Some("Parent".to_string());
        child.interfaces = vec!["Iface".to_string()];
        let mut iface = empty_class("Iface", loc("f.kt", 3));
        iface.kind = ClassKind::Interface;

        parent.nested_classes.clear();
        let mut file = ParsedFile::empty(PathBuf::from("f.kt"), Language::Kotlin);
        file.package_name = Some("com.x".to_string());
        file.classes = vec![parent, iface, child];

        let table = crate::symtab::SymbolTableBuilder::build(&[file.clone()]);
        let edges = structural_edges(&[file], &table);

        let extends = edges
            .iter()
            .find(|e| e.kind == EdgeKind::Extends && e.source_fqn == "com.x.Child")
            .expect("extends edge");
        assert_eq!(extends.target_fqn, "com.x.Parent");

        let implements = edges
            .iter()
            .find(|e| e.kind == EdgeKind::Implements && e.source_fqn == "com.x.Child")
            .expect("implements edge");
        assert_eq!(implements.target_fqn, "com.x.Iface");
    }

    #[test]
    fn declares_edges_connect_class_to_its_members() {
        let mut class = empty_class("Holder", loc("f.kt", 1));
        class.functions.push(crate::model::ParsedFunction {
            name: "run".to_string(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: None,
            is_abstract: false,
            is_suspend_or_async: false,
            is_extension: false,
            is_inline: false,
            is_infix: false,
            is_operator: false,
            is_overload_signature: false,
            receiver_type: None,
            type_parameters: Vec::new(),
            annotations: Vec::new(),
            location: loc("f.kt", 2),
            calls: Vec::new(),
        });

        let mut file = ParsedFile::empty(PathBuf::from("f.kt"), Language::Kotlin);
        file.package_name = Some("com.x".to_string());
        file.classes = vec![class];

        let table = crate::symtab::SymbolTableBuilder::build(&[file.clone()]);
        let edges = structural_edges(&[file], &table);

        let declares = edges
            .iter()
            .find(|e| e.kind == EdgeKind::Declares)
            .expect("declares edge");
        assert_eq!(declares.source_fqn, "com.x.Holder");
        assert_eq!(declares.target_fqn, "com.x.Holder.run");
    }
}
