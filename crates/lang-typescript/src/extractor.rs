//! Whole-file extraction entry point, shared by the TypeScript and
//! JavaScript front ends — the constructs they both support (classes,
//! functions, destructuring, dynamic imports) are extracted identically;
//! only the grammar selected per file extension differs.

use crate::classes::{extract_class, is_class_like};
use crate::imports::{collect_dynamic_imports, extract_imports, extract_reexport, is_reexport};
use crate::modifiers::{extract_modifiers, DecoratorCursor};
use crate::types::{extract_parameters, parse_conditional_type, parse_mapped_type, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::error::CoreError;
use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::{
    Language, ParsedDestructuring, ParsedFile, ParsedFunction, ParsedProperty, ParsedTypeAlias,
    Visibility,
};
use std::path::Path;

pub struct TypeScriptExtractor {
    typescript: tree_sitter::Language,
    tsx: tree_sitter::Language,
}

impl TypeScriptExtractor {
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for TypeScriptExtractor {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ts", "tsx"]
    }

    fn extract_file(&self, source: &str, path: &Path) -> Result<ParsedFile, CoreError> {
        let grammar = if path.extension().and_then(|e| e.to_str()) == Some("tsx") {
            &self.tsx
        } else {
            &self.typescript
        };
        extract_program(grammar, source, path, Language::TypeScript)
    }
}

pub struct JavaScriptExtractor {
    language: tree_sitter::Language,
}

impl JavaScriptExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for JavaScriptExtractor {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "jsx"]
    }

    fn extract_file(&self, source: &str, path: &Path) -> Result<ParsedFile, CoreError> {
        extract_program(&self.language, source, path, Language::JavaScript)
    }
}

fn extract_program(
    grammar: &tree_sitter::Language,
    source: &str,
    path: &Path,
    language: Language,
) -> Result<ParsedFile, CoreError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(grammar)
        .map_err(|e| CoreError::Cst(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| CoreError::Cst("tree-sitter-typescript/javascript failed to produce a tree".into()))?;

    let root = CstNode::new(tree.root_node(), source);
    let mut file = ParsedFile::empty(path.to_path_buf(), language);
    let mut decorators = DecoratorCursor::new();

    for child in root.all_children() {
        dispatch_top_level(child, path, &mut file, &mut decorators);
    }

    collect_dynamic_imports(root, &mut file.imports);
    collect_destructuring(root, path, &mut file.destructuring_declarations);

    Ok(file)
}

fn dispatch_top_level(node: CstNode, path: &Path, file: &mut ParsedFile, decorators: &mut DecoratorCursor) {
    match node.kind() {
        "decorator" => decorators.push(node),
        "import_statement" => file.imports.extend(extract_imports(node)),
        "export_statement" => {
            if is_reexport(node) {
                file.reexports.extend(extract_reexport(node));
                return;
            }
            if let Some(inner) = node
                .all_children()
                .find(|c| c.kind() != "export" && c.kind() != "default" && c.kind() != "type")
            {
                dispatch_top_level(inner, path, file, decorators);
            }
        }
        "type_alias_declaration" => file.type_aliases.push(extract_type_alias(node, path)),
        "function_declaration" | "generator_function_declaration" => {
            if let Some(func) = extract_top_level_function(node, path) {
                file.top_level_functions.push(func);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            extract_top_level_bindings(node, path, file);
        }
        k if is_class_like(k) => {
            let pending = decorators.take();
            if let Some(mut class) = extract_class(node, path) {
                class.annotations = pending;
                file.classes.push(class);
            }
        }
        _ => {}
    }
}

fn extract_type_alias(node: CstNode, file_path: &Path) -> ParsedTypeAlias {
    let modifiers = extract_modifiers(node);
    let name = node
        .child_by_field_name("name")
        .and_then(type_text)
        .unwrap_or_default();
    let type_parameters = node
        .all_children()
        .find(|c| c.kind() == "type_parameters")
        .map(|tp| {
            tp.all_children()
                .filter(|c| c.kind() == "type_parameter")
                .filter_map(|c| c.children().next().and_then(type_text))
                .collect()
        })
        .unwrap_or_default();
    let aliased_type = node
        .child_by_field_name("value")
        .and_then(type_text)
        .unwrap_or_default();

    let mapped_type = parse_mapped_type(&aliased_type);
    let conditional_type = if mapped_type.is_none() {
        parse_conditional_type(&aliased_type)
    } else {
        None
    };

    ParsedTypeAlias {
        name,
        aliased_type,
        visibility: modifiers.visibility,
        type_parameters,
        mapped_type,
        conditional_type,
        location: node.range(file_path),
    }
}

fn extract_top_level_function(node: CstNode, file_path: &Path) -> Option<ParsedFunction> {
    let modifiers = extract_modifiers(node);
    let name = node.child_by_field_name("name").and_then(type_text)?;
    let parameters = extract_parameters(node.child_by_field_name("parameters"));
    let return_type = node
        .child_by_field_name("return_type")
        .and_then(|t| t.children().next().or(Some(t)))
        .and_then(type_text);
    let body = node.child_by_field_name("body");
    let calls = body.map(|b| crate::calls::extract_calls(b, file_path)).unwrap_or_default();

    Some(ParsedFunction {
        name,
        visibility: modifiers.visibility,
        parameters,
        return_type,
        is_abstract: false,
        is_suspend_or_async: modifiers.is_async,
        is_extension: false,
        is_inline: false,
        is_infix: false,
        is_operator: false,
        is_overload_signature: body.is_none(),
        receiver_type: None,
        type_parameters: node
            .all_children()
            .find(|c| c.kind() == "type_parameters")
            .map(|tp| {
                tp.all_children()
                    .filter(|c| c.kind() == "type_parameter")
                    .filter_map(|c| c.children().next().and_then(type_text))
                    .collect()
            })
            .unwrap_or_default(),
        annotations: Vec::new(),
        location: node.range(file_path),
        calls,
    })
}

/// A top-level `const`/`let`/`var` binding becomes either a property or, if
/// its initializer is an arrow/function expression, a function named after
/// the binding.
fn extract_top_level_bindings(node: CstNode, file_path: &Path, file: &mut ParsedFile) {
    let is_const = node.all_children().any(|c| c.kind() == "const");
    for declarator in node.all_children().filter(|c| c.kind() == "variable_declarator") {
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        if !matches!(name_node.kind(), "identifier" | "type_identifier") {
            continue; // destructuring bindings are handled separately
        }
        let Some(name) = type_text(name_node) else { continue };
        let value = declarator.child_by_field_name("value");

        if let Some(value) = value.filter(|v| matches!(v.kind(), "arrow_function" | "function_expression")) {
            let parameters = extract_parameters(value.child_by_field_name("parameters"));
            let return_type = value
                .child_by_field_name("return_type")
                .and_then(|t| t.children().next().or(Some(t)))
                .and_then(type_text);
            let is_async = value.all_children().any(|c| c.kind() == "async");
            let body = value.child_by_field_name("body");
            let calls = body.map(|b| crate::calls::extract_calls(b, file_path)).unwrap_or_default();
            file.top_level_functions.push(ParsedFunction {
                name,
                visibility: Visibility::Public,
                parameters,
                return_type,
                is_abstract: false,
                is_suspend_or_async: is_async,
                is_extension: false,
                is_inline: false,
                is_infix: false,
                is_operator: false,
                is_overload_signature: false,
                receiver_type: None,
                type_parameters: Vec::new(),
                annotations: Vec::new(),
                location: declarator.range(file_path),
                calls,
            });
            continue;
        }

        let type_text_val = declarator
            .child_by_field_name("type")
            .and_then(|t| t.children().next().or(Some(t)))
            .and_then(type_text);
        let initializer = value.map(|v| v.text().to_string());
        file.top_level_properties.push(ParsedProperty {
            name,
            type_text: type_text_val,
            visibility: Visibility::Public,
            is_val: is_const,
            initializer,
            annotations: Vec::new(),
            location: declarator.range(file_path),
        });
    }
}

/// `const { a, b: renamed, ...rest } = x;` / `const [a, b] = x;` — flattened
/// across nested object/array patterns.
fn collect_destructuring(node: CstNode, file_path: &Path, out: &mut Vec<ParsedDestructuring>) {
    if node.kind() == "variable_declarator" {
        if let Some(name_node) = node.child_by_field_name("name") {
            if matches!(name_node.kind(), "object_pattern" | "array_pattern") {
                let mut component_names = Vec::new();
                flatten_pattern(name_node, &mut component_names);
                out.push(ParsedDestructuring {
                    component_names,
                    component_types: Vec::new(),
                    location: node.range(file_path),
                });
            }
        }
    }
    for child in node.all_children() {
        collect_destructuring(child, file_path, out);
    }
}

fn flatten_pattern(pattern: CstNode, out: &mut Vec<String>) {
    for child in pattern.all_children() {
        match child.kind() {
            "shorthand_property_identifier_pattern" | "identifier" => {
                out.push(child.text().to_string());
            }
            "pair_pattern" => {
                if let Some(value) = child.child_by_field_name("value") {
                    if matches!(value.kind(), "object_pattern" | "array_pattern") {
                        flatten_pattern(value, out);
                    } else if let Some(name) = type_text(value) {
                        out.push(name);
                    }
                }
            }
            "rest_pattern" => {
                if let Some(name) = child.children().next().and_then(type_text) {
                    out.push(name);
                }
            }
            "object_pattern" | "array_pattern" => flatten_pattern(child, out),
            "assignment_pattern" => {
                if let Some(left) = child.child_by_field_name("left") {
                    flatten_pattern_single(left, out);
                }
            }
            _ => {}
        }
    }
}

fn flatten_pattern_single(node: CstNode, out: &mut Vec<String>) {
    match node.kind() {
        "identifier" => out.push(node.text().to_string()),
        "object_pattern" | "array_pattern" => flatten_pattern(node, out),
        _ => {}
    }
}
