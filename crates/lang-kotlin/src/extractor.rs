//! Whole-file extraction entry point: package, imports, and top-level
//! declarations (classes, functions, properties, type aliases, top-level
//! object expressions and destructuring declarations).

use crate::calls::extract_calls;
use crate::classes::{extract_class, is_class_like};
use crate::modifiers::{extract_modifiers, modifiers_child};
use crate::types::{extract_parameters, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::error::CoreError;
use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::{
    Language, ParsedDestructuring, ParsedFile, ParsedFunction, ParsedImport, ParsedObjectExpression,
    ParsedProperty, ParsedTypeAlias,
};
use std::path::Path;

pub struct KotlinExtractor {
    language: tree_sitter::Language,
}

impl KotlinExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin::language(),
        }
    }
}

impl Default for KotlinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for KotlinExtractor {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["kt", "kts"]
    }

    fn extract_file(&self, source: &str, path: &Path) -> Result<ParsedFile, CoreError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| CoreError::Cst(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| CoreError::Cst("tree-sitter-kotlin failed to produce a tree".into()))?;

        let root = CstNode::new(tree.root_node(), source);
        let mut file = ParsedFile::empty(path.to_path_buf(), Language::Kotlin);

        for child in root.all_children() {
            match child.kind() {
                "package_header" => {
                    file.package_name = extract_package_name(child);
                }
                "import_list" => {
                    for import_header in child.all_children().filter(|c| c.kind() == "import_header") {
                        if let Some(import) = extract_import(import_header) {
                            file.imports.push(import);
                        }
                    }
                }
                "import_header" => {
                    if let Some(import) = extract_import(child) {
                        file.imports.push(import);
                    }
                }
                "type_alias" => {
                    if let Some(alias) = extract_type_alias(child, path) {
                        file.type_aliases.push(alias);
                    }
                }
                "property_declaration" => {
                    if let Some(prop) = extract_top_level_property(child, path) {
                        file.top_level_properties.push(prop);
                    }
                }
                "function_declaration" => {
                    if let Some(func) = extract_top_level_function(child, path) {
                        file.top_level_functions.push(func);
                    }
                }
                k if is_class_like(k) => {
                    if let Some(class) = extract_class(child, path) {
                        file.classes.push(class);
                    }
                }
                _ => {}
            }
        }

        collect_object_expressions(root, path, &mut file.object_expressions);
        collect_destructuring(root, path, &mut file.destructuring_declarations);

        Ok(file)
    }
}

fn extract_package_name(node: CstNode) -> Option<String> {
    node.all_children()
        .find(|c| matches!(c.kind(), "identifier" | "simple_identifier"))
        .map(|c| c.text().to_string())
}

/// Kotlin has no import aliases beyond the trailing `as X` clause; no
/// `static:` encoding (that's Java-only).
fn extract_import(node: CstNode) -> Option<ParsedImport> {
    let mut is_wildcard = false;
    let mut path_node: Option<CstNode> = None;
    let mut alias = None;
    let mut saw_as = false;

    for child in node.all_children() {
        match child.kind() {
            "*" => is_wildcard = true,
            "as" => saw_as = true,
            "identifier" | "scoped_identifier" => path_node = Some(child),
            "simple_identifier" if saw_as => alias = Some(child.text().to_string()),
            _ => {}
        }
    }

    let path = path_node?.text().to_string();
    Some(ParsedImport {
        path,
        alias,
        is_wildcard,
        is_type_only: None,
        is_dynamic: None,
        is_template_literal: None,
    })
}

fn extract_type_alias(node: CstNode, file_path: &Path) -> Option<ParsedTypeAlias> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.all_children().find(|c| c.kind() == "type_identifier"))
        .and_then(type_text)?;
    let modifiers = extract_modifiers(modifiers_child(node));
    let aliased_type = node
        .all_children()
        .rev()
        .find(|c| c.kind().ends_with("_type") || c.kind() == "user_type")
        .and_then(type_text)
        .unwrap_or_default();
    let type_parameters = node
        .all_children()
        .find(|c| c.kind() == "type_parameters")
        .map(|tp| {
            tp.all_children()
                .filter(|c| c.kind() == "type_parameter")
                .filter_map(type_text)
                .collect()
        })
        .unwrap_or_default();

    Some(ParsedTypeAlias {
        name,
        aliased_type,
        visibility: modifiers.visibility,
        type_parameters,
        mapped_type: None,
        conditional_type: None,
        location: node.range(file_path),
    })
}

fn extract_top_level_property(node: CstNode, file_path: &Path) -> Option<ParsedProperty> {
    let modifiers = extract_modifiers(modifiers_child(node));
    let is_val = node.all_children().any(|c| c.kind() == "val");
    let declarator = node
        .all_children()
        .find(|c| matches!(c.kind(), "variable_declaration" | "simple_identifier"))?;
    let name = if declarator.kind() == "simple_identifier" {
        type_text(declarator)?
    } else {
        declarator
            .child_by_field_name("name")
            .or_else(|| declarator.all_children().find(|c| c.kind() == "simple_identifier"))
            .and_then(type_text)?
    };
    let type_text_val = declarator
        .child_by_field_name("type")
        .or_else(|| declarator.all_children().find(|c| c.kind().ends_with("_type")))
        .and_then(type_text);
    let initializer = node
        .all_children()
        .find(|c| matches!(c.kind(), "property_delegate" | "explicit_delegation"))
        .or_else(|| node.child_by_field_name("value"))
        .map(|c| c.text().to_string());

    Some(ParsedProperty {
        name,
        type_text: type_text_val,
        visibility: modifiers.visibility,
        is_val,
        initializer,
        annotations: modifiers.annotations,
        location: node.range(file_path),
    })
}

fn extract_top_level_function(node: CstNode, file_path: &Path) -> Option<ParsedFunction> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.all_children().find(|c| c.kind() == "simple_identifier"))
        .and_then(type_text)?;
    let modifiers = extract_modifiers(modifiers_child(node));

    let receiver_type = node
        .all_children()
        .take_while(|c| c.kind() != "simple_identifier")
        .find(|c| c.kind().ends_with("_type"))
        .and_then(type_text);

    let params_node = node
        .all_children()
        .find(|c| c.kind() == "function_value_parameters");
    let parameters = extract_parameters(params_node);

    let return_type = node
        .child_by_field_name("return_type")
        .or_else(|| {
            node.all_children()
                .skip_while(|c| c.kind() != "function_value_parameters")
                .skip(1)
                .find(|c| c.kind().ends_with("_type"))
        })
        .and_then(type_text);

    let body = node
        .all_children()
        .find(|c| matches!(c.kind(), "function_body" | "block"));
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    Some(ParsedFunction {
        name,
        visibility: modifiers.visibility,
        parameters,
        return_type,
        is_abstract: body.is_none(),
        is_suspend_or_async: modifiers.is_suspend,
        is_extension: receiver_type.is_some(),
        is_inline: modifiers.is_inline,
        is_infix: modifiers.is_infix,
        is_operator: modifiers.is_operator,
        is_overload_signature: body.is_none(),
        receiver_type,
        type_parameters: node
            .all_children()
            .find(|c| c.kind() == "type_parameters")
            .map(|tp| {
                tp.all_children()
                    .filter(|c| c.kind() == "type_parameter")
                    .filter_map(type_text)
                    .collect()
            })
            .unwrap_or_default(),
        annotations: modifiers.annotations,
        location: node.range(file_path),
        calls,
    })
}

/// `object : Interface { ... }` anonymous object expressions, collected
/// separately for dependency tracking.
fn collect_object_expressions(node: CstNode, file_path: &Path, out: &mut Vec<ParsedObjectExpression>) {
    if node.kind() == "object_literal" || node.kind() == "anonymous_object" {
        let implemented_types = node
            .all_children()
            .filter(|c| c.kind() == "delegation_specifier")
            .map(|c| {
                let raw = c.text().trim();
                raw.split('(').next().unwrap_or(raw).trim().to_string()
            })
            .filter(|s| !s.is_empty())
            .collect();
        out.push(ParsedObjectExpression {
            implemented_types,
            location: node.range(file_path),
        });
    }
    for child in node.all_children() {
        collect_object_expressions(child, file_path, out);
    }
}

fn collect_destructuring(node: CstNode, file_path: &Path, out: &mut Vec<ParsedDestructuring>) {
    if node.kind() == "multi_variable_declaration" {
        let component_names = node
            .all_children()
            .filter(|c| c.kind() == "variable_declaration")
            .filter_map(|v| {
                v.child_by_field_name("name")
                    .or_else(|| v.all_children().find(|c| c.kind() == "simple_identifier"))
                    .and_then(type_text)
            })
            .collect::<Vec<_>>();
        let component_types = node
            .all_children()
            .filter(|c| c.kind() == "variable_declaration")
            .map(|v| {
                v.child_by_field_name("type")
                    .or_else(|| v.all_children().find(|c| c.kind().ends_with("_type")))
                    .and_then(type_text)
            })
            .collect();
        out.push(ParsedDestructuring {
            component_names,
            component_types,
            location: node.range(file_path),
        });
    }
    for child in node.all_children() {
        collect_destructuring(child, file_path, out);
    }
}
