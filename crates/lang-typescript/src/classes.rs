//! Class/interface/enum/namespace extraction, including interface
//! call/construct/index signatures materialized as synthetic `[[call]]`,
//! `[[construct]]`, `[[index]]` members.

use crate::calls::extract_calls;
use crate::modifiers::{extract_modifiers, DecoratorCursor};
use crate::types::{extract_parameters, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::model::{
    ClassKind, ParsedClass, ParsedFunction, ParsedProperty, SecondaryConstructor, Visibility,
};
use std::path::Path;

const DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "abstract_class_declaration",
    "interface_declaration",
    "enum_declaration",
    "internal_module",
    "module",
    "ambient_declaration",
];

pub fn is_class_like(kind: &str) -> bool {
    DECLARATION_KINDS.contains(&kind)
}

pub fn extract_class(node: CstNode, file_path: &Path) -> Option<ParsedClass> {
    // `declare module 'x' { ... }` wraps its actual container as a single
    // child; unwrap so the synthetic namespace container is what's recorded.
    if node.kind() == "ambient_declaration" {
        let inner = node
            .all_children()
            .find(|c| matches!(c.kind(), "internal_module" | "module" | "class_declaration"))?;
        return extract_class(inner, file_path);
    }

    let name = node
        .child_by_field_name("name")
        .or_else(|| node.all_children().find(|c| matches!(c.kind(), "type_identifier" | "identifier" | "string")))
        .and_then(type_text)?;

    let modifiers = extract_modifiers(node);
    let (super_class, interfaces) = extract_heritage(node);

    let kind = match node.kind() {
        "interface_declaration" => ClassKind::Interface,
        "enum_declaration" => ClassKind::Enum,
        // Namespaces/modules have no instances of their own; modeled as a
        // singleton container, matching the spirit of Kotlin's `object`.
        "internal_module" | "module" => ClassKind::Object,
        _ => ClassKind::Class,
    };

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

    let mut class = ParsedClass {
        name,
        kind,
        visibility: modifiers.visibility,
        is_abstract: modifiers.is_abstract || node.kind() == "abstract_class_declaration",
        is_data: false,
        is_sealed: false,
        super_class,
        interfaces,
        type_parameters,
        annotations: Vec::new(),
        properties: Vec::new(),
        functions: Vec::new(),
        nested_classes: Vec::new(),
        companion_object: None,
        secondary_constructors: Vec::new(),
        enum_constants: Vec::new(),
        location: node.range(file_path),
    };

    if kind == ClassKind::Enum {
        if let Some(body) = node.all_children().find(|c| c.kind() == "enum_body") {
            for member in body.all_children().filter(|c| c.kind() == "property_identifier" || c.kind() == "enum_assignment") {
                let name_node = if member.kind() == "enum_assignment" {
                    member.children().next()
                } else {
                    Some(member)
                };
                if let Some(n) = name_node.and_then(type_text) {
                    class.enum_constants.push(n);
                }
            }
        }
        return Some(class);
    }

    if let Some(body) = node
        .all_children()
        .find(|c| matches!(c.kind(), "class_body" | "interface_body" | "statement_block"))
    {
        extract_members(body, file_path, &mut class);
    }

    Some(class)
}

fn extract_heritage(node: CstNode) -> (Option<String>, Vec<String>) {
    let mut super_class = None;
    let mut interfaces = Vec::new();

    if let Some(heritage) = node.all_children().find(|c| c.kind() == "class_heritage") {
        for part in heritage.all_children() {
            match part.kind() {
                "extends_clause" => {
                    super_class = part.children().next().and_then(type_text);
                }
                "implements_clause" => {
                    interfaces.extend(part.children().filter_map(type_text));
                }
                _ => {}
            }
        }
    }

    // Interface declarations extend (possibly multiple) other interfaces
    // via their own `extends_type_clause`.
    if let Some(ext) = node.all_children().find(|c| c.kind() == "extends_type_clause") {
        interfaces.extend(ext.children().filter_map(type_text));
    }

    (super_class, interfaces)
}

fn extract_members(body: CstNode, file_path: &Path, class: &mut ParsedClass) {
    let mut decorators = DecoratorCursor::new();

    for member in body.all_children() {
        match member.kind() {
            "decorator" => decorators.push(member),
            "public_field_definition" => {
                if let Some(prop) = extract_field(member, file_path, decorators.take()) {
                    class.properties.push(prop);
                }
            }
            "property_signature" => {
                if let Some(prop) = extract_field(member, file_path, Vec::new()) {
                    class.properties.push(prop);
                }
            }
            "method_definition" if member.child_by_field_name("name").map(|n| n.text()) == Some("constructor") => {
                decorators.take();
                class.secondary_constructors.push(extract_constructor(member, file_path));
            }
            "method_definition" | "method_signature" => {
                if let Some(func) = extract_method(member, file_path, decorators.take()) {
                    class.functions.push(func);
                }
            }
            "call_signature" => {
                class.functions.push(synthetic_signature(member, file_path, "[[call]]"));
            }
            "construct_signature" => {
                class.functions.push(synthetic_signature(member, file_path, "[[construct]]"));
            }
            "index_signature" => {
                class.functions.push(synthetic_signature(member, file_path, "[[index]]"));
            }
            k if is_class_like(k) => {
                if let Some(nested) = extract_class(member, file_path) {
                    class.nested_classes.push(nested);
                }
            }
            _ => {}
        }
    }
}

fn extract_field(node: CstNode, file_path: &Path, annotations: Vec<String>) -> Option<ParsedProperty> {
    let modifiers = extract_modifiers(node);
    let name = node
        .child_by_field_name("name")
        .and_then(type_text)?;
    let type_text_val = node.child_by_field_name("type").and_then(|t| {
        t.children().next().or(Some(t))
    }).and_then(type_text);
    let initializer = node.child_by_field_name("value").map(|v| v.text().to_string());

    Some(ParsedProperty {
        name,
        type_text: type_text_val,
        visibility: modifiers.visibility,
        is_val: modifiers.is_readonly,
        initializer,
        annotations,
        location: node.range(file_path),
    })
}

fn extract_method(node: CstNode, file_path: &Path, annotations: Vec<String>) -> Option<ParsedFunction> {
    let modifiers = extract_modifiers(node);
    let name = node
        .child_by_field_name("name")
        .and_then(type_text)?;

    let params_node = node.child_by_field_name("parameters");
    let parameters = extract_parameters(params_node);

    let return_type = node.child_by_field_name("return_type").and_then(|t| {
        t.children().next().or(Some(t))
    }).and_then(type_text);

    let body = node.child_by_field_name("body");
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    Some(ParsedFunction {
        name,
        visibility: modifiers.visibility,
        parameters,
        return_type,
        is_abstract: modifiers.is_abstract || body.is_none(),
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
        annotations,
        location: node.range(file_path),
        calls,
    })
}

fn synthetic_signature(node: CstNode, file_path: &Path, name: &str) -> ParsedFunction {
    let params_node = node.child_by_field_name("parameters");
    let parameters = extract_parameters(params_node);
    let return_type = node.child_by_field_name("type").and_then(|t| {
        t.children().next().or(Some(t))
    }).and_then(type_text);

    ParsedFunction {
        name: name.to_string(),
        visibility: Visibility::Public,
        parameters,
        return_type,
        is_abstract: true,
        is_suspend_or_async: false,
        is_extension: false,
        is_inline: false,
        is_infix: false,
        is_operator: false,
        is_overload_signature: true,
        receiver_type: None,
        type_parameters: Vec::new(),
        annotations: Vec::new(),
        location: node.range(file_path),
        calls: Vec::new(),
    }
}

/// Used by `extractor.rs` to extract a bare secondary-constructor-like
/// `constructor(...)` member; TypeScript classes have exactly one, so unlike
/// Kotlin there is no delegation chain, but the shared model slot is reused.
pub fn extract_constructor(node: CstNode, file_path: &Path) -> SecondaryConstructor {
    let params_node = node.child_by_field_name("parameters");
    let parameters = extract_parameters(params_node);
    let body = node.child_by_field_name("body");
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    SecondaryConstructor {
        parameters,
        delegates_to: None,
        calls,
        location: node.range(file_path),
    }
}
