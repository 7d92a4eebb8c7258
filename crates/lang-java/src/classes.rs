//! Class/interface/enum/annotation extraction. Java has no nested-function
//! concept distinct from methods, so `nested_classes` alone carries inner
//! classes and `companion_object` is always `None`.

use crate::calls::extract_calls;
use crate::modifiers::{extract_modifiers, modifiers_child};
use crate::types::{extract_parameters, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::model::{
    ClassKind, ParsedClass, ParsedFunction, ParsedProperty, SecondaryConstructor,
};
use std::path::Path;

const DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "annotation_type_declaration",
    "record_declaration",
];

pub fn is_class_like(kind: &str) -> bool {
    DECLARATION_KINDS.contains(&kind)
}

pub fn extract_class(node: CstNode, file_path: &Path) -> Option<ParsedClass> {
    let name = type_text(node.child_by_field_name("name")?)?;
    let modifiers = extract_modifiers(modifiers_child(node));

    let kind = match node.kind() {
        "class_declaration" | "record_declaration" => ClassKind::Class,
        "interface_declaration" => ClassKind::Interface,
        "enum_declaration" => ClassKind::Enum,
        "annotation_type_declaration" => ClassKind::Annotation,
        _ => return None,
    };

    let super_class = node
        .child_by_field_name("superclass")
        .and_then(|n| n.children().next())
        .and_then(type_text);

    let interfaces = extract_interface_list(node, "interfaces")
        .into_iter()
        .chain(extract_interface_list(node, "super_interfaces"))
        .collect();

    let type_parameters = node
        .child_by_field_name("type_parameters")
        .map(extract_type_parameters)
        .unwrap_or_default();

    let mut class = ParsedClass {
        name,
        kind,
        visibility: modifiers.visibility,
        is_abstract: modifiers.is_abstract,
        is_data: false,
        is_sealed: modifiers.is_sealed,
        super_class,
        interfaces,
        type_parameters,
        annotations: modifiers.annotations,
        properties: Vec::new(),
        functions: Vec::new(),
        nested_classes: Vec::new(),
        companion_object: None,
        secondary_constructors: Vec::new(),
        enum_constants: Vec::new(),
        location: node.range(file_path),
    };

    if node.kind() == "record_declaration" {
        for param in extract_parameters(node.child_by_field_name("parameters")) {
            class.properties.push(ParsedProperty {
                name: param.name,
                type_text: param.type_text,
                visibility: class.visibility,
                is_val: true,
                initializer: None,
                annotations: Vec::new(),
                location: class.location.clone(),
            });
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        extract_members(body, file_path, &mut class);
    }

    Some(class)
}

fn extract_interface_list(node: CstNode, field: &str) -> Vec<String> {
    let Some(list_node) = node.child_by_field_name(field) else {
        return Vec::new();
    };
    // `super_interfaces` wraps a `type_list`; `interfaces` IS the type_list
    // on enum_declaration. Handle both shapes by descending once if needed.
    let candidates: Vec<CstNode> = if list_node.kind() == "type_list" {
        list_node.children().collect()
    } else {
        list_node
            .children()
            .find(|c| c.kind() == "type_list")
            .map(|tl| tl.children().collect())
            .unwrap_or_default()
    };
    candidates.into_iter().filter_map(type_text).collect()
}

fn extract_type_parameters(node: CstNode) -> Vec<String> {
    node.children()
        .filter(|c| c.kind() == "type_parameter")
        .filter_map(|c| c.child_by_field_name("name").and_then(type_text))
        .collect()
}

fn extract_members(body: CstNode, file_path: &Path, class: &mut ParsedClass) {
    for member in body.all_children() {
        match member.kind() {
            "field_declaration" => class.properties.extend(extract_fields(member, file_path)),
            "method_declaration" => {
                if let Some(func) = extract_method(member, file_path) {
                    class.functions.push(func);
                }
            }
            "constructor_declaration" => {
                class.secondary_constructors.push(extract_constructor(member, file_path));
            }
            k if is_class_like(k) => {
                if let Some(nested) = extract_class(member, file_path) {
                    class.nested_classes.push(nested);
                }
            }
            "enum_body_declarations" => extract_members(member, file_path, class),
            "enum_constant" => {
                if let Some(name) = member.child_by_field_name("name").and_then(type_text) {
                    class.enum_constants.push(name);
                }
            }
            "annotation_type_element" => {
                if let Some(name) = member.child_by_field_name("name").and_then(type_text) {
                    let return_type = member.child_by_field_name("type").and_then(type_text);
                    class.functions.push(ParsedFunction {
                        name,
                        visibility: codegraph_core::model::Visibility::Public,
                        parameters: Vec::new(),
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
                        location: member.range(file_path),
                        calls: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    }
}

fn extract_fields(node: CstNode, file_path: &Path) -> Vec<ParsedProperty> {
    let modifiers = extract_modifiers(modifiers_child(node));
    let type_node = node.child_by_field_name("type");
    let declared_type = type_node.and_then(type_text);

    node.all_children()
        .filter(|c| c.kind() == "variable_declarator")
        .filter_map(|decl| {
            let name = decl.child_by_field_name("name").and_then(type_text)?;
            let initializer = decl.child_by_field_name("value").map(|v| v.text().to_string());
            Some(ParsedProperty {
                name,
                type_text: declared_type.clone(),
                visibility: modifiers.visibility,
                is_val: modifiers.is_final,
                initializer,
                annotations: modifiers.annotations.clone(),
                location: decl.range(file_path),
            })
        })
        .collect()
}

fn extract_method(node: CstNode, file_path: &Path) -> Option<ParsedFunction> {
    let name = type_text(node.child_by_field_name("name")?)?;
    let modifiers = extract_modifiers(modifiers_child(node));
    let mut return_type = node.child_by_field_name("type").and_then(type_text);
    // `String foo()[]` — trailing array brackets after the parameter list
    // are part of the return type, not the declarator.
    if let Some(dims) = node.child_by_field_name("dimensions") {
        let bracket_count = dims.text().matches('[').count().max(1);
        if let Some(base) = &return_type {
            return_type = Some(format!("{base}{}", "[]".repeat(bracket_count)));
        }
    }
    let parameters = extract_parameters(node.child_by_field_name("parameters"));
    let body = node.child_by_field_name("body");
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    Some(ParsedFunction {
        name,
        visibility: modifiers.visibility,
        parameters,
        return_type,
        is_abstract: modifiers.is_abstract || body.is_none(),
        is_suspend_or_async: false,
        is_extension: false,
        is_inline: false,
        is_infix: false,
        is_operator: false,
        is_overload_signature: false,
        receiver_type: None,
        type_parameters: node
            .child_by_field_name("type_parameters")
            .map(extract_type_parameters)
            .unwrap_or_default(),
        annotations: modifiers.annotations,
        location: node.range(file_path),
        calls,
    })
}

fn extract_constructor(node: CstNode, file_path: &Path) -> SecondaryConstructor {
    let parameters = extract_parameters(node.child_by_field_name("parameters"));
    let body = node.child_by_field_name("body");
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    let delegates_to = body.and_then(|b| {
        b.children().next().and_then(|first| {
            if first.kind() == "explicit_constructor_invocation" {
                first.children().next().map(|n| n.text().to_string())
            } else {
                None
            }
        })
    });

    SecondaryConstructor {
        parameters,
        delegates_to,
        calls,
        location: node.range(file_path),
    }
}
