//! Class/interface/object/enum/annotation extraction, including
//! primary-constructor properties, secondary constructors, and companion
//! objects.

use crate::calls::extract_calls;
use crate::modifiers::{extract_modifiers, modifiers_child};
use crate::types::{extract_parameters, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::model::{
    ClassKind, ParsedClass, ParsedFunction, ParsedProperty, SecondaryConstructor,
};
use std::path::Path;

const DECLARATION_KINDS: &[&str] = &["class_declaration", "object_declaration"];

pub fn is_class_like(kind: &str) -> bool {
    DECLARATION_KINDS.contains(&kind)
}

/// Some grammar versions emit a dedicated `companion_object` kind, others
/// emit `object_declaration` with a `companion` keyword child. Either is
/// treated as a companion.
fn is_companion(node: CstNode) -> bool {
    node.kind() == "companion_object"
        || (node.kind() == "object_declaration"
            && node.all_children().any(|c| c.kind() == "companion"))
}

pub fn extract_class(node: CstNode, file_path: &Path) -> Option<ParsedClass> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.all_children().find(|c| c.kind() == "type_identifier"))
        .and_then(type_text)
        .unwrap_or_else(|| "Companion".to_string());

    let modifiers = extract_modifiers(modifiers_child(node));
    let is_interface = node.all_children().any(|c| c.kind() == "interface");
    // Class modifiers ("enum", "annotation") are leaf keyword tokens; usage
    // annotations (`@Foo`) of the same grammar kind always wrap a user type,
    // so a childless node of that kind is unambiguously the keyword form.
    let modifier_keywords: Vec<CstNode> = modifiers_child(node)
        .map(|m| {
            m.all_children()
                .flat_map(|c| c.all_children().chain(std::iter::once(c)))
                .filter(|c| c.children().next().is_none())
                .collect()
        })
        .unwrap_or_default();
    let is_enum = modifier_keywords.iter().any(|c| c.kind() == "enum");
    let is_annotation = modifier_keywords.iter().any(|c| c.kind() == "annotation");

    let kind = if node.kind() == "object_declaration" {
        ClassKind::Object
    } else if is_interface {
        ClassKind::Interface
    } else if is_enum {
        ClassKind::Enum
    } else if is_annotation {
        ClassKind::Annotation
    } else {
        ClassKind::Class
    };

    let type_parameters = node
        .all_children()
        .find(|c| c.kind() == "type_parameters")
        .map(extract_type_parameters)
        .unwrap_or_default();

    let (super_class, interfaces) = extract_supertypes(node);

    let mut class = ParsedClass {
        name,
        kind,
        visibility: modifiers.visibility,
        is_abstract: modifiers.is_abstract,
        is_data: modifiers.is_data,
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

    // Primary-constructor `val`/`var` parameters become properties.
    if let Some(primary) = node
        .all_children()
        .find(|c| matches!(c.kind(), "primary_constructor" | "class_parameters"))
    {
        let params_node = if primary.kind() == "class_parameters" {
            Some(primary)
        } else {
            primary.all_children().find(|c| c.kind() == "class_parameters")
        };
        if let Some(params_node) = params_node {
            for param in params_node.all_children().filter(|c| c.kind() == "class_parameter") {
                let is_property = param.all_children().any(|c| matches!(c.kind(), "val" | "var"));
                if !is_property {
                    continue;
                }
                let param_mods = extract_modifiers(param.all_children().find(|c| c.kind() == "modifiers"));
                let p_name = param
                    .child_by_field_name("name")
                    .or_else(|| param.all_children().find(|c| c.kind() == "simple_identifier"))
                    .and_then(type_text)
                    .unwrap_or_else(|| "arg".to_string());
                let p_type = param
                    .child_by_field_name("type")
                    .or_else(|| param.all_children().find(|c| c.kind().ends_with("_type")))
                    .and_then(type_text);
                let is_val = !param.all_children().any(|c| c.kind() == "var");
                class.properties.push(ParsedProperty {
                    name: p_name,
                    type_text: p_type,
                    visibility: param_mods.visibility,
                    is_val,
                    initializer: None,
                    annotations: param_mods.annotations,
                    location: param.range(file_path),
                });
            }
        }
    }

    if let Some(body) = node.all_children().find(|c| matches!(c.kind(), "class_body" | "enum_class_body")) {
        extract_members(body, file_path, &mut class);
    }

    Some(class)
}

/// `delegation_specifier` nodes (`: Base(), Iface1, Iface2`) sit as direct
/// children of the class/object declaration, one per supertype. A
/// constructor-call suffix (`Base(...)`) marks the superclass; a bare type
/// name is an interface. Text-based, mirroring how reference Kotlin tree-sitter
/// consumers disambiguate the two without relying on uncertain child fields.
fn extract_supertypes(node: CstNode) -> (Option<String>, Vec<String>) {
    let mut super_class = None;
    let mut interfaces = Vec::new();
    for spec in node.all_children().filter(|c| c.kind() == "delegation_specifier") {
        let raw = spec.text().trim();
        if raw.is_empty() {
            continue;
        }
        let base = raw.split('(').next().unwrap_or(raw).trim().to_string();
        if base.is_empty() {
            continue;
        }
        let has_call = raw.contains('(');
        if has_call && super_class.is_none() {
            super_class = Some(base);
        } else {
            interfaces.push(base);
        }
    }
    (super_class, interfaces)
}

fn extract_type_parameters(node: CstNode) -> Vec<String> {
    node.all_children()
        .filter(|c| c.kind() == "type_parameter")
        .filter_map(|c| {
            let name = c
                .child_by_field_name("name")
                .or_else(|| c.all_children().find(|n| n.kind() == "type_identifier"))
                .and_then(type_text)?;
            // Bounds via `:` on the parameter itself merge with `where` bounds
            // applied later by the caller into one bounds list per parameter.
            let bound = c
                .child_by_field_name("bound")
                .or_else(|| c.all_children().find(|n| n.kind().ends_with("_type")))
                .and_then(type_text);
            Some(match bound {
                Some(b) => format!("{name}: {b}"),
                None => name,
            })
        })
        .collect()
}

fn extract_members(body: CstNode, file_path: &Path, class: &mut ParsedClass) {
    for member in body.all_children() {
        match member.kind() {
            "property_declaration" => {
                if let Some(prop) = extract_property(member, file_path) {
                    class.properties.push(prop);
                }
            }
            "function_declaration" => {
                if let Some(func) = extract_function(member, file_path) {
                    class.functions.push(func);
                }
            }
            "secondary_constructor" => {
                class.secondary_constructors.push(extract_secondary_constructor(member, file_path));
            }
            "companion_object" => {
                class.companion_object = extract_class(member, file_path).map(Box::new);
            }
            "object_declaration" if is_companion(member) => {
                class.companion_object = extract_class(member, file_path).map(Box::new);
            }
            k if is_class_like(k) => {
                if let Some(nested) = extract_class(member, file_path) {
                    class.nested_classes.push(nested);
                }
            }
            "enum_entry" => {
                if let Some(name) = member
                    .child_by_field_name("name")
                    .or_else(|| member.all_children().find(|c| c.kind() == "simple_identifier"))
                    .and_then(type_text)
                {
                    class.enum_constants.push(name);
                }
            }
            _ => {}
        }
    }
}

fn extract_property(node: CstNode, file_path: &Path) -> Option<ParsedProperty> {
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

    // Property delegates (`by lazy { ... }`) and plain initializers are both
    // kept verbatim in `initializer`.
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

fn extract_function(node: CstNode, file_path: &Path) -> Option<ParsedFunction> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.all_children().find(|c| c.kind() == "simple_identifier"))
        .and_then(type_text)?;
    let modifiers = extract_modifiers(modifiers_child(node));

    let receiver_type = node
        .child_by_field_name("receiver")
        .or_else(|| {
            // The receiver type is the type node appearing before the `.`
            // that precedes the function name in an extension declaration.
            node.all_children()
                .take_while(|c| c.kind() != "simple_identifier")
                .find(|c| c.kind().ends_with("_type"))
        })
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
        is_abstract: modifiers.is_abstract || body.is_none(),
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
            .map(extract_type_parameters)
            .unwrap_or_default(),
        annotations: modifiers.annotations,
        location: node.range(file_path),
        calls,
    })
}

fn extract_secondary_constructor(node: CstNode, file_path: &Path) -> SecondaryConstructor {
    let params_node = node
        .all_children()
        .find(|c| c.kind() == "function_value_parameters");
    let parameters = extract_parameters(params_node);

    let delegates_to = node
        .all_children()
        .find(|c| c.kind() == "constructor_delegation_call")
        .and_then(|d| d.all_children().find(|c| matches!(c.kind(), "this" | "super")))
        .map(|c| c.text().to_string());

    let body = node
        .all_children()
        .find(|c| matches!(c.kind(), "function_body" | "block"));
    let calls = body.map(|b| extract_calls(b, file_path)).unwrap_or_default();

    SecondaryConstructor {
        parameters,
        delegates_to,
        calls,
        location: node.range(file_path),
    }
}
