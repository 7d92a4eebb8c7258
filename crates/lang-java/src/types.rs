//! Type-text and parameter extraction. Types are kept as raw source text
//! (generics, arrays and all) rather than decomposed into a structured type
//! tree; the resolver's lattice (`codegraph_core::resolve::overload`) only
//! needs the textual type name and strips generics/nullability itself.

use codegraph_core::cst::CstNode;
use codegraph_core::model::ParsedParameter;

pub fn type_text(node: CstNode) -> Option<String> {
    let text = node.text().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Extracts a `formal_parameters` node's parameters. `spread_parameter`
/// (varargs) is recorded with its element type, matching the textual
/// convention used elsewhere in this crate: varargs are not distinguished
/// from a regular array parameter at the type level.
pub fn extract_parameters(params_node: Option<CstNode>) -> Vec<ParsedParameter> {
    let Some(params_node) = params_node else {
        return Vec::new();
    };
    let mut result = Vec::new();
    for child in params_node.all_children() {
        match child.kind() {
            "formal_parameter" => {
                let name = child
                    .child_by_field_name("name")
                    .and_then(type_text)
                    .unwrap_or_else(|| "arg".to_string());
                let ty = child.child_by_field_name("type").and_then(type_text);
                result.push(ParsedParameter {
                    name,
                    type_text: ty,
                    has_default: false,
                });
            }
            "spread_parameter" => {
                let mut name = "arg".to_string();
                let mut ty = None;
                for gc in child.all_children() {
                    if gc.kind() == "variable_declarator" {
                        if let Some(n) = gc.child_by_field_name("name") {
                            if let Some(text) = type_text(n) {
                                name = text;
                            }
                        }
                    } else if gc.kind() != "..." && gc.is_named() {
                        ty = type_text(gc).map(|t| format!("{t}..."));
                    }
                }
                result.push(ParsedParameter {
                    name,
                    type_text: ty,
                    has_default: false,
                });
            }
            _ => {}
        }
    }
    result
}

/// Heuristic literal-type inference for call argument expressions. Only unambiguous
/// literal forms are typed; anything else resolves to `None` and is treated
/// as a wildcard by the overload scorer.
pub fn infer_argument_type(node: CstNode) -> Option<String> {
    match node.kind() {
        "string_literal" => Some("String".to_string()),
        "character_literal" => Some("char".to_string()),
        "decimal_integer_literal" | "hex_integer_literal" | "octal_integer_literal" => {
            Some("int".to_string())
        }
        "decimal_floating_point_literal" => Some("double".to_string()),
        "true" | "false" => Some("boolean".to_string()),
        "null_literal" => None,
        "object_creation_expression" => node.child_by_field_name("type").and_then(type_text),
        _ => None,
    }
}
