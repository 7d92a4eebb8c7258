//! Type-text and parameter extraction, kept as raw source text (the
//! resolver's lattice normalizes generics/nullability itself).

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

/// Extracts `function_value_parameters` (or `class_parameters` for a
/// primary constructor): each `parameter`/`class_parameter` node carries a
/// name, an optional `:` type, and an optional `= default` expression.
pub fn extract_parameters(params_node: Option<CstNode>) -> Vec<ParsedParameter> {
    let Some(params_node) = params_node else {
        return Vec::new();
    };
    params_node
        .all_children()
        .filter(|c| matches!(c.kind(), "parameter" | "class_parameter"))
        .map(|param| {
            let name = param
                .child_by_field_name("name")
                .or_else(|| param.children().find(|c| c.kind() == "simple_identifier"))
                .and_then(type_text)
                .unwrap_or_else(|| "arg".to_string());
            let ty = param
                .child_by_field_name("type")
                .or_else(|| param.children().find(|c| c.kind().ends_with("_type")))
                .and_then(type_text);
            let has_default = param.all_children().any(|c| c.kind() == "=");
            ParsedParameter {
                name,
                type_text: ty,
                has_default,
            }
        })
        .collect()
}

/// Heuristic literal-type inference for call arguments.
pub fn infer_argument_type(node: CstNode) -> Option<String> {
    match node.kind() {
        "string_literal" | "line_string_literal" | "multi_line_string_literal" => {
            Some("String".to_string())
        }
        "character_literal" => Some("Char".to_string()),
        "integer_literal" | "hex_literal" | "bin_literal" => Some("Int".to_string()),
        "long_literal" => Some("Long".to_string()),
        "real_literal" => Some("Double".to_string()),
        "boolean_literal" => Some("Boolean".to_string()),
        "null_literal" => None,
        "call_expression" => node
            .children()
            .next()
            .filter(|callee| callee.text().chars().next().is_some_and(char::is_uppercase))
            .map(|callee| callee.text().to_string()),
        _ => None,
    }
}
