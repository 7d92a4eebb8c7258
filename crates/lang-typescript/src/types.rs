//! Type-text extraction, call-argument type inference, and the regex-based
//! best-effort parse of mapped/conditional types out of an aliased type's
//! raw text.

use codegraph_core::cst::CstNode;
use codegraph_core::model::{ConditionalType, MappedType, MappedTypeModifier, MappedTypeModifierKind, ParsedParameter};
use once_cell::sync::Lazy;
use regex::Regex;

pub fn type_text(node: CstNode) -> Option<String> {
    let text = node.text().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Extracts `formal_parameters`: `required_parameter`, `optional_parameter`
/// and `rest_parameter` nodes each carry a `pattern` field for the name and
/// an optional `type` field.
pub fn extract_parameters(params_node: Option<CstNode>) -> Vec<ParsedParameter> {
    let Some(params_node) = params_node else {
        return Vec::new();
    };
    params_node
        .all_children()
        .filter(|c| {
            matches!(
                c.kind(),
                "required_parameter" | "optional_parameter" | "rest_parameter" | "identifier"
            )
        })
        .map(|param| {
            let name = param
                .child_by_field_name("pattern")
                .or_else(|| param.children().find(|c| c.kind() == "identifier"))
                .and_then(type_text)
                .unwrap_or_else(|| param.text().to_string());
            let ty = param.child_by_field_name("type").and_then(|t| {
                // `type_annotation` wraps the actual type after a leading `:`.
                t.children().next().or(Some(t))
            }).and_then(type_text);
            let has_default = param.kind() == "optional_parameter"
                || param.all_children().any(|c| c.kind() == "=");
            ParsedParameter {
                name,
                type_text: ty,
                has_default,
            }
        })
        .collect()
}

/// Bottom-up judgment over expression node kinds. Returns `None` for a genuinely unknown type (bare
/// identifiers, ordinary calls) so the overload scorer can treat it
/// distinctly from a mismatch.
pub fn infer_argument_type(node: CstNode) -> Option<String> {
    match node.kind() {
        "string" | "template_string" => Some("string".to_string()),
        "number" => Some("number".to_string()),
        "true" | "false" => Some("boolean".to_string()),
        "null" | "undefined" => None,
        "new_expression" => node
            .child_by_field_name("constructor")
            .or_else(|| node.children().next())
            .and_then(type_text),
        "unary_expression" => {
            let operator = node.all_children().next().map(|c| c.text().to_string());
            match operator.as_deref() {
                Some("typeof") => Some("string".to_string()),
                Some("!") => Some("boolean".to_string()),
                Some("void") => None,
                _ => None,
            }
        }
        "binary_expression" => {
            let operator = node
                .all_children()
                .find(|c| !c.is_named())
                .map(|c| c.text().to_string());
            match operator.as_deref() {
                Some("==") | Some("===") | Some("!=") | Some("!==") | Some("<") | Some(">")
                | Some("<=") | Some(">=") | Some("&&") | Some("||") => Some("boolean".to_string()),
                Some("+") => {
                    let operands: Vec<_> = node.children().collect();
                    let any_string = operands
                        .iter()
                        .any(|o| infer_argument_type(*o).as_deref() == Some("string"));
                    Some(if any_string { "string".to_string() } else { "number".to_string() })
                }
                _ => None,
            }
        }
        "as_expression" => node.child_by_field_name("type").and_then(type_text),
        // `any as unknown as T`: nested `as_expression`s are transparent —
        // the recursive call above already resolves to the outermost type.
        "parenthesized_expression" => node.children().next().and_then(infer_argument_type),
        "await_expression" => node.children().next().and_then(infer_argument_type),
        _ => None,
    }
}

static MAPPED_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\{\s*(?P<mods1>[+-]?readonly\s+)?\[\s*(?P<key>[A-Za-z_$][\w$]*)\s+in\s+(?P<keyof>keyof\s+)?(?P<constraint>[^\]]+?)(?:\s+as\s+(?P<as>[^\]]+))?\]\s*(?P<mods2>[+-]?\?)?\s*:\s*(?P<value>.+?)\s*\}\s*$",
    )
    .expect("static mapped-type regex is valid")
});

/// Parses `{ -readonly [K in keyof T as U]?: T[K] }` out of an alias's raw
/// textual body.
pub fn parse_mapped_type(text: &str) -> Option<MappedType> {
    let caps = MAPPED_TYPE_RE.captures(text.trim())?;
    let key_name = caps.name("key")?.as_str().to_string();
    let constraint = caps.name("constraint")?.as_str().trim().to_string();
    let has_keyof = caps.name("keyof").is_some();
    let as_clause = caps.name("as").map(|m| m.as_str().trim().to_string());
    let value_type = caps.name("value")?.as_str().trim().to_string();

    let mut modifiers = Vec::new();
    if let Some(m) = caps.name("mods1") {
        let raw = m.as_str().trim();
        let prefix = raw.chars().next().filter(|c| *c == '+' || *c == '-');
        modifiers.push(MappedTypeModifier {
            kind: MappedTypeModifierKind::Readonly,
            prefix,
        });
    }
    if let Some(m) = caps.name("mods2") {
        let raw = m.as_str().trim();
        let prefix = raw.chars().next().filter(|c| *c == '+' || *c == '-');
        modifiers.push(MappedTypeModifier {
            kind: MappedTypeModifierKind::Optional,
            prefix,
        });
    }

    Some(MappedType {
        key_name,
        constraint,
        has_keyof,
        value_type,
        modifiers,
        as_clause,
    })
}

static CONDITIONAL_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)^(?P<check>.+?)\s+extends\s+(?P<extends>.+?)\s*\?\s*(?P<true>.+?)\s*:\s*(?P<false>.+)$",
    )
    .expect("static conditional-type regex is valid")
});

/// Parses `T extends U ? X : Y` out of an alias's raw textual body.
/// Mapped types are tried first by the caller since a mapped type's body
/// can itself contain `extends` (`keyof T extends ...`), which this regex
/// would otherwise misparse as a top-level conditional.
pub fn parse_conditional_type(text: &str) -> Option<ConditionalType> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return None;
    }
    let caps = CONDITIONAL_TYPE_RE.captures(trimmed)?;
    Some(ConditionalType {
        check_type: caps.name("check")?.as_str().trim().to_string(),
        extends_type: caps.name("extends")?.as_str().trim().to_string(),
        true_type: caps.name("true")?.as_str().trim().to_string(),
        false_type: caps.name("false")?.as_str().trim().to_string(),
    })
}
