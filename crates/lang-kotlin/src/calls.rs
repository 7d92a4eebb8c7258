//! Call-site extraction. A Kotlin call's callee expression is either a bare
//! `simple_identifier` or a `navigation_expression` (`receiver.name`,
//! `receiver?.name` for safe calls); the receiver itself may recursively be
//! a navigation expression, so the dotted chain is reconstructed by text.

use crate::types::{infer_argument_type, type_text};
use codegraph_core::cst::CstNode;
use codegraph_core::model::ParsedCall;
use std::path::Path;

pub fn extract_calls(body: CstNode, file_path: &Path) -> Vec<ParsedCall> {
    let mut calls = Vec::new();
    walk(body, file_path, &mut calls);
    calls
}

fn walk(node: CstNode, file_path: &Path, out: &mut Vec<ParsedCall>) {
    if node.kind() == "call_expression" {
        if let Some(call) = call_expression_call(node, file_path) {
            out.push(call);
        }
    }
    for child in node.all_children() {
        walk(child, file_path, out);
    }
}

fn call_expression_call(node: CstNode, file_path: &Path) -> Option<ParsedCall> {
    let callee = node.children().next()?;
    let (name, receiver, is_safe_call) = callee_parts(callee)?;
    let (argument_count, argument_types) = arguments(node);
    Some(ParsedCall {
        name,
        receiver,
        argument_count,
        argument_types,
        is_safe_call,
        location: node.range(file_path),
    })
}

/// Splits a callee expression into `(name, receiver, is_safe_call)`. A bare
/// identifier has no receiver; a navigation expression recovers the dotted
/// path preceding the final `.name`/`?.name` suffix from the receiver's own
/// source text (the receiver may itself be an arbitrarily long chain).
fn callee_parts(callee: CstNode) -> Option<(String, Option<String>, bool)> {
    match callee.kind() {
        "simple_identifier" | "navigation_suffix" => Some((type_text(callee)?, None, false)),
        "navigation_expression" => {
            let mut children = callee.all_children();
            let receiver = children.next()?;
            let mut is_safe = false;
            let mut suffix = None;
            for c in children {
                match c.kind() {
                    "?." => is_safe = true,
                    "navigation_suffix" => suffix = Some(c),
                    _ => {}
                }
            }
            let suffix_text = type_text(suffix?)?;
            let name = suffix_text
                .trim_start_matches('.')
                .trim_start_matches('?')
                .trim_start_matches('.')
                .to_string();
            Some((name, Some(receiver.text().to_string()), is_safe))
        }
        _ => None,
    }
}

fn arguments(node: CstNode) -> (usize, Vec<Option<String>>) {
    let Some(args_node) = node.children().find(|c| c.kind() == "value_arguments") else {
        return (0, Vec::new());
    };
    let types: Vec<Option<String>> = args_node
        .all_children()
        .filter(|c| c.kind() == "value_argument")
        .filter_map(|va| va.children().last())
        .map(infer_argument_type)
        .collect();
    (types.len(), types)
}
