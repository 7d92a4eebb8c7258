//! Call-site extraction: walks a method/constructor body collecting
//! `method_invocation` and `object_creation_expression` nodes. Java has no
//! safe-call operator, so `is_safe_call` is always `false`.

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
    match node.kind() {
        "method_invocation" => {
            if let Some(call) = method_invocation_call(node, file_path) {
                out.push(call);
            }
        }
        "object_creation_expression" => {
            if let Some(call) = constructor_call(node, file_path) {
                out.push(call);
            }
        }
        _ => {}
    }

    for child in node.all_children() {
        walk(child, file_path, out);
    }
}

fn method_invocation_call(node: CstNode, file_path: &Path) -> Option<ParsedCall> {
    let name_node = node.child_by_field_name("name")?;
    let name = type_text(name_node)?;
    let receiver = node.child_by_field_name("object").and_then(type_text);
    let (argument_count, argument_types) = arguments(node);
    Some(ParsedCall {
        name,
        receiver,
        argument_count,
        argument_types,
        is_safe_call: false,
        location: node.range(file_path),
    })
}

fn constructor_call(node: CstNode, file_path: &Path) -> Option<ParsedCall> {
    let type_node = node.child_by_field_name("type")?;
    let name = type_text(type_node)?;
    let (argument_count, argument_types) = arguments(node);
    Some(ParsedCall {
        name,
        receiver: None,
        argument_count,
        argument_types,
        is_safe_call: false,
        location: node.range(file_path),
    })
}

fn arguments(node: CstNode) -> (usize, Vec<Option<String>>) {
    let Some(args_node) = node.child_by_field_name("arguments") else {
        return (0, Vec::new());
    };
    let types: Vec<Option<String>> = args_node
        .all_children()
        .filter(|c| c.is_named())
        .map(infer_argument_type)
        .collect();
    (types.len(), types)
}
