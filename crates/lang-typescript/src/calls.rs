//! Call-site extraction. `new X(...)` is traversed as a call; a member-expression
//! callee (`a.b.c()`) recovers the full dotted receiver from the object
//! field's own text, which is itself already the flattened chain when the
//! object is in turn a member expression.

use crate::types::infer_argument_type;
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
        "call_expression" => {
            if let Some(call) = call_expression_call(node, file_path) {
                out.push(call);
            }
        }
        "new_expression" => {
            if let Some(call) = new_expression_call(node, file_path) {
                out.push(call);
            }
        }
        _ => {}
    }
    for child in node.all_children() {
        walk(child, file_path, out);
    }
}

fn call_expression_call(node: CstNode, file_path: &Path) -> Option<ParsedCall> {
    let callee = node.child_by_field_name("function")?;
    // Dynamic `import(expr)` is handled as a distinct import record, not a call.
    if callee.kind() == "import" {
        return None;
    }
    let (name, receiver) = callee_parts(callee)?;
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

fn new_expression_call(node: CstNode, file_path: &Path) -> Option<ParsedCall> {
    let callee = node.child_by_field_name("constructor")?;
    let (name, receiver) = callee_parts(callee)?;
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

fn callee_parts(callee: CstNode) -> Option<(String, Option<String>)> {
    match callee.kind() {
        "identifier" | "type_identifier" => Some((callee.text().to_string(), None)),
        "member_expression" => {
            let object = callee.child_by_field_name("object")?;
            let property = callee.child_by_field_name("property")?;
            Some((property.text().to_string(), Some(object.text().to_string())))
        }
        _ => None,
    }
}

fn arguments(node: CstNode) -> (usize, Vec<Option<String>>) {
    let Some(args_node) = node.child_by_field_name("arguments") else {
        return (0, Vec::new());
    };
    let types: Vec<Option<String>> = args_node.children().map(infer_argument_type).collect();
    (types.len(), types)
}
