//! Import and re-export extraction, plus the free-standing scan for dynamic
//! `import(expr)` calls.

use codegraph_core::cst::CstNode;
use codegraph_core::model::{ParsedImport, ParsedReexport};

/// `import_statement` (non re-exporting form): default import, namespace
/// import, named imports, or a bare side-effecting `import './x';`.
pub fn extract_imports(node: CstNode) -> Vec<ParsedImport> {
    let is_type_only = node.all_children().any(|c| c.kind() == "type");
    let Some(source) = node
        .all_children()
        .find(|c| c.kind() == "string")
        .map(string_contents)
    else {
        return Vec::new();
    };

    let Some(clause) = node.all_children().find(|c| c.kind() == "import_clause") else {
        // Side-effect-only import: `import './polyfill';`.
        return vec![ParsedImport {
            path: source,
            alias: None,
            is_wildcard: false,
            is_type_only: Some(is_type_only),
            is_dynamic: Some(false),
            is_template_literal: Some(false),
        }];
    };

    let mut imports = Vec::new();
    for part in clause.all_children() {
        match part.kind() {
            "identifier" => {
                // Default import binding; the local name becomes the alias
                // of the module's default export.
                imports.push(ParsedImport {
                    path: source.clone(),
                    alias: Some(part.text().to_string()),
                    is_wildcard: false,
                    is_type_only: Some(is_type_only),
                    is_dynamic: Some(false),
                    is_template_literal: Some(false),
                });
            }
            "namespace_import" => {
                let alias = part
                    .all_children()
                    .find(|c| c.kind() == "identifier")
                    .map(|c| c.text().to_string());
                imports.push(ParsedImport {
                    path: source.clone(),
                    alias,
                    is_wildcard: true,
                    is_type_only: Some(is_type_only),
                    is_dynamic: Some(false),
                    is_template_literal: Some(false),
                });
            }
            "named_imports" => {
                for specifier in part.all_children().filter(|c| c.kind() == "import_specifier") {
                    let spec_type_only = specifier.all_children().any(|c| c.kind() == "type");
                    let name = specifier
                        .child_by_field_name("name")
                        .map(|c| c.text().to_string());
                    let alias = specifier
                        .child_by_field_name("alias")
                        .map(|c| c.text().to_string());
                    let Some(name) = name else { continue };
                    imports.push(ParsedImport {
                        path: name,
                        alias,
                        is_wildcard: false,
                        is_type_only: Some(is_type_only || spec_type_only),
                        is_dynamic: Some(false),
                        is_template_literal: Some(false),
                    });
                }
            }
            _ => {}
        }
    }
    imports
}

/// `export ... from '...'` re-exports: named, default-as-alias, namespace
/// (`export * as n from ...`), and bare wildcard (`export * from ...`).
pub fn extract_reexport(node: CstNode) -> Vec<ParsedReexport> {
    let Some(source_path) = node
        .all_children()
        .find(|c| c.kind() == "string")
        .map(string_contents)
    else {
        return Vec::new();
    };
    let is_type_only = node.all_children().any(|c| c.kind() == "type");

    if let Some(namespace) = node.all_children().find(|c| c.kind() == "namespace_export") {
        let exported_name = namespace
            .all_children()
            .find(|c| c.kind() == "identifier")
            .map(|c| c.text().to_string());
        return vec![ParsedReexport {
            source_path,
            original_name: None,
            exported_name,
            is_wildcard: true,
            is_namespace: true,
            is_type_only,
        }];
    }

    if let Some(clause) = node.all_children().find(|c| c.kind() == "export_clause") {
        return clause
            .all_children()
            .filter(|c| c.kind() == "export_specifier")
            .map(|specifier| {
                let spec_type_only = specifier.all_children().any(|c| c.kind() == "type");
                let name = specifier.child_by_field_name("name").map(|c| c.text().to_string());
                let alias = specifier.child_by_field_name("alias").map(|c| c.text().to_string());
                ParsedReexport {
                    source_path: source_path.clone(),
                    original_name: name,
                    exported_name: alias,
                    is_wildcard: false,
                    is_namespace: false,
                    is_type_only: is_type_only || spec_type_only,
                }
            })
            .collect();
    }

    // Bare `export * from '...'` — wildcard, no namespace binding.
    if node.all_children().any(|c| c.kind() == "*") {
        return vec![ParsedReexport {
            source_path,
            original_name: None,
            exported_name: None,
            is_wildcard: true,
            is_namespace: false,
            is_type_only,
        }];
    }

    Vec::new()
}

pub fn is_reexport(node: CstNode) -> bool {
    node.kind() == "export_statement" && node.all_children().any(|c| c.kind() == "string")
}

fn string_contents(node: CstNode) -> String {
    node.text().trim_matches(|c| c == '\'' || c == '"').to_string()
}

/// Scans the whole tree for `import(expr)` dynamic-import call expressions,
/// recorded as imports rather than calls.
pub fn collect_dynamic_imports(node: CstNode, out: &mut Vec<ParsedImport>) {
    if node.kind() == "call_expression" {
        if let Some(callee) = node.child_by_field_name("function") {
            if callee.kind() == "import" {
                if let Some(arg) = node
                    .child_by_field_name("arguments")
                    .and_then(|a| a.children().next())
                {
                    let is_template = arg.kind() == "template_string";
                    let path = if is_template {
                        arg.text().to_string()
                    } else {
                        string_contents(arg)
                    };
                    out.push(ParsedImport {
                        path,
                        alias: None,
                        is_wildcard: false,
                        is_type_only: Some(false),
                        is_dynamic: Some(true),
                        is_template_literal: Some(is_template),
                    });
                }
            }
        }
    }
    for child in node.all_children() {
        collect_dynamic_imports(child, out);
    }
}
