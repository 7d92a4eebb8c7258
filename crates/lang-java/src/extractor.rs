//! Whole-file extraction entry point: package, imports, and top-level
//! (class-like) declarations. Java has no true top-level functions or
//! properties outside a class, so those lists stay empty.

use crate::classes::{extract_class, is_class_like};
use codegraph_core::cst::CstNode;
use codegraph_core::error::CoreError;
use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::{Language, ParsedFile, ParsedImport};
use std::path::Path;

pub struct JavaExtractor {
    language: tree_sitter::Language,
}

impl JavaExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for JavaExtractor {
    fn language(&self) -> Language {
        Language::Java
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn extract_file(&self, source: &str, path: &Path) -> Result<ParsedFile, CoreError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| CoreError::Cst(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| CoreError::Cst("tree-sitter-java failed to produce a tree".into()))?;

        let root = CstNode::new(tree.root_node(), source);
        let mut file = ParsedFile::empty(path.to_path_buf(), Language::Java);

        for child in root.all_children() {
            match child.kind() {
                "package_declaration" => {
                    file.package_name = extract_package_name(child);
                }
                "import_declaration" => {
                    if let Some(import) = extract_import(child) {
                        file.imports.push(import);
                    }
                }
                k if is_class_like(k) => {
                    if let Some(class) = extract_class(child, path) {
                        file.classes.push(class);
                    }
                }
                _ => {}
            }
        }

        Ok(file)
    }
}

fn extract_package_name(node: CstNode) -> Option<String> {
    node.children()
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|c| c.text().to_string())
}

/// Encodes static imports with the shared `static:` path prefix.
fn extract_import(node: CstNode) -> Option<ParsedImport> {
    let mut is_static = false;
    let mut is_wildcard = false;
    let mut path_node: Option<CstNode> = None;

    for child in node.all_children() {
        match child.kind() {
            "static" => is_static = true,
            "asterisk" | "*" => is_wildcard = true,
            "scoped_identifier" | "identifier" => path_node = Some(child),
            _ => {}
        }
    }

    let raw_path = path_node?.text().to_string();
    let path = if is_static {
        format!("static:{raw_path}")
    } else {
        raw_path
    };

    Some(ParsedImport {
        path,
        alias: None,
        is_wildcard,
        is_type_only: None,
        is_dynamic: None,
        is_template_literal: None,
    })
}
