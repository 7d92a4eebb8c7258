//! Modifier-list extraction shared by classes, members, and parameters.

use codegraph_core::cst::CstNode;
use codegraph_core::model::Visibility;

#[derive(Debug, Clone)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_final: bool,
    pub is_sealed: bool,
    pub annotations: Vec<String>,
}

/// Reads a `modifiers` CST node (public/private/protected/static/abstract/
/// final plus `@Annotation`s). A declaration with no `modifiers` child is
/// package-private, matching [`Visibility::default_java`].
pub fn extract_modifiers(node: Option<CstNode>) -> Modifiers {
    let mut result = Modifiers {
        visibility: Visibility::default_java(),
        is_abstract: false,
        is_static: false,
        is_final: false,
        is_sealed: false,
        annotations: Vec::new(),
    };
    let Some(node) = node else { return result };

    for child in node.all_children() {
        match child.kind() {
            "public" => result.visibility = Visibility::Public,
            "private" => result.visibility = Visibility::Private,
            "protected" => result.visibility = Visibility::Protected,
            "abstract" => result.is_abstract = true,
            "static" => result.is_static = true,
            "final" => result.is_final = true,
            "sealed" => result.is_sealed = true,
            "marker_annotation" | "annotation" => {
                result
                    .annotations
                    .push(child.text().trim_start_matches('@').to_string());
            }
            _ => {}
        }
    }
    result
}

/// Finds the direct `modifiers` child of a declaration node, if present.
pub fn modifiers_child<'a>(node: CstNode<'a>) -> Option<CstNode<'a>> {
    node.all_children().find(|c| c.kind() == "modifiers")
}
