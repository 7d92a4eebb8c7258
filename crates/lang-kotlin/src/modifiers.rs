//! Modifier-list extraction shared by classes, members, and parameters.
//! Kotlin modifier lists also carry function qualifiers (`suspend`,
//! `inline`, `infix`, `operator`) that Java's never does.

use codegraph_core::cst::CstNode;
use codegraph_core::model::Visibility;

#[derive(Debug, Clone)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_data: bool,
    pub is_sealed: bool,
    pub is_companion: bool,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub is_infix: bool,
    pub is_operator: bool,
    pub annotations: Vec<String>,
}

/// Reads a `modifiers` CST node. Kotlin declarations with no explicit
/// visibility modifier default to `public`.
pub fn extract_modifiers(node: Option<CstNode>) -> Modifiers {
    let mut result = Modifiers {
        visibility: Visibility::default_kotlin_or_ts(),
        is_abstract: false,
        is_data: false,
        is_sealed: false,
        is_companion: false,
        is_suspend: false,
        is_inline: false,
        is_infix: false,
        is_operator: false,
        annotations: Vec::new(),
    };
    let Some(node) = node else { return result };

    for entry in node.all_children() {
        // Modifier keywords sit inside `class_modifier` / `member_modifier` /
        // `visibility_modifier` / `function_modifier` wrapper nodes in the
        // grammar; flatten one level so bare and wrapped keywords both match.
        let mut candidates: Vec<CstNode> = entry.all_children().collect();
        if candidates.is_empty() {
            candidates.push(entry);
        }

        for c in candidates {
            match c.kind() {
                "public" => result.visibility = Visibility::Public,
                "private" => result.visibility = Visibility::Private,
                "protected" => result.visibility = Visibility::Protected,
                "internal" => result.visibility = Visibility::Internal,
                "abstract" => result.is_abstract = true,
                "data" => result.is_data = true,
                "sealed" => result.is_sealed = true,
                "companion" => result.is_companion = true,
                "suspend" => result.is_suspend = true,
                "inline" => result.is_inline = true,
                "infix" => result.is_infix = true,
                "operator" => result.is_operator = true,
                "annotation" => result.annotations.push(c.text().trim_start_matches('@').to_string()),
                _ => {}
            }
        }
    }
    result
}

pub fn modifiers_child<'a>(node: CstNode<'a>) -> Option<CstNode<'a>> {
    node.all_children().find(|c| c.kind() == "modifiers")
}
