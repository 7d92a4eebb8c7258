//! Thin accessor over the external concrete-syntax tree (`tree-sitter`).
//!
//! This is the only module in the workspace, outside each language crate's
//! own grammar binding, that is allowed to know `tree_sitter`'s node-kind
//! vocabulary. Every extractor depends on the stable kinds it exposes here,
//! never on `tree_sitter::Node` directly in extractor logic (language
//! crates still hold the grammar itself, since that's a per-language
//! concern, but they talk to it exclusively through `CstNode`).

use crate::model::location::SourceLocation;
use std::path::Path;
use tree_sitter::Node;

/// Read-only accessor over a single CST node. Cheap to copy; borrows the
/// source text and tree for its lifetime.
#[derive(Clone, Copy)]
pub struct CstNode<'tree> {
    node: Node<'tree>,
    source: &'tree str,
}

impl<'tree> CstNode<'tree> {
    pub fn new(node: Node<'tree>, source: &'tree str) -> Self {
        Self { node, source }
    }

    pub fn raw(&self) -> Node<'tree> {
        self.node
    }

    /// The CST's kind string for this node, e.g. `"class_declaration"`.
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// The verbatim source text this node spans.
    pub fn text(&self) -> &'tree str {
        self.node
            .utf8_text(self.source.as_bytes())
            .unwrap_or_default()
    }

    /// Named children, in document order, skipping anonymous/trivia nodes.
    pub fn children(&self) -> impl Iterator<Item = CstNode<'tree>> + '_ {
        let source = self.source;
        let mut cursor = self.node.walk();
        let children: Vec<Node<'tree>> = self.node.named_children(&mut cursor).collect();
        children.into_iter().map(move |n| CstNode::new(n, source))
    }

    /// All children (including anonymous/punctuation nodes), in document order.
    /// Used where an extractor needs to see trivia explicitly (e.g. to
    /// distinguish a prefix `-` modifier on a mapped-type field).
    pub fn all_children(&self) -> impl Iterator<Item = CstNode<'tree>> + '_ {
        let source = self.source;
        let mut cursor = self.node.walk();
        let children: Vec<Node<'tree>> = self.node.children(&mut cursor).collect();
        children.into_iter().map(move |n| CstNode::new(n, source))
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<CstNode<'tree>> {
        self.node
            .child_by_field_name(field)
            .map(|n| CstNode::new(n, self.source))
    }

    pub fn parent(&self) -> Option<CstNode<'tree>> {
        self.node.parent().map(|n| CstNode::new(n, self.source))
    }

    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    pub fn id(&self) -> usize {
        self.node.id()
    }

    /// 1-origin source range, per the data model's location convention.
    pub fn range(&self, file_path: &Path) -> SourceLocation {
        let start = self.node.start_position();
        let end = self.node.end_position();
        SourceLocation {
            file_path: file_path.to_path_buf(),
            start_line: start.row + 1,
            start_column: start.column + 1,
            end_line: end.row + 1,
            end_column: end.column + 1,
        }
    }
}
