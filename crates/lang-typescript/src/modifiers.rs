//! Modifier extraction and the pending-decorator sibling accumulator.
//!
//! TypeScript decorators sit as *siblings* of the member they decorate
//! rather than as a child of it, so attachment can't be read off a single
//! node the way Kotlin/Java modifier lists can. [`DecoratorCursor`] is an
//! explicit accumulator in place of a mutable closure: push every
//! `decorator` node seen, and `take()` drains it onto the next real member.

use codegraph_core::cst::CstNode;
use codegraph_core::model::Visibility;

#[derive(Debug, Clone)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_readonly: bool,
    pub is_static: bool,
    pub is_async: bool,
}

/// Reads the modifier keyword siblings (`public`, `private`, `protected`,
/// `readonly`, `static`, `abstract`, `async`, `export`, `declare`) that
/// precede a declaration. TypeScript/JavaScript default absent modifiers to
/// `public`.
pub fn extract_modifiers(node: CstNode) -> Modifiers {
    let mut result = Modifiers {
        visibility: Visibility::default_kotlin_or_ts(),
        is_abstract: false,
        is_readonly: false,
        is_static: false,
        is_async: false,
    };

    for child in node.all_children() {
        match child.kind() {
            "accessibility_modifier" => {
                result.visibility = match child.text().trim() {
                    "private" => Visibility::Private,
                    "protected" => Visibility::Protected,
                    _ => Visibility::Public,
                };
            }
            "readonly" => result.is_readonly = true,
            "static" => result.is_static = true,
            "abstract" => result.is_abstract = true,
            "async" => result.is_async = true,
            "#" => result.visibility = Visibility::Private,
            _ => {}
        }
    }
    result
}

/// An explicit accumulator for decorators encountered as preceding siblings
/// of a member/class/function declaration, cleared after every attach or
/// skip.
#[derive(Debug, Default)]
pub struct DecoratorCursor {
    pending: Vec<String>,
}

impl DecoratorCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `decorator` node's text (minus the leading `@`), keyed by
    /// its call expression or bare identifier.
    pub fn push(&mut self, decorator: CstNode) {
        let text = decorator.text().trim().trim_start_matches('@').to_string();
        if !text.is_empty() {
            self.pending.push(text);
        }
    }

    /// Drains and returns everything accumulated so far, attaching it to
    /// whichever member is about to be extracted.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
