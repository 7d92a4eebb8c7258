use super::location::SourceLocation;
use super::visibility::Visibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedProperty {
    pub name: String,
    pub type_text: Option<String>,
    pub visibility: Visibility,
    /// `true` for Kotlin `val` / TS `readonly` bindings.
    pub is_val: bool,
    pub initializer: Option<String>,
    pub annotations: Vec<String>,
    pub location: SourceLocation,
}

/// Modifier list entry on a TypeScript mapped type, e.g. `-readonly` or `?`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedTypeModifier {
    pub kind: MappedTypeModifierKind,
    /// `+`, `-`, or absent (bare modifier, meaning "add").
    pub prefix: Option<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappedTypeModifierKind {
    Readonly,
    Optional,
}

/// `{ [K in keyof T as U]?: V }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedType {
    pub key_name: String,
    pub constraint: String,
    pub has_keyof: bool,
    pub value_type: String,
    pub modifiers: Vec<MappedTypeModifier>,
    /// The `as U` clause, if present.
    pub as_clause: Option<String>,
}

/// `T extends U ? X : Y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalType {
    pub check_type: String,
    pub extends_type: String,
    pub true_type: String,
    pub false_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTypeAlias {
    pub name: String,
    pub aliased_type: String,
    pub visibility: Visibility,
    pub type_parameters: Vec<String>,
    pub mapped_type: Option<MappedType>,
    pub conditional_type: Option<ConditionalType>,
    pub location: SourceLocation,
}

/// TypeScript destructuring declaration, e.g. `const { a, b: renamed, ...rest } = x;`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDestructuring {
    /// Flattened component names across nested object/array patterns, rest
    /// elements and renames — the *bound* local names, not the source keys.
    pub component_names: Vec<String>,
    /// Per-component type annotations, only present when the source carries
    /// per-element type annotations (destructuring rarely does).
    pub component_types: Vec<Option<String>>,
    pub location: SourceLocation,
}

/// An anonymous object literal / `object : Interface { ... }` expression used
/// as an implementation; tracked separately from named classes so dependency
/// edges can still point at the interface it implements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedObjectExpression {
    pub implemented_types: Vec<String>,
    pub location: SourceLocation,
}
