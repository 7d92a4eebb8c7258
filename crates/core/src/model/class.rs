use super::function::ParsedFunction;
use super::location::SourceLocation;
use super::property::ParsedProperty;
use super::visibility::Visibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    /// Kotlin singleton (`object`) or a companion object.
    Object,
    Enum,
    Annotation,
}

/// A secondary constructor, recorded with its delegation target (`this(...)`
/// or `super(...)`), Kotlin-specific but kept in the shared model since the
/// field is simply empty/unused for Java and TypeScript classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryConstructor {
    pub parameters: Vec<super::function::ParsedParameter>,
    /// `"this"` or `"super"`, if the constructor delegates.
    pub delegates_to: Option<String>,
    pub calls: Vec<super::function::ParsedCall>,
    pub location: SourceLocation,
}

/// Represents any class-like declaration: `class`, `interface`, `object`
/// (singleton), `enum`, `annotation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedClass {
    pub name: String,
    pub kind: ClassKind,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_data: bool,
    pub is_sealed: bool,
    pub super_class: Option<String>,
    /// Duplicates here are an extractor invariant violation, never silently
    /// deduplicated — the symbol-table builder treats a duplicate as a
    /// hierarchy construction skip, logging `ExtractorInvariantViolation`.
    pub interfaces: Vec<String>,
    pub type_parameters: Vec<String>,
    pub annotations: Vec<String>,
    pub properties: Vec<ParsedProperty>,
    pub functions: Vec<ParsedFunction>,
    pub nested_classes: Vec<ParsedClass>,
    pub companion_object: Option<Box<ParsedClass>>,
    pub secondary_constructors: Vec<SecondaryConstructor>,
    /// Enum constant names, in declaration order, for `kind == Enum`.
    pub enum_constants: Vec<String>,
    pub location: SourceLocation,
}

impl ParsedClass {
    /// Depth-first walk over this class and every nested class (not the
    /// companion object, which has its own dedicated slot).
    pub fn walk_nested<'a>(&'a self) -> Box<dyn Iterator<Item = &'a ParsedClass> + 'a> {
        Box::new(
            std::iter::once(self).chain(
                self.nested_classes
                    .iter()
                    .flat_map(|c| c.walk_nested()),
            ),
        )
    }

    pub fn has_duplicate_interfaces(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.interfaces.iter().any(|i| !seen.insert(i))
    }
}
