pub mod class;
pub mod file;
pub mod function;
pub mod location;
pub mod property;
pub mod symbol;
pub mod visibility;

pub use class::{ClassKind, ParsedClass, SecondaryConstructor};
pub use file::{Language, ParsedFile, ParsedImport, ParsedReexport};
pub use function::{ParsedCall, ParsedFunction, ParsedParameter};
pub use location::SourceLocation;
pub use property::{
    ConditionalType, MappedType, MappedTypeModifier, MappedTypeModifierKind,
    ParsedDestructuring, ParsedObjectExpression, ParsedProperty, ParsedTypeAlias,
};
pub use symbol::{FunctionSymbolDetail, Symbol, SymbolKind};
pub use visibility::Visibility;

/// A [`ParsedFile`] augmented with resolved call edges.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    pub parsed: ParsedFile,
    pub resolved_calls: Vec<ResolvedCall>,
}

#[derive(Debug, Clone)]
pub struct ResolvedCall {
    pub from_fqn: String,
    pub to_fqn: String,
    pub location: SourceLocation,
}
