use super::location::SourceLocation;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Class,
    Interface,
    Object,
    Enum,
    Annotation,
    Function,
    Property,
    TypeAlias,
}

/// A resolved, first-class referent. `fqn` is the identity key: unique per
/// symbol, looked up through [`crate::symtab::SymbolTable`] and never held
/// by direct reference elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub fqn: String,
    pub kind: SymbolKind,
    pub file_path: PathBuf,
    pub location: SourceLocation,
    pub package_name: Option<String>,
    pub function_detail: Option<FunctionSymbolDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSymbolDetail {
    pub parameter_types: Vec<Option<String>>,
    /// Parameters without a default value; a call supplying fewer arguments
    /// than this rejects the candidate outright.
    pub required_parameter_count: usize,
    pub is_extension: bool,
    /// The FQN of the type this function is declared on, if any (methods,
    /// extension functions); `None` for top-level/package functions.
    pub declaring_type_fqn: Option<String>,
}

impl Symbol {
    pub fn is_constructible(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Class | SymbolKind::Enum | SymbolKind::Annotation
        )
    }

    pub fn is_type(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Class | SymbolKind::Interface | SymbolKind::Object | SymbolKind::Enum
        )
    }
}
