use super::location::SourceLocation;
use super::visibility::Visibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedParameter {
    pub name: String,
    pub type_text: Option<String>,
    pub has_default: bool,
}

/// A raw, pre-resolution call site extracted from a function body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCall {
    /// The callee's unqualified name.
    pub name: String,
    /// The dotted expression preceding the call, if any (e.g. `a.b` in `a.b.c()`).
    pub receiver: Option<String>,
    pub argument_count: usize,
    /// Best-effort inferred argument types; `None` per-slot when unknown.
    pub argument_types: Vec<Option<String>>,
    /// `true` for Kotlin safe-navigation calls (`a?.b()`).
    pub is_safe_call: bool,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFunction {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<ParsedParameter>,
    pub return_type: Option<String>,
    pub is_abstract: bool,
    /// Kotlin `suspend` / any async-surface equivalent.
    pub is_suspend_or_async: bool,
    pub is_extension: bool,
    pub is_inline: bool,
    pub is_infix: bool,
    pub is_operator: bool,
    /// TypeScript interface/abstract method signature with no body.
    pub is_overload_signature: bool,
    pub receiver_type: Option<String>,
    pub type_parameters: Vec<String>,
    pub annotations: Vec<String>,
    pub location: SourceLocation,
    pub calls: Vec<ParsedCall>,
}

impl ParsedFunction {
    pub fn parameter_types(&self) -> Vec<Option<String>> {
        self.parameters.iter().map(|p| p.type_text.clone()).collect()
    }

    pub fn required_parameter_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.has_default).count()
    }
}
