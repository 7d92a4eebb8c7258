use super::class::ParsedClass;
use super::function::ParsedFunction;
use super::property::{
    ParsedDestructuring, ParsedObjectExpression, ParsedProperty, ParsedTypeAlias,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kotlin,
    Java,
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "kt" | "kts" => Some(Language::Kotlin),
            "java" => Some(Language::Java),
            "ts" | "tsx" => Some(Language::TypeScript),
            "js" | "jsx" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// `.` for Kotlin/Java; `/` for TypeScript/JavaScript paths.
    pub fn package_separator(&self) -> char {
        match self {
            Language::Kotlin | Language::Java => '.',
            Language::TypeScript | Language::JavaScript => '/',
        }
    }
}

/// A single import line. Java static imports are encoded with a `static:`
/// path prefix; the `is_wildcard` flag is always a separate boolean, even for
/// static imports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedImport {
    pub path: String,
    pub alias: Option<String>,
    pub is_wildcard: bool,
    pub is_type_only: Option<bool>,
    pub is_dynamic: Option<bool>,
    /// `true` when the specifier was a template literal (dynamic imports
    /// only); the path then retains its backticks verbatim.
    pub is_template_literal: Option<bool>,
}

impl ParsedImport {
    pub fn is_static(&self) -> bool {
        self.path.starts_with("static:")
    }

    /// The import path with any `static:` prefix stripped.
    pub fn resolved_path(&self) -> &str {
        self.path.strip_prefix("static:").unwrap_or(&self.path)
    }
}

/// TypeScript `export ... from` re-export, tracked alongside imports but
/// kept as a distinct list since it forwards names rather than binding them
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedReexport {
    pub source_path: String,
    pub original_name: Option<String>,
    pub exported_name: Option<String>,
    pub is_wildcard: bool,
    pub is_namespace: bool,
    pub is_type_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFile {
    pub file_path: PathBuf,
    pub language: Language,
    pub package_name: Option<String>,
    pub imports: Vec<ParsedImport>,
    pub reexports: Vec<ParsedReexport>,
    pub classes: Vec<ParsedClass>,
    pub top_level_functions: Vec<ParsedFunction>,
    pub top_level_properties: Vec<ParsedProperty>,
    pub type_aliases: Vec<ParsedTypeAlias>,
    pub destructuring_declarations: Vec<ParsedDestructuring>,
    pub object_expressions: Vec<ParsedObjectExpression>,
}

impl ParsedFile {
    pub fn empty(file_path: PathBuf, language: Language) -> Self {
        Self {
            file_path,
            language,
            package_name: None,
            imports: Vec::new(),
            reexports: Vec::new(),
            classes: Vec::new(),
            top_level_functions: Vec::new(),
            top_level_properties: Vec::new(),
            type_aliases: Vec::new(),
            destructuring_declarations: Vec::new(),
            object_expressions: Vec::new(),
        }
    }

    /// The package string used for FQN prefixing and domain inference: the
    /// declared package for Kotlin/Java, or the file-relative path with
    /// slash separators for TypeScript/JavaScript.
    pub fn effective_package(&self, project_root: &Path) -> Option<String> {
        match self.language {
            Language::Kotlin | Language::Java => self.package_name.clone(),
            Language::TypeScript | Language::JavaScript => self
                .file_path
                .strip_prefix(project_root)
                .unwrap_or(&self.file_path)
                .parent()
                .map(|p| p.to_string_lossy().replace('\\', "/")),
        }
    }

    pub fn all_classes(&self) -> impl Iterator<Item = &ParsedClass> {
        self.classes.iter().flat_map(|c| c.walk_nested())
    }
}
