//! The extractor capability the orchestrator depends on. Each language
//! crate provides exactly one implementation; internally it may further
//! split itself into smaller capability traits (`ExtractClass`,
//! `ExtractClassBody`, `ExtractCompanion` — "Mutually recursive
//! extractor callbacks") fulfilled by a single struct constructed once per
//! language and reused across files, but that split is private to each
//! language crate — the orchestrator only ever sees `LanguageExtractor`.

use crate::error::CoreError;
use crate::model::{Language, ParsedFile};
use std::path::Path;

/// A pure function `(source, path) -> ParsedFile`. Holds no
/// per-file mutable state; extractors are constructed once and shared
/// across the whole corpus, which is safe under the orchestrator's
/// parallel extraction fan-out.
pub trait LanguageExtractor: Send + Sync {
    fn language(&self) -> Language;
    fn extensions(&self) -> &'static [&'static str];
    fn extract_file(&self, source: &str, path: &Path) -> Result<ParsedFile, CoreError>;
}
