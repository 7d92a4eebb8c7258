//! Java extractor: one `LanguageExtractor` implementation over
//! `tree-sitter-java`, producing the shared `ParsedFile` model.

mod calls;
mod classes;
mod extractor;
mod modifiers;
mod types;

pub use extractor::JavaExtractor;
