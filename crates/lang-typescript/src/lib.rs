//! TypeScript/JavaScript extractors: `TypeScriptExtractor` (`.ts`/`.tsx`,
//! selecting the TSX grammar variant per extension) and `JavaScriptExtractor`
//! (`.js`/`.jsx`), sharing one extraction pipeline since the supported
//! constructs are identical across both front ends.

mod calls;
mod classes;
mod extractor;
mod imports;
mod modifiers;
mod types;

pub use extractor::{JavaScriptExtractor, TypeScriptExtractor};
