use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `(filePath, startLine, startColumn, endLine, endColumn)`, 1-origin, as
/// required everywhere except the CST adapter boundary (see `cst::CstNode::range`,
/// which documents its own 1-origin conversion from tree-sitter's 0-origin points).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file_path: PathBuf,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceLocation {
    pub fn unknown(file_path: PathBuf) -> Self {
        Self {
            file_path,
            start_line: 0,
            start_column: 0,
            end_line: 0,
            end_column: 0,
        }
    }
}
