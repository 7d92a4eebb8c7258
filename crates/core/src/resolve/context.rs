use crate::model::{Language, ParsedFile, ParsedFunction};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Per-file view combining the current file's package, imports
/// (explicit + wildcard), local variable scope, and the surrounding
/// class/function. Constructed anew for each resolution pass.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    pub current_file: std::path::PathBuf,
    pub language: Option<Language>,
    /// Local name -> FQN, explicit imports plus aliased imports.
    pub imports: HashMap<String, String>,
    /// Package paths, in declaration order — first match wins.
    pub wildcard_imports: Vec<String>,
    /// Scoped name -> inferred type text.
    pub local_variables: IndexMap<String, String>,
    pub current_class_fqn: Option<String>,
    pub current_function: Option<String>,
}

impl ResolutionContext {
    /// Build the per-file import maps; local/current-class/function scope is
    /// layered in by the resolver as it descends into each function.
    pub fn for_file(file: &ParsedFile) -> Self {
        let mut imports = HashMap::new();
        let mut wildcard_imports = Vec::new();

        for import in &file.imports {
            if import.is_wildcard {
                wildcard_imports.push(import.resolved_path().to_string());
                continue;
            }
            let local = import
                .alias
                .clone()
                .unwrap_or_else(|| {
                    import
                        .resolved_path()
                        .rsplit(['.', '/'])
                        .next()
                        .unwrap_or(import.resolved_path())
                        .to_string()
                });
            imports.insert(local, import.resolved_path().to_string());
        }

        Self {
            current_file: file.file_path.clone(),
            language: Some(file.language),
            imports,
            wildcard_imports,
            local_variables: IndexMap::new(),
            current_class_fqn: None,
            current_function: None,
        }
    }

    pub fn enter_class(&mut self, class_fqn: &str) {
        self.current_class_fqn = Some(class_fqn.to_string());
    }

    pub fn enter_function(&mut self, function: &ParsedFunction, declaring_type_fqn: Option<&str>) {
        self.current_function = Some(function.name.clone());
        self.local_variables.clear();
        for param in &function.parameters {
            if let Some(ty) = &param.type_text {
                self.local_variables.insert(param.name.clone(), ty.clone());
            }
        }
        if let Some(receiver) = &function.receiver_type {
            self.local_variables
                .insert("this".to_string(), receiver.clone());
        } else if let Some(fqn) = declaring_type_fqn {
            self.local_variables
                .insert("this".to_string(), fqn.to_string());
        }
    }
}

/// Finds the (dotted-path) "leading simple name" of a receiver expression,
/// e.g. `"a.b.c"` -> `"a"`.
pub fn leading_simple_name(receiver: &str) -> &str {
    receiver.split('.').next().unwrap_or(receiver)
}
