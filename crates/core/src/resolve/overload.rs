//! Overload resolution and the type compatibility
//! lattice.

use crate::model::{FunctionSymbolDetail, Language};

/// `normalize(T)` strips generic parameters (`List<String>` -> `List`) and
/// nullability markers (`String?` -> `String`), trims whitespace.
pub fn normalize(type_text: &str) -> String {
    let trimmed = type_text.trim();
    let without_generics = trimmed.split('<').next().unwrap_or(trimmed);
    without_generics.trim_end_matches('?').trim().to_string()
}

const NUMERIC_LADDER_KOTLIN: &[&str] = &["Byte", "Short", "Int", "Long", "Float", "Double", "Number"];

/// Is `from` compatible with `to` under the per-language widening lattice?
/// Identity is always compatible; this covers the remaining rules.
pub fn is_compatible(from: &str, to: &str, language: Language) -> bool {
    let from = normalize(from);
    let to = normalize(to);
    if from == to {
        return true;
    }

    match language {
        Language::Kotlin => {
            if from == "Nothing" || to == "Any" {
                return true;
            }
            if let (Some(fi), Some(ti)) = (
                NUMERIC_LADDER_KOTLIN.iter().position(|t| *t == from),
                NUMERIC_LADDER_KOTLIN.iter().position(|t| *t == to),
            ) {
                return fi <= ti;
            }
            if from == "String" && to == "CharSequence" {
                return true;
            }
            if (from == "Collection" && (to == "Iterable" || to == "Any"))
                || (from == "Iterable" && to == "Any")
            {
                return true;
            }
            false
        }
        Language::TypeScript | Language::JavaScript => {
            if from == "any" || to == "any" {
                return true;
            }
            if to == "unknown" {
                return true;
            }
            if from == "never" {
                return true;
            }
            if (from == "void" && to == "undefined") || (from == "undefined" && to == "void") {
                return true;
            }
            if from == "null" && (to == "any" || to == "unknown") {
                return true;
            }
            false
        }
        Language::Java => {
            const NUMERIC_LADDER_JAVA: &[&str] =
                &["byte", "short", "int", "long", "float", "double"];
            if let (Some(fi), Some(ti)) = (
                NUMERIC_LADDER_JAVA.iter().position(|t| *t == from),
                NUMERIC_LADDER_JAVA.iter().position(|t| *t == to),
            ) {
                return fi <= ti;
            }
            if to == "Object" {
                return true;
            }
            false
        }
    }
}

/// One function-symbol candidate for overload scoring.
pub struct Candidate<'a> {
    pub fqn: &'a str,
    pub declared_order: usize,
    pub detail: &'a FunctionSymbolDetail,
    pub required_parameter_count: usize,
}

/// Score a candidate. Returns `None` for a rejected
/// candidate (strictly more required parameters than supplied).
pub fn score_candidate(
    candidate: &Candidate,
    argument_count: usize,
    argument_types: &[Option<String>],
    language: Language,
) -> Option<i32> {
    if candidate.required_parameter_count > argument_count {
        return None;
    }

    let mut score = 0;
    let declared_count = candidate.detail.parameter_types.len();
    if declared_count == argument_count {
        score += 100;
    } else if declared_count > argument_count {
        score += 50;
    }

    for (i, arg_type) in argument_types.iter().enumerate() {
        let Some(arg_type) = arg_type else { continue };
        let Some(Some(param_type)) = candidate.detail.parameter_types.get(i) else {
            continue;
        };
        if normalize(arg_type) == normalize(param_type) {
            score += 50;
        } else if is_compatible(arg_type, param_type, language) {
            score += 25;
        } else {
            score -= 10;
        }
    }

    Some(score)
}

/// Picks the highest-scoring candidate; ties broken by declaration order
/// (first-seen wins).
pub fn pick_best<'a>(candidates: &[(Candidate<'a>, i32)]) -> Option<&'a str> {
    candidates
        .iter()
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then(b.0.declared_order.cmp(&a.0.declared_order))
        })
        .map(|(c, _)| c.fqn)
}
