//! Call/reference resolver: for each unresolved call in each
//! file, compute the referenced symbol's fully qualified name.

use super::context::{leading_simple_name, ResolutionContext};
use super::overload::{score_candidate, Candidate};
use crate::model::{Language, ParsedCall, ParsedClass, ParsedFile, ResolvedCall, ResolvedFile, SymbolKind};
use crate::symtab::SymbolTable;

const ENUM_SYNTHETIC_METHODS: &[&str] = &["values", "valueOf", "entries"];

fn stdlib_fallback(name: &str, language: Language) -> Option<&'static str> {
    match (language, name) {
        (Language::Kotlin, "String") => Some("kotlin.String"),
        (Language::Kotlin, "Any") => Some("kotlin.Any"),
        (Language::Kotlin, "Unit") => Some("kotlin.Unit"),
        (Language::Java, "String") => Some("java.lang.String"),
        (Language::Java, "Object") => Some("java.lang.Object"),
        (Language::TypeScript | Language::JavaScript, "Object") => Some("lib.Object"),
        (Language::TypeScript | Language::JavaScript, "Array") => Some("lib.Array"),
        _ => None,
    }
}

/// Resolves every call in `file` against `table`, returning a [`ResolvedFile`].
/// Calls that cannot be resolved produce no edge — never an error.
pub fn resolve_file(file: &ParsedFile, table: &SymbolTable) -> ResolvedFile {
    let mut ctx = ResolutionContext::for_file(file);
    let mut resolved_calls = Vec::new();

    for func in &file.top_level_functions {
        ctx.enter_function(func, None);
        resolve_calls_in(func, None, &ctx, table, file, &mut resolved_calls);
    }

    for class in file.all_classes() {
        let class_fqn = find_class_fqn(table, file, &class.name);
        resolve_class_functions(class, class_fqn.as_deref(), &mut ctx, table, file, &mut resolved_calls);
    }

    ResolvedFile {
        parsed: file.clone(),
        resolved_calls,
    }
}

fn resolve_class_functions(
    class: &ParsedClass,
    class_fqn: Option<&str>,
    ctx: &mut ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
    out: &mut Vec<ResolvedCall>,
) {
    if let Some(fqn) = class_fqn {
        ctx.enter_class(fqn);
    }
    for func in &class.functions {
        ctx.enter_function(func, class_fqn);
        resolve_calls_in(func, class_fqn, ctx, table, file, out);
    }
    for ctor in &class.secondary_constructors {
        for call in &ctor.calls {
            if let Some(from) = class_fqn {
                if let Some(to) = resolve_call(call, ctx, table, file, Some(from)) {
                    out.push(ResolvedCall {
                        from_fqn: format!("{from}.<init>"),
                        to_fqn: to,
                        location: call.location.clone(),
                    });
                }
            }
        }
    }
}

fn resolve_calls_in(
    func: &crate::model::ParsedFunction,
    class_fqn: Option<&str>,
    ctx: &ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
    out: &mut Vec<ResolvedCall>,
) {
    let from_fqn = match class_fqn {
        Some(prefix) => format!("{prefix}.{}", func.name),
        None => join_top_level(file, &func.name),
    };
    for call in &func.calls {
        if let Some(to_fqn) = resolve_call(call, ctx, table, file, class_fqn) {
            out.push(ResolvedCall {
                from_fqn: from_fqn.clone(),
                to_fqn,
                location: call.location.clone(),
            });
        }
    }
}

fn join_top_level(file: &ParsedFile, name: &str) -> String {
    match &file.package_name {
        Some(pkg) if !pkg.is_empty() => format!("{pkg}.{name}"),
        _ => name.to_string(),
    }
}

fn find_class_fqn(table: &SymbolTable, file: &ParsedFile, simple_name: &str) -> Option<String> {
    table
        .names(simple_name)
        .iter()
        .find(|fqn| {
            table
                .by_fqn
                .get(*fqn)
                .map(|s| s.file_path == file.file_path && s.is_type())
                .unwrap_or(false)
        })
        .cloned()
}

/// Resolves a single call site.
pub fn resolve_call(
    call: &ParsedCall,
    ctx: &ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
    enclosing_class_fqn: Option<&str>,
) -> Option<String> {
    // Step 1: constructor call detection.
    if call.receiver.is_none() && call.name.chars().next().is_some_and(|c| c.is_uppercase()) {
        if let Some(type_fqn) = resolve_unqualified_type(&call.name, ctx, table, file) {
            if let Some(symbol) = table.get(&type_fqn) {
                if symbol.is_constructible() {
                    return Some(format!("{type_fqn}.<init>"));
                }
                // Interfaces and objects are not constructible.
                if matches!(symbol.kind, SymbolKind::Interface | SymbolKind::Object) {
                    return None;
                }
            }
        }
    }

    if let Some(receiver) = &call.receiver {
        return resolve_qualified_call(call, receiver, ctx, table, file);
    }

    resolve_unqualified_call(call, ctx, table, file, enclosing_class_fqn)
}

fn resolve_qualified_call(
    call: &ParsedCall,
    receiver: &str,
    ctx: &ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
) -> Option<String> {
    // Step 3a: direct FQN match.
    let direct = format!("{receiver}.{}", call.name);
    if table.by_fqn.contains_key(&direct) {
        return Some(direct);
    }

    // Step 4 (via leading-name resolution reused for receivers): resolve the
    // receiver's leading simple name to a type or object symbol. A local
    // variable's declared type is recorded as raw source text (e.g. `Child`),
    // not yet an FQN, so it goes through the same unqualified-type resolution
    // as a bare type name unless it's already a known FQN (as "this" is,
    // seeded with `declaring_type_fqn` in `ResolutionContext::enter_function`).
    let leading = leading_simple_name(receiver);
    let declared_type = ctx.local_variables.get(leading).cloned();
    let receiver_fqn = declared_type
        .as_ref()
        .and_then(|t| {
            let simple = normalize_receiver_type(t);
            if table.by_fqn.contains_key(&simple) {
                Some(simple)
            } else {
                resolve_unqualified_type(&simple, ctx, table, file)
            }
        })
        .or_else(|| resolve_unqualified_type(leading, ctx, table, file));

    if let Some(receiver_fqn) = receiver_fqn {
        // Step 2: enum static methods resolve without further lookup.
        if let Some(symbol) = table.get(&receiver_fqn) {
            if matches!(symbol.kind, SymbolKind::Enum) && ENUM_SYNTHETIC_METHODS.contains(&call.name.as_str()) {
                return Some(format!("{receiver_fqn}.{}", call.name));
            }
        }

        // Step 3b: look up methods on that type by name, with overload scoring.
        if let Some(resolved) = resolve_method_on_type(&receiver_fqn, call, table, file.language) {
            return Some(resolved);
        }

        // Step 3b cont'd: not declared directly on the receiver's type, walk
        // its ancestors (closer ancestors first, scenario 6).
        if let Some(found) = table.find_in_hierarchy(&receiver_fqn, |ancestor_fqn| {
            resolve_method_on_type(ancestor_fqn, call, table, file.language).is_some()
        }) {
            if let Some(resolved) = resolve_method_on_type(&found, call, table, file.language) {
                return Some(resolved);
            }
        }

        // Step 3c: companion object methods.
        if let Some(companion_fqn) = companion_of(table, &receiver_fqn) {
            if let Some(resolved) = resolve_method_on_type(&companion_fqn, call, table, file.language) {
                return Some(resolved);
            }
        }
    }

    // Step 3d: walk nested package/object qualifiers left-to-right.
    let segments: Vec<&str> = receiver.split('.').collect();
    for i in (0..segments.len()).rev() {
        let prefix = segments[..=i].join(".");
        let candidate = format!("{prefix}.{}", call.name);
        if table.by_fqn.contains_key(&candidate) {
            return Some(candidate);
        }
    }

    None
}

fn normalize_receiver_type(raw: &str) -> String {
    super::overload::normalize(raw)
}

fn resolve_unqualified_call(
    call: &ParsedCall,
    ctx: &ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
    enclosing_class_fqn: Option<&str>,
) -> Option<String> {
    // Step 4a: explicit imports.
    if let Some(fqn) = ctx.imports.get(&call.name) {
        if table.by_fqn.contains_key(fqn) {
            return Some(fqn.clone());
        }
    }

    // Step 4b: current class and its hierarchy.
    if let Some(class_fqn) = enclosing_class_fqn {
        if let Some(resolved) = resolve_method_on_type(class_fqn, call, table, file.language) {
            return Some(resolved);
        }
        if let Some(found) = table.find_in_hierarchy(class_fqn, |ancestor_fqn| {
            resolve_method_on_type(ancestor_fqn, call, table, file.language).is_some()
        }) {
            if let Some(resolved) = resolve_method_on_type(&found, call, table, file.language) {
                return Some(resolved);
            }
        }
    }

    // Step 4c: same-package top-level function.
    let package_candidate = join_top_level(file, &call.name);
    if table.by_fqn.contains_key(&package_candidate) {
        return Some(package_candidate);
    }

    // Step 4d: wildcard imports, tried in declaration order.
    for wildcard in &ctx.wildcard_imports {
        let candidate = format!("{wildcard}.{}", call.name);
        if table.by_fqn.contains_key(&candidate) {
            return Some(candidate);
        }
    }

    // Step 4e: unique simple-name match.
    let names = table.names(&call.name);
    if names.len() == 1 {
        return Some(names[0].clone());
    }
    if names.len() > 1 {
        if let Some(resolved) = pick_overload(&call.name, call, table, file.language) {
            return Some(resolved);
        }
    }

    // Step 4f: stdlib fallback.
    stdlib_fallback(&call.name, file.language).map(|s| s.to_string())
}

/// Resolves `type_name` (an unqualified identifier) to a type FQN using the
/// same precedence as unqualified-call resolution steps 4a/4c/4d/4e, but
/// without the stdlib fallback (used for constructor/receiver typing, not calls).
fn resolve_unqualified_type(
    type_name: &str,
    ctx: &ResolutionContext,
    table: &SymbolTable,
    file: &ParsedFile,
) -> Option<String> {
    if let Some(fqn) = ctx.imports.get(type_name) {
        if table.by_fqn.contains_key(fqn) {
            return Some(fqn.clone());
        }
    }
    let package_candidate = join_top_level(file, type_name);
    if table.by_fqn.contains_key(&package_candidate) {
        return Some(package_candidate);
    }
    for wildcard in &ctx.wildcard_imports {
        let candidate = format!("{wildcard}.{type_name}");
        if table.by_fqn.contains_key(&candidate) {
            return Some(candidate);
        }
    }
    let names = table.names(type_name);
    if names.len() == 1 {
        return Some(names[0].clone());
    }
    None
}

/// Looks up a method named `call.name` directly declared on `type_fqn`
/// (not walking the hierarchy — callers that need ancestor search call
/// [`SymbolTable::find_in_hierarchy`] themselves), applying overload scoring
/// when more than one candidate shares the name.
fn resolve_method_on_type(
    type_fqn: &str,
    call: &ParsedCall,
    table: &SymbolTable,
    language: Language,
) -> Option<String> {
    let candidates: Vec<&String> = table
        .functions_named(&call.name)
        .iter()
        .filter(|fqn| {
            table
                .get(fqn)
                .and_then(|s| s.function_detail.as_ref())
                .and_then(|d| d.declaring_type_fqn.as_deref())
                == Some(type_fqn)
        })
        .collect();

    match candidates.len() {
        0 => None,
        1 => Some(candidates[0].clone()),
        _ => score_and_pick(&candidates, call, table, language),
    }
}

fn pick_overload(
    name: &str,
    call: &ParsedCall,
    table: &SymbolTable,
    language: Language,
) -> Option<String> {
    let candidates: Vec<&String> = table.functions_named(name).iter().collect();
    if candidates.len() < 2 {
        return None;
    }
    score_and_pick(&candidates, call, table, language)
}

fn score_and_pick(
    candidate_fqns: &[&String],
    call: &ParsedCall,
    table: &SymbolTable,
    language: Language,
) -> Option<String> {
    let mut scored: Vec<(Candidate, i32)> = Vec::new();
    for (order, fqn) in candidate_fqns.iter().enumerate() {
        let Some(symbol) = table.get(fqn) else { continue };
        let Some(detail) = &symbol.function_detail else { continue };
        let candidate = Candidate {
            fqn,
            declared_order: order,
            detail,
            required_parameter_count: detail.required_parameter_count,
        };
        if let Some(score) = score_candidate(&candidate, call.argument_count, &call.argument_types, language) {
            scored.push((candidate, score));
        }
    }
    super::overload::pick_best(&scored).map(|s| s.to_string())
}

fn companion_of(table: &SymbolTable, class_fqn: &str) -> Option<String> {
    let companion_fqn = format!("{class_fqn}.Companion");
    table
        .by_fqn
        .get(&companion_fqn)
        .map(|_| companion_fqn)
}
