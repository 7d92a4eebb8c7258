//! Six concrete end-to-end scenarios, run through the real extractors and
//! the core symbol table / resolver / domain inference, not hand-built
//! fixtures.

use codegraph_core::domain;
use codegraph_core::extract::LanguageExtractor;
use codegraph_core::resolve::resolve_file;
use codegraph_core::symtab::SymbolTableBuilder;
use codegraph_lang_java::JavaExtractor;
use codegraph_lang_kotlin::KotlinExtractor;
use codegraph_lang_typescript::TypeScriptExtractor;
use std::path::Path;
use tempfile::TempDir;

fn write_and_extract_kotlin(dir: &TempDir, rel_path: &str, source: &str) -> codegraph_core::model::ParsedFile {
    let path = dir.path().join(rel_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, source).unwrap();
    KotlinExtractor::new().extract_file(source, &path).unwrap()
}

/// Scenario 1: Kotlin package inference — domains `{Order, Payment, User}`
/// with `Order -> Payment` and `Order -> User`, each weight 1.
#[test]
fn kotlin_package_inference_and_domain_dependencies() {
    let dir = TempDir::new().unwrap();

    let order = write_and_extract_kotlin(
        &dir,
        "order.kt",
        r#"
        package com.example.order.service

        object OrderService {
            fun create() {
                PaymentService.charge()
                UserService.get()
            }
        }
        "#,
    );
    let payment = write_and_extract_kotlin(
        &dir,
        "payment.kt",
        r#"
        package com.example.payment.service

        object PaymentService {
            fun charge() {}
        }
        "#,
    );
    let user = write_and_extract_kotlin(
        &dir,
        "user.kt",
        r#"
        package com.example.user.service

        object UserService {
            fun get() {}
        }
        "#,
    );

    let files = vec![order, payment, user];
    let table = SymbolTableBuilder::build(&files);
    let resolved: Vec<_> = files.iter().map(|f| resolve_file(f, &table)).collect();

    let domains = domain::infer_domains(&files, true, None);
    let mut names: Vec<&str> = domains.iter().map(|d| d.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Order", "Payment", "User"]);

    let dependencies = domain::compute_dependencies(&resolved, &table, &domains);
    let order_payment = dependencies
        .iter()
        .find(|d| d.from == "Order" && d.to == "Payment")
        .expect("Order -> Payment dependency");
    assert_eq!(order_payment.weight, 1);
    let order_user = dependencies
        .iter()
        .find(|d| d.from == "Order" && d.to == "User")
        .expect("Order -> User dependency");
    assert_eq!(order_user.weight, 1);
}

/// Scenario 2: Kotlin overload selection — `Util.parse(42)` picks the `Int`
/// overload over the `String` one.
#[test]
fn kotlin_overload_selection_picks_int_over_string() {
    let dir = TempDir::new().unwrap();
    let caller = write_and_extract_kotlin(
        &dir,
        "util.kt",
        r#"
        package com.x

        object Util {
            fun parse(n: Int) {}
            fun parse(s: String) {}
        }

        fun callSite() {
            Util.parse(42)
        }
        "#,
    );

    let files = vec![caller];
    let table = SymbolTableBuilder::build(&files);
    let resolved = resolve_file(&files[0], &table);

    let call = resolved
        .resolved_calls
        .iter()
        .find(|c| c.to_fqn.starts_with("com.x.Util.parse"))
        .expect("parse call resolved");
    assert_eq!(call.to_fqn, "com.x.Util.parse");
    let symbol = table.get(&call.to_fqn).expect("resolved symbol present");
    let detail = symbol.function_detail.as_ref().expect("function detail");
    assert_eq!(detail.parameter_types, vec![Some("Int".to_string())]);
}

/// Scenario 3: Java static import — `import static java.lang.Math.PI;`
/// is recorded as `{ path: "static:java.lang.Math.PI", is_wildcard: false }`.
#[test]
fn java_static_import_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Sample.java");
    let source = r#"
        import static java.lang.Math.PI;

        class Sample {
            double area(double r) {
                return PI * r * r;
            }
        }
    "#;
    std::fs::write(&path, source).unwrap();
    let file = JavaExtractor::new().extract_file(source, &path).unwrap();

    let import = file
        .imports
        .iter()
        .find(|i| i.is_static())
        .expect("static import recorded");
    assert_eq!(import.path, "static:java.lang.Math.PI");
    assert!(!import.is_wildcard);
}

/// Scenario 4: TypeScript re-export —
/// `export { default as Component } from './c';`.
#[test]
fn typescript_reexport_default_alias() {
    let source = "export { default as Component } from './c';";
    let file = TypeScriptExtractor::new()
        .extract_file(source, Path::new("index.ts"))
        .unwrap();

    assert_eq!(file.reexports.len(), 1);
    let reexport = &file.reexports[0];
    assert_eq!(reexport.original_name.as_deref(), Some("default"));
    assert_eq!(reexport.exported_name.as_deref(), Some("Component"));
    assert_eq!(reexport.source_path, "./c");
    assert!(!reexport.is_type_only);
}

/// Scenario 5: TypeScript mapped type —
/// `type R<T> = { -readonly [K in keyof T]?: T[K] };`.
#[test]
fn typescript_mapped_type_extraction() {
    let source = "type R<T> = { -readonly [K in keyof T]?: T[K] };";
    let file = TypeScriptExtractor::new()
        .extract_file(source, Path::new("types.ts"))
        .unwrap();

    let alias = &file.type_aliases[0];
    let mapped = alias.mapped_type.as_ref().expect("mapped type present");
    assert_eq!(mapped.key_name, "K");
    assert_eq!(mapped.constraint, "T");
    assert!(mapped.has_keyof);
    assert_eq!(mapped.value_type, "T[K]");
    assert_eq!(mapped.modifiers.len(), 2);
}

/// Scenario 6: call resolution across hierarchy — `child.legacy()` resolves
/// to `Parent.legacy` (closer ancestor), never `Grandparent.legacy`.
#[test]
fn call_resolution_prefers_closer_ancestor() {
    let dir = TempDir::new().unwrap();
    let file = write_and_extract_kotlin(
        &dir,
        "hierarchy.kt",
        r#"
        package com.x

        open class Grandparent {
            open fun legacy() {}
        }

        open class Parent : Grandparent() {
            override fun legacy() {}
        }

        class Child : Parent() {
            fun run(child: Child) {
                child.legacy()
            }
        }
        "#,
    );

    let files = vec![file];
    let table = SymbolTableBuilder::build(&files);
    let resolved = resolve_file(&files[0], &table);

    let call = resolved
        .resolved_calls
        .iter()
        .find(|c| c.to_fqn.ends_with(".legacy"))
        .expect("legacy call resolved");
    assert_eq!(call.to_fqn, "com.x.Parent.legacy");
}
