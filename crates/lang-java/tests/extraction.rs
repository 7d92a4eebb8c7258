use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::{ClassKind, Visibility};
use codegraph_lang_java::JavaExtractor;
use std::path::Path;

fn extract(source: &str) -> codegraph_core::model::ParsedFile {
    JavaExtractor::new()
        .extract_file(source, Path::new("Sample.java"))
        .expect("extraction should succeed")
}

#[test]
fn extracts_package_and_class() {
    let file = extract(
        r#"
        package com.example.orders;

        public class OrderService {
            public void placeOrder(String sku) {
                System.out.println(sku);
            }
        }
        "#,
    );

    assert_eq!(file.package_name.as_deref(), Some("com.example.orders"));
    assert_eq!(file.classes.len(), 1);
    let class = &file.classes[0];
    assert_eq!(class.name, "OrderService");
    assert_eq!(class.kind, ClassKind::Class);
    assert_eq!(class.visibility, Visibility::Public);
    assert_eq!(class.functions.len(), 1);
    assert_eq!(class.functions[0].name, "placeOrder");
}

#[test]
fn encodes_static_imports_with_prefix() {
    let file = extract(
        r#"
        package com.example;

        import static java.util.Collections.emptyList;
        import java.util.*;

        class C {}
        "#,
    );

    assert_eq!(file.imports.len(), 2);
    assert!(file.imports[0].is_static());
    assert_eq!(file.imports[0].path, "static:java.util.Collections.emptyList");
    assert!(!file.imports[0].is_wildcard);

    assert!(!file.imports[1].is_static());
    assert!(file.imports[1].is_wildcard);
    assert_eq!(file.imports[1].resolved_path(), "java.util");
}

#[test]
fn default_visibility_is_package_private() {
    let file = extract("class Bare { void hidden() {} }");
    assert_eq!(file.classes[0].visibility, Visibility::Internal);
}

#[test]
fn captures_overloaded_methods_and_required_parameter_counts() {
    let file = extract(
        r#"
        class Calculator {
            int add(int a, int b) { return a + b; }
            int add(int a, int b, int c) { return a + b + c; }
        }
        "#,
    );

    let adds: Vec<_> = file.classes[0]
        .functions
        .iter()
        .filter(|f| f.name == "add")
        .collect();
    assert_eq!(adds.len(), 2);
    assert_eq!(adds[0].required_parameter_count(), 2);
    assert_eq!(adds[1].required_parameter_count(), 3);
}

#[test]
fn extracts_calls_from_method_bodies() {
    let file = extract(
        r#"
        class Greeter {
            void greet() {
                String name = "world";
                System.out.println(name);
                new StringBuilder("hi");
            }
        }
        "#,
    );

    let calls = &file.classes[0].functions[0].calls;
    assert!(calls.iter().any(|c| c.name == "println"));
    assert!(calls.iter().any(|c| c.name == "StringBuilder"));
}

#[test]
fn extracts_nested_classes_and_interfaces() {
    let file = extract(
        r#"
        public class Outer implements Runnable, Comparable<Outer> {
            static class Inner {}
        }
        "#,
    );

    let outer = &file.classes[0];
    assert_eq!(outer.interfaces, vec!["Runnable", "Comparable<Outer>"]);
    assert_eq!(outer.nested_classes.len(), 1);
    assert_eq!(outer.nested_classes[0].name, "Inner");
}
