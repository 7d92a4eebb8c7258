use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::{ClassKind, Visibility};
use codegraph_lang_kotlin::KotlinExtractor;
use std::path::Path;

fn extract(source: &str) -> codegraph_core::model::ParsedFile {
    KotlinExtractor::new()
        .extract_file(source, Path::new("Sample.kt"))
        .expect("extraction should succeed")
}

#[test]
fn extracts_package_and_class() {
    let file = extract(
        r#"
        package com.example.orders

        class OrderService {
            fun placeOrder(sku: String) {
                println(sku)
            }
        }
        "#,
    );

    assert_eq!(file.package_name.as_deref(), Some("com.example.orders"));
    assert_eq!(file.classes.len(), 1);
    let class = &file.classes[0];
    assert_eq!(class.name, "OrderService");
    assert_eq!(class.kind, ClassKind::Class);
    assert_eq!(class.functions.len(), 1);
    assert_eq!(class.functions[0].name, "placeOrder");
}

#[test]
fn default_visibility_is_public() {
    let file = extract("class Bare { fun hidden() {} }");
    assert_eq!(file.classes[0].visibility, Visibility::Public);
}

#[test]
fn primary_constructor_val_params_become_properties() {
    let file = extract(
        r#"
        class Point(val x: Int, val y: Int, name: String) {
        }
        "#,
    );

    let class = &file.classes[0];
    assert_eq!(class.properties.len(), 2);
    assert_eq!(class.properties[0].name, "x");
    assert!(class.properties[0].is_val);
    assert_eq!(class.properties[1].name, "y");
}

#[test]
fn extracts_superclass_and_interfaces() {
    let file = extract(
        r#"
        open class Base
        interface Tappable
        class Widget : Base(), Tappable {
        }
        "#,
    );

    let widget = file.classes.iter().find(|c| c.name == "Widget").unwrap();
    assert_eq!(widget.super_class.as_deref(), Some("Base"));
    assert_eq!(widget.interfaces, vec!["Tappable".to_string()]);
}

#[test]
fn extracts_secondary_constructor_with_delegation() {
    let file = extract(
        r#"
        class Widget(val name: String) {
            constructor() : this("default") {
            }
        }
        "#,
    );

    let class = &file.classes[0];
    assert_eq!(class.secondary_constructors.len(), 1);
    assert_eq!(class.secondary_constructors[0].delegates_to.as_deref(), Some("this"));
}

#[test]
fn extracts_companion_object() {
    let file = extract(
        r#"
        class Factory {
            companion object {
                fun create(): Factory = Factory()
            }
        }
        "#,
    );

    let class = &file.classes[0];
    let companion = class.companion_object.as_ref().expect("companion object");
    assert_eq!(companion.functions.len(), 1);
    assert_eq!(companion.functions[0].name, "create");
}

#[test]
fn extracts_enum_constants() {
    let file = extract(
        r#"
        enum class Direction {
            NORTH, SOUTH, EAST, WEST
        }
        "#,
    );

    let class = &file.classes[0];
    assert_eq!(class.kind, ClassKind::Enum);
    assert_eq!(class.enum_constants, vec!["NORTH", "SOUTH", "EAST", "WEST"]);
}

#[test]
fn extracts_data_class_modifier() {
    let file = extract("data class User(val id: Int, val name: String)");
    assert!(file.classes[0].is_data);
}

#[test]
fn extracts_calls_including_safe_navigation() {
    let file = extract(
        r#"
        class Greeter {
            fun greet(user: User?) {
                println("hi")
                user?.notify()
                Widget()
            }
        }
        "#,
    );

    let calls = &file.classes[0].functions[0].calls;
    assert!(calls.iter().any(|c| c.name == "println"));
    assert!(calls.iter().any(|c| c.name == "Widget"));
    let notify = calls.iter().find(|c| c.name == "notify").expect("notify call");
    assert!(notify.is_safe_call);
    assert_eq!(notify.receiver.as_deref(), Some("user"));
}

#[test]
fn extracts_wildcard_and_aliased_imports() {
    let file = extract(
        r#"
        package com.example

        import com.example.util.*
        import com.example.model.User as Account

        class C
        "#,
    );

    assert_eq!(file.imports.len(), 2);
    assert!(file.imports[0].is_wildcard);
    assert_eq!(file.imports[1].alias.as_deref(), Some("Account"));
}

#[test]
fn extracts_destructuring_declaration() {
    let file = extract(
        r#"
        fun main() {
            val (a, b) = Pair(1, 2)
        }
        "#,
    );

    assert_eq!(file.destructuring_declarations.len(), 1);
    assert_eq!(
        file.destructuring_declarations[0].component_names,
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn extracts_type_alias() {
    let file = extract("typealias Callback = (Int) -> Unit");
    assert_eq!(file.type_aliases.len(), 1);
    assert_eq!(file.type_aliases[0].name, "Callback");
}
