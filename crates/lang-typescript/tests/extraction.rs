use codegraph_core::extract::LanguageExtractor;
use codegraph_core::model::ClassKind;
use codegraph_lang_typescript::{JavaScriptExtractor, TypeScriptExtractor};
use std::path::Path;

fn extract_ts(source: &str) -> codegraph_core::model::ParsedFile {
    TypeScriptExtractor::new()
        .extract_file(source, Path::new("sample.ts"))
        .expect("extraction should succeed")
}

fn extract_js(source: &str) -> codegraph_core::model::ParsedFile {
    JavaScriptExtractor::new()
        .extract_file(source, Path::new("sample.js"))
        .expect("extraction should succeed")
}

#[test]
fn extracts_class_with_extends_and_implements() {
    let file = extract_ts(
        r#"
        interface Tappable {}
        class Base {}
        class Widget extends Base implements Tappable {
            name: string;
            greet(): void {
                console.log("hi");
            }
        }
        "#,
    );

    let widget = file.classes.iter().find(|c| c.name == "Widget").unwrap();
    assert_eq!(widget.super_class.as_deref(), Some("Base"));
    assert_eq!(widget.interfaces, vec!["Tappable".to_string()]);
    assert_eq!(widget.properties[0].name, "name");
    assert_eq!(widget.functions[0].name, "greet");
}

#[test]
fn interface_signatures_become_synthetic_members() {
    let file = extract_ts(
        r#"
        interface Lookup {
            (key: string): number;
            new (x: number): Lookup;
            [key: string]: number;
        }
        "#,
    );

    let iface = &file.classes[0];
    assert_eq!(iface.kind, ClassKind::Interface);
    let names: Vec<_> = iface.functions.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"[[call]]"));
    assert!(names.contains(&"[[construct]]"));
    assert!(names.contains(&"[[index]]"));
}

#[test]
fn extracts_reexport_with_default_alias() {
    let file = extract_ts("export { default as Component } from './c';");

    assert_eq!(file.reexports.len(), 1);
    let reexport = &file.reexports[0];
    assert_eq!(reexport.original_name.as_deref(), Some("default"));
    assert_eq!(reexport.exported_name.as_deref(), Some("Component"));
    assert_eq!(reexport.source_path, "./c");
    assert!(!reexport.is_type_only);
}

#[test]
fn extracts_wildcard_and_namespace_reexports() {
    let file = extract_ts(
        r#"
        export * from './all';
        export * as utils from './utils';
        "#,
    );

    assert_eq!(file.reexports.len(), 2);
    assert!(file.reexports[0].is_wildcard);
    assert!(!file.reexports[0].is_namespace);
    assert!(file.reexports[1].is_namespace);
    assert_eq!(file.reexports[1].exported_name.as_deref(), Some("utils"));
}

#[test]
fn extracts_mapped_type() {
    let file = extract_ts("type R<T> = { -readonly [K in keyof T]?: T[K] };");

    let alias = &file.type_aliases[0];
    let mapped = alias.mapped_type.as_ref().expect("mapped type");
    assert_eq!(mapped.key_name, "K");
    assert_eq!(mapped.constraint, "T");
    assert!(mapped.has_keyof);
    assert_eq!(mapped.value_type, "T[K]");
    assert_eq!(mapped.modifiers.len(), 2);
}

#[test]
fn extracts_conditional_type() {
    let file = extract_ts("type IsString<T> = T extends string ? true : false;");

    let alias = &file.type_aliases[0];
    let conditional = alias.conditional_type.as_ref().expect("conditional type");
    assert_eq!(conditional.check_type, "T");
    assert_eq!(conditional.extends_type, "string");
    assert_eq!(conditional.true_type, "true");
    assert_eq!(conditional.false_type, "false");
}

#[test]
fn arrow_function_bound_to_variable_becomes_top_level_function() {
    let file = extract_ts("const add = (a: number, b: number): number => a + b;");

    assert_eq!(file.top_level_functions.len(), 1);
    assert_eq!(file.top_level_functions[0].name, "add");
    assert_eq!(file.top_level_functions[0].parameters.len(), 2);
}

#[test]
fn extracts_destructuring_with_rename_and_rest() {
    let file = extract_ts("const { a, b: renamed, ...rest } = source;");

    assert_eq!(file.destructuring_declarations.len(), 1);
    let names = &file.destructuring_declarations[0].component_names;
    assert!(names.contains(&"a".to_string()));
    assert!(names.contains(&"renamed".to_string()));
    assert!(names.contains(&"rest".to_string()));
}

#[test]
fn extracts_dynamic_import_with_template_literal() {
    let file = extract_ts("const mod = await import(`./plugins/${name}`);");

    let dynamic = file
        .imports
        .iter()
        .find(|i| i.is_dynamic == Some(true))
        .expect("dynamic import recorded");
    assert_eq!(dynamic.is_template_literal, Some(true));
    assert!(dynamic.path.contains("plugins"));
}

#[test]
fn extracts_named_and_namespace_imports() {
    let file = extract_ts(
        r#"
        import Default from './default';
        import * as ns from './ns';
        import { a, b as renamed } from './named';
        "#,
    );

    assert_eq!(file.imports.len(), 3);
    assert_eq!(file.imports[0].alias.as_deref(), Some("Default"));
    assert!(file.imports[1].is_wildcard);
    assert_eq!(file.imports[1].alias.as_deref(), Some("ns"));
    assert_eq!(file.imports[2].path, "a");
    assert_eq!(file.imports[2].alias.as_deref(), Some("renamed"));
}

#[test]
fn extracts_calls_including_member_chains_and_constructors() {
    let file = extract_ts(
        r#"
        function run() {
            console.log("hi");
            new Widget();
        }
        "#,
    );

    let calls = &file.top_level_functions[0].calls;
    let log = calls.iter().find(|c| c.name == "log").expect("log call");
    assert_eq!(log.receiver.as_deref(), Some("console"));
    assert!(calls.iter().any(|c| c.name == "Widget"));
}

#[test]
fn javascript_extractor_handles_plain_class() {
    let file = extract_js(
        r#"
        class Greeter {
            greet() {
                return "hi";
            }
        }
        "#,
    );

    assert_eq!(file.classes.len(), 1);
    assert_eq!(file.classes[0].functions[0].name, "greet");
}
