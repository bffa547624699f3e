use std::path::Path;

use super::*;

fn parse(source: &str) -> ParsedFile {
    parse_source(source, Path::new("/project/src/sample.ts")).unwrap()
}

fn only_class(source: &str) -> ClassModel {
    let parsed = parse(source);
    assert_eq!(parsed.model.classes.len(), 1, "expected exactly one class");
    parsed.model.classes.into_iter().next().unwrap()
}

#[test]
fn file_without_classes_has_no_class_models() {
    let parsed = parse("export function helper(): number { return 1; }\n");
    assert!(parsed.model.classes.is_empty());
}

#[test]
fn extracts_plain_and_exported_classes_in_order() {
    let parsed = parse(
        "class A {}\nexport class B {}\nexport default class C {}\nabstract class D {}\n",
    );
    let names: Vec<_> = parsed
        .model
        .classes
        .iter()
        .map(ClassModel::display_name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn anonymous_default_class_has_no_name() {
    let class = only_class("export default class {\n  run() {}\n}\n");
    assert!(class.name.is_none());
    assert_eq!(class.display_name(), "[UnnamedClass]");
}

#[test]
fn nested_classes_are_not_top_level() {
    let parsed = parse("function factory() {\n  class Inner {}\n  return Inner;\n}\n");
    assert!(parsed.model.classes.is_empty());
}

#[test]
fn constructor_parameters_become_type_refs() {
    let class = only_class(
        "class Service {\n  constructor(private repo: UserRepo, name: string, items: Item[], opts?: Options<T>) {}\n}\n",
    );
    assert_eq!(
        class.members,
        vec![ClassMember::Constructor {
            parameters: vec![
                TypeRef::Named("UserRepo".to_string()),
                TypeRef::Unresolved,
                TypeRef::Array,
                TypeRef::Named("Options".to_string()),
            ],
        }]
    );
}

#[test]
fn untyped_parameter_uses_default_value() {
    let class = only_class("class Service {\n  constructor(clock = new Clock(), retries) {}\n}\n");
    assert_eq!(
        class.members,
        vec![ClassMember::Constructor {
            parameters: vec![TypeRef::Named("Clock".to_string()), TypeRef::Unresolved],
        }]
    );
}

#[test]
fn qualified_types_resolve_to_their_last_segment() {
    let class = only_class("class Service {\n  constructor(http: ng.HttpClient) {}\n}\n");
    assert_eq!(
        class.members,
        vec![ClassMember::Constructor {
            parameters: vec![TypeRef::Named("HttpClient".to_string())],
        }]
    );
}

#[test]
fn class_type_parameters_are_unresolved() {
    let class = only_class("class Box<T> {\n  constructor(value: T) {}\n}\n");
    assert_eq!(
        class.members,
        vec![ClassMember::Constructor {
            parameters: vec![TypeRef::Unresolved],
        }]
    );
}

#[test]
fn property_initializers_are_typed() {
    let class = only_class(
        "class Store {\n  cache = new Map();\n  items = [];\n  settings = {};\n  label = 'x';\n  handler = () => {};\n  count: number;\n}\n",
    );
    let properties: Vec<_> = class
        .members
        .iter()
        .map(|m| match m {
            ClassMember::Property { name, initializer } => (name.as_str(), initializer.clone()),
            other => panic!("unexpected member {other:?}"),
        })
        .collect();
    assert_eq!(
        properties,
        vec![
            ("cache", Some(TypeRef::Named("Map".to_string()))),
            ("items", Some(TypeRef::Array)),
            ("settings", Some(TypeRef::ObjectLiteral)),
            ("label", Some(TypeRef::Unresolved)),
            ("handler", Some(TypeRef::FunctionLiteral)),
            ("count", None),
        ]
    );
}

#[test]
fn identifier_initializer_is_a_value_reference() {
    let class = only_class("class Registry {\n  kind = Widget;\n}\n");
    assert_eq!(
        class.members,
        vec![ClassMember::Property {
            name: "kind".to_string(),
            initializer: Some(TypeRef::ValueOf("Widget".to_string())),
        }]
    );
}

#[test]
fn heritage_lists_extends_then_implements() {
    let class = only_class("class Admin extends User implements Auditable, Named<string> {\n  x = 1;\n}\n");
    assert_eq!(
        class.heritage,
        vec![
            TypeRef::Named("User".to_string()),
            TypeRef::Named("Auditable".to_string()),
            TypeRef::Named("Named".to_string()),
        ]
    );
}

#[test]
fn import_aliases_resolve_to_imported_name() {
    let class = only_class(
        "import { Logger as Log } from './logger';\nclass Service {\n  constructor(log: Log) {}\n}\n",
    );
    assert_eq!(
        class.members,
        vec![ClassMember::Constructor {
            parameters: vec![TypeRef::Named("Logger".to_string())],
        }]
    );
}

#[test]
fn methods_exclude_constructor_and_accessors() {
    let class = only_class(
        "class Counter {\n  private count = 0;\n  constructor() {}\n  get value() { return this.count; }\n  set value(v) { this.count = v; }\n  increment() { this.count++; }\n  reset() { this.count = 0; }\n}\n",
    );
    let methods: Vec<_> = class.methods().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["increment", "reset"]);
    let properties: Vec<_> = class.property_names().collect();
    assert_eq!(properties, vec!["count"]);
}

#[test]
fn method_body_excludes_braces() {
    let class = only_class("class A {\n  run() { this.go(); }\n}\n");
    let method = class.methods().next().unwrap();
    assert_eq!(method.body.trim(), "this.go();");
}

#[test]
fn abstract_methods_have_empty_bodies() {
    let class = only_class("abstract class Shape {\n  abstract area(): number;\n  describe() { return 'shape'; }\n}\n");
    let methods: Vec<_> = class.methods().map(|m| (m.name.as_str(), m.body.as_str())).collect();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0], ("area", ""));
    assert_eq!(methods[1].0, "describe");
}

#[test]
fn comments_in_class_body_are_not_members() {
    let class = only_class("class A extends B {\n  // nothing here yet\n}\n");
    assert!(class.members.is_empty());
    assert_eq!(class.heritage, vec![TypeRef::Named("B".to_string())]);
}

#[test]
fn declarations_are_collected_program_wide() {
    let parsed = parse(
        "export interface Repo {}\nenum Color { Red }\ntype Id = string;\nexport class User {}\nconst config = {};\nfunction make() {}\nnamespace Util { export class Helper {} }\n",
    );
    let kinds: Vec<_> = parsed
        .declarations
        .iter()
        .map(|d| (d.name.as_deref().unwrap_or_default(), d.kind))
        .collect();
    assert!(kinds.contains(&("Repo", DeclarationKind::Interface)));
    assert!(kinds.contains(&("Color", DeclarationKind::Enum)));
    assert!(kinds.contains(&("Id", DeclarationKind::TypeAlias)));
    assert!(kinds.contains(&("User", DeclarationKind::Class)));
    assert!(kinds.contains(&("config", DeclarationKind::Variable)));
    assert!(kinds.contains(&("make", DeclarationKind::Function)));
    assert!(kinds.contains(&("Helper", DeclarationKind::Class)));
    // Helper is declared but not a top-level class.
    assert_eq!(parsed.model.classes.len(), 1);
}

#[test]
fn ambient_class_declarations_are_indexed() {
    let parsed = parse("declare class Legacy {}\n");
    assert!(
        parsed
            .declarations
            .iter()
            .any(|d| d.class_name() == Some("Legacy"))
    );
}

#[test]
fn tsx_files_use_the_tsx_grammar() {
    let parsed = parse_source(
        "export class View {\n  render() { return <div>{this.title}</div>; }\n}\n",
        Path::new("view.tsx"),
    )
    .unwrap();
    assert_eq!(parsed.model.classes.len(), 1);
}
