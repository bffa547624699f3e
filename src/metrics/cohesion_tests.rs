use super::*;
use crate::program::{ClassMember, MethodModel, parse_source};

fn method(name: &str, body: &str) -> ClassMember {
    ClassMember::Method(MethodModel::new(name, body))
}

fn property(name: &str) -> ClassMember {
    ClassMember::Property {
        name: name.to_string(),
        initializer: None,
    }
}

fn class_with(members: Vec<ClassMember>) -> ClassModel {
    members
        .into_iter()
        .fold(ClassModel::named("Subject"), ClassModel::with_member)
}

#[test]
fn no_methods_scores_zero() {
    assert_eq!(compute_lcom(&class_with(vec![property("a")])), 0);
}

#[test]
fn single_method_scores_zero() {
    let class = class_with(vec![property("a"), method("m", "return this.a;")]);
    assert_eq!(compute_lcom(&class), 0);
}

#[test]
fn disjoint_properties_score_one() {
    let class = class_with(vec![
        property("a"),
        property("b"),
        method("m1", "return this.a;"),
        method("m2", "return this.b;"),
    ]);
    assert_eq!(compute_lcom(&class), 1);
}

#[test]
fn shared_property_scores_zero() {
    let class = class_with(vec![
        property("a"),
        method("m1", "return this.a;"),
        method("m2", "this.a = 2;"),
    ]);
    assert_eq!(compute_lcom(&class), 0);
}

#[test]
fn methods_without_property_access_never_share() {
    let class = class_with(vec![
        property("a"),
        method("m1", "return 1;"),
        method("m2", "return 2;"),
        method("m3", "return 3;"),
    ]);
    assert_eq!(compute_lcom(&class), 3);
}

#[test]
fn sharing_pairs_offset_unshared_pairs() {
    // m1/m2 share a, m2/m3 share b, m1/m3 share nothing.
    let class = class_with(vec![
        property("a"),
        property("b"),
        method("m1", "this.a;"),
        method("m2", "this.a; this.b;"),
        method("m3", "this.b;"),
    ]);
    assert_eq!(compute_lcom(&class), 0);
}

#[test]
fn score_is_symmetric_in_method_order() {
    let bodies = [
        ("m1", "this.a;"),
        ("m2", "this.b;"),
        ("m3", "this.c;"),
        ("m4", "this.a; this.c;"),
    ];
    let props = ["a", "b", "c"];

    let build = |order: &[usize]| {
        let mut members: Vec<ClassMember> = props.iter().map(|p| property(p)).collect();
        members.extend(order.iter().map(|&i| method(bodies[i].0, bodies[i].1)));
        class_with(members)
    };

    let forward = compute_lcom(&build(&[0, 1, 2, 3]));
    assert_eq!(forward, compute_lcom(&build(&[3, 2, 1, 0])));
    assert_eq!(forward, compute_lcom(&build(&[2, 0, 3, 1])));
    // 6 pairs: m1-m4 and m3-m4 share, the other 4 do not.
    assert_eq!(forward, 2);
}

#[test]
fn undeclared_properties_are_ignored() {
    let class = class_with(vec![
        method("m1", "this.ghost = 1;"),
        method("m2", "return this.ghost;"),
    ]);
    assert_eq!(compute_lcom(&class), 1);
}

#[test]
fn property_match_is_textual_prefix() {
    // `this.ab` contains `this.a`, so both methods reference `a`.
    let class = class_with(vec![
        property("a"),
        property("ab"),
        method("m1", "this.a;"),
        method("m2", "this.ab;"),
    ]);
    assert_eq!(compute_lcom(&class), 0);
}

#[test]
fn parsed_class_ignores_constructor_and_accessors() {
    let source = r"
class Account {
  a = 0;
  b = 0;
  constructor() { this.a = 1; this.b = 1; }
  get both() { return this.a + this.b; }
  first() { return this.a; }
  second() { return this.b; }
}
";
    let parsed = parse_source(source, std::path::Path::new("account.ts")).unwrap();
    assert_eq!(compute_lcom(&parsed.model.classes[0]), 1);
}
