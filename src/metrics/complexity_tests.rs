use std::path::PathBuf;

use super::*;

struct FixedModel(ComplexityNode);

impl ComplexityModel for FixedModel {
    fn complexity_tree(&self, _path: &Path, _target: LanguageTarget) -> Result<ComplexityNode> {
        Ok(self.0.clone())
    }
}

fn sample_tree() -> ComplexityNode {
    ComplexityNode::new("file.ts", 1, 2)
        .with_child(
            ComplexityNode::new("outer", 2, 3)
                .with_child(ComplexityNode::new("inner", 3, 4))
                .with_child(ComplexityNode::new("callback", 5, 1)),
        )
        .with_child(ComplexityNode::new("leaf", 10, 5))
}

fn pre_order_sum(node: &ComplexityNode) -> usize {
    let mut sum = 0;
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        sum += current.complexity;
        stack.extend(current.children.iter());
    }
    sum
}

#[test]
fn empty_forest_has_zero_complexity() {
    assert_eq!(aggregate_complexity(&[]), 0);
}

#[test]
fn leaf_contributes_only_its_own_value() {
    assert_eq!(aggregate_complexity(&[ComplexityNode::new("f", 1, 7)]), 7);
}

#[test]
fn nested_nodes_are_summed_recursively() {
    assert_eq!(aggregate_complexity(&[sample_tree()]), 15);
}

#[test]
fn aggregation_matches_any_traversal_order() {
    let tree = sample_tree();
    assert_eq!(aggregate_complexity(std::slice::from_ref(&tree)), pre_order_sum(&tree));
    assert_eq!(tree.total(), pre_order_sum(&tree));
}

#[test]
fn reordering_children_does_not_change_total() {
    let mut tree = sample_tree();
    let before = tree.total();
    tree.children.reverse();
    assert_eq!(tree.total(), before);
}

#[test]
fn compute_wmc_aggregates_the_model_tree() {
    let model = FixedModel(sample_tree());
    let wmc = compute_wmc(&PathBuf::from("file.ts"), &model, LanguageTarget::Es2015).unwrap();
    assert_eq!(wmc, 15);
}
