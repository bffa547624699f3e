use std::collections::HashSet;

use crate::program::ClassModel;

/// Properties of `class` referenced as `this.<name>` inside a method body.
fn referenced_properties<'c>(body: &str, properties: &[&'c str]) -> HashSet<&'c str> {
    properties
        .iter()
        .copied()
        .filter(|property| body.contains(&format!("this.{property}")))
        .collect()
}

/// Lack of cohesion of methods for one class.
///
/// Every unordered pair of methods is either sharing (at least one referenced
/// property in common) or not. The score is the number of non-sharing pairs
/// minus the number of sharing pairs, floored at zero.
#[must_use]
pub fn compute_lcom(class: &ClassModel) -> usize {
    let methods: Vec<_> = class.methods().collect();
    if methods.len() < 2 {
        return 0;
    }

    let properties: Vec<&str> = class.property_names().collect();
    let usage: Vec<HashSet<&str>> = methods
        .iter()
        .map(|method| referenced_properties(&method.body, &properties))
        .collect();

    let mut shared = 0usize;
    let mut unshared = 0usize;
    for (i, left) in usage.iter().enumerate() {
        for right in &usage[i + 1..] {
            if left.is_disjoint(right) {
                unshared += 1;
            } else {
                shared += 1;
            }
        }
    }

    unshared.saturating_sub(shared)
}

#[cfg(test)]
#[path = "cohesion_tests.rs"]
mod tests;
