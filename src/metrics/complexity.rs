use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::program::LanguageTarget;

/// One node of a file's complexity tree.
///
/// `complexity` is the node's own cyclomatic complexity, excluding that of
/// nested function-like children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityNode {
    pub name: String,
    pub line: usize,
    pub complexity: usize,
    pub children: Vec<ComplexityNode>,
}

impl ComplexityNode {
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize, complexity: usize) -> Self {
        Self {
            name: name.into(),
            line,
            complexity,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Own complexity plus that of every descendant.
    #[must_use]
    pub fn total(&self) -> usize {
        self.complexity + aggregate_complexity(&self.children)
    }
}

/// Source of per-file complexity trees.
pub trait ComplexityModel {
    /// Build the complexity tree rooted at the file's top-level node.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn complexity_tree(&self, path: &Path, target: LanguageTarget) -> Result<ComplexityNode>;
}

/// Sum own and nested complexity over a forest of nodes.
#[must_use]
pub fn aggregate_complexity(nodes: &[ComplexityNode]) -> usize {
    nodes.iter().fold(0, |acc, node| {
        if node.children.is_empty() {
            acc + node.complexity
        } else {
            acc + aggregate_complexity(&node.children) + node.complexity
        }
    })
}

/// Weighted method complexity of one file.
///
/// # Errors
/// Returns an error if the complexity model cannot build the file's tree.
pub fn compute_wmc(
    path: &Path,
    model: &impl ComplexityModel,
    target: LanguageTarget,
) -> Result<usize> {
    let root = model.complexity_tree(path, target)?;
    Ok(aggregate_complexity(std::slice::from_ref(&root)))
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
