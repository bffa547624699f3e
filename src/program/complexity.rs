use std::fs;
use std::path::Path;

use tree_sitter::Node;

use crate::error::{ArtieError, Result};
use crate::metrics::{ComplexityModel, ComplexityNode};

use super::parser::{node_text, parse_tree};
use super::project::LanguageTarget;

/// Weight added for each construct kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityRules {
    /// Base complexity of every function-like node.
    pub function: usize,
    pub branch: usize,
    pub conditional: usize,
    pub case: usize,
    pub loop_statement: usize,
    pub catch: usize,
    /// `&&`, `||` and `??`.
    pub logical: usize,
}

impl Default for ComplexityRules {
    fn default() -> Self {
        Self {
            function: 1,
            branch: 1,
            conditional: 1,
            case: 1,
            loop_statement: 1,
            catch: 1,
            logical: 1,
        }
    }
}

/// Complexity model backed by the tree-sitter TypeScript grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxComplexityModel {
    rules: ComplexityRules,
}

impl SyntaxComplexityModel {
    #[must_use]
    pub const fn new(rules: ComplexityRules) -> Self {
        Self { rules }
    }

    /// Build a tree from already-loaded source text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed.
    pub fn tree_from_source(&self, source: &str, path: &Path) -> Result<ComplexityNode> {
        let tree = parse_tree(source, path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let mut root = ComplexityNode::new(name, 1, 0);
        let builder = TreeBuilder {
            source,
            rules: self.rules,
        };
        builder.visit_children(tree.root_node(), &mut root);
        Ok(root)
    }
}

impl ComplexityModel for SyntaxComplexityModel {
    fn complexity_tree(&self, path: &Path, target: LanguageTarget) -> Result<ComplexityNode> {
        let source = fs::read_to_string(path).map_err(|source| ArtieError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!("building complexity tree for {} ({})", path.display(), target);
        self.tree_from_source(&source, path)
    }
}

struct TreeBuilder<'s> {
    source: &'s str,
    rules: ComplexityRules,
}

impl TreeBuilder<'_> {
    fn visit(&self, node: Node<'_>, owner: &mut ComplexityNode) {
        if is_function_like(node.kind()) {
            let mut function = ComplexityNode::new(
                self.function_name(node),
                node.start_position().row + 1,
                self.rules.function,
            );
            self.visit_children(node, &mut function);
            owner.children.push(function);
            return;
        }

        owner.complexity += self.weight(node);
        self.visit_children(node, owner);
    }

    fn visit_children(&self, node: Node<'_>, owner: &mut ComplexityNode) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, owner);
        }
    }

    fn weight(&self, node: Node<'_>) -> usize {
        match node.kind() {
            "if_statement" => self.rules.branch,
            "ternary_expression" => self.rules.conditional,
            "switch_case" => self.rules.case,
            "for_statement" | "for_in_statement" | "while_statement" | "do_statement" => {
                self.rules.loop_statement
            }
            "catch_clause" => self.rules.catch,
            "binary_expression" => match node.child_by_field_name("operator").map(|op| op.kind()) {
                Some("&&" | "||" | "??") => self.rules.logical,
                _ => 0,
            },
            _ => 0,
        }
    }

    fn function_name(&self, node: Node<'_>) -> String {
        if let Some(name) = node.child_by_field_name("name") {
            return node_text(name, self.source).to_string();
        }

        if let Some(parent) = node.parent()
            && matches!(parent.kind(), "variable_declarator" | "public_field_definition")
            && let Some(name) = parent.child_by_field_name("name")
        {
            return node_text(name, self.source).to_string();
        }

        "<anonymous>".to_string()
    }
}

fn is_function_like(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "generator_function_declaration"
            | "function_expression"
            | "function"
            | "generator_function"
            | "arrow_function"
            | "method_definition"
    )
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
