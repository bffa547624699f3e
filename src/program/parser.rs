//! Tree-sitter front-end for TypeScript sources.
//!
//! Extracts top-level class declarations and the program-wide declaration
//! index from a parse tree. Only the constructs the metrics look at are
//! modelled; everything else collapses into `ClassMember::Other` or
//! `TypeRef::Unresolved`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{ArtieError, Result};

use super::model::{ClassMember, ClassModel, MethodModel, SourceFileModel, TypeRef};
use super::resolver::{Declaration, DeclarationKind};

/// Grammar used for a file, chosen by extension.
#[must_use]
pub fn language_for(path: &Path) -> Language {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsx" | "jsx") => tree_sitter_typescript::LANGUAGE_TSX.into(),
        _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    }
}

/// Parse source text into a tree-sitter tree.
///
/// # Errors
/// Returns an error if the grammar cannot be loaded or the parser gives up.
pub fn parse_tree(source: &str, path: &Path) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&language_for(path))
        .map_err(|e| ArtieError::Program(format!("{}: {e}", path.display())))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ArtieError::Program(format!("parser gave up on {}", path.display())))
}

#[must_use]
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Output of parsing one file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub model: SourceFileModel,
    pub declarations: Vec<Declaration>,
}

/// Parse `source` and extract its classes and declarations.
///
/// # Errors
/// Returns an error if the source cannot be parsed.
pub fn parse_source(source: &str, path: &Path) -> Result<ParsedFile> {
    let tree = parse_tree(source, path)?;
    if tree.root_node().has_error() {
        tracing::debug!("{} contains syntax errors", path.display());
    }
    Ok(FileExtractor::new(source, path).extract(&tree))
}

struct FileExtractor<'s> {
    source: &'s str,
    path: &'s Path,
    /// Local alias -> imported name, from `import { A as B }`.
    import_aliases: HashMap<String, String>,
    /// Type parameters in scope while walking a class.
    type_parameters: HashSet<String>,
    classes: Vec<ClassModel>,
    declarations: Vec<Declaration>,
}

impl<'s> FileExtractor<'s> {
    fn new(source: &'s str, path: &'s Path) -> Self {
        Self {
            source,
            path,
            import_aliases: HashMap::new(),
            type_parameters: HashSet::new(),
            classes: Vec::new(),
            declarations: Vec::new(),
        }
    }

    fn extract(mut self, tree: &Tree) -> ParsedFile {
        let root = tree.root_node();
        let mut cursor = root.walk();
        let top_level: Vec<Node<'_>> = root.named_children(&mut cursor).collect();

        for node in &top_level {
            if node.kind() == "import_statement" {
                self.collect_imports(*node);
            }
        }
        for node in top_level {
            self.visit_statement(node, true);
        }

        ParsedFile {
            model: SourceFileModel::new(self.path, self.classes),
            declarations: self.declarations,
        }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node_text(node, self.source)
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> Option<&'s str> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    fn declare(&mut self, kind: DeclarationKind, name: Option<&str>) {
        if let Some(name) = name {
            self.declarations.push(Declaration::new(
                kind,
                name,
                Some(self.path.to_path_buf()),
            ));
        }
    }

    fn collect_imports(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let specifiers: Vec<Node<'_>> = node
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "import_clause")
            .flat_map(|clause| descendants_of_kind(clause, "import_specifier"))
            .collect();

        for specifier in specifiers {
            if let (Some(name), Some(alias)) = (
                self.field_text(specifier, "name"),
                self.field_text(specifier, "alias"),
            ) {
                self.import_aliases
                    .insert(alias.to_string(), name.to_string());
            }
        }
    }

    /// Walk a statement. Classes are only recorded as metric subjects when
    /// they sit at the top level of the file; nested namespaces still feed
    /// the declaration index.
    fn visit_statement(&mut self, node: Node<'_>, top_level: bool) {
        match node.kind() {
            "class_declaration" | "abstract_class_declaration" => {
                let name = self.field_text(node, "name");
                self.declare(DeclarationKind::Class, name);
                if top_level {
                    let class = self.class_model(node);
                    self.classes.push(class);
                }
            }
            "export_statement" => {
                if let Some(declaration) = node.child_by_field_name("declaration") {
                    self.visit_statement(declaration, top_level);
                } else if let Some(value) = node.child_by_field_name("value")
                    && value.kind() == "class"
                    && top_level
                {
                    let class = self.class_model(value);
                    self.classes.push(class);
                }
            }
            "ambient_declaration" => {
                let mut cursor = node.walk();
                let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
                for child in children {
                    self.visit_statement(child, top_level);
                }
            }
            "expression_statement" => {
                if let Some(inner) = node.named_child(0)
                    && inner.kind() == "internal_module"
                {
                    self.visit_statement(inner, top_level);
                }
            }
            "internal_module" | "module" => {
                if let Some(name) = node.child_by_field_name("name")
                    && name.kind() == "identifier"
                {
                    let name = self.text(name);
                    self.declare(DeclarationKind::Namespace, Some(name));
                }
                if let Some(body) = node.child_by_field_name("body") {
                    let mut cursor = body.walk();
                    let children: Vec<Node<'_>> = body.named_children(&mut cursor).collect();
                    for child in children {
                        self.visit_statement(child, false);
                    }
                }
            }
            "interface_declaration" => {
                let name = self.field_text(node, "name");
                self.declare(DeclarationKind::Interface, name);
            }
            "enum_declaration" => {
                let name = self.field_text(node, "name");
                self.declare(DeclarationKind::Enum, name);
            }
            "type_alias_declaration" => {
                let name = self.field_text(node, "name");
                self.declare(DeclarationKind::TypeAlias, name);
            }
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                let name = self.field_text(node, "name");
                self.declare(DeclarationKind::Function, name);
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = node.walk();
                let declarators: Vec<Node<'_>> = node
                    .named_children(&mut cursor)
                    .filter(|n| n.kind() == "variable_declarator")
                    .collect();
                for declarator in declarators {
                    if let Some(name) = declarator.child_by_field_name("name")
                        && name.kind() == "identifier"
                    {
                        let name = self.text(name);
                        self.declare(DeclarationKind::Variable, Some(name));
                    }
                }
            }
            _ => {}
        }
    }

    fn class_model(&mut self, node: Node<'_>) -> ClassModel {
        self.type_parameters = self.type_parameter_names(node);

        let name = self.field_text(node, "name").map(str::to_string);
        let heritage = self.heritage(node);
        let members = node
            .child_by_field_name("body")
            .map(|body| {
                let mut cursor = body.walk();
                let nodes: Vec<Node<'_>> = body
                    .named_children(&mut cursor)
                    .filter(|m| !matches!(m.kind(), "comment" | "decorator"))
                    .collect();
                nodes.into_iter().map(|m| self.member(m)).collect()
            })
            .unwrap_or_default();

        self.type_parameters.clear();
        ClassModel {
            name,
            members,
            heritage,
        }
    }

    fn type_parameter_names(&self, node: Node<'_>) -> HashSet<String> {
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return HashSet::new();
        };
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|p| p.kind() == "type_parameter")
            .filter_map(|p| self.field_text(p, "name"))
            .map(str::to_string)
            .collect()
    }

    fn heritage(&self, class: Node<'_>) -> Vec<TypeRef> {
        let mut cursor = class.walk();
        let Some(heritage) = class
            .children(&mut cursor)
            .find(|n| n.kind() == "class_heritage")
        else {
            return Vec::new();
        };

        let mut refs = Vec::new();
        let mut clause_cursor = heritage.walk();
        for clause in heritage.named_children(&mut clause_cursor) {
            let mut inner = clause.walk();
            match clause.kind() {
                "extends_clause" => {
                    for value in clause.children_by_field_name("value", &mut inner) {
                        refs.push(self.heritage_expression(value));
                    }
                }
                "implements_clause" => {
                    for ty in clause.named_children(&mut inner) {
                        refs.push(self.type_ref(ty));
                    }
                }
                _ => {}
            }
        }
        refs
    }

    /// `extends` takes an expression that denotes a class type.
    fn heritage_expression(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            "identifier" => self.named(self.text(node)),
            "member_expression" => self
                .field_text(node, "property")
                .map_or(TypeRef::Unresolved, |name| self.named(name)),
            _ => TypeRef::Unresolved,
        }
    }

    fn member(&self, node: Node<'_>) -> ClassMember {
        match node.kind() {
            "method_definition" => {
                let name = self.field_text(node, "name").unwrap_or_default();
                if name == "constructor" {
                    ClassMember::Constructor {
                        parameters: self.parameters(node),
                    }
                } else if has_keyword(node, &["get", "set"]) {
                    ClassMember::Other
                } else {
                    let body = node
                        .child_by_field_name("body")
                        .map(|b| block_inner_text(self.text(b)))
                        .unwrap_or_default();
                    ClassMember::Method(MethodModel::new(name, body))
                }
            }
            "abstract_method_signature" => {
                let name = self.field_text(node, "name").unwrap_or_default();
                ClassMember::Method(MethodModel::new(name, ""))
            }
            "public_field_definition" => ClassMember::Property {
                name: self.field_text(node, "name").unwrap_or_default().to_string(),
                initializer: node
                    .child_by_field_name("value")
                    .map(|value| self.expression_type(value)),
            },
            _ => ClassMember::Other,
        }
    }

    fn parameters(&self, method: Node<'_>) -> Vec<TypeRef> {
        let Some(params) = method.child_by_field_name("parameters") else {
            return Vec::new();
        };
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
            .map(|p| {
                if let Some(annotation) = p.child_by_field_name("type") {
                    self.type_ref(annotation)
                } else if let Some(value) = p.child_by_field_name("value") {
                    self.expression_type(value)
                } else {
                    TypeRef::Unresolved
                }
            })
            .collect()
    }

    fn named(&self, name: &str) -> TypeRef {
        if self.type_parameters.contains(name) {
            return TypeRef::Unresolved;
        }
        let name = self
            .import_aliases
            .get(name)
            .map_or(name, String::as_str);
        TypeRef::Named(name.to_string())
    }

    fn type_ref(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            "type_identifier" => self.named(self.text(node)),
            "nested_type_identifier" | "generic_type" => node
                .child_by_field_name("name")
                .map_or(TypeRef::Unresolved, |name| self.type_ref(name)),
            "array_type" => TypeRef::Array,
            "type_annotation" | "readonly_type" | "parenthesized_type" => node
                .named_child(0)
                .map_or(TypeRef::Unresolved, |inner| self.type_ref(inner)),
            _ => TypeRef::Unresolved,
        }
    }

    fn expression_type(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            "new_expression" => match node.child_by_field_name("constructor") {
                Some(ctor) if ctor.kind() == "identifier" => self.named(self.text(ctor)),
                Some(ctor) if ctor.kind() == "member_expression" => self
                    .field_text(ctor, "property")
                    .map_or(TypeRef::Unresolved, |name| self.named(name)),
                _ => TypeRef::Unresolved,
            },
            "identifier" => {
                let name = self.text(node);
                let name = self
                    .import_aliases
                    .get(name)
                    .map_or(name, String::as_str);
                TypeRef::ValueOf(name.to_string())
            }
            "array" => TypeRef::Array,
            "object" => TypeRef::ObjectLiteral,
            "arrow_function" | "function_expression" | "function" | "generator_function" => {
                TypeRef::FunctionLiteral
            }
            "as_expression" | "satisfies_expression" => {
                let count = node.named_child_count();
                match count.checked_sub(1).and_then(|last| node.named_child(last)) {
                    Some(ty) => self.type_ref(ty),
                    None => TypeRef::Unresolved,
                }
            }
            "parenthesized_expression" => node
                .named_child(0)
                .map_or(TypeRef::Unresolved, |inner| self.expression_type(inner)),
            _ => TypeRef::Unresolved,
        }
    }
}

fn has_keyword(node: Node<'_>, keywords: &[&str]) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && keywords.contains(&child.kind()));
    found
}

fn block_inner_text(block: &str) -> &str {
    block
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(block)
}

fn descendants_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            found.push(current);
        }
        let mut cursor = current.walk();
        stack.extend(current.named_children(&mut cursor));
    }
    found
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
