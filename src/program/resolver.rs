use std::collections::HashMap;
use std::path::PathBuf;

use super::model::TypeRef;

/// Standard library globals that resolve to a library (non-class) declaration.
const LIBRARY_GLOBALS: &[&str] = &[
    "Array",
    "ArrayBuffer",
    "BigInt",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "EvalError",
    "Function",
    "Iterable",
    "Iterator",
    "JSON",
    "Map",
    "Math",
    "Number",
    "Object",
    "Partial",
    "Pick",
    "Promise",
    "PromiseLike",
    "Proxy",
    "RangeError",
    "Readonly",
    "ReadonlyArray",
    "Record",
    "Reflect",
    "RegExp",
    "Required",
    "Set",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "Uint8Array",
    "WeakMap",
    "WeakSet",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
    Function,
    Variable,
    Namespace,
    /// Declared by the standard library.
    Library,
    ObjectLiteral,
    FunctionLiteral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: Option<String>,
    pub file: Option<PathBuf>,
}

impl Declaration {
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            file,
        }
    }

    #[must_use]
    pub const fn anonymous(kind: DeclarationKind) -> Self {
        Self {
            kind,
            name: None,
            file: None,
        }
    }

    /// Name of the declared class, if this declaration is a named class.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self.kind {
            DeclarationKind::Class => self.name.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolOrigin {
    Reference,
    Literal(DeclarationKind),
}

/// A resolved symbol: a name plus where its declarations come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    origin: SymbolOrigin,
}

impl Symbol {
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: SymbolOrigin::Reference,
        }
    }

    #[must_use]
    fn literal(name: &str, kind: DeclarationKind) -> Self {
        Self {
            name: name.to_string(),
            origin: SymbolOrigin::Literal(kind),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Type resolution capability the coupling metric depends on.
pub trait SymbolResolver {
    /// Symbol of the static type of `node`, if the type has one.
    fn resolve_type(&self, node: &TypeRef) -> Option<Symbol>;

    /// Every declaration of `symbol` visible to the program.
    fn declarations_of(&self, symbol: &Symbol) -> Vec<Declaration>;
}

/// Program-wide index of top-level declarations by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationIndex {
    by_name: HashMap<String, Vec<Declaration>>,
}

impl DeclarationIndex {
    pub fn insert(&mut self, declaration: Declaration) {
        if let Some(name) = declaration.name.clone() {
            self.by_name.entry(name).or_default().push(declaration);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> &[Declaration] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    fn declares_class(&self, name: &str) -> bool {
        self.get(name)
            .iter()
            .any(|d| d.kind == DeclarationKind::Class)
    }
}

/// Resolver backed by a program's declaration index.
#[derive(Debug, Clone, Copy)]
pub struct TypeChecker<'a> {
    index: &'a DeclarationIndex,
}

impl<'a> TypeChecker<'a> {
    #[must_use]
    pub const fn new(index: &'a DeclarationIndex) -> Self {
        Self { index }
    }
}

impl SymbolResolver for TypeChecker<'_> {
    fn resolve_type(&self, node: &TypeRef) -> Option<Symbol> {
        match node {
            TypeRef::Named(name) => Some(Symbol::reference(name.clone())),
            TypeRef::ValueOf(name) if self.index.declares_class(name) => {
                Some(Symbol::reference(name.clone()))
            }
            TypeRef::ValueOf(_) | TypeRef::Unresolved => None,
            TypeRef::Array => Some(Symbol::reference("Array")),
            TypeRef::ObjectLiteral => {
                Some(Symbol::literal("__object", DeclarationKind::ObjectLiteral))
            }
            TypeRef::FunctionLiteral => Some(Symbol::literal(
                "__function",
                DeclarationKind::FunctionLiteral,
            )),
        }
    }

    fn declarations_of(&self, symbol: &Symbol) -> Vec<Declaration> {
        match symbol.origin {
            SymbolOrigin::Literal(kind) => vec![Declaration::anonymous(kind)],
            SymbolOrigin::Reference => {
                let declared = self.index.get(&symbol.name);
                if !declared.is_empty() {
                    return declared.to_vec();
                }
                if LIBRARY_GLOBALS.contains(&symbol.name.as_str()) {
                    return vec![Declaration::new(
                        DeclarationKind::Library,
                        symbol.name.clone(),
                        None,
                    )];
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
