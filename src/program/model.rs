use std::path::{Path, PathBuf};

/// Placeholder shown for classes without a name (`export default class { ... }`).
pub const UNNAMED_CLASS: &str = "[UnnamedClass]";

/// Summary of a syntax node whose static type the metrics need.
///
/// This is the front-end's stand-in for an AST node handed to a type checker:
/// it records just enough of the node to decide which symbol its type has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A type position naming a type: `Foo`, `Foo<T>`, `ns.Foo`, or `new Foo()`.
    Named(String),
    /// A value position holding a bare identifier; its type is only known when
    /// the identifier names a class (`typeof Foo`).
    ValueOf(String),
    /// An array type or array literal.
    Array,
    /// An object literal value.
    ObjectLiteral,
    /// A function or arrow function value.
    FunctionLiteral,
    /// A primitive, literal, union, type parameter or otherwise symbol-less type.
    Unresolved,
}

/// A method declaration with its body text (empty for abstract methods).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodModel {
    pub name: String,
    pub body: String,
}

impl MethodModel {
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    /// Constructor implementation; one entry per declared parameter.
    Constructor { parameters: Vec<TypeRef> },
    /// Property declaration, with the initializer's type if one is present.
    Property {
        name: String,
        initializer: Option<TypeRef>,
    },
    Method(MethodModel),
    /// Accessors, overload signatures, index signatures, static blocks.
    Other,
}

/// Read-only view of one class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassModel {
    pub name: Option<String>,
    pub members: Vec<ClassMember>,
    /// Types listed in `extends` and `implements` clauses, in source order.
    pub heritage: Vec<TypeRef>,
}

impl ClassModel {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_CLASS)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodModel> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Property { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn with_member(mut self, member: ClassMember) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_heritage(mut self, type_ref: TypeRef) -> Self {
        self.heritage.push(type_ref);
        self
    }
}

/// Everything the metrics need from one parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileModel {
    pub path: PathBuf,
    /// Top-level class declarations in source order.
    pub classes: Vec<ClassModel>,
}

impl SourceFileModel {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, classes: Vec<ClassModel>) -> Self {
        Self {
            path: path.into(),
            classes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
