//! TypeScript program model: parsed classes plus a declaration index that
//! answers type resolution queries for the coupling metric.

mod complexity;
mod model;
mod parser;
mod project;
mod resolver;

pub use complexity::{ComplexityRules, SyntaxComplexityModel};
pub use model::{
    ClassMember, ClassModel, MethodModel, SourceFileModel, TypeRef, UNNAMED_CLASS,
};
pub use parser::{ParsedFile, parse_source};
pub use project::{
    LanguageTarget, ProjectConfig, find_project_config, project_target, strip_json_comments,
};
pub use resolver::{
    Declaration, DeclarationIndex, DeclarationKind, Symbol, SymbolResolver, TypeChecker,
};

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::{ArtieError, Result};

/// Immutable snapshot of a set of parsed source files, keyed by path in
/// load order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    files: IndexMap<PathBuf, SourceFileModel>,
    declarations: DeclarationIndex,
    target: LanguageTarget,
}

impl Program {
    /// Assemble a program from already-parsed files.
    #[must_use]
    pub fn from_parsed(parsed: Vec<ParsedFile>, target: LanguageTarget) -> Self {
        let mut declarations = DeclarationIndex::default();
        let mut files = IndexMap::with_capacity(parsed.len());
        for file in parsed {
            for declaration in file.declarations {
                declarations.insert(declaration);
            }
            files.insert(file.model.path.clone(), file.model);
        }
        Self {
            files,
            declarations,
            target,
        }
    }

    #[must_use]
    pub fn resolve_file(&self, path: &Path) -> Option<&SourceFileModel> {
        self.files.get(path)
    }

    #[must_use]
    pub const fn type_checker(&self) -> TypeChecker<'_> {
        TypeChecker::new(&self.declarations)
    }

    #[must_use]
    pub const fn target(&self) -> LanguageTarget {
        self.target
    }
}

/// Parse every file and build the program snapshot.
///
/// # Errors
/// Returns an error if any file cannot be read or parsed.
pub fn build_program(project: &ProjectConfig, files: &[PathBuf]) -> Result<Program> {
    tracing::debug!(
        "building program for {} files with {}",
        files.len(),
        project.path.display()
    );

    let parsed = files
        .par_iter()
        .map(|path| load_file(path))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| match e {
            ArtieError::Program(_) => e,
            other => ArtieError::Program(other.to_string()),
        })?;

    Ok(Program::from_parsed(parsed, project.target))
}

fn load_file(path: &Path) -> Result<ParsedFile> {
    let source = fs::read_to_string(path).map_err(|source| ArtieError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source, path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
