use std::path::Path;

use indexmap::IndexSet;

use crate::program::{ClassMember, Program, SourceFileModel, Symbol, SymbolResolver, TypeRef};

/// Record the dependency a resolved symbol stands for.
///
/// A symbol with no declarations at all (ambient or external) is recorded
/// under its own name; otherwise the first class declaration wins and
/// non-class declarations are ignored.
pub fn add_dependency_from_symbol(
    symbol: &Symbol,
    resolver: &impl SymbolResolver,
    dependencies: &mut IndexSet<String>,
) {
    let declarations = resolver.declarations_of(symbol);
    if declarations.is_empty() {
        dependencies.insert(symbol.name().to_string());
        return;
    }

    if let Some(class_name) = declarations.iter().find_map(|d| d.class_name()) {
        dependencies.insert(class_name.to_string());
    }
}

fn add_dependency(
    node: &TypeRef,
    resolver: &impl SymbolResolver,
    dependencies: &mut IndexSet<String>,
) {
    if let Some(symbol) = resolver.resolve_type(node) {
        add_dependency_from_symbol(&symbol, resolver, dependencies);
    }
}

/// Collect the class dependencies of every named top-level class in a file
/// into one set.
#[must_use]
pub fn collect_class_dependencies(
    file: &SourceFileModel,
    resolver: &impl SymbolResolver,
) -> IndexSet<String> {
    let mut dependencies = IndexSet::new();

    for class in file.classes.iter().filter(|c| c.name.is_some()) {
        for member in &class.members {
            match member {
                ClassMember::Constructor { parameters } => {
                    for parameter in parameters {
                        add_dependency(parameter, resolver, &mut dependencies);
                    }
                }
                ClassMember::Property {
                    initializer: Some(initializer),
                    ..
                } => add_dependency(initializer, resolver, &mut dependencies),
                _ => {}
            }

            // Heritage is revisited per member; a class without members
            // contributes none.
            for heritage in &class.heritage {
                add_dependency(heritage, resolver, &mut dependencies);
            }
        }
    }

    dependencies
}

/// Coupling between objects for one file of `program`; 0 if the file is not
/// part of the program.
#[must_use]
pub fn compute_cbo(path: &Path, program: &Program) -> usize {
    program.resolve_file(path).map_or(0, |file| {
        collect_class_dependencies(file, &program.type_checker()).len()
    })
}

#[cfg(test)]
#[path = "coupling_tests.rs"]
mod tests;
