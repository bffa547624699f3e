use std::path::{Component, Path};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{ArtieError, Result};

pub trait FileFilter {
    /// `relative` is the candidate's path relative to the scan root.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Include/exclude glob filter.
///
/// `*` and `?` do not cross `/`; `**` spans any number of directories. An
/// include prefixed with `!` is treated as an exclude. Paths with a segment
/// starting with `.` are only matched by includes that spell out such a
/// segment themselves (e.g. `.config/**/*.ts`).
pub struct GlobFilter {
    include_patterns: GlobSet,
    dot_include_patterns: GlobSet,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter from include and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut includes = Vec::new();
        let mut excludes: Vec<String> = exclude_patterns.to_vec();
        for pattern in include_patterns {
            match pattern.strip_prefix('!') {
                Some(negated) => excludes.push(negated.to_string()),
                None => includes.push(pattern.clone()),
            }
        }
        let dot_includes: Vec<String> = includes
            .iter()
            .filter(|p| names_dot_segment(p))
            .cloned()
            .collect();

        Ok(Self {
            include_patterns: build_set(&includes)?,
            dot_include_patterns: build_set(&dot_includes)?,
            exclude_patterns: build_set(&excludes)?,
        })
    }

    /// Whether `relative` names a directory that the walk can skip.
    #[must_use]
    pub fn excludes_dir(&self, relative: &Path) -> bool {
        if is_hidden(relative) && self.dot_include_patterns.is_empty() {
            return true;
        }
        self.exclude_patterns.is_match(relative)
            || self.exclude_patterns.is_match(relative.join("_"))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &Path) -> bool {
        let includes = if is_hidden(relative) {
            &self.dot_include_patterns
        } else {
            &self.include_patterns
        };
        includes.is_match(relative) && !self.exclude_patterns.is_match(relative)
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn names_dot_segment(pattern: &str) -> bool {
    let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
    normalized
        .split('/')
        .any(|segment| segment.starts_with('.') && segment != "." && segment != "..")
}

fn compile(pattern: &str) -> Result<Glob> {
    let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
    GlobBuilder::new(normalized)
        .literal_separator(true)
        .build()
        .map_err(|e| ArtieError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
    }
    builder.build().map_err(|e| ArtieError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
