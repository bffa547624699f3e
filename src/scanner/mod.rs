//! Source discovery: glob-filtered directory traversal.

mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner {
    filter: GlobFilter,
}

impl DirectoryScanner {
    #[must_use]
    pub const fn new(filter: GlobFilter) -> Self {
        Self { filter }
    }

    fn relative<'p>(root: &Path, path: &'p Path) -> &'p Path {
        path.strip_prefix(root).unwrap_or(path)
    }
}

impl FileScanner for DirectoryScanner {
    /// Absolute paths of every regular file under `root` that the filter
    /// accepts, sorted. Symbolic links are not followed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = dunce::canonicalize(root)?;

        let mut files: Vec<PathBuf> = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !self.filter.excludes_dir(Self::relative(&root, e.path()))
            })
            .filter_map(std::result::Result::ok)
            .filter(|e| {
                e.file_type().is_file()
                    && self.filter.should_include(Self::relative(&root, e.path()))
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        files.sort();
        Ok(files)
    }
}

/// List the files under `root` matching `includes` and none of `excludes`.
///
/// # Errors
/// Returns an error if a pattern is invalid or `root` cannot be resolved.
pub fn list_files(root: &Path, includes: &[String], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let scanner = DirectoryScanner::new(GlobFilter::new(includes, excludes)?);
    scanner.scan(root)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
