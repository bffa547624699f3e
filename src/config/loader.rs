use std::path::{Path, PathBuf};

use crate::error::{ArtieError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".artierc.json";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file is missing, unreadable or invalid.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads `.artierc.json` from the current directory, or an explicit path.
///
/// There is no fallback: a missing file is an error.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Result<PathBuf> {
        Ok(self.fs.current_dir()?.join(CONFIG_FILE_NAME))
    }

    fn parse_config(path: &Path, content: &str) -> Result<Config> {
        serde_json::from_str(content)
            .map_err(|e| ArtieError::Config(format!("{}: {e}", path.display())))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let path = self.local_config_path()?;
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(ArtieError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ArtieError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("loaded configuration from {}", path.display());
        Self::parse_config(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
