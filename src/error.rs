use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtieError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {}. Run 'artie init' to create one.", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Metric {0} not found.")]
    MetricNotFound(String),

    #[error("Metric {metric} has no '{field}' threshold and no default is configured")]
    MissingThreshold { metric: String, field: &'static str },

    #[error("tsconfig.json not found in {}", dir.display())]
    ProjectConfigNotFound { dir: PathBuf },

    #[error("Failed to read {}: {message}", path.display())]
    ProjectConfig { path: PathBuf, message: String },

    #[error("Failed to create project program: {0}")]
    Program(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArtieError {
    /// Short category name, used in JSON error output and logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::ConfigNotFound { .. }
            | Self::MetricNotFound(_)
            | Self::MissingThreshold { .. } => "Config",
            Self::ProjectConfigNotFound { .. } | Self::ProjectConfig { .. } => "ProjectConfig",
            Self::Program(_) => "Program",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Json(_) => "Json",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtieError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
