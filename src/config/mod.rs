mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader};
pub use model::{Config, MetricOptions, MetricSettings, Thresholds};
