pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod program;
pub mod scanner;

pub use error::{ArtieError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
