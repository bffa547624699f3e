use std::fs;

use crate::cli::InitArgs;
use crate::config::Config;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, quiet: bool) -> i32 {
    match run_init_impl(args, quiet) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// An existing file is left untouched (with a warning) unless `--force` is set.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn run_init_impl(args: &InitArgs, quiet: bool) -> Result<()> {
    let output_path = &args.output;
    let name = output_path
        .file_name()
        .map_or_else(|| output_path.display().to_string(), |n| n.to_string_lossy().into_owned());

    if output_path.exists() && !args.force {
        println!("⚠️  The file {name} already exists on the current directory.");
        return Ok(());
    }

    let template = generate_config_template()?;
    fs::write(output_path, template)?;

    if !quiet {
        println!("✅ File {name} created!");
    }
    Ok(())
}

/// The default configuration as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn generate_config_template() -> Result<String> {
    Config::default().to_json_pretty()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
