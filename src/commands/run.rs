use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::RunArgs;
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::metrics::run_all;
use crate::output::{ColorMode, ReportSink, sink_for};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_lens(args: &RunArgs, color: ColorMode, quiet: bool) -> i32 {
    let stdout = std::io::stdout();
    match run_lens_impl(args, &FileConfigLoader::new(), color, quiet, stdout.lock()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs every enabled metric over the target directory and writes the
/// reports to `out`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or any metric fails.
pub fn run_lens_impl(
    args: &RunArgs,
    loader: &impl ConfigLoader,
    color: ColorMode,
    quiet: bool,
    out: impl Write,
) -> Result<()> {
    let config = match &args.config {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    let directory: PathBuf = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    tracing::info!(
        "running {} metrics over {}",
        config.enabled_metrics().len(),
        directory.display()
    );

    let started = Instant::now();
    let reports = run_all(&config, &directory)?;

    let mut sink = sink_for(args.format, color, !quiet, out);
    for report in &reports {
        sink.report(report)?;
    }
    sink.finish(started.elapsed())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
