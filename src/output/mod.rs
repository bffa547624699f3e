//! Report sinks: colored text for terminals and a JSON document for tools.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::{ColorMode, TextReporter};

use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::metrics::MetricReport;

/// Consumer of metric reports, fed one metric at a time.
pub trait ReportSink {
    /// Render one metric's insights and reported items.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn report(&mut self, report: &MetricReport) -> Result<()>;

    /// Called once after the last metric.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, elapsed: Duration) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Build the sink for `format`, writing to `out`.
///
/// `show_timing` only affects the text sink.
#[must_use]
pub fn sink_for<'w, W: Write + 'w>(
    format: OutputFormat,
    color: ColorMode,
    show_timing: bool,
    out: W,
) -> Box<dyn ReportSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(out, color).with_timing(show_timing)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
