use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::metrics::MetricReport;

use super::ReportSink;

/// Collects every report and writes them as one JSON document on `finish`.
pub struct JsonReporter<W: Write> {
    out: W,
    reports: Vec<MetricReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    metrics: &'a [MetricReport],
    elapsed_ms: u64,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> ReportSink for JsonReporter<W> {
    fn report(&mut self, report: &MetricReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> Result<()> {
        let output = JsonOutput {
            metrics: &self.reports,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        serde_json::to_writer_pretty(&mut self.out, &output)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
