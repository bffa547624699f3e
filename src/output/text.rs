use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::metrics::{Level, MetricReport, insight};

use super::ReportSink;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: a summary block per metric followed by every
/// reported item with its advisory message.
pub struct TextReporter<W: Write> {
    out: W,
    use_colors: bool,
    show_timing: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            use_colors: mode.use_colors(),
            show_timing: true,
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, show: bool) -> Self {
        self.show_timing = show;
        self
    }

    fn colorize(&self, text: &str, level: Level) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match level {
            Level::Ok => ansi::GREEN,
            Level::Warning => ansi::YELLOW,
            Level::Critical => ansi::RED,
        };

        format!("{color}{text}{}", ansi::RESET)
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn report(&mut self, report: &MetricReport) -> Result<()> {
        let insights = &report.insights;
        writeln!(
            self.out,
            "\n📊 {} Metrics:",
            report.metric.as_str().to_uppercase()
        )?;
        writeln!(self.out, "- Total: {}", insights.total)?;
        writeln!(self.out, "- Average: {}", insights.average)?;
        writeln!(self.out, "- Maximum: {}", insights.max)?;
        writeln!(self.out, "- Minimum: {}", insights.min)?;
        writeln!(self.out, "- Standard Deviation: {}", insights.deviation)?;

        if report.results.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "\nFiles:")?;
        for item in &report.results {
            let line = format!("[{}] {} → {}", item.label, item.subject, item.total);
            writeln!(self.out, "{}", self.colorize(&line, item.label))?;
            writeln!(self.out, "   💡 {}", insight(report.metric, item.label))?;
        }
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> Result<()> {
        if self.show_timing {
            writeln!(
                self.out,
                "Total time: {:.3}ms",
                elapsed.as_secs_f64() * 1000.0
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
