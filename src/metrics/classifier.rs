use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity band of a single measurement.
///
/// Variants are declared in severity order, so `Ord` compares severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Ok,
    Warning,
    Critical,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Ok, Self::Warning, Self::Critical];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OK" => Ok(Self::Ok),
            "WARNING" => Ok(Self::Warning),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!("Unknown level: {s}")),
        }
    }
}

/// Fully resolved thresholds for one metric.
///
/// `warning <= critical` is assumed but not checked. With `warning > critical`
/// a total can never be classified as WARNING.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    pub enabled: bool,
    pub warning: f64,
    pub critical: f64,
    pub report_levels: Vec<Level>,
}

impl ThresholdConfig {
    #[must_use]
    pub fn reports(&self, level: Level) -> bool {
        self.report_levels.contains(&level)
    }
}

/// Map a metric total onto its severity band.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify(total: usize, thresholds: &ThresholdConfig) -> Level {
    let total = total as f64;
    if total >= thresholds.critical {
        Level::Critical
    } else if total >= thresholds.warning {
        Level::Warning
    } else {
        Level::Ok
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
