//! The four structural metrics and the pipeline that classifies and
//! aggregates their results.

mod classifier;
mod cohesion;
mod complexity;
mod coupling;
mod insight;
mod runner;
mod stats;
mod units;

pub use classifier::{Level, ThresholdConfig, classify};
pub use cohesion::compute_lcom;
pub use complexity::{ComplexityModel, ComplexityNode, aggregate_complexity, compute_wmc};
pub use coupling::{add_dependency_from_symbol, collect_class_dependencies, compute_cbo};
pub use insight::insight;
pub use runner::{MetricReport, run_all, run_metric};
pub use stats::{MetricInsights, aggregate};
pub use units::{LexicalUnitCounter, UnitCounter};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ArtieError;

/// The supported metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Coupling between objects.
    Cbo,
    /// Response for a class.
    Rfc,
    /// Lack of cohesion of methods.
    Lcom,
    /// Weighted method complexity.
    Wmc,
}

impl Metric {
    pub const ALL: [Self; 4] = [Self::Cbo, Self::Rfc, Self::Lcom, Self::Wmc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cbo => "cbo",
            Self::Rfc => "rfc",
            Self::Lcom => "lcom",
            Self::Wmc => "wmc",
        }
    }

    /// Whether the metric reads the project's `tsconfig`.
    #[must_use]
    pub const fn needs_project(self) -> bool {
        matches!(self, Self::Cbo | Self::Wmc)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ArtieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cbo" => Ok(Self::Cbo),
            "rfc" => Ok(Self::Rfc),
            "lcom" => Ok(Self::Lcom),
            "wmc" => Ok(Self::Wmc),
            _ => Err(ArtieError::MetricNotFound(s.to_string())),
        }
    }
}

/// One classified measurement.
///
/// `subject` is a file path for CBO, RFC and WMC and a class name for LCOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub subject: String,
    pub total: usize,
    pub label: Level,
}

impl MetricResult {
    #[must_use]
    pub fn new(subject: impl Into<String>, total: usize, label: Level) -> Self {
        Self {
            subject: subject.into(),
            total,
            label,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
