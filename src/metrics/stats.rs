use serde::Serialize;

use super::MetricResult;

/// Aggregate figures for one metric run.
///
/// `average` and `deviation` are pre-formatted: two decimals for a non-empty
/// run, a bare `"0"` for an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricInsights {
    pub total: usize,
    pub max: usize,
    pub min: usize,
    pub average: String,
    pub deviation: String,
}

impl Default for MetricInsights {
    fn default() -> Self {
        Self {
            total: 0,
            max: 0,
            min: 0,
            average: "0".to_string(),
            deviation: "0".to_string(),
        }
    }
}

/// Reduce a (pre-filtered) result set to its insights.
///
/// The deviation is the population standard deviation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(results: &[MetricResult]) -> MetricInsights {
    if results.is_empty() {
        return MetricInsights::default();
    }

    let values: Vec<usize> = results.iter().map(|r| r.total).collect();
    let total: usize = values.iter().sum();
    let max = values.iter().copied().max().unwrap_or(0);
    let min = values.iter().copied().min().unwrap_or(0);

    let count = values.len() as f64;
    let average = total as f64 / count;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - average).powi(2))
        .sum::<f64>()
        / count;
    let deviation = variance.sqrt();

    MetricInsights {
        total,
        max,
        min,
        average: to_fixed_2(average),
        deviation: to_fixed_2(deviation),
    }
}

/// Two-decimal formatting where an exact midpoint rounds away from zero.
///
/// `{:.2}` rounds the exact binary value correctly but sends ties to the even
/// digit. A value sits exactly between two cents only when it is an odd
/// multiple of 1/8, so only that case is rounded by hand.
#[allow(clippy::float_cmp)]
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if is_tie {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
