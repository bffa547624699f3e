use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ArtieError, Result};
use crate::program::{ProjectConfig, SyntaxComplexityModel, build_program, parse_source};
use crate::scanner::list_files;

use super::{
    LexicalUnitCounter, Metric, MetricInsights, MetricResult, ThresholdConfig, UnitCounter,
    aggregate, classify, compute_cbo, compute_lcom, compute_wmc,
};

/// Outcome of one metric run: the reported items and their insights.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReport {
    pub metric: Metric,
    pub insights: MetricInsights,
    pub results: Vec<MetricResult>,
}

impl MetricReport {
    #[must_use]
    pub fn new(metric: Metric, results: Vec<MetricResult>) -> Self {
        Self {
            metric,
            insights: aggregate(&results),
            results,
        }
    }
}

/// Run one metric over `directory`.
///
/// Results whose level is not in `thresholds.report_levels` are dropped
/// before aggregation.
///
/// # Errors
/// Returns an error if discovery fails, a file cannot be read, or a metric
/// that needs a `tsconfig` finds none.
pub fn run_metric(
    metric: Metric,
    directory: &Path,
    thresholds: &ThresholdConfig,
    includes: &[String],
    excludes: &[String],
) -> Result<MetricReport> {
    let started = Instant::now();

    let scored = match metric {
        Metric::Cbo => measure_cbo(directory, includes, excludes)?,
        Metric::Rfc => measure_rfc(directory, includes, excludes)?,
        Metric::Lcom => measure_lcom(directory, includes, excludes)?,
        Metric::Wmc => measure_wmc(directory, includes, excludes)?,
    };

    let results: Vec<MetricResult> = scored
        .into_iter()
        .map(|(subject, total)| MetricResult::new(subject, total, classify(total, thresholds)))
        .filter(|result| thresholds.reports(result.label))
        .collect();

    tracing::info!(
        "{} finished in {:.2?} with {} reported items",
        metric,
        started.elapsed(),
        results.len()
    );
    Ok(MetricReport::new(metric, results))
}

/// Run every enabled metric of `config`, in configuration order.
///
/// # Errors
/// Returns the first error raised by any metric.
pub fn run_all(config: &Config, directory: &Path) -> Result<Vec<MetricReport>> {
    let mut reports = Vec::new();
    for name in config.enabled_metrics() {
        let metric: Metric = name.parse()?;
        let Some(thresholds) = config.metric_thresholds(name)? else {
            continue;
        };
        reports.push(run_metric(
            metric,
            directory,
            &thresholds,
            &config.includes,
            &config.excludes,
        )?);
    }
    Ok(reports)
}

fn discover(directory: &Path, includes: &[String], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let files = list_files(directory, includes, excludes)?;
    tracing::debug!("discovered {} files under {}", files.len(), directory.display());
    Ok(files)
}

fn subject(path: &Path) -> String {
    path.display().to_string()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ArtieError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn measure_cbo(
    directory: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<(String, usize)>> {
    let project = ProjectConfig::discover(directory)?;
    let files = discover(directory, includes, excludes)?;
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let program = build_program(&project, &files)?;
    Ok(files
        .par_iter()
        .map(|file| (subject(file), compute_cbo(file, &program)))
        .collect())
}

fn measure_rfc(
    directory: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<(String, usize)>> {
    let files = discover(directory, includes, excludes)?;
    let counter = LexicalUnitCounter::new();
    files
        .par_iter()
        .map(|file| -> Result<(String, usize)> {
            Ok((subject(file), counter.count(&read(file)?)))
        })
        .collect()
}

fn measure_lcom(
    directory: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<(String, usize)>> {
    let files = discover(directory, includes, excludes)?;
    let per_file = files
        .par_iter()
        .map(|file| -> Result<Vec<(String, usize)>> {
            let parsed = parse_source(&read(file)?, file)?;
            Ok(parsed
                .model
                .classes
                .iter()
                .map(|class| (class.display_name().to_string(), compute_lcom(class)))
                .collect())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

fn measure_wmc(
    directory: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<(String, usize)>> {
    let project = ProjectConfig::discover_lenient(directory)?;
    let files = discover(directory, includes, excludes)?;
    let model = SyntaxComplexityModel::default();
    files
        .par_iter()
        .map(|file| -> Result<(String, usize)> {
            Ok((subject(file), compute_wmc(file, &model, project.target)?))
        })
        .collect()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
