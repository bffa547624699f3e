use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ArtieError, Result};
use crate::metrics::{Level, ThresholdConfig};

/// Contents of `.artierc.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns selecting source files, relative to the analyzed directory.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,

    #[serde(default)]
    pub excludes: Vec<String>,

    pub options: MetricOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricOptions {
    #[serde(default)]
    pub default_thresholds: Thresholds,

    /// Per-metric settings, in the order metrics are run.
    #[serde(default)]
    pub metrics: IndexMap<String, MetricSettings>,
}

/// Threshold fields shared by the defaults and every metric entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,

    /// Levels whose items are reported. Unrecognized names are dropped, since
    /// no item can ever carry them.
    #[serde(
        default,
        alias = "reportLevels",
        deserialize_with = "deserialize_levels",
        skip_serializing_if = "Option::is_none"
    )]
    pub levels: Option<Vec<Level>>,
}

fn deserialize_levels<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<Level>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(names.map(|names| {
        names
            .iter()
            .filter_map(|name| {
                let level = Level::ALL.into_iter().find(|level| level.as_str() == name);
                if level.is_none() {
                    tracing::warn!("ignoring unknown report level {name:?}");
                }
                level
            })
            .collect()
    }))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(flatten)]
    pub thresholds: Thresholds,
}

impl MetricSettings {
    fn enabled_with(warning: Option<f64>, critical: Option<f64>) -> Self {
        Self {
            enabled: true,
            thresholds: Thresholds {
                warning,
                critical,
                levels: None,
            },
        }
    }
}

fn default_includes() -> Vec<String> {
    vec!["**/*.ts".to_string()]
}

impl Default for Config {
    /// The configuration written by `artie init`.
    fn default() -> Self {
        let metrics = IndexMap::from([
            ("lcom".to_string(), MetricSettings::enabled_with(Some(5.0), Some(10.0))),
            ("wmc".to_string(), MetricSettings::enabled_with(Some(10.0), Some(25.0))),
            ("rfc".to_string(), MetricSettings::enabled_with(Some(15.0), Some(30.0))),
            ("cbo".to_string(), MetricSettings::enabled_with(None, None)),
        ]);

        Self {
            includes: vec!["**/*.ts".to_string(), "!**/*.d.ts".to_string()],
            excludes: vec![
                "**/*.test.ts".to_string(),
                "node_modules".to_string(),
                "dist".to_string(),
                "scripts/**".to_string(),
            ],
            options: MetricOptions {
                default_thresholds: Thresholds {
                    warning: Some(10.0),
                    critical: Some(20.0),
                    levels: Some(Level::ALL.to_vec()),
                },
                metrics,
            },
        }
    }
}

impl Config {
    /// Names of the enabled metrics, in declaration order.
    #[must_use]
    pub fn enabled_metrics(&self) -> Vec<&str> {
        self.options
            .metrics
            .iter()
            .filter(|(_, settings)| settings.enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Resolve the thresholds of one metric, falling back field by field to
    /// `defaultThresholds`. Returns `None` for a disabled metric.
    ///
    /// The lookup key is the lower-cased `name`.
    ///
    /// # Errors
    /// Returns `MetricNotFound` if the metric has no entry, or
    /// `MissingThreshold` if a field is set neither on the metric nor in the
    /// defaults.
    pub fn metric_thresholds(&self, name: &str) -> Result<Option<ThresholdConfig>> {
        let key = name.to_lowercase();
        let settings = self
            .options
            .metrics
            .get(&key)
            .ok_or_else(|| ArtieError::MetricNotFound(name.to_string()))?;

        if !settings.enabled {
            return Ok(None);
        }

        let own = &settings.thresholds;
        let defaults = &self.options.default_thresholds;
        let missing = |field| ArtieError::MissingThreshold {
            metric: key.clone(),
            field,
        };

        Ok(Some(ThresholdConfig {
            enabled: true,
            warning: own.warning.or(defaults.warning).ok_or_else(|| missing("warning"))?,
            critical: own
                .critical
                .or(defaults.critical)
                .ok_or_else(|| missing("critical"))?,
            report_levels: own
                .levels
                .clone()
                .or_else(|| defaults.levels.clone())
                .ok_or_else(|| missing("levels"))?,
        }))
    }

    /// Pretty-printed JSON form, as written to disk.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
