//! Schema of the pre-aggregated analysis artifact.
//!
//! The artifact is produced offline and fetched once per session. Everything
//! here is read-only after decoding; optional sub-structures default to empty
//! values instead of failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root document of `analysis_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub executive_metrics: ExecutiveMetrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hotspots: Vec<Hotspot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seasonal_patterns: Vec<SeasonalPattern>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub yearly_trends: Vec<YearlyTrend>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_visualizations: AvailableVisualizations,
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl AnalysisData {
    /// Decodes the artifact from its JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Inclusive date span covered by the observations, as written by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub total_observations: u64,
    #[serde(default)]
    pub unique_events: u64,
    #[serde(default)]
    pub years_tracked: u32,
}

/// Headline figures. Only `category_counts` is interpreted; anything else the
/// pipeline adds is kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutiveMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_counts: BTreeMap<String, u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ExecutiveMetrics {
    /// Observation count for a category label, 0 when the label is absent.
    pub fn count_for(&self, label: &str) -> u64 {
        self.category_counts.get(label).copied().unwrap_or(0)
    }
}

/// A geographic point summarising repeated event occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub title: String,
    pub primary_category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(deserialize_with = "whole_count")]
    pub count: u64,
}

/// One calendar month of the seasonal profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub month_name: String,
    #[serde(default, deserialize_with = "whole_count")]
    pub total_events: u64,
    #[serde(flatten)]
    pub categories: BTreeMap<String, Value>,
}

impl SeasonalPattern {
    /// Per-category counts carried by this month.
    pub fn breakdown(&self) -> Vec<(&str, u64)> {
        numeric_fields(&self.categories)
    }
}

/// One year of the long-term trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTrend {
    pub year: i32,
    #[serde(default, deserialize_with = "whole_count")]
    pub total: u64,
    #[serde(flatten)]
    pub categories: BTreeMap<String, Value>,
}

impl YearlyTrend {
    /// Per-category counts carried by this year.
    pub fn breakdown(&self) -> Vec<(&str, u64)> {
        numeric_fields(&self.categories)
    }
}

/// Pointer to an externally generated image or interactive map fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationAsset {
    pub path: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailableVisualizations {
    #[serde(default, deserialize_with = "null_as_default")]
    pub static_images: BTreeMap<String, VisualizationAsset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interactive_maps: BTreeMap<String, VisualizationAsset>,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A non-negative integer count. Pandas sometimes writes counts as `12.0`,
/// so whole floats are accepted too.
fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn whole_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    as_count(&value).ok_or_else(|| D::Error::custom(format!("expected a whole count, got {value}")))
}

/// Keeps the count-like entries of a flattened field map.
fn numeric_fields(fields: &BTreeMap<String, Value>) -> Vec<(&str, u64)> {
    fields
        .iter()
        .filter_map(|(key, value)| Some((key.as_str(), as_count(value)?)))
        .collect()
}
