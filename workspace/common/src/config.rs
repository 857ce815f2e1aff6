//! Display policy for the dashboard.
//!
//! Every field has a default so a partial config file (or none at all) is
//! enough. The CLI layers this from files and environment variables, the
//! browser from `localStorage`.

use serde::{Deserialize, Serialize};

/// Maximum number of markers drawn on the pseudo-map.
pub const DEFAULT_MARKER_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Markers beyond this many (after filtering) are not drawn.
    pub marker_limit: usize,
    pub marker_scale: MarkerScale,
    pub category_matching: CategoryMatching,
    pub excluded_assets: AssetDenyList,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            marker_limit: DEFAULT_MARKER_LIMIT,
            marker_scale: MarkerScale::default(),
            category_matching: CategoryMatching::default(),
            excluded_assets: AssetDenyList::default(),
        }
    }
}

/// Square-root marker scale: `size = min(sqrt(count) * factor, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerScale {
    pub factor: f64,
    pub cap: f64,
}

impl Default for MarkerScale {
    fn default() -> Self {
        Self {
            factor: 2.0,
            cap: 40.0,
        }
    }
}

/// How a category token is compared against `primary_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatching {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

/// Substrings of asset filenames or titles that are hidden from the galleries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDenyList {
    pub patterns: Vec<String>,
}

impl AssetDenyList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty list keeps every asset.
    pub fn none() -> Self {
        Self { patterns: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for AssetDenyList {
    fn default() -> Self {
        Self::new([
            "3d_density",
            "density_surface",
            "space_time",
            "spacetime",
            "pie_chart",
            "pie chart",
            "infographic",
            "multi_panel",
        ])
    }
}
