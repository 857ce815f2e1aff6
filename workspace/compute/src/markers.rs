use common::DashboardConfig;
use model::{Category, Hotspot};
use tracing::debug;

use crate::filter::{filter_hotspots, CategorySelection};
use crate::projection::{project, ScreenPoint};
use crate::sizing::marker_size;

/// Everything needed to draw one hotspot on the pseudo-map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<'a> {
    pub hotspot: &'a Hotspot,
    pub position: ScreenPoint,
    /// Diameter of the solid dot, in pixels
    pub size: f64,
    /// Diameter of the pulsing halo around the dot
    pub halo: f64,
    pub color: &'static str,
}

impl Marker<'_> {
    pub fn title(&self) -> &str {
        &self.hotspot.title
    }
}

/// Filters by `selection`, keeps the first `marker_limit` survivors and derives
/// their screen parameters.
pub fn build_markers<'a>(
    hotspots: &'a [Hotspot],
    selection: &CategorySelection,
    config: &DashboardConfig,
) -> Vec<Marker<'a>> {
    let filtered = filter_hotspots(hotspots, selection, config.category_matching);
    if filtered.len() > config.marker_limit {
        debug!(
            shown = config.marker_limit,
            matched = filtered.len(),
            "Marker limit reached, dropping the remainder"
        );
    }

    filtered
        .into_iter()
        .take(config.marker_limit)
        .map(|hotspot| {
            let size = marker_size(hotspot.count, &config.marker_scale);
            Marker {
                hotspot,
                position: project(hotspot.latitude, hotspot.longitude),
                size,
                halo: size * 2.0,
                color: Category::hex_for_label(&hotspot.primary_category),
            }
        })
        .collect()
}
