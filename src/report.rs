//! Plain-text renderings of the dashboard views.
//!
//! Each function returns the whole report so it can be checked without a
//! terminal.

use common::format::{group_thousands, share, timestamp};
use common::{AssetDenyList, DashboardConfig};
use compute::assets::visible_assets;
use compute::charts::{
    growth_percent, peak_record, seasonal_records, series_keys, series_label, yearly_records,
    ChartRecord,
};
use compute::metrics::executive_cards;
use compute::{build_markers, filter_hotspots, CategorySelection, HotspotStats};
use model::{AnalysisData, VisualizationAsset};
use std::collections::BTreeMap;

pub fn summary(data: &AnalysisData, config: &DashboardConfig) -> String {
    let metadata = &data.metadata;
    let mut lines = vec![
        format!(
            "NASA EONET analysis {} to {}",
            metadata.date_range.start, metadata.date_range.end
        ),
        format!(
            "Observations: {} | Unique events: {} | Years tracked: {}",
            group_thousands(metadata.total_observations),
            group_thousands(metadata.unique_events),
            metadata.years_tracked
        ),
        String::new(),
        "Categories".to_string(),
    ];

    for card in executive_cards(data) {
        lines.push(format!(
            "  {:<18} {:>10} {:>7}",
            card.category.label(),
            group_thousands(card.count),
            share(card.share_percent)
        ));
    }

    let stats = HotspotStats::from_hotspots(&data.hotspots);
    lines.push(String::new());
    lines.push(stats_line(&stats));

    let seasonal = seasonal_records(&data.seasonal_patterns);
    if let Some(peak) = peak_record(&seasonal) {
        lines.push(format!(
            "Peak month: {} ({} events)",
            peak.label,
            group_thousands(peak.total)
        ));
    }
    if let Some(growth) = growth_percent(&yearly_records(&data.yearly_trends)) {
        lines.push(format!("Yearly growth: {:.1}%", growth));
    }

    let visualizations = &data.available_visualizations;
    lines.push(asset_count_line(
        "Static images",
        &visualizations.static_images,
        &config.excluded_assets,
    ));
    lines.push(asset_count_line(
        "Interactive maps",
        &visualizations.interactive_maps,
        &config.excluded_assets,
    ));

    if let Some(generated_at) = &data.generated_at {
        lines.push(format!("Generated: {}", timestamp(generated_at)));
    }

    lines.join("\n")
}

/// Marker table for `selection`, followed by the stats of every match.
pub fn hotspots(data: &AnalysisData, selection: &CategorySelection, config: &DashboardConfig) -> String {
    let markers = build_markers(&data.hotspots, selection, config);
    let matched = filter_hotspots(&data.hotspots, selection, config.category_matching);

    let mut lines = vec![
        format!("Hotspots ({})", selection),
        format!(
            "{:<32} {:<18} {:>8} {:>7} {:>7} {:>6}",
            "Title", "Category", "Count", "X %", "Y %", "Size"
        ),
    ];
    for marker in &markers {
        lines.push(format!(
            "{:<32} {:<18} {:>8} {:>7.2} {:>7.2} {:>6.1}",
            marker.title(),
            marker.hotspot.primary_category,
            group_thousands(marker.hotspot.count),
            marker.position.x,
            marker.position.y,
            marker.size
        ));
    }
    if markers.is_empty() {
        lines.push("No hotspots match this category".to_string());
    } else if matched.len() > markers.len() {
        lines.push(format!(
            "({} more not drawn, marker limit is {})",
            matched.len() - markers.len(),
            config.marker_limit
        ));
    }

    lines.push(String::new());
    lines.push(stats_line(&HotspotStats::from_hotspots(matched)));
    lines.join("\n")
}

pub fn trends(data: &AnalysisData) -> String {
    let seasonal = seasonal_records(&data.seasonal_patterns);
    let yearly = yearly_records(&data.yearly_trends);

    let mut lines = vec!["Seasonal patterns".to_string()];
    lines.extend(record_table("Month", &seasonal));
    if let Some(peak) = peak_record(&seasonal) {
        lines.push(format!("Peak: {} ({} events)", peak.label, group_thousands(peak.total)));
    }

    lines.push(String::new());
    lines.push("Yearly trends".to_string());
    lines.extend(record_table("Year", &yearly));
    if let Some(growth) = growth_percent(&yearly) {
        lines.push(format!("Growth: {:.1}%", growth));
    }

    lines.join("\n")
}

pub fn assets(data: &AnalysisData, deny: &AssetDenyList) -> String {
    let visualizations = &data.available_visualizations;
    let mut lines = Vec::new();

    for (heading, assets) in [
        ("Static images", &visualizations.static_images),
        ("Interactive maps", &visualizations.interactive_maps),
    ] {
        lines.push(asset_count_line(heading, assets, deny));
        for (key, asset) in visible_assets(assets, deny) {
            lines.push(format!("  {:<28} {:<28} {}", key, asset.title, asset.path));
        }
    }

    lines.join("\n")
}

fn stats_line(stats: &HotspotStats) -> String {
    format!(
        "Total events: {} | Active hotspots: {} | Avg per hotspot: {} | Max intensity: {}",
        group_thousands(stats.total),
        stats.active_count,
        group_thousands(stats.average),
        group_thousands(stats.max)
    )
}

fn asset_count_line(
    heading: &str,
    assets: &BTreeMap<String, VisualizationAsset>,
    deny: &AssetDenyList,
) -> String {
    let visible = visible_assets(assets, deny).len();
    format!(
        "{}: {} visible, {} hidden",
        heading,
        visible,
        assets.len() - visible
    )
}

/// One row per record, one column per series. Missing values print as `-`.
fn record_table(label_heading: &str, records: &[ChartRecord]) -> Vec<String> {
    let keys = series_keys(records);

    let mut header = format!("{:<12} {:>8}", label_heading, "Total");
    for key in &keys {
        header.push_str(&format!(" {:>12}", series_label(key)));
    }

    let mut lines = vec![header];
    for record in records {
        let mut row = format!("{:<12} {:>8}", record.label, record.total);
        for key in &keys {
            let value = record
                .value(key)
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            row.push_str(&format!(" {:>12}", value));
        }
        lines.push(row);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../fixtures/analysis_data.json");

    fn data() -> AnalysisData {
        AnalysisData::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn test_summary() {
        let report = summary(&data(), &DashboardConfig::default());
        assert!(report.starts_with("NASA EONET analysis 2020-01-01 to 2024-12-31"));
        assert!(report.contains("Observations: 48,210 | Unique events: 9,134 | Years tracked: 5"));
        assert!(report.contains("65.2%"));
        assert!(report.contains("Active hotspots: 5"));
        assert!(report.contains("Max intensity: 400"));
        assert!(report.contains("Peak month: August (7,240 events)"));
        assert!(report.contains("Yearly growth: 236.1%"));
        assert!(report.contains("Static images: 2 visible, 3 hidden"));
        assert!(report.contains("Interactive maps: 1 visible, 1 hidden"));
        assert!(report.contains("Generated: 2024-12-31 18:45:12"));
    }

    #[test]
    fn test_hotspots_filtered_by_storm() {
        let report = hotspots(
            &data(),
            &CategorySelection::parse("Storm"),
            &DashboardConfig::default(),
        );
        assert!(report.contains("Western Pacific Typhoon Belt"));
        assert!(report.contains("Bay of Bengal"));
        assert!(!report.contains("Kamchatka Arc"));
        assert!(report.contains("Total events: 569 | Active hotspots: 2 | Avg per hotspot: 285"));
    }

    #[test]
    fn test_hotspots_limit_keeps_stats_of_all_matches() {
        let config = DashboardConfig {
            marker_limit: 2,
            ..DashboardConfig::default()
        };
        let report = hotspots(&data(), &CategorySelection::All, &config);
        assert!(report.contains("(3 more not drawn, marker limit is 2)"));
        assert!(report.contains("Active hotspots: 5"));
    }

    #[test]
    fn test_hotspots_without_match() {
        let report = hotspots(
            &data(),
            &CategorySelection::parse("Drought"),
            &DashboardConfig::default(),
        );
        assert!(report.contains("No hotspots match this category"));
        assert!(report.contains("Total events: 0 | Active hotspots: 0 | Avg per hotspot: 0 | Max intensity: 0"));
    }

    #[test]
    fn test_trends_tables() {
        let report = trends(&data());
        let header = report.lines().nth(1).unwrap();
        assert!(header.contains("Storms"));
        assert!(header.contains("Volcanoes"));
        assert!(header.contains("Wildfires"));
        assert!(report.contains("Peak: August (7,240 events)"));
        assert!(report.contains("Growth: 236.1%"));
        // Yearly columns come from the yearly rows only
        assert!(report.lines().any(|l| l.starts_with("2020") && !l.contains('-')));
    }

    #[test]
    fn test_assets_respect_deny_list() {
        let data = data();
        let report = assets(&data, &AssetDenyList::default());
        assert!(report.contains("hexbin_density.png"));
        assert!(report.contains("dbscan_clusters.png"));
        assert!(report.contains("hotspot_heatmap.html"));
        assert!(!report.contains("3d_density_surface.png"));
        assert!(!report.contains("category_breakdown.png"));
        assert!(!report.contains("multi_panel_infographic.html"));

        let everything = assets(&data, &AssetDenyList::none());
        assert!(everything.contains("Static images: 5 visible, 0 hidden"));
        assert!(everything.contains("space_time_cube.png"));
    }
}
