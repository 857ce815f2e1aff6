use common::AssetDenyList;
use model::VisualizationAsset;
use std::collections::BTreeMap;

/// Whether an asset is hidden by the deny-list. Both the filename key and the
/// title are checked, lower-cased.
pub fn is_excluded(key: &str, asset: &VisualizationAsset, deny: &AssetDenyList) -> bool {
    let key = key.to_lowercase();
    let title = asset.title.to_lowercase();
    deny.patterns.iter().any(|pattern| {
        let pattern = pattern.to_lowercase();
        key.contains(&pattern) || title.contains(&pattern)
    })
}

/// Assets that survive the deny-list, in key order.
pub fn visible_assets<'a>(
    assets: &'a BTreeMap<String, VisualizationAsset>,
    deny: &AssetDenyList,
) -> Vec<(&'a str, &'a VisualizationAsset)> {
    assets
        .iter()
        .filter(|(key, asset)| !is_excluded(key, asset, deny))
        .map(|(key, asset)| (key.as_str(), asset))
        .collect()
}
