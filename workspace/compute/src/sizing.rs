use common::MarkerScale;

/// Marker diameter for an event count: `min(sqrt(count) * factor, cap)`.
///
/// Square-root growth keeps the ordering of counts while stopping the largest
/// hotspots from swamping the map.
pub fn marker_size(count: u64, scale: &MarkerScale) -> f64 {
    ((count as f64).sqrt() * scale.factor).min(scale.cap)
}
