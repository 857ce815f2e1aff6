//! Equirectangular projection onto a 2:1 canvas expressed in percent.

/// Position on the map canvas, in percent of its width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps latitude/longitude (degrees) to canvas percentages.
///
/// Longitude -180 is the left edge, +180 the right edge; latitude +90 is the
/// top edge, -90 the bottom edge. Out-of-range input is not clamped and lands
/// off-canvas.
pub fn project(latitude: f64, longitude: f64) -> ScreenPoint {
    ScreenPoint {
        x: (longitude + 180.0) / 360.0 * 100.0,
        y: (90.0 - latitude) / 180.0 * 100.0,
    }
}
