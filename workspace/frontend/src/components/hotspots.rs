mod legend;
mod map;
mod stats;

pub use map::GeospatialHotspots;
