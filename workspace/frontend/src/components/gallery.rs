mod images;
mod maps;

pub use images::AnalysisImageGallery;
pub use maps::InteractiveMapGallery;

/// Shown when every asset of a kind is missing or excluded.
const ANALYSIS_COMMAND: &str = "python 04_advanced_analysis.py";
