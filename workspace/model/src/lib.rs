pub mod analysis;
pub mod category;

pub use analysis::{
    AnalysisData, AvailableVisualizations, DateRange, ExecutiveMetrics, Hotspot, Metadata,
    SeasonalPattern, VisualizationAsset, YearlyTrend,
};
pub use category::{Category, FALLBACK_BADGE, FALLBACK_HEX};

// Re-export tracing for use in this crate
pub use tracing;

// Initialize tracing if not already initialized
#[cfg(not(test))]
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    // The log level can be controlled via the RUST_LOG environment variable,
    // falling back to `info` when it is unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init();
}
