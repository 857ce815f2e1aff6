//! Pure computations behind every dashboard view.
//!
//! Nothing here performs IO or keeps state between calls; the browser and the
//! CLI re-run these on every interaction.

pub mod assets;
pub mod charts;
pub mod filter;
pub mod markers;
pub mod metrics;
pub mod projection;
pub mod sizing;
pub mod state;
pub mod stats;

pub use filter::{filter_hotspots, CategorySelection};
pub use markers::{build_markers, Marker};
pub use projection::{project, ScreenPoint};
pub use sizing::marker_size;
pub use state::{DashboardState, Tab, ViewAction};
pub use stats::HotspotStats;
