//! Types shared by the headless CLI and the browser dashboard.
//! Both sides load the same artifact, honour the same display configuration
//! and walk the same fetch lifecycle, so those shapes live here once.

pub mod config;
pub mod fetch;
pub mod format;
pub mod load;

pub use config::{AssetDenyList, CategoryMatching, DashboardConfig, MarkerScale};
pub use fetch::FetchState;
pub use load::{decode_artifact, LoadError, GENERATE_COMMAND};
