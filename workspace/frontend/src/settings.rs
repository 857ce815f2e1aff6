use common::{AssetDenyList, CategoryMatching, DashboardConfig};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Location of the analysis artifact, relative to the page
    pub data_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Marker, filter and gallery policy
    pub dashboard: DashboardConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_url: "/analysis_data.json".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // localStorage overrides, all optional
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(data_url)) = storage.get_item("eonet_data_url") {
                settings.data_url = data_url;
            }

            if let Ok(Some(log_level)) = storage.get_item("eonet_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(limit)) = storage.get_item("eonet_marker_limit") {
                if let Ok(limit) = limit.parse::<usize>() {
                    settings.dashboard.marker_limit = limit;
                }
            }

            if let Ok(Some(matching)) = storage.get_item("eonet_category_matching") {
                settings.dashboard.category_matching = match matching.as_str() {
                    "case_insensitive" => CategoryMatching::CaseInsensitive,
                    _ => CategoryMatching::CaseSensitive,
                };
            }

            // Comma separated; an empty value shows every asset
            if let Ok(Some(patterns)) = storage.get_item("eonet_excluded_assets") {
                settings.dashboard.excluded_assets = AssetDenyList::new(
                    patterns
                        .split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty()),
                );
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
