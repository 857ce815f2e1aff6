use std::path::Path;

use anyhow::{Context, Result};
use common::DashboardConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, trace};

/// Where the artifact is read from when neither `--source` nor the config says otherwise.
pub const DEFAULT_SOURCE: &str = "analysis_data.json";

/// Prefix of every environment override, e.g. `EONET_DASHBOARD__MARKER_LIMIT=10`.
pub const ENV_PREFIX: &str = "EONET";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Path or http(s) URL of the artifact
    pub source: String,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Loads `.env`, then layers defaults, the optional config file and
/// `EONET_*` environment variables, later sources winning.
pub fn load_settings(config_file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();
    build_settings(config_file, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_settings(config_file: Option<&Path>, env: Environment) -> Result<Settings> {
    trace!("Building settings");
    let mut builder = Config::builder().set_default("source", DEFAULT_SOURCE)?;

    if let Some(path) = config_file {
        debug!("Reading config file: {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings: Settings = builder
        .add_source(env)
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    debug!(?settings, "Settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CategoryMatching;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = build_settings(None, no_env()).unwrap();
        assert_eq!(settings.source, DEFAULT_SOURCE);
        assert_eq!(settings.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
source = "https://example.org/analysis_data.json"

[dashboard]
marker_limit = 3
category_matching = "case_insensitive"

[dashboard.excluded_assets]
patterns = ["heatmap"]
"#
        )
        .unwrap();

        let settings = build_settings(Some(file.path()), no_env()).unwrap();
        assert_eq!(settings.source, "https://example.org/analysis_data.json");
        assert_eq!(settings.dashboard.marker_limit, 3);
        assert_eq!(
            settings.dashboard.category_matching,
            CategoryMatching::CaseInsensitive
        );
        assert_eq!(settings.dashboard.excluded_assets.patterns, vec!["heatmap"]);
        assert_eq!(settings.dashboard.marker_scale.cap, 40.0);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[dashboard]\nmarker_limit = 3").unwrap();

        let env = environment().source(Some(HashMap::from([
            ("EONET_DASHBOARD__MARKER_LIMIT".to_string(), "7".to_string()),
            ("EONET_SOURCE".to_string(), "other.json".to_string()),
        ])));

        let settings = build_settings(Some(file.path()), env).unwrap();
        assert_eq!(settings.dashboard.marker_limit, 7);
        assert_eq!(settings.source, "other.json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(build_settings(Some(&missing), no_env()).is_err());
    }
}
