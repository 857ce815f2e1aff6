use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use compute::CategorySelection;
use tracing::debug;

pub mod commands;

use crate::config::load_settings;
use crate::source::ArtifactSource;
use commands::{assets, hotspots, summary, trends};

#[derive(Parser)]
#[command(name = "eonet-dashboard")]
#[command(about = "Headless views of the NASA EONET analysis artifact")]
#[command(version)]
pub struct Cli {
    /// Location of analysis_data.json
    ///
    /// A file path, or an http(s) URL fetched with a single GET.
    /// Falls back to the config file, then to ./analysis_data.json.
    #[arg(short, long, env = "EONET_SOURCE", global = true)]
    pub source: Option<String>,

    /// Config file (TOML or JSON) with dashboard settings
    ///
    /// EONET_* environment variables override its values, e.g.
    /// EONET_DASHBOARD__MARKER_LIMIT=10.
    #[arg(long, env = "EONET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Headline metrics, hotspot stats, peak month, growth and asset counts
    Summary,
    /// Hotspot markers and stats for one category
    Hotspots {
        /// `all`, or a token matched against the hotspot category (e.g. Storm, Ice)
        #[arg(short, long, default_value = CategorySelection::ALL_TOKEN)]
        category: String,
    },
    /// Seasonal and yearly series as tables
    Trends,
    /// Visualization assets left after the deny-list
    Assets,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = load_settings(self.config.as_deref())?;
        let source = ArtifactSource::parse(self.source.as_deref().unwrap_or(&settings.source));
        debug!("Artifact source: {}", source);

        match self.command {
            Commands::Summary => {
                summary(&source, &settings).await?;
            }
            Commands::Hotspots { category } => {
                hotspots(&source, &settings, &CategorySelection::parse(&category)).await?;
            }
            Commands::Trends => {
                trends(&source).await?;
            }
            Commands::Assets => {
                assets(&source, &settings).await?;
            }
        }
        Ok(())
    }
}
