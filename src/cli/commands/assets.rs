use anyhow::Result;
use tracing::{debug, trace};

use super::load_artifact;
use crate::config::Settings;
use crate::report;
use crate::source::ArtifactSource;

pub async fn assets(source: &ArtifactSource, settings: &Settings) -> Result<()> {
    trace!("Entering assets command");
    let deny = &settings.dashboard.excluded_assets;
    debug!("Excluding assets matching: {:?}", deny.patterns);
    let data = load_artifact(source).await?;

    println!("{}", report::assets(&data, deny));
    Ok(())
}
