use anyhow::Result;
use tracing::{info, trace};

use super::load_artifact;
use crate::config::Settings;
use crate::report;
use crate::source::ArtifactSource;

pub async fn summary(source: &ArtifactSource, settings: &Settings) -> Result<()> {
    trace!("Entering summary command");
    let data = load_artifact(source).await?;

    println!("{}", report::summary(&data, &settings.dashboard));
    info!("Summary printed");
    Ok(())
}
