use anyhow::Result;
use compute::CategorySelection;
use tracing::{debug, trace};

use super::load_artifact;
use crate::config::Settings;
use crate::report;
use crate::source::ArtifactSource;

pub async fn hotspots(
    source: &ArtifactSource,
    settings: &Settings,
    selection: &CategorySelection,
) -> Result<()> {
    trace!("Entering hotspots command");
    debug!(
        "Category: {}, matching: {:?}, marker limit: {}",
        selection, settings.dashboard.category_matching, settings.dashboard.marker_limit
    );
    let data = load_artifact(source).await?;

    println!("{}", report::hotspots(&data, selection, &settings.dashboard));
    Ok(())
}
