use anyhow::Result;
use tracing::trace;

use super::load_artifact;
use crate::report;
use crate::source::ArtifactSource;

pub async fn trends(source: &ArtifactSource) -> Result<()> {
    trace!("Entering trends command");
    let data = load_artifact(source).await?;

    println!("{}", report::trends(&data));
    Ok(())
}
