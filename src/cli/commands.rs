use anyhow::{anyhow, Result};
use model::AnalysisData;

use crate::source::ArtifactSource;

pub mod assets;
pub mod hotspots;
pub mod summary;
pub mod trends;

pub use assets::assets;
pub use hotspots::hotspots;
pub use summary::summary;
pub use trends::trends;

/// Loads the artifact, turning a failure into an error that carries the
/// regeneration command.
async fn load_artifact(source: &ArtifactSource) -> Result<AnalysisData> {
    source
        .load()
        .await
        .map_err(|err| anyhow!("{} ({})\n{}", err, source, err.remediation()))
}
