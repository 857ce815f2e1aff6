use model::AnalysisData;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// The offline step that (re)generates the artifact.
pub const GENERATE_COMMAND: &str = "python update_generate_with_images.py";

/// Why the analysis artifact could not be loaded.
///
/// There is no retry: any of these ends the session until the page (or the
/// command) is run again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("analysis data not available (HTTP {status})")]
    Status { status: u16 },

    /// The request itself failed, or the file could not be read
    #[error("could not fetch analysis data: {0}")]
    Request(String),

    /// The body is not a valid analysis document
    #[error("analysis data is malformed: {0}")]
    Decode(String),
}

impl LoadError {
    /// Instruction shown next to every load failure.
    pub fn remediation(&self) -> String {
        format!("Run: {}", GENERATE_COMMAND)
    }
}

/// Turns a raw response into the artifact. Non-2xx statuses are failures
/// regardless of the body.
#[instrument(skip(body), fields(body_len = body.len()))]
pub fn decode_artifact(status: u16, body: &str) -> Result<AnalysisData, LoadError> {
    if !(200..300).contains(&status) {
        let err = LoadError::Status { status };
        error!(?err, "Artifact request returned non-success status");
        return Err(err);
    }

    let data = AnalysisData::from_json(body).map_err(|e| {
        let err = LoadError::Decode(e.to_string());
        error!(?err, "Artifact body could not be decoded");
        err
    })?;

    debug!(
        hotspots = data.hotspots.len(),
        months = data.seasonal_patterns.len(),
        years = data.yearly_trends.len(),
        "Artifact decoded"
    );
    Ok(data)
}
