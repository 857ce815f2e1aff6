use std::fmt;
use std::path::PathBuf;

use common::{decode_artifact, LoadError};
use model::AnalysisData;
use tracing::{debug, error, info, instrument, trace};

/// Where the analysis artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    Path(PathBuf),
    Url(String),
}

impl ArtifactSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ArtifactSource::Url(raw.to_string())
        } else {
            ArtifactSource::Path(PathBuf::from(raw))
        }
    }

    /// Reads the artifact once. There is no retry.
    #[instrument(skip(self), fields(source = %self))]
    pub async fn load(&self) -> Result<AnalysisData, LoadError> {
        let data = match self {
            ArtifactSource::Path(path) => {
                trace!("Reading artifact from disk");
                let body = tokio::fs::read_to_string(path).await.map_err(|e| {
                    let err = LoadError::Request(format!("{}: {}", path.display(), e));
                    error!("{}", err);
                    err
                })?;
                decode_artifact(200, &body)?
            }
            ArtifactSource::Url(url) => {
                debug!("GET request to: {}", url);
                let response = reqwest::get(url).await.map_err(|e| {
                    let err = LoadError::Request(e.to_string());
                    error!("GET {} - {}", url, err);
                    err
                })?;

                let status = response.status();
                let body = if status.is_success() {
                    response
                        .text()
                        .await
                        .map_err(|e| LoadError::Request(e.to_string()))?
                } else {
                    String::new()
                };
                decode_artifact(status.as_u16(), &body)?
            }
        };

        info!(
            hotspots = data.hotspots.len(),
            months = data.seasonal_patterns.len(),
            years = data.yearly_trends.len(),
            "Analysis data loaded"
        );
        Ok(data)
    }
}

impl fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactSource::Path(path) => write!(f, "{}", path.display()),
            ArtifactSource::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse() {
        assert_eq!(
            ArtifactSource::parse("https://example.org/analysis_data.json"),
            ArtifactSource::Url("https://example.org/analysis_data.json".to_string())
        );
        assert_eq!(
            ArtifactSource::parse("public/analysis_data.json"),
            ArtifactSource::Path(PathBuf::from("public/analysis_data.json"))
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_request_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ArtifactSource::Path(dir.path().join("analysis_data.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Request(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"hotspots\": []}}").unwrap();

        let source = ArtifactSource::Path(file.path().to_path_buf());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert_eq!(err.remediation(), "Run: python update_generate_with_images.py");
    }
}
