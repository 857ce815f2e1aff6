use std::rc::Rc;

use common::{decode_artifact, LoadError};
use gloo_net::http::Request;
use model::AnalysisData;

use crate::settings;

/// Single GET of the analysis artifact.
pub async fn fetch_analysis_data() -> Result<Rc<AnalysisData>, LoadError> {
    let url = settings::get_settings().data_url;
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let err = LoadError::Request(e.to_string());
        log::error!("GET {} - {}", url, err);
        err
    })?;

    let status = response.status();
    let body = if response.ok() {
        log::trace!("GET {} - Response received, reading body", url);
        response.text().await.map_err(|e| {
            let err = LoadError::Request(e.to_string());
            log::error!("GET {} - {}", url, err);
            err
        })?
    } else {
        String::new()
    };

    let data = decode_artifact(status, &body).map_err(|err| {
        log::error!("GET {} - {}", url, err);
        err
    })?;

    log::info!(
        "GET {} - Success ({} hotspots, {} months, {} years)",
        url,
        data.hotspots.len(),
        data.seasonal_patterns.len(),
        data.yearly_trends.len()
    );
    Ok(Rc::new(data))
}
