//! Shared upstream GET helper

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::catalog::error::ResolveError;

/// Sends the request and returns the body text of a 2xx response.
///
/// Any other status is returned as [`ResolveError::Status`] with the body attached,
/// or an empty body if it cannot be read.
pub async fn fetch_text(
    request: RequestBuilder,
    stage: &'static str,
) -> Result<String, ResolveError> {
    let response = request
        .send()
        .await
        .map_err(|source| ResolveError::Transport { stage, source })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} returned status {}: {}", stage, status, response.url());
        return Err(ResolveError::Status {
            stage,
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| ResolveError::Transport { stage, source })
}

/// Sends the request and decodes a 2xx JSON body
pub async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    stage: &'static str,
) -> Result<T, ResolveError> {
    let body = fetch_text(request, stage).await?;

    serde_json::from_str(&body).map_err(|source| {
        warn!("Failed to parse {} response: {}", stage, source);
        ResolveError::Decode { stage, source }
    })
}
