use reqwest::Response;

use crate::errors::{ConnectionError, Error, Result};

/// Convert non-2xx responses into a connection error that includes the server body.
///
/// If the status is successful (2xx), the original response is returned.
/// Otherwise the response body is consumed to create an
/// `Error::Connection(ConnectionError::Status)` and returned as an `Err`.
pub(crate) async fn check_http_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| {
        status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string()
    });

    Err(Error::from(ConnectionError::Status { status, body }))
}

/// Reject empty or unparsable endpoint URLs before any I/O.
pub(crate) fn validate_url(url: &str) -> Result<url::Url> {
    if url.trim().is_empty() {
        return Err(Error::invalid_argument("url must not be empty"));
    }
    url::Url::parse(url)
        .map_err(|e| Error::invalid_argument(format!("invalid url {url:?}: {e}")))
}
