use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::core::PastebinHttpClient;
use super::form::Form;
use super::transport::FormTransport;
use crate::errors::Result;
use crate::sdk_log;
use crate::util::{check_http_status, validate_url};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

#[async_trait]
impl FormTransport for PastebinHttpClient {
    /// POST `form` to `url` and read the whole body as text.
    ///
    /// # Errors
    /// - [`crate::Error::InvalidArgument`] if `url` is empty or unparsable (no request is made).
    /// - [`crate::Error::Connection`] for transport failures and non-2xx statuses.
    async fn send_form(&self, url: &str, form: &Form) -> Result<String> {
        let url = validate_url(url)?;

        sdk_log!(debug, "POST {} [{}]", url.path(), form.keys().collect::<Vec<_>>().join(","));

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode())
            .send()
            .await?;

        let response = check_http_status(response).await?;
        Ok(response.text().await?)
    }
}
