use std::fmt::Debug;

use async_trait::async_trait;

use super::form::Form;
use crate::errors::Result;

/// The one capability the SDK needs from the network: POST a form, get the body back.
///
/// Implementations must
/// - reject an empty `url` with [`crate::Error::InvalidArgument`] before any I/O,
/// - send `form.encode()` as an `application/x-www-form-urlencoded` UTF-8 body,
/// - return the whole response body verbatim, without interpreting it,
/// - report every lower-level failure as [`crate::Error::Connection`].
///
/// [`crate::PastebinHttpClient`] is the `reqwest` implementation used by default.
/// Other implementations can be plugged in with [`crate::PastebinBuilder::transport`].
#[async_trait]
pub trait FormTransport: Debug + Send + Sync {
    /// Send `form` to `url` and return the response text.
    async fn send_form(&self, url: &str, form: &Form) -> Result<String>;
}
