//! High-level façade for the Pastebin crate.
//!
//! ## Mental model
//! - `Pastebin` - your entrypoint/handle to the SDK. Owns the developer key, the
//!   endpoints and a [`FormTransport`]. Anonymous operations live here.
//! - `User` - a logged-in account; authenticated operations live there.
//! - `Paste` - a value; its body is fetched through [`Pastebin::raw_text`].
//!
//! ## Quick starts
//! ### 1) Anonymous paste
//! ```no_run
//! use pastebin::{NewPaste, Pastebin};
//!
//! # async fn run() -> pastebin::Result<()> {
//! let pastebin = Pastebin::builder().dev_key("0123456789abcdef").build()?;
//! let paste = pastebin.create_paste(NewPaste::new("hello")).await?;
//! println!("{}", paste.url());
//! # Ok(()) }
//! ```
//!
//! ### 2) As a user
//! ```no_run
//! use pastebin::{NewPaste, Pastebin, Visibility};
//!
//! # async fn run() -> pastebin::Result<()> {
//! let pastebin = Pastebin::builder().dev_key("0123456789abcdef").build()?;
//! let user = pastebin.login("wiz_kitty", "hunter2").await?;
//!
//! // language and expiration come from the account's preferences
//! user.create_paste(NewPaste::new("secret").visibility(Visibility::Private)).await?;
//! for paste in user.list_pastes(10).await? {
//!     println!("{} {}", paste.key(), paste.title());
//! }
//! # Ok(()) }
//! ```
//!
//! ### 3) Reading a paste
//! ```no_run
//! # async fn run(pastebin: pastebin::Pastebin) -> pastebin::Result<()> {
//! let mut trending = pastebin.list_trending_pastes().await?;
//! if let Some(paste) = trending.first_mut() {
//!     let text = pastebin.raw_text(paste).await?;
//!     println!("{text}");
//! }
//! # Ok(()) }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::client::core::{PastebinHttpClient, PastebinHttpClientBuilder};
use crate::client::form::Form;
use crate::client::transport::FormTransport;
use crate::constants::{DEFAULT_BASE_URL, DEV_KEY_ENV};
use crate::endpoints::Endpoints;
use crate::errors::{BuildError, Error, Result};
use crate::paste::{NewPaste, Paste};
use crate::types::Visibility;
use crate::user::User;
use crate::{parse, sdk_log};

/// Configures a [`Pastebin`] before construction.
///
/// # Defaults
/// - Base URL: [`DEFAULT_BASE_URL`]
/// - Transport: a [`PastebinHttpClient`] built from the timeout and user-agent settings
///
/// A developer key is required; [`PastebinBuilder::build`] fails with
/// [`BuildError::MissingDevKey`] without one.
#[derive(Default)]
#[must_use]
pub struct PastebinBuilder {
    dev_key: Option<String>,
    base_url: Option<String>,
    http: PastebinHttpClientBuilder,
    transport: Option<Arc<dyn FormTransport>>,
}

impl PastebinBuilder {
    /// Builder seeded with the developer key from the `PASTEBIN_DEV_KEY`
    /// environment variable, when set.
    pub fn from_env() -> Self {
        Self {
            dev_key: std::env::var(DEV_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Developer key sent as `api_dev_key` with every call.
    pub fn dev_key<S: Into<String>>(&mut self, dev_key: S) -> &mut Self {
        self.dev_key = Some(dev_key.into());
        self
    }

    /// Site root the endpoints are derived from.
    pub fn base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set HTTP requests timeout. Ignored when a custom transport is set.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http.request_timeout(timeout);
        self
    }

    /// Append an extra user-agent segment. Ignored when a custom transport is set.
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.http.user_agent_extra(extra);
        self
    }

    /// Use an already-built HTTP client.
    pub fn client(&mut self, client: PastebinHttpClient) -> &mut Self {
        self.transport(client)
    }

    /// Use any [`FormTransport`] instead of the reqwest one.
    pub fn transport<T: FormTransport + 'static>(&mut self, transport: T) -> &mut Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build [`Pastebin`].
    pub fn build(&self) -> std::result::Result<Pastebin, BuildError> {
        let dev_key = self
            .dev_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(BuildError::MissingDevKey)?;

        let base = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let endpoints = Endpoints::new(base)?;

        let transport = match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(self.http.build()?) as Arc<dyn FormTransport>,
        };

        Ok(Pastebin {
            transport,
            dev_key: Arc::from(dev_key),
            endpoints: Arc::new(endpoints),
        })
    }

    /// Build the blocking flavour, see [`crate::blocking::Pastebin`].
    #[cfg(feature = "blocking")]
    pub fn build_blocking(&self) -> std::result::Result<crate::blocking::Pastebin, BuildError> {
        crate::blocking::Pastebin::new(self.build()?)
    }
}

impl fmt::Debug for PastebinBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PastebinBuilder")
            .field("dev_key", &self.dev_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .field("transport", &self.transport)
            .finish()
    }
}

/// High-level façade. Owns the configuration and transport; constructs [`User`]s.
///
/// Cheap to clone and `Send + Sync`: clones share the transport. Holds no other
/// state, so concurrent calls need no coordination.
#[derive(Clone)]
pub struct Pastebin {
    transport: Arc<dyn FormTransport>,
    dev_key: Arc<str>,
    pub(crate) endpoints: Arc<Endpoints>,
}

impl Pastebin {
    /// Returns a builder to configure the developer key, base URL and transport.
    pub fn builder() -> PastebinBuilder {
        PastebinBuilder::default()
    }

    /// Construct with defaults and the given developer key.
    pub fn new<S: Into<String>>(dev_key: S) -> Result<Self> {
        Ok(Self::builder().dev_key(dev_key).build()?)
    }

    /// Access the underlying transport (advanced use).
    #[inline]
    pub fn transport(&self) -> &Arc<dyn FormTransport> {
        &self.transport
    }

    /// Site root the endpoints are derived from.
    pub fn base_url(&self) -> &str {
        self.endpoints.base()
    }

    /// Log in and return the user with its preferences already loaded.
    ///
    /// Two calls are made: the login itself, then the user-details refresh.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] for an empty username or password (no request is made).
    /// - [`Error::Api`] for bad credentials and other rejections.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::invalid_argument("username and password are required"));
        }
        sdk_log!(debug, "Logging in as {}", username);

        let form = self
            .base_form()
            .field("api_user_name", username)
            .field("api_user_password", password);
        let raw = self
            .transport
            .send_form(self.endpoints.login(), &form)
            .await?;

        let mut user = User::new(self.clone(), parse::session_key(&raw)?);
        user.refresh_preferences().await?;
        sdk_log!(info, "Logged in as {}", user.name());
        Ok(user)
    }

    /// Create an anonymous paste. Unset fields take the library defaults
    /// (see [`NewPaste`]), never any account preference.
    pub async fn create_paste(&self, paste: NewPaste) -> Result<Paste> {
        self.create_paste_with_key("", paste).await
    }

    /// Currently trending pastes, in the order the server lists them.
    pub async fn list_trending_pastes(&self) -> Result<Vec<Paste>> {
        let raw = self.post_api(self.api_form("trends")).await?;
        parse::pastes_from_xml(&raw, &self.endpoints)
    }

    /// Body of `paste`, fetched on first use and cached on the paste.
    ///
    /// The body is returned verbatim; it is paste content, not an API answer,
    /// so text that looks like an API error is not treated as one.
    ///
    /// # Errors
    /// [`Error::AccessDenied`] for private pastes, whose raw text the service does
    /// not serve; no request is made in that case, even if text is cached.
    pub async fn raw_text<'p>(&self, paste: &'p mut Paste) -> Result<&'p str> {
        if paste.visibility == Visibility::Private {
            return Err(Error::AccessDenied {
                message: format!("private paste {} can not be accessed", paste.key),
            });
        }

        if paste.text.is_none() {
            let raw = self
                .transport
                .send_form(&self.endpoints.raw(&paste.key), &Form::new())
                .await?;
            paste.text = Some(raw);
        }

        Ok(paste.text.as_deref().unwrap_or_default())
    }

    /// Shared create path. `user_key` is empty for anonymous pastes.
    pub(crate) async fn create_paste_with_key(
        &self,
        user_key: &str,
        paste: NewPaste,
    ) -> Result<Paste> {
        let draft = paste.resolve();
        let form = self
            .api_form("paste")
            .field("api_paste_code", &draft.text)
            .field("api_user_key", user_key)
            .field("api_paste_name", &draft.title)
            .field("api_paste_format", draft.language.code())
            .field("api_paste_private", draft.visibility.code().to_string())
            .field("api_paste_expire_date", draft.expiration.token());

        let raw = self.post_api(form).await?;
        let paste = parse::created_paste(&raw, draft, &self.endpoints)?;
        sdk_log!(info, "Created paste {}", paste.key());
        Ok(paste)
    }

    /// `api_dev_key` only.
    fn base_form(&self) -> Form {
        Form::new().field("api_dev_key", &*self.dev_key)
    }

    /// `api_dev_key` and `api_option`, the prefix of every generic API call.
    pub(crate) fn api_form(&self, option: &'static str) -> Form {
        self.base_form().field("api_option", option)
    }

    /// Send to the generic API endpoint and screen out error payloads.
    pub(crate) async fn post_api(&self, form: Form) -> Result<String> {
        let raw = self.transport.send_form(self.endpoints.api(), &form).await?;
        parse::check_api_error(&raw)?;
        Ok(raw)
    }
}

impl fmt::Debug for Pastebin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pastebin")
            .field("base_url", &self.endpoints.base())
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
