use std::time::Duration;

use crate::errors::BuildError;

const DEFAULT_USER_AGENT: &str = concat!("pastebin-rs", "@", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, Clone, Default)]
#[must_use]
/// Configures a [`PastebinHttpClient`] before construction.
///
/// Customize the request timeout and user-agent.
/// Most code obtains this via [`PastebinHttpClient::builder()`], which simply returns
/// `PastebinHttpClientBuilder::default()`.
///
/// # Defaults
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `pastebin-rs@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use pastebin::PastebinHttpClient;
/// let client = PastebinHttpClient::builder()
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, pastebin::BuildError>(())
/// ```
pub struct PastebinHttpClientBuilder {
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl PastebinHttpClientBuilder {
    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);

        self
    }

    /// Append an extra user-agent segment after the default `pastebin-rs@<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build [`PastebinHttpClient`]
    pub fn build(&self) -> Result<PastebinHttpClient, BuildError> {
        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                &format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT,
        };

        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);

        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(PastebinHttpClient {
            http: http_builder.build()?,
        })
    }
}

/// `reqwest`-backed [`crate::FormTransport`].
///
/// Stateless apart from reqwest's own connection handling, and cheap to clone.
/// It knows nothing about Pastebin's parameters or responses; that is the job of
/// [`crate::Pastebin`] and [`crate::User`].
///
/// ### Construction
/// Use [`PastebinHttpClient::builder()`] to tweak the timeout or user-agent, or
/// pick defaults via [`PastebinHttpClient::new()`].
///
/// ```no_run
/// # use pastebin::{FormTransport, Form, PastebinHttpClient};
/// # async fn run() -> pastebin::Result<()> {
/// let client = PastebinHttpClient::new()?;
/// let body = client
///     .send_form("https://pastebin.com/api/api_post.php", &Form::new().field("api_option", "trends"))
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct PastebinHttpClient {
    pub(crate) http: reqwest::Client,
}

impl PastebinHttpClient {
    /// Creates a client with default settings.
    pub fn new() -> Result<PastebinHttpClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating [`PastebinHttpClient`].
    pub fn builder() -> PastebinHttpClientBuilder {
        PastebinHttpClientBuilder::default()
    }
}
