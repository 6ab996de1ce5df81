/// Default Pastebin site root. Every endpoint is derived from it.
///
/// # Examples
/// Point the SDK at a mirror or a local mock instead:
/// ```no_run
/// # use pastebin::Pastebin;
/// let pastebin = Pastebin::builder()
///     .dev_key("0123456789abcdef")
///     .base_url("http://localhost:8080/")
///     .build()?;
/// # Ok::<_, pastebin::BuildError>(())
/// ```
pub const DEFAULT_BASE_URL: &str = "https://pastebin.com/";

/// Environment variable read by [`crate::PastebinBuilder::from_env`].
pub const DEV_KEY_ENV: &str = "PASTEBIN_DEV_KEY";

/// Number of pastes requested by [`crate::User::list_pastes`] callers that have no preference.
pub const DEFAULT_LIST_LIMIT: u16 = 50;

/// Largest `api_results_limit` the API accepts.
pub const MAX_LIST_LIMIT: u16 = 1000;

/// Title given to pastes created without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Every API failure response contains this text.
pub(crate) const API_ERROR_SENTINEL: &str = "Bad API request";

pub(crate) const API_POST_PATH: &str = "api/api_post.php";
pub(crate) const API_LOGIN_PATH: &str = "api/api_login.php";
pub(crate) const RAW_ENDPOINT_PATH: &str = "raw.php";
/// Path segment of the public raw view, `<base>raw/<key>`.
pub(crate) const RAW_VIEW_PATH: &str = "raw/";
