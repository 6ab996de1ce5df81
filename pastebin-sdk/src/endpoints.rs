use url::Url;

use crate::constants::{API_LOGIN_PATH, API_POST_PATH, RAW_ENDPOINT_PATH, RAW_VIEW_PATH};

/// The three API endpoints, derived from one site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoints {
    base: Url,
    api: Url,
    login: Url,
    raw: Url,
}

impl Endpoints {
    /// Derive endpoints from `base`. A missing trailing slash is added so the
    /// endpoint paths nest under it.
    pub(crate) fn new(mut base: Url) -> Result<Self, url::ParseError> {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            api: base.join(API_POST_PATH)?,
            login: base.join(API_LOGIN_PATH)?,
            raw: base.join(RAW_ENDPOINT_PATH)?,
            base,
        })
    }

    pub(crate) fn base(&self) -> &str {
        self.base.as_str()
    }

    pub(crate) fn api(&self) -> &str {
        self.api.as_str()
    }

    pub(crate) fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Raw-content endpoint for `key`: `<base>raw.php?i=<key>`.
    pub(crate) fn raw(&self, key: &str) -> String {
        let mut url = self.raw.clone();
        url.query_pairs_mut().append_pair("i", key);
        url.into()
    }

    /// Public raw view for `key`: `<base>raw/<key>`.
    pub(crate) fn raw_view(&self, key: &str) -> String {
        format!("{}{RAW_VIEW_PATH}{key}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BASE_URL;

    #[test]
    fn default_endpoints() {
        let e = Endpoints::new(Url::parse(DEFAULT_BASE_URL).unwrap()).unwrap();
        assert_eq!(e.base(), "https://pastebin.com/");
        assert_eq!(e.api(), "https://pastebin.com/api/api_post.php");
        assert_eq!(e.login(), "https://pastebin.com/api/api_login.php");
        assert_eq!(e.raw("abc12345"), "https://pastebin.com/raw.php?i=abc12345");
        assert_eq!(e.raw_view("abc12345"), "https://pastebin.com/raw/abc12345");
    }

    #[test]
    fn nests_under_a_sub_path() {
        let e = Endpoints::new(Url::parse("http://127.0.0.1:8080/mirror").unwrap()).unwrap();
        assert_eq!(e.base(), "http://127.0.0.1:8080/mirror/");
        assert_eq!(e.api(), "http://127.0.0.1:8080/mirror/api/api_post.php");
    }
}
