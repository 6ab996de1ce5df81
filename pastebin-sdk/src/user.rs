use std::fmt;

use crate::constants::MAX_LIST_LIMIT;
use crate::errors::{Error, Result};
use crate::parse::{self, UserDetails};
use crate::paste::{NewPaste, Paste};
use crate::pastebin::Pastebin;
use crate::sdk_log;
use crate::types::{Expiration, Language, Visibility};

/// A logged-in Pastebin account, obtained from [`Pastebin::login`].
///
/// A `User` owns its session key and passes it with every authenticated call.
/// The key is never handed out: there is no getter and `Debug` redacts it.
///
/// Profile and preference fields are filled by [`User::refresh_preferences`],
/// which `login` already calls once. The preferences are the defaults for
/// [`User::create_paste`].
///
/// Concurrency:
/// - Cheap to clone; clones share the facade's transport but not the profile
///   fields, which only change through `refresh_preferences(&mut self)`.
#[derive(Clone)]
pub struct User {
    pub(crate) api: Pastebin,
    session_key: String,

    name: String,
    preferred_language: Language,
    preferred_expiration: Expiration,
    preferred_visibility: Visibility,
    avatar_url: String,
    website: String,
    email: String,
    location: String,
    is_pro: bool,
}

impl User {
    /// Wrap a session key. Profile fields stay at their defaults until refreshed.
    pub(crate) fn new(api: Pastebin, session_key: String) -> Self {
        Self {
            api,
            session_key,
            name: String::new(),
            preferred_language: Language::default(),
            preferred_expiration: Expiration::default(),
            preferred_visibility: Visibility::default(),
            avatar_url: String::new(),
            website: String::new(),
            email: String::new(),
            location: String::new(),
            is_pro: false,
        }
    }

    /// Account name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default format for this user's new pastes.
    pub fn preferred_language(&self) -> &Language {
        &self.preferred_language
    }

    /// Default lifetime for this user's new pastes.
    pub fn preferred_expiration(&self) -> Expiration {
        self.preferred_expiration
    }

    /// Default visibility for this user's new pastes.
    pub fn preferred_visibility(&self) -> Visibility {
        self.preferred_visibility
    }

    /// Avatar image URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Website from the profile.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// E-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Location from the profile.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether the account is PRO.
    pub fn is_pro(&self) -> bool {
        self.is_pro
    }

    /// The facade this user was created from.
    pub fn pastebin(&self) -> &Pastebin {
        &self.api
    }

    /// Create a paste owned by this user.
    ///
    /// Unset language, visibility and expiration default to this user's
    /// preferences; an unset title defaults to `"Untitled"`.
    pub async fn create_paste(&self, paste: NewPaste) -> Result<Paste> {
        let paste = paste.or_preferences(
            &self.preferred_language,
            self.preferred_visibility,
            self.preferred_expiration,
        );
        self.api
            .create_paste_with_key(&self.session_key, paste)
            .await
    }

    /// This user's pastes, at most `limit` of them (1 to 1000, see
    /// [`crate::DEFAULT_LIST_LIMIT`] for the customary value).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for a limit outside 1..=1000; no request is made.
    pub async fn list_pastes(&self, limit: u16) -> Result<Vec<Paste>> {
        if !(1..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(Error::invalid_argument(format!(
                "results limit must be between 1 and {MAX_LIST_LIMIT}, got {limit}"
            )));
        }

        let form = self
            .api
            .api_form("list")
            .field("api_user_key", &self.session_key)
            .field("api_results_limit", limit.to_string());
        let raw = self.api.post_api(form).await?;
        let pastes = parse::pastes_from_xml(&raw, &self.api.endpoints)?;
        sdk_log!(debug, "Listed {} pastes of {}", pastes.len(), self.name);
        Ok(pastes)
    }

    /// Delete one of this user's pastes.
    ///
    /// The service confirms nothing; success means the response was not an error.
    pub async fn delete_paste(&self, paste: &Paste) -> Result<()> {
        let form = self
            .api
            .api_form("delete")
            .field("api_user_key", &self.session_key)
            .field("api_paste_key", paste.key());
        self.api.post_api(form).await?;
        sdk_log!(info, "Deleted paste {}", paste.key());
        Ok(())
    }

    /// Reload profile and preferences from the server, overwriting the current values.
    ///
    /// On error the current values are left untouched.
    pub async fn refresh_preferences(&mut self) -> Result<()> {
        let form = self
            .api
            .api_form("userdetails")
            .field("api_user_key", &self.session_key);
        let raw = self.api.post_api(form).await?;
        self.apply(parse::user_details_from_xml(&raw)?);
        Ok(())
    }

    fn apply(&mut self, details: UserDetails) {
        let UserDetails {
            name,
            preferred_language,
            preferred_expiration,
            preferred_visibility,
            avatar_url,
            website,
            email,
            location,
            is_pro,
        } = details;

        self.name = name;
        self.preferred_language = preferred_language;
        self.preferred_expiration = preferred_expiration;
        self.preferred_visibility = preferred_visibility;
        self.avatar_url = avatar_url;
        self.website = website;
        self.email = email;
        self.location = location;
        self.is_pro = is_pro;
    }
}

/// The account name.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("session_key", &"<redacted>")
            .field("preferred_language", &self.preferred_language)
            .field("preferred_expiration", &self.preferred_expiration)
            .field("preferred_visibility", &self.preferred_visibility)
            .field("is_pro", &self.is_pro)
            .finish_non_exhaustive()
    }
}
