use std::fmt;

use chrono::{DateTime, Local};

use crate::constants::DEFAULT_TITLE;
use crate::types::{Expiration, Language, Visibility};

/// A paste as known to the SDK.
///
/// Pastes come from two places: listings ([`crate::User::list_pastes`],
/// [`crate::Pastebin::list_trending_pastes`]), where every field is what the
/// server reported, and creation ([`crate::Pastebin::create_paste`],
/// [`crate::User::create_paste`]), where the fields are the ones that were sent
/// and the server is not asked again.
///
/// The body ([`Paste::text`]) is only known after creation or after
/// [`crate::Pastebin::raw_text`] fetched it; it is cached from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paste {
    pub(crate) key: String,
    pub(crate) title: String,
    pub(crate) create_date: DateTime<Local>,
    pub(crate) expire_date: DateTime<Local>,
    pub(crate) expiration: Expiration,
    pub(crate) visibility: Visibility,
    pub(crate) language: Language,
    pub(crate) size: u64,
    pub(crate) hits: u64,
    pub(crate) url: String,
    pub(crate) raw_url: String,
    pub(crate) text: Option<String>,
}

impl Paste {
    /// Short id at the end of the paste URL.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation time.
    pub fn create_date(&self) -> DateTime<Local> {
        self.create_date
    }

    /// Removal time. Equal to [`Paste::create_date`] for pastes that never expire.
    pub fn expire_date(&self) -> DateTime<Local> {
        self.expire_date
    }

    /// Lifetime bucket.
    pub fn expiration(&self) -> Expiration {
        self.expiration
    }

    /// Who can see the paste.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Syntax-highlighting format.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Body size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// View count as reported by the server (0 for freshly created pastes).
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Public raw view, `<base>raw/<key>`.
    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    /// Body, if already known.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// The body when known, else the page URL.
impl fmt::Display for Paste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or(&self.url))
    }
}

/// Parameters of a paste to create.
///
/// Only the text is required. Whatever is left unset is defaulted by the call
/// that sends it:
/// - [`crate::Pastebin::create_paste`] (anonymous) uses the library defaults:
///   title `"Untitled"`, [`Language::default`], [`Visibility::Public`],
///   [`Expiration::default`].
/// - [`crate::User::create_paste`] first uses the user's preferred language,
///   visibility and expiration, then the library defaults.
///
/// ```
/// use pastebin::{Expiration, Language, NewPaste, Visibility};
///
/// let paste = NewPaste::new("fn main() {}")
///     .title("hello.rs")
///     .language(Language::RUST)
///     .visibility(Visibility::Unlisted)
///     .expiration(Expiration::OneWeek);
/// # let _ = paste;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct NewPaste {
    pub(crate) text: String,
    pub(crate) title: Option<String>,
    pub(crate) language: Option<Language>,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) expiration: Option<Expiration>,
}

impl NewPaste {
    /// A paste with this body and nothing else set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Syntax-highlighting format.
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Who can see the paste.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Lifetime bucket.
    pub fn expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Fill unset fields from a user's preferences.
    pub(crate) fn or_preferences(
        mut self,
        language: &Language,
        visibility: Visibility,
        expiration: Expiration,
    ) -> Self {
        self.language.get_or_insert_with(|| language.clone());
        self.visibility.get_or_insert(visibility);
        self.expiration.get_or_insert(expiration);
        self
    }

    /// Apply the library defaults to whatever is still unset.
    pub(crate) fn resolve(self) -> PasteDraft {
        PasteDraft {
            text: self.text,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            language: self.language.unwrap_or_default(),
            visibility: self.visibility.unwrap_or_default(),
            expiration: self.expiration.unwrap_or_default(),
        }
    }
}

/// A [`NewPaste`] with every field decided, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PasteDraft {
    pub(crate) text: String,
    pub(crate) title: String,
    pub(crate) language: Language,
    pub(crate) visibility: Visibility,
    pub(crate) expiration: Expiration,
}
