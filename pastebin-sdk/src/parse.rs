//! Turning raw response text into typed values.
//!
//! Every response goes through [`check_api_error`] first: Pastebin reports
//! failures as plain text (`Bad API request, ...`), which is not XML and would
//! otherwise surface as a confusing decode error.
//!
//! Success shapes:
//! - a bare sequence of `<paste>` fragments (listings), see [`pastes_from_xml`];
//! - a `<user>` fragment (user details), see [`user_details_from_xml`];
//! - the URL of a new paste as plain text, see [`created_paste`];
//! - a session key as plain text (login), see [`session_key`].

use std::str::FromStr;

use chrono::{DateTime, Local};
use roxmltree::{Document, Node};

use crate::constants::API_ERROR_SENTINEL;
use crate::endpoints::Endpoints;
use crate::errors::{Error, ParseError, Result};
use crate::paste::{Paste, PasteDraft};
use crate::types::{Expiration, Language, Visibility};

/// Fail with [`Error::Api`] when `raw` is an API error payload; pass it through otherwise.
pub(crate) fn check_api_error(raw: &str) -> Result<&str> {
    if raw.contains(API_ERROR_SENTINEL) {
        return Err(Error::Api {
            message: raw.to_string(),
        });
    }
    Ok(raw)
}

/// Parse a listing: zero or more `<paste>` fragments without a common root.
///
/// The fragments are wrapped in a synthetic `<pastes>` root. Pastes come back in
/// document order. Text outside of `<paste>` elements (the service answers an
/// empty listing with `No pastes found.`) is ignored.
pub(crate) fn pastes_from_xml(raw: &str, endpoints: &Endpoints) -> Result<Vec<Paste>> {
    let raw = check_api_error(raw)?;
    let wrapped = format!("<pastes>{raw}</pastes>");
    let doc = Document::parse(&wrapped)?;

    doc.root_element()
        .descendants()
        .filter(|n| n.has_tag_name("paste"))
        .map(|n| paste_from_element(n, endpoints).map_err(Error::from))
        .collect()
}

/// Read one `<paste>` element.
pub(crate) fn paste_from_element(
    paste: Node<'_, '_>,
    endpoints: &Endpoints,
) -> std::result::Result<Paste, ParseError> {
    let key = child_text(paste, "paste_key")?.to_string();
    let create_date = unix_to_local("paste_date", child_parse(paste, "paste_date")?)?;
    let expire_secs: i64 = child_parse(paste, "paste_expire_date")?;

    // 0 means "never"; expressed as expire == create.
    let expire_date = if expire_secs == 0 {
        create_date
    } else {
        unix_to_local("paste_expire_date", expire_secs)?
    };
    let visibility = Visibility::try_from(child_parse::<u8>(paste, "paste_private")?)?;

    Ok(Paste {
        raw_url: endpoints.raw_view(&key),
        key,
        title: child_text(paste, "paste_title")?.to_string(),
        create_date,
        expire_date,
        expiration: Expiration::from_duration(expire_date - create_date),
        visibility,
        language: child_parse(paste, "paste_format_short")?,
        size: child_parse(paste, "paste_size")?,
        hits: child_parse(paste, "paste_hits")?,
        url: child_text(paste, "paste_url")?.to_string(),
        text: None,
    })
}

/// Account details and paste preferences from a `<user>` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserDetails {
    pub(crate) name: String,
    pub(crate) preferred_language: Language,
    pub(crate) preferred_expiration: Expiration,
    pub(crate) preferred_visibility: Visibility,
    pub(crate) avatar_url: String,
    pub(crate) website: String,
    pub(crate) email: String,
    pub(crate) location: String,
    pub(crate) is_pro: bool,
}

/// Parse the `userdetails` response.
pub(crate) fn user_details_from_xml(raw: &str) -> Result<UserDetails> {
    let raw = check_api_error(raw)?;
    let doc = Document::parse(raw.trim())?;
    let user = doc.root_element();
    if !user.has_tag_name("user") {
        return Err(ParseError::MissingElement { element: "user" }.into());
    }

    Ok(UserDetails {
        name: child_text(user, "user_name")?.to_string(),
        preferred_language: child_parse(user, "user_format_short")?,
        preferred_expiration: child_parse(user, "user_expiration")?,
        preferred_visibility: child_parse(user, "user_private")?,
        avatar_url: child_text(user, "user_avatar_url")?.to_string(),
        website: child_text(user, "user_website")?.to_string(),
        email: child_text(user, "user_email")?.to_string(),
        location: child_text(user, "user_location")?.to_string(),
        // Exact match: "0" is a normal account, "1" is PRO; anything else is not PRO.
        is_pro: child_text(user, "user_account_type")? == "1",
    })
}

/// Build the Paste for a successful creation from what was sent.
///
/// The response is the new paste's URL. The key is what follows the site root
/// (or, for URLs from another host, the last path segment). The server is not
/// asked for the paste again, so the date is local "now" and the hit count is 0.
pub(crate) fn created_paste(raw: &str, draft: PasteDraft, endpoints: &Endpoints) -> Result<Paste> {
    let url = check_api_error(raw)?.trim();
    let key = url
        .strip_prefix(endpoints.base())
        .unwrap_or_else(|| url.rsplit('/').next().unwrap_or(url));

    if key.is_empty() || key.contains(['/', '?', ' ']) {
        return Err(ParseError::InvalidValue {
            element: "paste url",
            value: url.to_string(),
        }
        .into());
    }

    let create_date = Local::now();
    Ok(Paste {
        key: key.to_string(),
        raw_url: endpoints.raw_view(key),
        url: url.to_string(),
        title: draft.title,
        create_date,
        expire_date: create_date + draft.expiration.duration(),
        expiration: draft.expiration,
        visibility: draft.visibility,
        language: draft.language,
        size: draft.text.len() as u64,
        hits: 0,
        text: Some(draft.text),
    })
}

/// Session key returned by the login endpoint.
pub(crate) fn session_key(raw: &str) -> Result<String> {
    let key = check_api_error(raw)?.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(ParseError::InvalidValue {
            element: "session key",
            value: key.to_string(),
        }
        .into());
    }
    Ok(key.to_string())
}

fn child_text<'a>(
    parent: Node<'a, '_>,
    element: &'static str,
) -> std::result::Result<&'a str, ParseError> {
    parent
        .children()
        .find(|n| n.has_tag_name(element))
        .map(|n| n.text().unwrap_or_default())
        .ok_or(ParseError::MissingElement { element })
}

fn child_parse<T: FromStr>(
    parent: Node<'_, '_>,
    element: &'static str,
) -> std::result::Result<T, ParseError> {
    let text = child_text(parent, element)?;
    text.trim().parse().ok().ok_or_else(|| ParseError::InvalidValue {
        element,
        value: text.to_string(),
    })
}

fn unix_to_local(
    element: &'static str,
    secs: i64,
) -> std::result::Result<DateTime<Local>, ParseError> {
    DateTime::from_timestamp(secs, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| ParseError::InvalidValue {
            element,
            value: secs.to_string(),
        })
}
