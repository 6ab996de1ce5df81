use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Encode all non-unreserved characters.
// See RFC3986, and https://en.wikipedia.org/wiki/Percent-encoding .
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered `application/x-www-form-urlencoded` body.
///
/// Values are percent-encoded as they are pushed, so the encoded body is just
/// the `key=value` pairs joined with `&`, in insertion order.
///
/// `Debug` lists field names only: forms carry developer keys, passwords,
/// session keys and paste bodies.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(&'static str, String)>,
}

impl Form {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, percent-encoding `value`.
    #[must_use]
    pub fn field(mut self, key: &'static str, value: impl AsRef<str>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a field in place, percent-encoding `value`.
    pub fn push(&mut self, key: &'static str, value: impl AsRef<str>) -> &mut Self {
        let encoded = utf8_percent_encode(value.as_ref(), FORM_ENCODE_SET).to_string();
        self.pairs.push((key, encoded));
        self
    }

    /// Field names, in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// Encoded value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when no field was pushed.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `key=value` pairs joined with `&`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
