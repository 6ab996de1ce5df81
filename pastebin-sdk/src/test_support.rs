//! Recording transport double for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::form::Form;
use crate::client::transport::FormTransport;
use crate::errors::Result;
use crate::pastebin::Pastebin;

/// One `send_form` invocation.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) url: String,
    pub(crate) form: Form,
}

/// Answers calls with canned bodies, in order, and records every call.
///
/// Clones share state, so a test can keep one handle while the facade owns another.
#[derive(Debug, Default, Clone)]
pub(crate) struct StubTransport {
    responses: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubTransport {
    pub(crate) fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Into::into).collect())),
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call made so far; panics if there were zero or several.
    pub(crate) fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl FormTransport for StubTransport {
    async fn send_form(&self, url: &str, form: &Form) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            form: form.clone(),
        });
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| panic!("unexpected call to {url}")))
    }
}

/// A facade with dev key `devkey` on the default base URL, answering from `responses`.
pub(crate) fn pastebin_with<I, S>(responses: I) -> (Pastebin, StubTransport)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let stub = StubTransport::with_responses(responses);
    let pastebin = Pastebin::builder()
        .dev_key("devkey")
        .transport(stub.clone())
        .build()
        .unwrap();
    (pastebin, stub)
}

/// A `<paste>` fragment with the given key and `paste_private` code.
pub(crate) fn paste_fragment(key: &str, private: u8) -> String {
    format!(
        "<paste>\
            <paste_key>{key}</paste_key>\
            <paste_date>1700000000</paste_date>\
            <paste_title>{key}</paste_title>\
            <paste_size>9</paste_size>\
            <paste_expire_date>0</paste_expire_date>\
            <paste_private>{private}</paste_private>\
            <paste_format_long>None</paste_format_long>\
            <paste_format_short>text</paste_format_short>\
            <paste_url>https://pastebin.com/{key}</paste_url>\
            <paste_hits>3</paste_hits>\
        </paste>\n"
    )
}

/// A `<user>` fragment; `account_type` is the raw `user_account_type` text.
pub(crate) fn user_fragment(name: &str, account_type: &str) -> String {
    format!(
        "<user>\
            <user_name>{name}</user_name>\
            <user_format_short>python</user_format_short>\
            <user_expiration>1W</user_expiration>\
            <user_avatar_url>https://pastebin.com/i/guest.png</user_avatar_url>\
            <user_private>1</user_private>\
            <user_website>https://{name}.example</user_website>\
            <user_email>{name}@example.com</user_email>\
            <user_location>Lisbon</user_location>\
            <user_account_type>{account_type}</user_account_type>\
        </user>"
    )
}
