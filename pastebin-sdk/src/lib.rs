#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
mod constants;
mod endpoints;
pub mod errors;
mod macros;
mod parse;
mod paste;
mod pastebin;
mod types;
mod user;
mod util;

#[cfg(test)]
mod test_support;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{PastebinHttpClient, PastebinHttpClientBuilder};
pub use client::form::Form;
pub use client::transport::FormTransport;
// Facade and session
pub use pastebin::{Pastebin, PastebinBuilder};
pub use user::User;
// Values
pub use paste::{NewPaste, Paste};
pub use types::{Expiration, Language, Visibility};

// Error
pub use errors::{BuildError, Error, Result};

// Constants
pub use constants::{
    DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_TITLE, DEV_KEY_ENV, MAX_LIST_LIMIT,
};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
