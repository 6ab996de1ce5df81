//! Unified error types for the `pastebin` crate.
//!
//! This module centralizes all failures that can occur while using the SDK and
//! provides a single top-level [`Error`] enum plus the convenient [`Result`] alias.
//! Errors from lower layers (`reqwest`, `roxmltree`, URL parsing) are mapped into
//! structured variants so callers can tell a dead connection from a rejected
//! request from a response that did not have the expected shape.

use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::Pastebin`] handle.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No developer key was configured (builder or `PASTEBIN_DEV_KEY`).
    #[error("A Pastebin developer key is required")]
    MissingDevKey,

    /// The configured base URL could not be parsed or cannot carry API paths.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to start the runtime backing the blocking wrappers.
    #[error("Failed to start the blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::InvalidArgument`] — rejected before any request was made
/// - [`Error::Connection`] — the request never produced a usable response
/// - [`Error::Api`] — Pastebin answered with its `Bad API request` payload
/// - [`Error::AccessDenied`] — refused client-side (raw text of private pastes)
/// - [`Error::MalformedResponse`] — the response was neither an error nor the expected shape
/// - [`Error::Build`] — construction of the facade failed
///
/// Most lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a missing or out-of-range argument.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable explanation of what was invalid.
        message: String,
    },

    /// Transport failure talking to Pastebin.
    #[error("Connection to Pastebin failed: {0}")]
    Connection(#[from] ConnectionError),

    /// Pastebin rejected the request. The message is the raw response body.
    #[error("{message}")]
    Api {
        /// Response body, verbatim.
        message: String,
    },

    /// The operation is not permitted for this resource.
    #[error("Access denied: {message}")]
    AccessDenied {
        /// Why the operation was refused.
        message: String,
    },

    /// The response could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] ParseError),

    /// Building the facade failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}

// --- Consolidated Connection Error ---

/// Transport failures. Never retried by the SDK.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Network/protocol failure from reqwest (DNS, connect, TLS, timeouts, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded with {status}: {body}")]
    Status {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// Response body captured for context.
        body: String,
    },
}

// --- Response Shape Errors ---

/// Structural problems with a success response.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not well-formed XML.
    #[error("XML decode error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required element is absent.
    #[error("missing element `{element}`")]
    MissingElement {
        /// Tag name that was expected.
        element: &'static str,
    },

    /// An element is present but its content cannot be interpreted.
    #[error("invalid value {value:?} in `{element}`")]
    InvalidValue {
        /// Tag name (or pseudo-field) holding the value.
        element: &'static str,
        /// Offending text.
        value: String,
    },
}

/// A specialized `Result` type for `pastebin` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

impl_from_for_error!(reqwest::Error, Error::Connection);
impl_from_for_error!(roxmltree::Error, Error::MalformedResponse);
impl_from_for_error!(url::ParseError, Error::Build);
