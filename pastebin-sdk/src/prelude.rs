//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Facade and session
pub use crate::{Pastebin, PastebinBuilder, User};

// Values
pub use crate::{Expiration, Language, NewPaste, Paste, Visibility};

// Transport
pub use crate::{Form, FormTransport, PastebinHttpClient};
