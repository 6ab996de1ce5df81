//! Blocking flavour of the SDK.
//!
//! Every type here wraps its async counterpart and drives the very same future
//! to completion on a current-thread tokio runtime owned by the wrapper. Parameter
//! assembly, parsing and errors are therefore identical in both flavours.
//!
//! Do not call these from inside an async runtime; use the async types there.
//!
//! ```no_run
//! use pastebin::{NewPaste, Pastebin};
//!
//! # fn run() -> pastebin::Result<()> {
//! let pastebin = Pastebin::builder().dev_key("0123456789abcdef").build_blocking()?;
//! let user = pastebin.login("wiz_kitty", "hunter2")?;
//! let paste = user.create_paste(NewPaste::new("hello"))?;
//! for paste in user.list_pastes(pastebin::DEFAULT_LIST_LIMIT)? {
//!     println!("{} {}", paste.key(), paste.title());
//! }
//! user.delete_paste(&paste)?;
//! # Ok(()) }
//! ```

use std::future::Future;
use std::ops::Deref;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::errors::{BuildError, Result};
use crate::paste::{NewPaste, Paste};

/// Blocking [`crate::Pastebin`].
#[derive(Debug, Clone)]
pub struct Pastebin {
    inner: crate::Pastebin,
    runtime: Arc<Runtime>,
}

impl Pastebin {
    /// Wrap an async facade, starting the runtime that will drive its calls.
    pub fn new(inner: crate::Pastebin) -> std::result::Result<Self, BuildError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// The async facade (shares transport and configuration).
    pub fn as_async(&self) -> &crate::Pastebin {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Blocking [`crate::Pastebin::login`].
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = self.block_on(self.inner.login(username, password))?;
        Ok(User {
            inner: user,
            runtime: Arc::clone(&self.runtime),
        })
    }

    /// Blocking [`crate::Pastebin::create_paste`].
    pub fn create_paste(&self, paste: NewPaste) -> Result<Paste> {
        self.block_on(self.inner.create_paste(paste))
    }

    /// Blocking [`crate::Pastebin::list_trending_pastes`].
    pub fn list_trending_pastes(&self) -> Result<Vec<Paste>> {
        self.block_on(self.inner.list_trending_pastes())
    }

    /// Blocking [`crate::Pastebin::raw_text`].
    pub fn raw_text<'p>(&self, paste: &'p mut Paste) -> Result<&'p str> {
        self.block_on(self.inner.raw_text(paste))
    }
}

/// Blocking [`crate::User`]. Read accessors are reached through `Deref`.
#[derive(Debug, Clone)]
pub struct User {
    inner: crate::User,
    runtime: Arc<Runtime>,
}

impl User {
    /// The async user (same session).
    pub fn into_async(self) -> crate::User {
        self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Blocking [`crate::User::create_paste`].
    pub fn create_paste(&self, paste: NewPaste) -> Result<Paste> {
        self.block_on(self.inner.create_paste(paste))
    }

    /// Blocking [`crate::User::list_pastes`].
    pub fn list_pastes(&self, limit: u16) -> Result<Vec<Paste>> {
        self.block_on(self.inner.list_pastes(limit))
    }

    /// Blocking [`crate::User::delete_paste`].
    pub fn delete_paste(&self, paste: &Paste) -> Result<()> {
        self.block_on(self.inner.delete_paste(paste))
    }

    /// Blocking [`crate::User::refresh_preferences`].
    pub fn refresh_preferences(&mut self) -> Result<()> {
        // `inner` is borrowed mutably, so this cannot go through `Self::block_on`.
        self.runtime.block_on(self.inner.refresh_preferences())
    }
}

impl Deref for User {
    type Target = crate::User;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
