//! Vocabularies shared by pastes and user preferences.

pub mod expiration;
pub mod language;
pub mod visibility;

pub use expiration::Expiration;
pub use language::Language;
pub use visibility::Visibility;
