use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Who can see a paste. Maps onto the API's `paste_private` / `api_paste_private` code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Listed and readable by anyone. Code `0`.
    #[default]
    Public,
    /// Readable by anyone with the link, but not listed. Code `1`.
    Unlisted,
    /// Readable only by its owner. Code `2`.
    Private,
}

impl Visibility {
    /// Every visibility, in code order.
    pub const ALL: [Visibility; 3] = [Self::Public, Self::Unlisted, Self::Private];

    /// The API's integer code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Unlisted => 1,
            Self::Private => 2,
        }
    }

    /// Inverse of [`Visibility::code`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Public),
            1 => Some(Self::Unlisted),
            2 => Some(Self::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "Public",
            Self::Unlisted => "Unlisted",
            Self::Private => "Private",
        })
    }
}

impl TryFrom<u8> for Visibility {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| ParseError::InvalidValue {
            element: "visibility",
            value: code.to_string(),
        })
    }
}

/// Parses the wire code (`"0"`, `"1"`, `"2"`).
impl FromStr for Visibility {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| ParseError::InvalidValue {
                element: "visibility",
                value: s.to_string(),
            })
    }
}
