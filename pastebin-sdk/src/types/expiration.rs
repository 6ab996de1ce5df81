use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::errors::ParseError;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Lifetime bucket after which Pastebin removes a paste.
///
/// Each bucket has a wire token (`api_paste_expire_date`), a human name and a
/// duration. [`Expiration::Never`] has a zero duration, which is also how a paste
/// whose expire date equals its create date is read back.
///
/// Months and years are fixed spans (30, 180 and 365 days).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expiration {
    /// Kept forever. Token `N`.
    #[default]
    Never,
    /// Token `10M`.
    TenMinutes,
    /// Token `1H`.
    OneHour,
    /// Token `1D`.
    OneDay,
    /// Token `1W`.
    OneWeek,
    /// Token `2W`.
    TwoWeeks,
    /// Token `1M`.
    OneMonth,
    /// Token `6M`.
    SixMonths,
    /// Token `1Y`.
    OneYear,
}

impl Expiration {
    /// Every bucket, shortest first ([`Expiration::Never`] counts as zero).
    pub const ALL: [Expiration; 9] = [
        Self::Never,
        Self::TenMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::OneMonth,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Token sent as `api_paste_expire_date` and returned as `user_expiration`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Never => "N",
            Self::TenMinutes => "10M",
            Self::OneHour => "1H",
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::TwoWeeks => "2W",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
        }
    }

    /// Human-readable name, as shown on the site.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::TenMinutes => "10 Minutes",
            Self::OneHour => "1 Hour",
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
            Self::OneMonth => "1 Month",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
        }
    }

    const fn seconds(self) -> i64 {
        match self {
            Self::Never => 0,
            Self::TenMinutes => 10 * MINUTE,
            Self::OneHour => HOUR,
            Self::OneDay => DAY,
            Self::OneWeek => 7 * DAY,
            Self::TwoWeeks => 14 * DAY,
            Self::OneMonth => 30 * DAY,
            Self::SixMonths => 180 * DAY,
            Self::OneYear => 365 * DAY,
        }
    }

    /// Span between creation and removal. Zero for [`Expiration::Never`].
    pub fn duration(self) -> TimeDelta {
        TimeDelta::seconds(self.seconds())
    }

    /// Bucket for the span between a paste's create and expire dates.
    ///
    /// An exact match wins; otherwise the nearest bucket is chosen (ties go to
    /// the shorter one). Zero and negative spans map to [`Expiration::Never`].
    pub fn from_duration(delta: TimeDelta) -> Self {
        let secs = delta.num_seconds();
        if secs <= 0 {
            return Self::Never;
        }

        Self::ALL
            .into_iter()
            .min_by_key(|bucket| (bucket.seconds() - secs).abs())
            .unwrap_or_default()
    }
}

/// Renders the wire token.
impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses a wire token (`"1D"`) or, leniently, a human name (`"1 Day"`).
impl FromStr for Expiration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.token() == s)
            .or_else(|| Self::ALL.into_iter().find(|e| e.name().eq_ignore_ascii_case(s)))
            .ok_or_else(|| ParseError::InvalidValue {
                element: "expiration",
                value: s.to_string(),
            })
    }
}
