use serde::{Deserialize, Serialize};
use std::fmt;

/// Release years are stored as a single byte counted from this year.
pub const YEAR_BASE: u16 = 1900;
pub const MAX_YEAR: u16 = YEAR_BASE + u8::MAX as u16;

/// A movie identified by title and release year.
///
/// Field order matters: the derived ordering compares titles byte-wise first
/// and falls back to the year, which is the order of the movie offset table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub year: u16,
}

impl Film {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    pub fn from_year_delta(title: impl Into<String>, delta: u8) -> Self {
        Self::new(title, YEAR_BASE + delta as u16)
    }

    /// The on-disk year byte, or `None` when the year cannot be encoded.
    pub fn year_delta(&self) -> Option<u8> {
        self.year
            .checked_sub(YEAR_BASE)
            .and_then(|delta| u8::try_from(delta).ok())
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.title, self.year)
    }
}
