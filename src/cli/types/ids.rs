//! ID types for the NBA stats API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for NBA player IDs (the API's `PERSON_ID`).
///
/// Keeps player identifiers from being mixed up with other numeric values
/// when building game-log queries.
///
/// # Examples
///
/// ```rust
/// use nba_proj::PlayerId;
///
/// let id = PlayerId::new(2544);
/// assert_eq!(id.as_u64(), 2544);
/// assert_eq!(id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
