//! Season identifier for NBA stats API queries.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for an NBA season string in the API's "YYYY-YY" form
/// (e.g. "2022-23").
///
/// Parsing validates the shape so a bad `--season` flag fails at the CLI
/// boundary instead of as an empty game log later.
///
/// # Examples
///
/// ```rust
/// use nba_proj::Season;
///
/// let season: Season = "2022-23".parse().unwrap();
/// assert_eq!(season.start_year(), 2022);
/// assert_eq!(season.to_string(), "2022-23");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    /// Build a season label from its starting calendar year.
    pub fn from_start_year(year: u16) -> Self {
        Self(format!("{}-{:02}", year, (year + 1) % 100))
    }

    /// The season string as the stats API expects it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar year the season starts in.
    pub fn start_year(&self) -> u16 {
        self.0
            .get(..4)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl Default for Season {
    fn default() -> Self {
        Self("2022-23".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            season: s.to_string(),
        };

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        let end_year: u8 = end.parse().map_err(|_| invalid())?;
        if start.len() != 4 || end.len() != 2 || end_year != ((start_year + 1) % 100) as u8 {
            return Err(invalid());
        }

        Ok(Self(s.to_string()))
    }
}
