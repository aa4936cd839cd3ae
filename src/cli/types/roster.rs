//! Roster entry type parsed from CLI arguments or built-in config.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One player the report should cover: a full name plus the team label
/// shown in progress output. Parsed from `--player "Name:Team"`; the team
/// part is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSpot {
    pub name: String,
    pub team: Option<String>,
}

impl RosterSpot {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: Some(team.into()),
        }
    }

    /// Label used in "Fetching stats for {name} ({team})..." progress lines.
    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or("?")
    }
}

impl fmt::Display for RosterSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.team {
            Some(team) => write!(f, "{} ({})", self.name, team),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for RosterSpot {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, team) = match s.split_once(':') {
            Some((name, team)) => (name.trim(), Some(team.trim())),
            None => (s.trim(), None),
        };
        if name.is_empty() || team.is_some_and(str::is_empty) {
            return Err(NbaError::InvalidRosterEntry {
                entry: s.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            team: team.map(str::to_string),
        })
    }
}
