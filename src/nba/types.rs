//! Wire types for the NBA stats API and the normalized game row.

use crate::cli::types::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level envelope every stats endpoint returns: one or more named
/// tabular result sets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name (case-insensitive).
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
    }
}

/// One tabular block: column headers plus rows of loosely typed values.
/// Row shape varies between seasons, so cells are kept as raw JSON until
/// normalization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a column by header name (case-insensitive), if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Cell for `column` in `row`, if both exist.
    pub fn cell<'a>(&self, row: &'a [Value], column: &str) -> Option<&'a Value> {
        row.get(self.column(column)?)
    }
}

/// One (name, identifier) pair from the full roster query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub full_name: String,
}

/// Game outcome from the game log's `WL` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Parse the API's one-letter outcome. Anything other than "W"/"L"
    /// (including null) is treated as unknown.
    pub fn from_wl(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("W") => Some(Outcome::Win),
            v if v.eq_ignore_ascii_case("L") => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// One played game after schema normalization: the six tracked stats are
/// always present (zero-defaulted), outcome and date stay optional.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub outcome: Option<Outcome>,
    pub date: Option<NaiveDate>,
}

impl Default for GameRow {
    fn default() -> Self {
        Self {
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
            outcome: None,
            date: None,
        }
    }
}
