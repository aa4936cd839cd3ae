//! Schema normalization for raw game-log rows.
//!
//! The stats API's row shape varies between seasons - columns go missing
//! and numeric cells occasionally arrive as strings. Normalization
//! guarantees the six tracked stat fields exist on every row, coercing
//! anything unparseable to 0.0, so aggregation never has to look back at
//! raw JSON.

use chrono::NaiveDate;
use serde_json::Value;

use crate::nba::types::{GameRow, Outcome, ResultSet, StatsResponse};
use crate::Result;

/// Result set name holding the per-game rows in `playergamelog`.
const GAME_LOG_RESULT_SET: &str = "PlayerGameLog";

/// Game-date format used by the game log, e.g. "APR 09, 2023".
const GAME_DATE_FORMAT: &str = "%b %d, %Y";

/// Coerce a raw cell to f64. Missing cells, nulls, and unparseable
/// strings all become 0.0; coercion never fails the aggregation.
pub fn coerce_stat(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn parse_game_date(value: Option<&Value>) -> Option<NaiveDate> {
    let s = value?.as_str()?;
    NaiveDate::parse_from_str(s.trim(), GAME_DATE_FORMAT).ok()
}

fn normalize_row(rs: &ResultSet, row: &[Value]) -> GameRow {
    let stat = |column: &str| coerce_stat(rs.cell(row, column));

    GameRow {
        points: stat("PTS"),
        rebounds: stat("REB"),
        assists: stat("AST"),
        steals: stat("STL"),
        blocks: stat("BLK"),
        turnovers: stat("TOV"),
        outcome: rs
            .cell(row, "WL")
            .and_then(Value::as_str)
            .and_then(Outcome::from_wl),
        date: parse_game_date(rs.cell(row, "GAME_DATE")),
    }
}

/// Normalize a raw `playergamelog` payload into game rows, preserving the
/// source's row order. A player with no games for the season yields an
/// empty vector, not an error.
pub fn normalize_game_log(payload: Value) -> Result<Vec<GameRow>> {
    let response: StatsResponse = serde_json::from_value(payload)?;
    let Some(rs) = response.result_set(GAME_LOG_RESULT_SET) else {
        return Ok(Vec::new());
    };

    Ok(rs.row_set.iter().map(|row| normalize_row(rs, row)).collect())
}
