//! Player name resolution against the full league roster.

use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::nba::types::{RosterEntry, StatsResponse};
use crate::Result;

/// Result set name holding the roster rows in `commonallplayers`.
const ROSTER_RESULT_SET: &str = "CommonAllPlayers";

/// Extract (name, identifier) pairs from a raw `commonallplayers` payload.
/// Rows lacking an id or a display name are dropped rather than failing
/// the whole roster.
pub fn roster_from_response(payload: Value) -> Result<Vec<RosterEntry>> {
    let response: StatsResponse = serde_json::from_value(payload)?;
    let Some(rs) = response.result_set(ROSTER_RESULT_SET) else {
        return Ok(Vec::new());
    };

    let entries = rs
        .row_set
        .iter()
        .filter_map(|row| {
            let id = rs.cell(row, "PERSON_ID")?.as_u64()?;
            let full_name = rs.cell(row, "DISPLAY_FIRST_LAST")?.as_str()?;
            Some(RosterEntry {
                id: PlayerId::new(id),
                full_name: full_name.to_string(),
            })
        })
        .collect();

    Ok(entries)
}

/// First exact case-insensitive full-name match, scanning roster order.
/// Duplicate names resolve to the first listed identifier. `None` means
/// the player is unknown; callers log and skip, they do not abort.
pub fn find_player_by_full_name(roster: &[RosterEntry], name: &str) -> Option<PlayerId> {
    roster
        .iter()
        .find(|entry| entry.full_name.eq_ignore_ascii_case(name))
        .map(|entry| entry.id)
}
