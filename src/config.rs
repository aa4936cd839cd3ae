//! Built-in report configuration.
//!
//! The default roster and season reproduce the reference report; both can
//! be overridden from the CLI, and tests substitute fabricated rosters.

use crate::cli::types::RosterSpot;

/// Players covered by the report when no `--player` flags are given.
pub fn default_roster() -> Vec<RosterSpot> {
    vec![
        RosterSpot::new("Nikola Jokic", "Nuggets"),
        RosterSpot::new("Luka Doncic", "Mavericks"),
        RosterSpot::new("Giannis Antetokounmpo", "Bucks"),
        RosterSpot::new("Jayson Tatum", "Celtics"),
        RosterSpot::new("Shai Gilgeous-Alexander", "Thunder"),
        RosterSpot::new("Joel Embiid", "76ers"),
    ]
}
