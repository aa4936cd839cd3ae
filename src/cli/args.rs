//! CLI argument definitions and parsing structures.

use super::types::{roster::RosterSpot, time::Season};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "nba-proj", about = "NBA season-average projection CLI")]
pub struct NbaProj {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch season game logs, compute per-game averages and a weighted
    /// projection for each player, and print a ranking table.
    Rank {
        /// Season string (e.g. 2022-23).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Player to include, as `NAME` or `NAME:TEAM` - repeatable:
        /// `-p "Nikola Jokic:Nuggets" -p "Luka Doncic"`. Defaults to the
        /// built-in roster when omitted.
        #[clap(long = "player", short = 'p', value_parser = clap::value_parser!(RosterSpot))]
        players: Option<Vec<RosterSpot>>,

        /// Split averages and projections by game outcome (win/loss).
        #[clap(long)]
        splits: bool,

        /// Render a per-game trend chart (points/rebounds/assists) for each
        /// player before the ranking table.
        #[clap(long)]
        chart: bool,

        /// Output the ranking as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print request URLs and headers for debugging.
        #[clap(long)]
        debug: bool,
    },
}
