//! NBA Season Projection CLI Library
//!
//! Fetches per-player NBA game logs for a season, reduces them to rounded
//! per-game averages, derives a weighted fantasy-style projection, and
//! ranks players by that projection.
//!
//! ## Features
//!
//! - **Name Resolution**: Case-insensitive full-name lookup against the
//!   full league roster; unknown names are skipped, never fatal
//! - **Schema Normalization**: The six tracked stat columns are always
//!   present after normalization, with missing or unparseable values
//!   zero-defaulted
//! - **Projection & Ranking**: Fixed-weight linear projection over the
//!   rounded season means, stable descending sort
//! - **Win/Loss Splits**: Optional partitioned summaries (overall, wins,
//!   losses), each with its own projection
//! - **Trend Charts**: Optional per-game points/rebounds/assists line
//!   chart rendered to the console
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_proj::{commands::rank::*, config, Season};
//!
//! # async fn example() -> nba_proj::Result<()> {
//! let params = RankParams {
//!     season: Season::default(),
//!     roster: config::default_roster(),
//!     splits: false,
//!     chart: false,
//!     as_json: false,
//!     debug: false,
//! };
//!
//! handle_rank(params).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{PlayerId, RosterSpot, Season};
pub use error::{NbaError, Result};
pub use nba::compute::{SeasonAverages, SeasonSplits};
pub use nba::types::{GameRow, Outcome};
