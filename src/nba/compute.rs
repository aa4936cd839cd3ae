//! Season-average reduction and the weighted projection formula.

use serde::Serialize;

use crate::nba::types::{GameRow, Outcome};

/// Fixed projection weights. These are league policy, not derived values;
/// changing them changes every reference output.
pub const POINTS_WEIGHT: f64 = 1.0;
pub const ASSISTS_WEIGHT: f64 = 1.5;
pub const REBOUNDS_WEIGHT: f64 = 1.2;
pub const STEALS_WEIGHT: f64 = 5.0;
pub const BLOCKS_WEIGHT: f64 = 5.0;
pub const TURNOVERS_WEIGHT: f64 = -1.0;

/// Round to one decimal place. Applied once after each mean and once
/// after the weighted sum.
///
/// Uses `f64::round`, which is half-away-from-zero: a value landing
/// exactly on .x5 rounds up in magnitude (12.25 -> 12.3, -1.25 -> -1.3),
/// where banker's rounding would round to even.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Per-field arithmetic means over one subset of a player's games,
/// each rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonAverages {
    pub games: usize,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

impl SeasonAverages {
    /// The all-zero summary used for empty subsets (no games played, or
    /// an empty win/loss partition). Mirrors the zero-default convention
    /// of normalization.
    pub fn zero() -> Self {
        Self {
            games: 0,
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
        }
    }

    /// Reduce a row subset to rounded per-field means.
    pub fn from_rows(rows: &[GameRow]) -> Self {
        if rows.is_empty() {
            return Self::zero();
        }

        let n = rows.len() as f64;
        let mean = |field: fn(&GameRow) -> f64| round1(rows.iter().map(field).sum::<f64>() / n);

        Self {
            games: rows.len(),
            points: mean(|r| r.points),
            rebounds: mean(|r| r.rebounds),
            assists: mean(|r| r.assists),
            steals: mean(|r| r.steals),
            blocks: mean(|r| r.blocks),
            turnovers: mean(|r| r.turnovers),
        }
    }

    /// Weighted projection over the rounded means, rounded again to one
    /// decimal place.
    pub fn projection(&self) -> f64 {
        round1(
            self.points * POINTS_WEIGHT
                + self.assists * ASSISTS_WEIGHT
                + self.rebounds * REBOUNDS_WEIGHT
                + self.steals * STEALS_WEIGHT
                + self.blocks * BLOCKS_WEIGHT
                + self.turnovers * TURNOVERS_WEIGHT,
        )
    }
}

/// Win-only and loss-only summaries. Rows with an unknown outcome belong
/// to neither partition (they still count toward the overall summary).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonSplits {
    pub wins: SeasonAverages,
    pub losses: SeasonAverages,
}

/// Partition rows by outcome and reduce each side independently.
pub fn split_by_outcome(rows: &[GameRow]) -> SeasonSplits {
    let wins: Vec<GameRow> = rows
        .iter()
        .filter(|r| r.outcome == Some(Outcome::Win))
        .cloned()
        .collect();
    let losses: Vec<GameRow> = rows
        .iter()
        .filter(|r| r.outcome == Some(Outcome::Loss))
        .cloned()
        .collect();

    SeasonSplits {
        wins: SeasonAverages::from_rows(&wins),
        losses: SeasonAverages::from_rows(&losses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        points: f64,
        rebounds: f64,
        assists: f64,
        steals: f64,
        blocks: f64,
        turnovers: f64,
        outcome: Option<Outcome>,
    ) -> GameRow {
        GameRow {
            points,
            rebounds,
            assists,
            steals,
            blocks,
            turnovers,
            outcome,
            ..GameRow::default()
        }
    }

    #[test]
    fn rounding_truncates_to_one_decimal() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        // f64::round is half-away-from-zero, not half-to-even.
        assert_eq!(round1(12.25), 12.3);
        assert_eq!(round1(-1.25), -1.3);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn mean_with_raw_value_12_34_displays_as_12_3() {
        // Three games averaging 12.34 points.
        let rows = [
            row(12.34, 0.0, 0.0, 0.0, 0.0, 0.0, None),
            row(12.34, 0.0, 0.0, 0.0, 0.0, 0.0, None),
            row(12.34, 0.0, 0.0, 0.0, 0.0, 0.0, None),
        ];
        assert_eq!(SeasonAverages::from_rows(&rows).points, 12.3);
    }

    #[test]
    fn reference_projection_scenario() {
        // 3 games averaging 20 pts / 5 reb / 5 ast / 1 stl / 1 blk / 2 tov:
        // 20 + 5*1.5 + 5*1.2 + 1*5 + 1*5 - 2 = 41.5
        let rows = [
            row(18.0, 4.0, 5.0, 1.0, 1.0, 2.0, None),
            row(20.0, 5.0, 5.0, 1.0, 1.0, 2.0, None),
            row(22.0, 6.0, 5.0, 1.0, 1.0, 2.0, None),
        ];
        let avg = SeasonAverages::from_rows(&rows);
        assert_eq!(avg.points, 20.0);
        assert_eq!(avg.rebounds, 5.0);
        assert_eq!(avg.projection(), 41.5);
    }

    #[test]
    fn projection_is_linear_in_the_summary() {
        let base = SeasonAverages {
            games: 10,
            points: 10.0,
            rebounds: 4.0,
            assists: 6.0,
            steals: 1.0,
            blocks: 2.0,
            turnovers: 2.0,
        };
        let doubled = SeasonAverages {
            points: 20.0,
            rebounds: 8.0,
            assists: 12.0,
            steals: 2.0,
            blocks: 4.0,
            turnovers: 4.0,
            ..base
        };
        assert!((doubled.projection() - 2.0 * base.projection()).abs() < 1e-9);
    }

    #[test]
    fn means_stay_within_raw_field_bounds() {
        let rows = [
            row(11.0, 3.0, 7.0, 0.0, 2.0, 1.0, None),
            row(31.0, 9.0, 2.0, 4.0, 0.0, 5.0, None),
            row(24.0, 6.0, 4.0, 1.0, 1.0, 3.0, None),
        ];
        let avg = SeasonAverages::from_rows(&rows);

        for (value, lo, hi) in [
            (avg.points, 11.0, 31.0),
            (avg.rebounds, 3.0, 9.0),
            (avg.assists, 2.0, 7.0),
            (avg.steals, 0.0, 4.0),
            (avg.blocks, 0.0, 2.0),
            (avg.turnovers, 1.0, 5.0),
        ] {
            assert!(value >= lo && value <= hi, "{} not in [{}, {}]", value, lo, hi);
        }
    }

    #[test]
    fn aggregation_is_idempotent() {
        let rows = [
            row(25.0, 10.0, 5.0, 1.0, 2.0, 3.0, Some(Outcome::Win)),
            row(18.0, 7.0, 9.0, 2.0, 0.0, 4.0, Some(Outcome::Loss)),
        ];
        assert_eq!(
            SeasonAverages::from_rows(&rows),
            SeasonAverages::from_rows(&rows)
        );
    }

    #[test]
    fn empty_rows_yield_zero_summary() {
        let avg = SeasonAverages::from_rows(&[]);
        assert_eq!(avg, SeasonAverages::zero());
        assert_eq!(avg.projection(), 0.0);
    }

    #[test]
    fn partition_counts_are_complete_when_outcomes_are_known() {
        let rows = [
            row(10.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Win)),
            row(20.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Win)),
            row(30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Loss)),
        ];
        let splits = split_by_outcome(&rows);
        assert_eq!(splits.wins.games + splits.losses.games, rows.len());
        assert_eq!(splits.wins.points, 15.0);
        assert_eq!(splits.losses.points, 30.0);
    }

    #[test]
    fn missing_outcome_excluded_from_partitions_but_counted_overall() {
        let rows = [
            row(10.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Win)),
            row(20.0, 0.0, 0.0, 0.0, 0.0, 0.0, None),
            row(30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Loss)),
        ];
        let overall = SeasonAverages::from_rows(&rows);
        let splits = split_by_outcome(&rows);

        assert_eq!(overall.games, 3);
        assert_eq!(overall.points, 20.0);
        assert_eq!(splits.wins.games + splits.losses.games, 2);
    }

    #[test]
    fn empty_partition_yields_zero_summary() {
        let rows = [
            row(10.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Loss)),
            row(20.0, 0.0, 0.0, 0.0, 0.0, 0.0, Some(Outcome::Loss)),
        ];
        let splits = split_by_outcome(&rows);
        assert_eq!(splits.wins, SeasonAverages::zero());
        assert_eq!(splits.wins.projection(), 0.0);
        assert_eq!(splits.losses.points, 15.0);
    }
}
