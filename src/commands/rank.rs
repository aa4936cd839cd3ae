//! The ranking report: resolve, fetch, aggregate, project, sort, print.

use serde::Serialize;

use crate::{
    cli::types::{PlayerId, RosterSpot, Season},
    nba::{
        chart,
        compute::{split_by_outcome, SeasonAverages},
        http, normalize, resolve,
        types::GameRow,
    },
    Result,
};

/// Configuration for one ranking run.
#[derive(Debug)]
pub struct RankParams {
    pub season: Season,
    pub roster: Vec<RosterSpot>,
    pub splits: bool,
    pub chart: bool,
    pub as_json: bool,
    pub debug: bool,
}

/// Win/loss-conditional projections alongside the partitioned means.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSplits {
    pub wins: SeasonAverages,
    pub wins_projection: f64,
    pub losses: SeasonAverages,
    pub losses_projection: f64,
}

/// One player's finished season summary, ready for ranking and output.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub team: Option<String>,
    pub overall: SeasonAverages,
    pub projection: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits: Option<ReportSplits>,
}

impl PlayerReport {
    /// Reduce a player's normalized game rows to a report. An empty log
    /// yields the all-zero summary with projection 0.0.
    pub fn build(spot: &RosterSpot, rows: &[GameRow], with_splits: bool) -> Self {
        let overall = SeasonAverages::from_rows(rows);
        let splits = with_splits.then(|| {
            let parts = split_by_outcome(rows);
            ReportSplits {
                wins: parts.wins,
                wins_projection: parts.wins.projection(),
                losses: parts.losses,
                losses_projection: parts.losses.projection(),
            }
        });

        Self {
            name: spot.name.clone(),
            team: spot.team.clone(),
            projection: overall.projection(),
            overall,
            splits,
        }
    }
}

/// Stable sort descending by overall projection. Ties keep roster
/// insertion order, so repeated runs print the same table.
pub fn rank_reports(reports: &mut [PlayerReport]) {
    reports.sort_by(|a, b| {
        b.projection
            .partial_cmp(&a.projection)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Run the full report: one sequential resolve/fetch/aggregate pass per
/// roster entry, then a single sorted table.
///
/// Per-player failures (unknown name, fetch error, malformed payload) log
/// a diagnostic and skip that player; the batch always completes.
pub async fn handle_rank(params: RankParams) -> Result<()> {
    println!("Fetching league roster for {}...", params.season);
    let roster = resolve::roster_from_response(
        http::get_all_players(&params.season, params.debug).await?,
    )?;
    println!("✓ Loaded {} roster entries", roster.len());

    let mut reports: Vec<PlayerReport> = Vec::new();
    for spot in &params.roster {
        match &spot.team {
            Some(team) => println!("Fetching stats for {} ({})...", spot.name, team),
            None => println!("Fetching stats for {}...", spot.name),
        }

        let Some(player_id) = resolve::find_player_by_full_name(&roster, &spot.name) else {
            println!("No player found with name {}", spot.name);
            continue;
        };

        let mut rows = match fetch_game_rows(player_id, &params.season, params.debug).await {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("⚠ Could not fetch game log for {}: {}", spot.name, e);
                continue;
            }
        };
        chart::sort_chronologically(&mut rows);

        if params.chart {
            match chart::render_trend(&spot.name, &rows) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => eprintln!("⚠ Skipping chart for {}: {}", spot.name, e),
            }
        }

        reports.push(PlayerReport::build(spot, &rows, params.splits));
    }

    rank_reports(&mut reports);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_table(&reports, params.splits);
    }

    Ok(())
}

async fn fetch_game_rows(player_id: PlayerId, season: &Season, debug: bool) -> Result<Vec<GameRow>> {
    let payload = http::get_player_game_log(player_id, season, debug).await?;
    normalize::normalize_game_log(payload)
}

fn table_header(splits: bool) -> String {
    let mut line = format!(
        "{:<24} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Player", "Points", "Rebounds", "Assists", "Steals", "Blocks", "Turnovers"
    );
    if splits {
        line.push_str(&format!(
            " {:>18} {:>18} {:>18}",
            "Overall Projection", "Wins Projection", "Losses Projection"
        ));
    } else {
        line.push_str(&format!(" {:>10}", "Projection"));
    }
    line
}

fn table_row(report: &PlayerReport) -> String {
    let a = &report.overall;
    let mut line = format!(
        "{:<24} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
        report.name, a.points, a.rebounds, a.assists, a.steals, a.blocks, a.turnovers
    );
    match &report.splits {
        Some(s) => line.push_str(&format!(
            " {:>18.1} {:>18.1} {:>18.1}",
            report.projection, s.wins_projection, s.losses_projection
        )),
        None => line.push_str(&format!(" {:>10.1}", report.projection)),
    }
    line
}

fn print_table(reports: &[PlayerReport], splits: bool) {
    if reports.is_empty() {
        println!("No players to rank.");
        return;
    }

    println!("{}", table_header(splits));
    for report in reports {
        println!("{}", table_row(report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::types::Outcome;

    fn spot(name: &str) -> RosterSpot {
        RosterSpot {
            name: name.to_string(),
            team: None,
        }
    }

    fn scoring_row(points: f64, outcome: Option<Outcome>) -> GameRow {
        GameRow {
            points,
            outcome,
            ..GameRow::default()
        }
    }

    #[test]
    fn build_report_without_splits() {
        let rows = [scoring_row(20.0, None), scoring_row(30.0, None)];
        let report = PlayerReport::build(&spot("Test Player"), &rows, false);

        assert_eq!(report.overall.points, 25.0);
        assert_eq!(report.projection, 25.0);
        assert!(report.splits.is_none());
    }

    #[test]
    fn build_report_with_splits() {
        let rows = [
            scoring_row(20.0, Some(Outcome::Win)),
            scoring_row(30.0, Some(Outcome::Win)),
            scoring_row(10.0, Some(Outcome::Loss)),
        ];
        let report = PlayerReport::build(&spot("Test Player"), &rows, true);

        let splits = report.splits.unwrap();
        assert_eq!(report.overall.points, 20.0);
        assert_eq!(splits.wins.points, 25.0);
        assert_eq!(splits.wins_projection, 25.0);
        assert_eq!(splits.losses.points, 10.0);
        assert_eq!(splits.losses_projection, 10.0);
    }

    #[test]
    fn empty_log_builds_zero_report() {
        let report = PlayerReport::build(&spot("Benchwarmer"), &[], true);
        assert_eq!(report.overall, SeasonAverages::zero());
        assert_eq!(report.projection, 0.0);
        let splits = report.splits.unwrap();
        assert_eq!(splits.wins_projection, 0.0);
        assert_eq!(splits.losses_projection, 0.0);
    }

    #[test]
    fn ranking_is_descending_by_projection() {
        let mut reports = vec![
            PlayerReport::build(&spot("Low"), &[scoring_row(10.0, None)], false),
            PlayerReport::build(&spot("High"), &[scoring_row(30.0, None)], false),
            PlayerReport::build(&spot("Mid"), &[scoring_row(20.0, None)], false),
        ];
        rank_reports(&mut reports);

        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn tied_projections_keep_insertion_order() {
        let rows = [scoring_row(20.0, None)];
        let mut reports = vec![
            PlayerReport::build(&spot("First"), &rows, false),
            PlayerReport::build(&spot("Second"), &rows, false),
            PlayerReport::build(&spot("Third"), &rows, false),
        ];
        rank_reports(&mut reports);

        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn table_header_uses_full_column_labels() {
        let header = table_header(false);
        for label in [
            "Player",
            "Points",
            "Rebounds",
            "Assists",
            "Steals",
            "Blocks",
            "Turnovers",
            "Projection",
        ] {
            assert!(header.contains(label), "missing column label {:?}", label);
        }

        let split_header = table_header(true);
        for label in ["Overall Projection", "Wins Projection", "Losses Projection"] {
            assert!(
                split_header.contains(label),
                "missing split column label {:?}",
                label
            );
        }
    }

    #[test]
    fn table_rows_carry_the_rounded_values() {
        let report = PlayerReport::build(&spot("Test Player"), &[scoring_row(20.0, None)], false);
        let row = table_row(&report);
        assert!(row.starts_with("Test Player"));
        assert!(row.ends_with("20.0"));

        let split_report =
            PlayerReport::build(&spot("Test Player"), &[scoring_row(20.0, Some(Outcome::Win))], true);
        let row = table_row(&split_report);
        // Overall, wins, and losses projections in that order.
        assert!(row.contains("20.0"));
        assert!(row.ends_with("0.0"));
    }

    #[test]
    fn json_output_round_trips() {
        let report = PlayerReport::build(&spot("Test Player"), &[scoring_row(20.0, None)], false);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["name"], "Test Player");
        assert_eq!(json["projection"], 20.0);
        assert_eq!(json["overall"]["games"], 1);
        assert!(json.get("splits").is_none());
    }
}
