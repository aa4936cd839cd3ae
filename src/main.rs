//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_proj::{
    cli::{Commands, NbaProj},
    commands::rank::{handle_rank, RankParams},
    config, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaProj::parse();

    match app.command {
        Commands::Rank {
            season,
            players,
            splits,
            chart,
            json,
            debug,
        } => {
            handle_rank(RankParams {
                season,
                roster: players.unwrap_or_else(config::default_roster),
                splits,
                chart,
                as_json: json,
                debug,
            })
            .await?
        }
    }

    Ok(())
}
