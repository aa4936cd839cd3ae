//! HTTP access to the NBA stats API.

use std::sync::LazyLock;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, REFERER},
    Client,
};
use serde_json::Value;

use crate::{
    cli::types::{PlayerId, Season},
    Result,
};

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

static HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent("Mozilla/5.0 (X11; Linux x86_64) nba-proj/0.1")
        .build()
        .expect("Client build")
});

/// Headers the stats API requires before it will answer non-browser
/// clients.
pub fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

async fn get_stats(endpoint: &str, params: &[(&str, String)], debug: bool) -> Result<Value> {
    let url = format!("{}/{}", STATS_BASE_URL, endpoint);
    let builder = HTTP.get(&url).headers(stats_header_map()).query(params);

    if debug {
        let req = builder.try_clone().expect("no request body").build()?;
        eprintln!("URL => {}", req.url());
        eprintln!("HEADERS:");
        for (k, v) in req.headers().iter() {
            eprintln!("  {}: {:?}", k, v);
        }
    }

    let v = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}

/// Fetch the full (name, identifier) roster for a season via
/// `commonallplayers`.
pub async fn get_all_players(season: &Season, debug: bool) -> Result<Value> {
    let params = [
        ("LeagueID", "00".to_string()),
        ("Season", season.to_string()),
        ("IsOnlyCurrentSeason", "0".to_string()),
    ];
    get_stats("commonallplayers", &params, debug).await
}

/// Fetch one player's per-game rows for a season via `playergamelog`.
pub async fn get_player_game_log(
    player_id: PlayerId,
    season: &Season,
    debug: bool,
) -> Result<Value> {
    let params = [
        ("PlayerID", player_id.to_string()),
        ("Season", season.to_string()),
        ("SeasonType", "Regular Season".to_string()),
    ];
    get_stats("playergamelog", &params, debug).await
}
