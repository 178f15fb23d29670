//! HTTP retrieval of daily projection pages.

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use super::html::parse_stat_table;
use crate::{cli::types::League, lineup::RawRow, Result};

/// Base path for the daily fantasy projection pages.
pub const PROJECTIONS_BASE_URL: &str = "https://www.numberfire.com";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Projection pages for a league. NFL splits skill players and defenses.
pub fn projection_urls(league: League) -> Vec<String> {
    match league {
        League::NFL => vec![
            format!("{PROJECTIONS_BASE_URL}/nfl/daily-fantasy/daily-football-projections"),
            format!("{PROJECTIONS_BASE_URL}/nfl/daily-fantasy/daily-football-projections/D"),
        ],
        League::NBA => vec![format!(
            "{PROJECTIONS_BASE_URL}/nba/daily-fantasy/daily-basketball-projections"
        )],
    }
}

pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Fetch one page and parse its projection table.
pub async fn fetch_table(client: &Client, url: &str) -> Result<Vec<RawRow>> {
    info!(url, "fetching projections");

    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let rows = parse_stat_table(&html, url)?;
    info!(url, rows = rows.len(), "parsed projection table");
    Ok(rows)
}

/// Fetch every page for `league` and concatenate the rows in page order.
///
/// A slate with no games yields an empty table, which is not an error.
pub async fn fetch_league_rows(client: &Client, league: League) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();
    for url in projection_urls(league) {
        rows.extend(fetch_table(client, &url).await?);
    }
    Ok(rows)
}
