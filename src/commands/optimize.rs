//! Lineup optimization command.
//!
//! Fetches each selected league's rows, solves every league in parallel and
//! prints one lineup per league. An empty lineup is printed as a fixed
//! message; a source failure aborts the command.

use std::path::PathBuf;

use serde::Serialize;

use super::{
    render::{render_table, NO_LINEUP_MESSAGE},
    resolve_salary_cap,
};
use crate::{
    cli::types::{League, LeagueSelection, SalaryCap},
    lineup::{optimize_leagues, LineupRow, RawRow},
    source::RowSource,
    Result,
};

/// Configuration parameters for the optimize command.
#[derive(Debug)]
pub struct OptimizeParams {
    pub league: LeagueSelection,
    pub salary_cap: Option<SalaryCap>,
    pub input: Option<PathBuf>,
    pub as_json: bool,
}

/// JSON shape for one league's result.
#[derive(Debug, Serialize)]
pub struct LeagueLineup {
    pub league: League,
    pub salary_cap: SalaryCap,
    pub total_points: f64,
    pub total_salary: f64,
    pub players: Vec<LineupRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl LeagueLineup {
    pub fn new(league: League, salary_cap: SalaryCap, players: Vec<LineupRow>) -> Self {
        let message = players.is_empty().then_some(NO_LINEUP_MESSAGE);
        Self {
            league,
            salary_cap,
            total_points: players.iter().map(|p| p.points).sum(),
            total_salary: players.iter().map(|p| p.salary).sum(),
            players,
            message,
        }
    }
}

/// Fetch rows for every selected league and solve them.
///
/// Rows for all leagues are fetched before any solve starts, so a source
/// failure in one league fails the whole command.
pub async fn run_optimize(
    source: &RowSource,
    leagues: &[League],
    salary_cap: SalaryCap,
) -> Result<Vec<LeagueLineup>> {
    let mut slates: Vec<(League, Vec<RawRow>)> = Vec::with_capacity(leagues.len());
    for &league in leagues {
        slates.push((league, source.fetch(league).await?));
    }

    let solved = run_blocking(move || optimize_leagues(&slates, salary_cap)).await?;

    solved
        .into_iter()
        .map(|(league, rows)| Ok(LeagueLineup::new(league, salary_cap, rows?)))
        .collect()
}

/// Run CPU-bound work off the async runtime.
///
/// A panic in `work` is resumed on the caller, not reported as an error.
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(crate::LineupError::Solver {
            message: e.to_string(),
        }),
    }
}

/// Handle the optimize command.
pub async fn handle_optimize(params: OptimizeParams) -> Result<()> {
    let salary_cap = resolve_salary_cap(params.salary_cap)?;
    let source = RowSource::from_input(params.input);

    let lineups = run_optimize(&source, &params.league.leagues(), salary_cap).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&lineups)?); // tarpaulin::skip
    } else {
        for (i, lineup) in lineups.iter().enumerate() {
            // tarpaulin::skip - console output
            if i > 0 {
                println!();
            }
            print!("{}", render_table(lineup.league, &lineup.players));
        }
    }

    Ok(())
}
