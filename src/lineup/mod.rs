//! Lineup optimization core.
//!
//! The pipeline for one league is:
//!
//! 1. [`normalize`]: raw scraped rows become typed [`PlayerRecord`]s; bad rows are dropped
//! 2. [`optimizer`]: an integer program picks the point-maximizing roster
//!    allowed by the league's [`RosterRules`] and the salary cap
//! 3. [`format`]: the chosen players are ordered for display
//!
//! [`optimize_lineup`] runs all three. It never fails because of bad data or
//! an impossible roster; both simply produce no rows.

pub mod format;
pub mod normalize;
pub mod optimizer;
pub mod record;
pub mod rules;

pub use format::{format_lineup, LineupRow};
pub use normalize::{normalize_row, normalize_rows, RowRejection};
pub use optimizer::{optimize, Lineup};
pub use record::{PlayerRecord, RawRow};
pub use rules::{PositionBound, RosterRules};

use rayon::prelude::*;
use tracing::info;

use crate::{
    cli::types::{League, SalaryCap},
    Result,
};

/// Build the optimal lineup for `league` from raw source rows.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::{lineup::{optimize_lineup, RawRow}, League, SalaryCap};
///
/// let rows: Vec<RawRow> = Vec::new();
/// let lineup = optimize_lineup(League::NFL, &rows, SalaryCap::default()).unwrap();
/// assert!(lineup.is_empty());
/// ```
pub fn optimize_lineup(
    league: League,
    rows: &[RawRow],
    salary_cap: SalaryCap,
) -> Result<Vec<LineupRow>> {
    let pool = normalize_rows(league, rows);
    if pool.is_empty() {
        info!(league = %league, rows = rows.len(), "no valid candidates");
        return Ok(Vec::new());
    }

    let rules = RosterRules::for_league(league);
    let lineup = optimize(&pool, &rules, salary_cap)?;
    info!(
        league = %league,
        candidates = pool.len(),
        selected = lineup.len(),
        points = lineup.total_points(),
        salary = lineup.total_salary(),
        "lineup optimized"
    );

    Ok(format_lineup(&lineup, &rules))
}

/// Optimize several independent slates in parallel.
///
/// Results come back in the same order as `slates`.
pub fn optimize_leagues(
    slates: &[(League, Vec<RawRow>)],
    salary_cap: SalaryCap,
) -> Vec<(League, Result<Vec<LineupRow>>)> {
    slates
        .par_iter()
        .map(|(league, rows)| (*league, optimize_lineup(*league, rows, salary_cap)))
        .collect()
}
