//! Raw row normalization.
//!
//! Turns scraped projection rows into [`PlayerRecord`]s. The `Player` column
//! is a composite cell (name, position, team and opponent separated by tabs
//! and newlines) whose layout differs per league. Rows that cannot be fully
//! parsed are dropped here so the optimizer never sees a missing coefficient.

use thiserror::Error;
use tracing::debug;

use super::record::{PlayerRecord, RawRow};
use crate::cli::types::{League, Position};

#[cfg(test)]
mod tests;

pub const PLAYER_COLUMN: &str = "Player";
pub const POINTS_COLUMN: &str = "FP";
pub const SALARY_COLUMN: &str = "Salary";

const NFL_CODES: [&str; 6] = ["QB", "RB", "WR", "TE", "K", "D/ST"];
const NBA_CODES: [&str; 5] = ["PG", "SG", "SF", "PF", "C"];
const DEFENSE_MARKER: &str = "D/ST";
const TEAM_MARKER: &str = "@\u{a0}";

/// Why a row was left out of the candidate pool.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowRejection {
    #[error("missing column {0}")]
    MissingColumn(&'static str),

    #[error("no player name in {0:?}")]
    MissingName(String),

    #[error("no recognized position for {name}")]
    UnknownPosition { name: String },

    #[error("unparsable {column} value {value:?}")]
    BadNumber { column: &'static str, value: String },
}

/// Normalize one row for `league`.
pub fn normalize_row(league: League, row: &RawRow) -> Result<PlayerRecord, RowRejection> {
    let player = column(row, PLAYER_COLUMN)?;

    let name = match league {
        League::NFL => nfl_name(player),
        League::NBA => nba_name(player),
    }
    .ok_or_else(|| RowRejection::MissingName(player.to_string()))?;

    let positions = match league {
        League::NFL => nfl_positions(player, &name),
        League::NBA => nba_positions(player),
    }
    .ok_or_else(|| RowRejection::UnknownPosition { name: name.clone() })?;

    let projected_points = parse_points(column(row, POINTS_COLUMN)?)?;
    let salary = parse_salary(column(row, SALARY_COLUMN)?)?;

    Ok(PlayerRecord {
        name,
        positions,
        team: team(player),
        projected_points,
        salary,
    })
}

/// Normalize every row, keeping valid records in input order.
pub fn normalize_rows(league: League, rows: &[RawRow]) -> Vec<PlayerRecord> {
    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match normalize_row(league, row) {
            Ok(record) => records.push(record),
            Err(reason) => debug!(league = %league, row = i, %reason, "dropping row"),
        }
    }
    debug!(
        league = %league,
        kept = records.len(),
        dropped = rows.len() - records.len(),
        "normalized candidate pool"
    );
    records
}

/// Strip `$` and thousands separators, then parse.
pub fn parse_salary(raw: &str) -> Result<f64, RowRejection> {
    let cleaned: String = raw.trim().chars().filter(|c| !matches!(c, '$' | ',')).collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(RowRejection::BadNumber {
            column: SALARY_COLUMN,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_points(raw: &str) -> Result<f64, RowRejection> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(RowRejection::BadNumber {
            column: POINTS_COLUMN,
            value: raw.to_string(),
        }),
    }
}

fn column<'a>(row: &'a RawRow, name: &'static str) -> Result<&'a str, RowRejection> {
    row.get(name)
        .map(String::as_str)
        .ok_or(RowRejection::MissingColumn(name))
}

/// Lines that have a newline on both sides.
fn interior_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = text.split('\n').collect();
    let end = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .take(end)
        .skip(1)
        .map(|l| l.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r' || c == '\u{a0}'))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn nfl_name(player: &str) -> Option<String> {
    player
        .lines()
        .find_map(|line| line.split_once('\t').map(|(name, _)| name))
        .and_then(non_empty)
}

fn nba_name(player: &str) -> Option<String> {
    player.split_once('\n').and_then(|(name, _)| non_empty(name))
}

fn nfl_positions(player: &str, name: &str) -> Option<Vec<Position>> {
    if name.contains(DEFENSE_MARKER) {
        return Some(vec![Position::DEF]);
    }
    interior_lines(player)
        .find(|line| NFL_CODES.contains(line))
        .and_then(|code| Position::parse_for(League::NFL, code).ok())
        .map(|p| vec![p])
}

fn nba_positions(player: &str) -> Option<Vec<Position>> {
    if let Some(pair) = interior_lines(player).find(|line| line.contains('/')) {
        let (primary, secondary) = pair.split_once('/')?;
        let primary = Position::parse_for(League::NBA, primary).ok()?;
        let mut positions = vec![primary];
        if let Ok(secondary) = Position::parse_for(League::NBA, secondary) {
            if secondary != primary {
                positions.push(secondary);
            }
        }
        return Some(positions);
    }
    interior_lines(player)
        .find(|line| NBA_CODES.contains(line))
        .and_then(|code| Position::parse_for(League::NBA, code).ok())
        .map(|p| vec![p])
}

fn team(player: &str) -> String {
    player
        .split_once(TEAM_MARKER)
        .and_then(|(_, rest)| rest.split_once('\n'))
        .map(|(team, _)| team.trim().to_string())
        .unwrap_or_default()
}
