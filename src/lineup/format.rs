//! Ordering and projection of an optimized lineup for display.

use serde::Serialize;

use super::optimizer::Lineup;
use super::rules::RosterRules;
use crate::cli::types::Position;

/// One displayed lineup row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupRow {
    pub name: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alt_positions: Vec<Position>,
    pub team: String,
    pub points: f64,
    pub salary: f64,
}

/// Sort selected players by the display rank of their primary position.
///
/// Players sharing a position keep their input order. An empty lineup gives
/// an empty vector.
pub fn format_lineup(lineup: &Lineup, rules: &RosterRules) -> Vec<LineupRow> {
    let mut records = lineup.records();
    records.sort_by_key(|r| rules.display_rank(r.primary_position()));

    records
        .into_iter()
        .map(|r| LineupRow {
            name: r.name.clone(),
            position: r.primary_position(),
            alt_positions: r.alt_positions().to_vec(),
            team: r.team.clone(),
            points: r.projected_points,
            salary: r.salary,
        })
        .collect()
}
