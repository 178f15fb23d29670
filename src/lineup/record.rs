//! Typed player records that feed the optimizer.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::cli::types::Position;

/// One scraped table row: column name to raw cell text.
pub type RawRow = BTreeMap<String, String>;

/// A player eligible for the current slate.
///
/// `positions` is never empty; the first entry is the primary position used
/// for display, and every entry counts toward roster bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub positions: Vec<Position>,
    pub team: String,
    pub projected_points: f64,
    pub salary: f64,
}

impl PlayerRecord {
    pub fn primary_position(&self) -> Position {
        self.positions[0]
    }

    /// Positions after the primary one.
    pub fn alt_positions(&self) -> &[Position] {
        &self.positions[1..]
    }

    pub fn is_eligible_at(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// True when any eligible position is in `group`.
    pub fn is_eligible_in(&self, group: &BTreeSet<Position>) -> bool {
        self.positions.iter().any(|p| group.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard_forward() -> PlayerRecord {
        PlayerRecord {
            name: "Swingman".to_string(),
            positions: vec![Position::SG, Position::SF],
            team: "BOS".to_string(),
            projected_points: 31.5,
            salary: 7400.0,
        }
    }

    #[test]
    fn test_primary_and_alt_positions() {
        let p = guard_forward();
        assert_eq!(p.primary_position(), Position::SG);
        assert_eq!(p.alt_positions(), &[Position::SF]);
    }

    #[test]
    fn test_eligibility_covers_every_position() {
        let p = guard_forward();
        assert!(p.is_eligible_at(Position::SG));
        assert!(p.is_eligible_at(Position::SF));
        assert!(!p.is_eligible_at(Position::PG));

        let forwards: BTreeSet<_> = [Position::SF, Position::PF].into_iter().collect();
        let centers: BTreeSet<_> = [Position::C].into_iter().collect();
        assert!(p.is_eligible_in(&forwards));
        assert!(!p.is_eligible_in(&centers));
    }
}
