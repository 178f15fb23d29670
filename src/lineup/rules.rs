//! Per-league roster construction rules.
//!
//! Rules are fixed configuration: an optional exact roster size, a list of
//! inclusive count bounds over positions or position groups, and the order
//! positions are listed in when a lineup is displayed. Display order never
//! affects feasibility.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::record::PlayerRecord;
use crate::cli::types::{League, Position};

/// Inclusive `[min, max]` count of selected players eligible in `positions`.
///
/// A player counts once toward a bound when any of its positions is in the
/// set, so a group bound such as RB+WR counts a player once even if it were
/// eligible at both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionBound {
    pub positions: BTreeSet<Position>,
    pub min: u32,
    pub max: Option<u32>,
}

impl PositionBound {
    pub fn new(positions: &[Position], min: u32, max: Option<u32>) -> Self {
        Self {
            positions: positions.iter().copied().collect(),
            min,
            max,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.max == Some(self.min)
    }

    pub fn admits(&self, record: &PlayerRecord) -> bool {
        record.is_eligible_in(&self.positions)
    }

    pub fn contains_count(&self, count: u32) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for PositionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self
            .positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("+");
        match self.max {
            Some(max) if max == self.min => write!(f, "{}: exactly {}", group, max),
            Some(max) => write!(f, "{}: {}-{}", group, self.min, max),
            None => write!(f, "{}: at least {}", group, self.min),
        }
    }
}

/// Roster shape for one league.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::{lineup::RosterRules, League, Position};
///
/// let rules = RosterRules::new(League::NFL)
///     .exactly(&[Position::QB], 1)
///     .between(&[Position::RB], 2, 3)
///     .with_display_order(&[Position::QB, Position::RB]);
/// assert_eq!(rules.position_bounds.len(), 2);
/// assert_eq!(rules.display_rank(Position::RB), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRules {
    pub league: League,
    pub roster_size: Option<u32>,
    pub position_bounds: Vec<PositionBound>,
    pub display_order: Vec<Position>,
}

impl RosterRules {
    /// Empty rule set: no size, no bounds, no display order.
    pub fn new(league: League) -> Self {
        Self {
            league,
            roster_size: None,
            position_bounds: Vec::new(),
            display_order: Vec::new(),
        }
    }

    /// Built-in rules for `league`.
    pub fn for_league(league: League) -> Self {
        use Position::*;

        match league {
            // No fixed size; the RB+WR cap leaves one flex spot.
            League::NFL => Self::new(league)
                .exactly(&[QB], 1)
                .between(&[RB], 2, 3)
                .between(&[WR], 3, 4)
                .at_most(&[RB, WR], 6)
                .exactly(&[TE], 1)
                .exactly(&[DEF], 1)
                .exactly(&[K], 0)
                .with_display_order(&[QB, RB, WR, TE, DEF]),
            League::NBA => Self::new(league)
                .with_roster_size(9)
                .exactly(&[PG], 2)
                .exactly(&[SG], 2)
                .exactly(&[SF], 2)
                .exactly(&[PF], 2)
                .exactly(&[C], 1)
                .with_display_order(&[PG, SG, SF, PF, C]),
        }
    }

    pub fn with_roster_size(mut self, size: u32) -> Self {
        self.roster_size = Some(size);
        self
    }

    pub fn exactly(self, positions: &[Position], count: u32) -> Self {
        self.bound(PositionBound::new(positions, count, Some(count)))
    }

    pub fn between(self, positions: &[Position], min: u32, max: u32) -> Self {
        self.bound(PositionBound::new(positions, min, Some(max)))
    }

    pub fn at_most(self, positions: &[Position], max: u32) -> Self {
        self.bound(PositionBound::new(positions, 0, Some(max)))
    }

    pub fn at_least(self, positions: &[Position], min: u32) -> Self {
        self.bound(PositionBound::new(positions, min, None))
    }

    pub fn bound(mut self, bound: PositionBound) -> Self {
        self.position_bounds.push(bound);
        self
    }

    pub fn with_display_order(mut self, order: &[Position]) -> Self {
        self.display_order = order.to_vec();
        self
    }

    /// Rank of `position` in the display order; unlisted positions sort last.
    pub fn display_rank(&self, position: Position) -> usize {
        self.display_order
            .iter()
            .position(|p| *p == position)
            .unwrap_or(self.display_order.len())
    }

    /// Check roster size and every position bound against a selection.
    ///
    /// The salary cap is not part of the rules and is not checked here.
    pub fn is_satisfied_by(&self, selected: &[&PlayerRecord]) -> bool {
        if let Some(size) = self.roster_size {
            if selected.len() != size as usize {
                return false;
            }
        }
        self.position_bounds.iter().all(|bound| {
            let count = selected.iter().filter(|r| bound.admits(r)).count() as u32;
            bound.contains_count(count)
        })
    }
}

impl fmt::Display for RosterRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} roster rules", self.league)?;
        match self.roster_size {
            Some(size) => writeln!(f, "  roster size: {}", size)?,
            None => writeln!(f, "  roster size: unconstrained")?,
        }
        for bound in &self.position_bounds {
            writeln!(f, "  {}", bound)?;
        }
        let order = self
            .display_order
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "  display order: {}", order)
    }
}
