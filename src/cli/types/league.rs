//! League selectors.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A daily fantasy league with its own roster rules and source formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum League {
    NFL,
    NBA,
}

impl League {
    /// Every supported league, in menu order.
    pub fn all() -> [League; 2] {
        [League::NFL, League::NBA]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            League::NFL => "NFL",
            League::NBA => "NBA",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for League {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NFL" => Ok(League::NFL),
            "NBA" => Ok(League::NBA),
            _ => Err(LineupError::InvalidLeague {
                league: s.to_string(),
            }),
        }
    }
}

/// League choice on the command line: one league, or every league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueSelection {
    One(League),
    All,
}

impl LeagueSelection {
    pub fn leagues(&self) -> Vec<League> {
        match self {
            LeagueSelection::One(league) => vec![*league],
            LeagueSelection::All => League::all().to_vec(),
        }
    }
}

impl Default for LeagueSelection {
    fn default() -> Self {
        LeagueSelection::One(League::NFL)
    }
}

impl fmt::Display for LeagueSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueSelection::One(league) => write!(f, "{}", league),
            LeagueSelection::All => write!(f, "ALL"),
        }
    }
}

impl FromStr for LeagueSelection {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(LeagueSelection::All)
        } else {
            Ok(LeagueSelection::One(s.parse()?))
        }
    }
}
