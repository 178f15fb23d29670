//! Roster position codes for the supported daily fantasy leagues.

use crate::error::LineupError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::league::League;

/// A position a player can be eligible at.
///
/// Covers both league vocabularies. NFL uses `QB RB WR TE K DEF`
/// (the projection source writes defenses as `D/ST`); NBA uses
/// `PG SG SF PF C`.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::{League, Position};
///
/// assert_eq!("d/st".parse::<Position>().unwrap(), Position::DEF);
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// assert!(Position::parse_for(League::NBA, "QB").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Parse a code, accepting it only if it belongs to `league`'s vocabulary.
    pub fn parse_for(league: League, code: &str) -> Result<Self, LineupError> {
        let position: Position = code.parse()?;
        if position.league() == league {
            Ok(position)
        } else {
            Err(LineupError::InvalidPosition {
                position: code.to_string(),
            })
        }
    }

    /// The league whose vocabulary contains this position.
    pub fn league(&self) -> League {
        match self {
            Position::QB
            | Position::RB
            | Position::WR
            | Position::TE
            | Position::K
            | Position::DEF => League::NFL,
            Position::PG | Position::SG | Position::SF | Position::PF | Position::C => League::NBA,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "D/ST",
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(LineupError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::DEF.to_string(), "D/ST");
        assert_eq!(Position::PG.to_string(), "PG");
        assert_eq!(Position::C.to_string(), "C");
    }

    #[test]
    fn test_defense_aliases() {
        assert_eq!("DEF".parse::<Position>().unwrap(), Position::DEF);
        assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
        assert_eq!("dst".parse::<Position>().unwrap(), Position::DEF);
    }

    #[test]
    fn test_unknown_code_rejected() {
        match "LB".parse::<Position>() {
            Err(LineupError::InvalidPosition { position }) => assert_eq!(position, "LB"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_for_respects_league_vocabulary() {
        assert_eq!(Position::parse_for(League::NFL, "TE").unwrap(), Position::TE);
        assert_eq!(Position::parse_for(League::NBA, "SF").unwrap(), Position::SF);
        assert!(Position::parse_for(League::NFL, "PG").is_err());
        assert!(Position::parse_for(League::NBA, "WR").is_err());
    }

    #[test]
    fn test_serializes_as_display_code() {
        let json = serde_json::to_string(&Position::DEF).unwrap();
        assert_eq!(json, "\"D/ST\"");
    }
}
