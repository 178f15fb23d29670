//! Roster rules command implementation

use crate::{cli::types::LeagueSelection, lineup::RosterRules, Result};

/// Handle the rules command
pub fn handle_rules(league: LeagueSelection, as_json: bool) -> Result<()> {
    let rules: Vec<RosterRules> = league
        .leagues()
        .into_iter()
        .map(RosterRules::for_league)
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rules)?); // tarpaulin::skip
    } else {
        for r in &rules {
            println!("{}", r); // tarpaulin::skip
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::League;

    #[test]
    fn test_handle_rules_outputs() {
        assert!(handle_rules(LeagueSelection::All, false).is_ok());
        assert!(handle_rules(LeagueSelection::One(League::NBA), true).is_ok());
    }

    #[test]
    fn test_rules_serialize_bounds() {
        let json = serde_json::to_value(RosterRules::for_league(League::NFL)).unwrap();
        assert_eq!(json["league"], "NFL");
        assert!(json["roster_size"].is_null());
        assert_eq!(json["position_bounds"][0]["positions"][0], "QB");
        assert_eq!(json["display_order"][4], "D/ST");
    }
}
