//! Unit tests for row normalization

use super::*;

fn row(player: &str, fp: &str, salary: &str) -> RawRow {
    let mut r = RawRow::new();
    r.insert(PLAYER_COLUMN.to_string(), player.to_string());
    r.insert(POINTS_COLUMN.to_string(), fp.to_string());
    r.insert(SALARY_COLUMN.to_string(), salary.to_string());
    r.insert("Value".to_string(), "3.1".to_string());
    r
}

const MAHOMES: &str = "Patrick Mahomes\t\n\t\tP. Mahomes\nQB\nKC @\u{a0}LV\n";
const CHIEFS_DST: &str = "Kansas City Chiefs D/ST\t\n\nD/ST\nKC @\u{a0}LV\n";
const TATUM: &str = "Jayson Tatum\nJ. Tatum\nSF/PF\nBOS @\u{a0}NYK\n";
const JOKIC: &str = "Nikola Jokic\nN. Jokic\nC\nDEN @\u{a0}PHX\n";

#[cfg(test)]
mod nfl_tests {
    use super::*;

    #[test]
    fn test_skill_player_row() {
        let record = normalize_row(League::NFL, &row(MAHOMES, "24.7", "$9,200")).unwrap();
        assert_eq!(record.name, "Patrick Mahomes");
        assert_eq!(record.positions, vec![Position::QB]);
        assert_eq!(record.team, "LV");
        assert_eq!(record.projected_points, 24.7);
        assert_eq!(record.salary, 9200.0);
    }

    #[test]
    fn test_defense_row_maps_to_def() {
        let record = normalize_row(League::NFL, &row(CHIEFS_DST, "8.2", "$4,500")).unwrap();
        assert_eq!(record.name, "Kansas City Chiefs D/ST");
        assert_eq!(record.positions, vec![Position::DEF]);
    }

    #[test]
    fn test_defense_marker_overrides_missing_code() {
        let player = "Buffalo Bills D/ST\t\nno code here\n";
        let record = normalize_row(League::NFL, &row(player, "7.0", "4400")).unwrap();
        assert_eq!(record.positions, vec![Position::DEF]);
        assert_eq!(record.team, "");
    }

    #[test]
    fn test_position_must_be_on_its_own_line() {
        // "QB" only appears inside the name line, never as an interior line
        let player = "QB Sneak Specialist\t\nXX\n";
        let err = normalize_row(League::NFL, &row(player, "5.0", "5000")).unwrap_err();
        assert_eq!(
            err,
            RowRejection::UnknownPosition {
                name: "QB Sneak Specialist".to_string()
            }
        );
    }

    #[test]
    fn test_nba_code_not_in_nfl_vocabulary() {
        let player = "Somebody\t\nPG\nLAL\n";
        assert!(matches!(
            normalize_row(League::NFL, &row(player, "5.0", "5000")),
            Err(RowRejection::UnknownPosition { .. })
        ));
    }

    #[test]
    fn test_missing_tab_means_no_name() {
        let player = "No Tab Here\nQB\n";
        assert!(matches!(
            normalize_row(League::NFL, &row(player, "5.0", "5000")),
            Err(RowRejection::MissingName(_))
        ));
    }
}

#[cfg(test)]
mod nba_tests {
    use super::*;

    #[test]
    fn test_dual_position_row() {
        let record = normalize_row(League::NBA, &row(TATUM, "48.1", "$10,100")).unwrap();
        assert_eq!(record.name, "Jayson Tatum");
        assert_eq!(record.positions, vec![Position::SF, Position::PF]);
        assert_eq!(record.primary_position(), Position::SF);
        assert_eq!(record.team, "NYK");
    }

    #[test]
    fn test_single_position_row() {
        let record = normalize_row(League::NBA, &row(JOKIC, "55.0", "$12,000")).unwrap();
        assert_eq!(record.positions, vec![Position::C]);
    }

    #[test]
    fn test_unknown_secondary_is_ignored() {
        let player = "Utility Guy\nPG/XX\n";
        let record = normalize_row(League::NBA, &row(player, "20", "5000")).unwrap();
        assert_eq!(record.positions, vec![Position::PG]);
    }

    #[test]
    fn test_unknown_primary_rejects_row() {
        let player = "Utility Guy\nXX/PG\n";
        assert!(matches!(
            normalize_row(League::NBA, &row(player, "20", "5000")),
            Err(RowRejection::UnknownPosition { .. })
        ));
    }
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn test_parse_salary_strips_currency() {
        assert_eq!(parse_salary("$7,000").unwrap(), 7000.0);
        assert_eq!(parse_salary(" 6500 ").unwrap(), 6500.0);
        assert_eq!(parse_salary("$10,250.50").unwrap(), 10250.5);
    }

    #[test]
    fn test_parse_salary_rejects_bad_values() {
        for bad in ["", "N/A", "$", "0", "-100", "inf"] {
            assert!(parse_salary(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points("18.4").unwrap(), 18.4);
        assert_eq!(parse_points("0").unwrap(), 0.0);
        assert!(parse_points("--").is_err());
        assert!(parse_points("NaN").is_err());
        assert!(parse_points("-2.5").is_err());
    }

    #[test]
    fn test_bad_salary_reports_column() {
        let err = normalize_row(League::NFL, &row(MAHOMES, "24.7", "TBD")).unwrap_err();
        assert_eq!(
            err,
            RowRejection::BadNumber {
                column: SALARY_COLUMN,
                value: "TBD".to_string()
            }
        );
    }

    #[test]
    fn test_missing_column() {
        let mut r = row(MAHOMES, "24.7", "$9,200");
        r.remove(POINTS_COLUMN);
        assert_eq!(
            normalize_row(League::NFL, &r).unwrap_err(),
            RowRejection::MissingColumn(POINTS_COLUMN)
        );
    }
}

#[test]
fn test_normalize_rows_drops_bad_rows_in_order() {
    let rows = vec![
        row(MAHOMES, "24.7", "$9,200"),
        row(MAHOMES, "24.7", "not a salary"),
        row(CHIEFS_DST, "8.2", "$4,500"),
    ];
    let records = normalize_rows(League::NFL, &rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Patrick Mahomes");
    assert_eq!(records[1].name, "Kansas City Chiefs D/ST");
}
