//! Text rendering of optimized lineups.

use crate::{cli::types::League, lineup::LineupRow};

/// Shown instead of a table when no lineup could be built.
///
/// An empty slate and a cap too tight for any legal roster look the same here.
pub const NO_LINEUP_MESSAGE: &str =
    "No lineup could be built: no games today or no roster fits the salary cap.";

/// Render a lineup as a fixed-width table with a totals line.
pub fn render_table(league: League, rows: &[LineupRow]) -> String {
    if rows.is_empty() {
        return format!("{} optimal lineup\n{}\n", league, NO_LINEUP_MESSAGE);
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut out = format!("{} optimal lineup\n", league);
    out.push_str(&format!(
        "{:<7} {:<name_width$} {:<5} {:>7} {:>9}\n",
        "Pos", "Player", "Team", "FP", "Salary"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<7} {:<name_width$} {:<5} {:>7.2} {:>9}\n",
            position_label(row),
            row.name,
            row.team,
            row.points,
            format_salary(row.salary),
        ));
    }

    let points: f64 = rows.iter().map(|r| r.points).sum();
    let salary: f64 = rows.iter().map(|r| r.salary).sum();
    out.push_str(&format!(
        "{} players, {:.2} projected points, {} salary\n",
        rows.len(),
        points,
        format_salary(salary)
    ));
    out
}

fn position_label(row: &LineupRow) -> String {
    std::iter::once(row.position)
        .chain(row.alt_positions.iter().copied())
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// `$` plus thousands separators, whole dollars.
pub fn format_salary(salary: f64) -> String {
    let whole = salary.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
