//! Projection table parsing.

use scraper::{ElementRef, Html, Selector};

use crate::{lineup::RawRow, LineupError, Result};

const TABLE_SELECTOR: &str = "table.stat-table";

/// Parse the projection table out of a page.
///
/// The table's first row is a grouping banner and is skipped; the second row
/// holds the column names. Every later row maps column name to the trimmed
/// text of its direct child cells. Rows with fewer cells than headers only
/// get the columns they have.
pub fn parse_stat_table(html: &str, source_name: &str) -> Result<Vec<RawRow>> {
    let document = Html::parse_document(html);
    let table_selector = selector(TABLE_SELECTOR)?;
    let row_selector = selector("tr")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| LineupError::UpstreamUnavailable {
            source_name: source_name.to_string(),
            message: format!("no `{}` on page", TABLE_SELECTOR),
        })?;

    let mut rows = table.select(&row_selector).skip(1).map(|tr| cell_texts(&tr));

    let headers = rows.next().ok_or_else(|| LineupError::UpstreamUnavailable {
        source_name: source_name.to_string(),
        message: "projection table has no header row".to_string(),
    })?;

    Ok(rows
        .map(|cells| headers.iter().cloned().zip(cells).collect::<RawRow>())
        .collect())
}

fn cell_texts(row: &ElementRef) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LineupError::UpstreamUnavailable {
        source_name: "selector".to_string(),
        message: format!("invalid selector {}: {}", css, e),
    })
}
