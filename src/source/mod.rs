//! Where candidate rows come from.
//!
//! - `Web`: scrape the live projection pages for a league
//! - `File`: load a JSON snapshot of rows saved earlier
//!
//! Failures here are hard errors. Nothing is retried or cached, so a run
//! always optimizes the snapshot it was handed.

pub mod file;
pub mod html;
pub mod http;

use std::path::PathBuf;

use crate::{cli::types::League, lineup::RawRow, Result};

#[derive(Debug, Clone)]
pub enum RowSource {
    Web,
    File(PathBuf),
}

impl RowSource {
    pub fn from_input(input: Option<PathBuf>) -> Self {
        input.map_or(RowSource::Web, RowSource::File)
    }

    /// Fetch the current rows for `league`.
    pub async fn fetch(&self, league: League) -> Result<Vec<RawRow>> {
        match self {
            RowSource::Web => {
                let client = http::build_client()?;
                http::fetch_league_rows(&client, league).await
            }
            RowSource::File(path) => file::read_rows(path),
        }
    }
}
