//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{LeagueSelection, SalaryCap};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the highest-projected lineup that fits under the salary cap.
    Optimize {
        /// League to optimize: nfl, nba or all.
        #[clap(long, short, default_value_t = LeagueSelection::default())]
        league: LeagueSelection,

        /// Salary cap (or set `DFS_LINEUP_SALARY_CAP` env var). Defaults to 60000.
        #[clap(long, short = 'c')]
        salary_cap: Option<SalaryCap>,

        /// Read rows from a JSON snapshot instead of scraping projections.
        #[clap(long, short)]
        input: Option<PathBuf>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Log model construction and solve details.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Print the roster construction rules for a league.
    Rules {
        /// League to describe: nfl, nba or all.
        #[clap(long, short, default_value_t = LeagueSelection::default())]
        league: LeagueSelection,

        /// Output rules as JSON.
        #[clap(long)]
        json: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        matches!(self, Commands::Optimize { verbose: true, .. })
    }
}

#[derive(Debug, Parser)]
#[clap(name = "dfs-lineup", about = "Daily fantasy lineup optimizer")]
pub struct DfsLineup {
    #[clap(subcommand)]
    pub command: Commands,
}
