//! Daily Fantasy Sports Lineup Optimizer
//!
//! Picks the single highest-projected daily fantasy lineup that fits under a
//! salary cap and satisfies a league's roster construction rules.
//!
//! ## Features
//!
//! - **Row Normalization**: Parses scraped projection rows, dropping rows with bad numbers or positions
//! - **Roster Rules**: Exact, banded and combined position limits per league (NFL, NBA)
//! - **Multi-position Eligibility**: Dual-eligible players count toward every position they can fill
//! - **Exact Optimization**: Integer linear program solved to optimality, no heuristics
//! - **Parallel Leagues**: Independent slates are solved concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use dfs_lineup::{lineup::{optimize_lineup, RawRow}, League, SalaryCap};
//!
//! # fn example() -> dfs_lineup::Result<()> {
//! let mut row = RawRow::new();
//! row.insert("Player".into(), "Josh Allen\t\nQB\nBUF @\u{a0}MIA\n".into());
//! row.insert("FP".into(), "23.4".into());
//! row.insert("Salary".into(), "$8,900".into());
//!
//! // One QB is not a legal NFL roster, so no lineup comes back.
//! let lineup = optimize_lineup(League::NFL, &[row], SalaryCap::default())?;
//! assert!(lineup.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default salary cap to avoid passing it in every command:
//! ```bash
//! export DFS_LINEUP_SALARY_CAP=60000
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod lineup;
pub mod source;

// Re-export commonly used types
pub use cli::types::{League, LeagueSelection, Position, SalaryCap};
pub use error::{LineupError, Result};
pub use lineup::{optimize_lineup, LineupRow, PlayerRecord, RosterRules};

pub const SALARY_CAP_ENV_VAR: &str = "DFS_LINEUP_SALARY_CAP";
