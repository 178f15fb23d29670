//! Type-safe wrappers and enums for leagues, positions and salary caps.

pub mod cap;
pub mod league;
pub mod position;

pub use cap::{SalaryCap, DEFAULT_SALARY_CAP};
pub use league::{League, LeagueSelection};
pub use position::Position;
