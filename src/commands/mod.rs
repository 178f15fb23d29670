//! Command implementations for the DFS lineup CLI

pub mod optimize;
pub mod render;
pub mod rules;

use crate::{cli::types::SalaryCap, Result, SALARY_CAP_ENV_VAR};

/// Resolve the salary cap from the option, then the environment, then the default.
///
/// A malformed environment value is an error rather than being ignored.
pub fn resolve_salary_cap(salary_cap: Option<SalaryCap>) -> Result<SalaryCap> {
    if let Some(cap) = salary_cap {
        return Ok(cap);
    }
    match std::env::var(SALARY_CAP_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Ok(SalaryCap::default()),
    }
}
