//! Salary cap wrapper.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Salary cap used when neither the CLI nor the environment sets one.
pub const DEFAULT_SALARY_CAP: f64 = 60000.0;

/// Type-safe wrapper for a lineup salary cap.
///
/// Always finite and strictly positive.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::SalaryCap;
///
/// let cap: SalaryCap = "$50,000".parse().unwrap();
/// assert_eq!(cap.as_f64(), 50000.0);
/// assert!("0".parse::<SalaryCap>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SalaryCap(f64);

impl SalaryCap {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(LineupError::InvalidSalaryCap {
                value: value.to_string(),
            })
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for SalaryCap {
    fn default() -> Self {
        Self(DEFAULT_SALARY_CAP)
    }
}

impl fmt::Display for SalaryCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SalaryCap {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|c| !matches!(c, '$' | ',')).collect();
        let value: f64 = cleaned.parse().map_err(|_| LineupError::InvalidSalaryCap {
            value: s.to_string(),
        })?;
        Self::new(value).map_err(|_| LineupError::InvalidSalaryCap {
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sixty_thousand() {
        assert_eq!(SalaryCap::default().as_f64(), 60000.0);
    }

    #[test]
    fn test_parse_plain_and_currency_formatted() {
        assert_eq!("55000".parse::<SalaryCap>().unwrap().as_f64(), 55000.0);
        assert_eq!("$59,500.50".parse::<SalaryCap>().unwrap().as_f64(), 59500.5);
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        for bad in ["0", "-100", "abc", "", "inf", "NaN"] {
            match bad.parse::<SalaryCap>() {
                Err(LineupError::InvalidSalaryCap { value }) => assert_eq!(value, bad),
                other => panic!("Expected InvalidSalaryCap for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(SalaryCap::new(1.0).is_ok());
        assert!(SalaryCap::new(0.0).is_err());
        assert!(SalaryCap::new(f64::NAN).is_err());
    }
}
