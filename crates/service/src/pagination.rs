//! Pagination utilities for service layer
//!
//! Lists are windowed by a zero-based `start` offset and an `amount` of rows,
//! always over rows ordered by id.

use crate::errors::ServiceError;
use crate::validation::FieldError;

pub const DEFAULT_AMOUNT: u64 = 100;

/// Offset/limit window over an id-ordered list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// rows to skip
    pub start: u64,
    /// rows to take
    pub amount: u64,
}

impl Window {
    pub fn new(start: u64, amount: u64) -> Self { Self { start, amount } }

    /// Build a window from raw query values, falling back to defaults for
    /// absent values and rejecting negative ones.
    pub fn from_query(start: Option<i64>, amount: Option<i64>) -> Result<Self, ServiceError> {
        let mut errors = Vec::new();
        let start = start.unwrap_or(0);
        let amount = amount.unwrap_or(DEFAULT_AMOUNT as i64);
        if start < 0 {
            errors.push(FieldError::new("start", "must not be negative"));
        }
        if amount < 0 {
            errors.push(FieldError::new("amount", "must not be negative"));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }
        Ok(Self { start: start as u64, amount: amount as u64 })
    }

    /// Apply the window to rows already ordered by id
    pub fn apply<T>(self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter()
            .skip(usize::try_from(self.start).unwrap_or(usize::MAX))
            .take(usize::try_from(self.amount).unwrap_or(usize::MAX))
            .collect()
    }
}

impl Default for Window {
    fn default() -> Self { Self { start: 0, amount: DEFAULT_AMOUNT } }
}
