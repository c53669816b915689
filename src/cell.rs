use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw value of a single worksheet cell, as read from an uploaded workbook.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Spreadsheet error such as `#DIV/0!`
    Error(String),
}

/// A cell value that could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot read {value:?} as a number")]
pub struct CoercionError {
    pub value: CellValue,
}

impl CellValue {
    /// Falsy values (empty, zero, `false`, empty text) all read as zero.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => *n == 0.0,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Bool(b) => !b,
            CellValue::Error(_) => false,
        }
    }

    /// Coerce the value to a number.
    ///
    /// Text is trimmed and parsed as a float, so `" 4.5 "`, `"-1e3"` and
    /// `"inf"` all succeed. Non-numeric text and spreadsheet errors fail.
    pub fn coerce(&self) -> Result<f64, CoercionError> {
        if self.is_falsy() {
            return Ok(0.0);
        }

        match self {
            CellValue::Number(n) => Ok(*n),
            CellValue::Bool(_) => Ok(1.0),
            CellValue::Text(s) => s.trim().parse::<f64>().map_err(|_| CoercionError {
                value: self.clone(),
            }),
            _ => Err(CoercionError {
                value: self.clone(),
            }),
        }
    }
}

/// Coerce both sides of a cell pair.
///
/// If either side fails, both sides are zeroed.
pub fn coerce_pair(first: &CellValue, second: &CellValue) -> (f64, f64) {
    match (first.coerce(), second.coerce()) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("{}; comparing pair as zeros", e);
            (0.0, 0.0)
        }
    }
}
