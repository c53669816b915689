use crate::cell::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static EMPTY: CellValue = CellValue::Empty;

/// One worksheet held in memory for a single comparison.
///
/// Rows and columns are 1-based. Only non-empty cells are stored; anything
/// else inside or outside the extents reads as [`CellValue::Empty`].
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Sheet {
    pub max_row: u32,
    pub max_col: u32,
    cells: HashMap<(u32, u32), CellValue>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// An empty sheet. Like a freshly opened workbook it reports `1 x 1`.
    pub fn new() -> Self {
        Sheet {
            max_row: 1,
            max_col: 1,
            cells: HashMap::new(),
        }
    }

    /// Build a sheet from row-major values starting at A1.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut sheet = Sheet::new();
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                sheet.set(r as u32 + 1, c as u32 + 1, value);
            }
        }
        sheet
    }

    /// Store a value and grow the extents to cover it. Empty values are not
    /// stored and do not grow the extents.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        if row == 0 || col == 0 {
            return;
        }
        if value == CellValue::Empty {
            self.cells.remove(&(row, col));
            return;
        }
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
        self.cells.insert((row, col), value);
    }

    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    pub fn col_to_letter(col: u32) -> String {
        let mut col = col;
        let mut result = String::new();
        while col > 0 {
            col -= 1;
            result.push(((col % 26) as u8 + b'A') as char);
            col /= 26;
        }
        result.chars().rev().collect()
    }

    pub fn get_cell_name(row: u32, col: u32) -> String {
        format!("{}{}", Self::col_to_letter(col), row)
    }
}
