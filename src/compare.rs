use crate::cell::coerce_pair;
use crate::error::{Error, Result};
use crate::fuzzy::{Classifier, Similarity};
use crate::loader::load_first_sheet;
use crate::spreadsheet::Sheet;
use serde::{Deserialize, Serialize};

/// Result for one cell position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellComparison {
    pub row: u32,
    pub col: u32,
    /// A1-style name of the position
    pub cell: String,
    pub value1: f64,
    pub value2: f64,
    pub similarity: Similarity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub identical: usize,
    pub different: usize,
}

impl Summary {
    pub fn of(results: &[CellComparison]) -> Self {
        results.iter().fold(Summary::default(), |mut acc, r| {
            match r.similarity {
                Similarity::Identical => acc.identical += 1,
                Similarity::Different => acc.different += 1,
            }
            acc
        })
    }
}

/// Largest number of cell positions one comparison may visit by default.
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Reject a pair of sheets whose combined extents hold more than `max_cells`
/// positions.
pub fn check_extents(first: &Sheet, second: &Sheet, max_cells: usize) -> Result<()> {
    let rows = first.max_row.max(second.max_row);
    let cols = first.max_col.max(second.max_col);

    if u64::from(rows) * u64::from(cols) > max_cells as u64 {
        return Err(Error::TooManyCells {
            rows,
            cols,
            limit: max_cells,
        });
    }
    Ok(())
}

/// Compare two sheets cell by cell.
///
/// Every position inside the union of both sheets' extents is visited in
/// row-major order, so the result holds `max_row * max_col` entries. Callers
/// holding untrusted sheets run [`check_extents`] first.
pub fn compare_sheets(first: &Sheet, second: &Sheet) -> Vec<CellComparison> {
    let classifier = Classifier::new();
    let max_row = first.max_row.max(second.max_row);
    let max_col = first.max_col.max(second.max_col);

    let mut results = Vec::with_capacity(max_row as usize * max_col as usize);
    for row in 1..=max_row {
        for col in 1..=max_col {
            let (value1, value2) = coerce_pair(first.get(row, col), second.get(row, col));
            let similarity = classifier.classify(value1 - value2);

            results.push(CellComparison {
                row,
                col,
                cell: Sheet::get_cell_name(row, col),
                value1,
                value2,
                similarity,
            });
        }
    }

    results
}

/// Load the first sheet of each workbook and compare them.
///
/// Fails with [`Error::TooManyCells`] before anything is allocated for the
/// results when the union of the extents exceeds `max_cells`.
pub fn compare_workbooks(
    first: &[u8],
    second: &[u8],
    max_cells: usize,
) -> Result<Vec<CellComparison>> {
    let sheet1 = load_first_sheet(first)?;
    let sheet2 = load_first_sheet(second)?;
    check_extents(&sheet1, &sheet2, max_cells)?;

    log::debug!(
        "comparing {}x{} sheet with {}x{} sheet",
        sheet1.max_row,
        sheet1.max_col,
        sheet2.max_row,
        sheet2.max_col
    );

    Ok(compare_sheets(&sheet1, &sheet2))
}
