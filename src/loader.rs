use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::spreadsheet::Sheet;
use calamine::{Data, DataRef, Range, Reader, Sheets, open_workbook_auto_from_rs};
use std::io::Cursor;

/// Load the first worksheet of an uploaded workbook
///
/// The format is detected from the bytes, so xlsx, xlsm, xlsb, xls and ods
/// uploads are all accepted. Only the first sheet in workbook order is read;
/// every other sheet is ignored.
///
/// xlsx and xlsb sheets are read cell by cell, so a sheet holding a few
/// cells far apart costs only those cells. xls and ods sheets go through a
/// calamine range covering the used area.
///
/// # Arguments
/// * `bytes` - Raw contents of the uploaded file
///
/// # Returns
/// * `Result<Sheet>` - The sheet, with extents measured from A1
///
/// # Examples
/// ```no_run
/// use fuzzy_sheet_diff::loader::load_first_sheet;
///
/// let bytes = std::fs::read("book.xlsx").unwrap();
/// match load_first_sheet(&bytes) {
///     Ok(sheet) => println!("{} rows x {} cols", sheet.max_row, sheet.max_col),
///     Err(e) => eprintln!("Error loading workbook: {}", e),
/// }
/// ```
pub fn load_first_sheet(bytes: &[u8]) -> Result<Sheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    if let Sheets::Xlsx(xlsx) = &mut workbook {
        let name = first_sheet_name(xlsx.sheet_names())?;
        let mut cells = xlsx
            .worksheet_cells_reader(&name)
            .map_err(calamine::Error::from)?;

        let mut sheet = Sheet::new();
        while let Some(cell) = cells.next_cell().map_err(calamine::Error::from)? {
            store_cell(&mut sheet, cell.get_position(), cell.get_value());
        }
        return Ok(sheet);
    }

    if let Sheets::Xlsb(xlsb) = &mut workbook {
        let name = first_sheet_name(xlsb.sheet_names())?;
        let mut cells = xlsb
            .worksheet_cells_reader(&name)
            .map_err(calamine::Error::from)?;

        let mut sheet = Sheet::new();
        while let Some(cell) = cells.next_cell().map_err(calamine::Error::from)? {
            store_cell(&mut sheet, cell.get_position(), cell.get_value());
        }
        return Ok(sheet);
    }

    let range = workbook.worksheet_range_at(0).ok_or(Error::NoWorksheet)??;

    Ok(sheet_from_range(&range))
}

fn first_sheet_name(names: Vec<String>) -> Result<String> {
    names.into_iter().next().ok_or(Error::NoWorksheet)
}

// Positions from calamine are 0-based
fn store_cell(sheet: &mut Sheet, (row, col): (u32, u32), value: &DataRef<'_>) {
    sheet.set(row + 1, col + 1, to_cell_value(&Data::from(value.clone())));
}

/// Copy a calamine range into a [`Sheet`], keeping absolute positions.
pub fn sheet_from_range(range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new();
    let Some((row_offset, col_offset)) = range.start() else {
        return sheet;
    };

    for (r, c, data) in range.used_cells() {
        let row = row_offset + r as u32 + 1;
        let col = col_offset + c as u32 + 1;
        sheet.set(row, col, to_cell_value(data));
    }

    sheet
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        // Dates compare by their serial number
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
