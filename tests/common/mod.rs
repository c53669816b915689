#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};

/// A value to write into a fixture workbook.
pub enum Fixture<'a> {
    Num(f64),
    Text(&'a str),
    Bool(bool),
    /// Year, month, day, written with a date format
    Date(u16, u8, u8),
    Blank,
}

/// Build an xlsx file in memory with one sheet per entry of `sheets`,
/// each written row-major starting at A1.
pub fn xlsx(sheets: &[&[&[Fixture]]]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for rows in sheets {
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match value {
                    Fixture::Num(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    Fixture::Text(s) => {
                        worksheet.write_string(r, c, *s)?;
                    }
                    Fixture::Bool(b) => {
                        worksheet.write_boolean(r, c, *b)?;
                    }
                    Fixture::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(*y, *m, *d)?;
                        worksheet.write_datetime_with_format(r, c, &date, &date_format)?;
                    }
                    Fixture::Blank => {}
                }
            }
        }
    }

    workbook.save_to_buffer()
}

/// Single-sheet workbook of numbers.
pub fn numbers(rows: &[&[f64]]) -> Vec<u8> {
    let rows: Vec<Vec<Fixture>> = rows
        .iter()
        .map(|row| row.iter().map(|&n| Fixture::Num(n)).collect())
        .collect();
    let rows: Vec<&[Fixture]> = rows.iter().map(|r| r.as_slice()).collect();
    xlsx(&[rows.as_slice()]).expect("fixture workbook")
}

/// Single-sheet workbook with one number in the last cell xlsx allows.
pub fn far_corner() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .write_number(1_048_575, 16_383, 1.0)
        .expect("far corner cell");
    workbook.save_to_buffer().expect("fixture workbook")
}
