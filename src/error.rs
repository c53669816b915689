use thiserror::Error;

/// Errors that stop a comparison before any cell is looked at.
///
/// Problems with individual cell values never show up here; those are
/// absorbed by [`crate::cell::coerce_pair`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("missing upload: {0}")]
    MissingUpload(String),

    #[error("upload {0} is empty")]
    EmptyUpload(String),

    #[error("sheets span {rows} rows x {cols} columns, more than the {limit} cells allowed")]
    TooManyCells { rows: u32, cols: u32, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
