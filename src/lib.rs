/*!
# Fuzzy Spreadsheet Comparison

Upload two spreadsheets and see, cell by cell, whether their values are
`Identical` or `Different`, as decided by a small fuzzy-logic system.

## Overview

Each workbook is reduced to its first worksheet. Every position inside the
union of both sheets' extents is visited in row-major order; the two values
are coerced to numbers and their difference is classified.

### Classification
- Input sets on the universe `-100..=100`: `identical` (triangle -1, 0, 1)
  and `different` (triangle -100, 0, 100)
- One rule per set, Mamdani clipping, `max` aggregation
- Centroid defuzzification; a centroid at or below zero is `Identical`

### Coercion
- Empty cells, `false`, zero and empty text read as `0`
- Numeric text is parsed, `true` reads as `1`, dates as their serial number
- If either value of a pair cannot be read as a number, both become `0`

## Modules

- **cell**: Raw cell values and numeric coercion
- **spreadsheet**: Sparse 1-based sheet with extents and cell names
- **loader**: Reads the first worksheet of an uploaded workbook
- **fuzzy**: Membership functions, inference and defuzzification
- **compare**: The comparison routine and result records
- **config**: Server settings (web feature)
- **app**: Upload form, rendered results and JSON endpoint (web feature)

## REST API Endpoints

- `GET /` - Upload form
- `POST /compare` - Multipart `file1` + `file2`, renders the results page
- `POST /api/compare` - Same input, results as JSON
*/

pub mod cell;
pub mod compare;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub mod spreadsheet;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod config;

pub use cell::*;
pub use compare::*;
pub use error::{Error, Result};
pub use fuzzy::{Classifier, Similarity};
pub use loader::*;
pub use spreadsheet::*;
