mod common;

use common::{Fixture, far_corner, numbers, xlsx};
use fuzzy_sheet_diff::{
    CellComparison, DEFAULT_MAX_CELLS, Error, Similarity, Summary, compare_workbooks,
};

fn at(results: &[CellComparison], row: u32, col: u32) -> &CellComparison {
    results
        .iter()
        .find(|r| r.row == row && r.col == col)
        .unwrap_or_else(|| panic!("no result for ({}, {})", row, col))
}

#[test]
fn identical_workbooks() {
    let book = numbers(&[&[1.0, 2.0, 3.0], &[4.5, -6.0, 0.25]]);
    let results = compare_workbooks(&book, &book, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(results.len(), 6);
    assert_eq!(Summary::of(&results), Summary { identical: 6, different: 0 });
}

#[test]
fn every_nonzero_difference_is_flagged() {
    let first = numbers(&[&[10.0, 20.0], &[30.0, 40.0]]);
    let second = numbers(&[&[10.0, 20.5], &[-30.0, 40.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(at(&results, 1, 1).similarity, Similarity::Identical);
    assert_eq!(at(&results, 1, 2).similarity, Similarity::Different);
    assert_eq!(at(&results, 2, 1).similarity, Similarity::Different);
    assert_eq!(at(&results, 2, 2).similarity, Similarity::Identical);

    let changed = at(&results, 1, 2);
    assert_eq!((changed.value1, changed.value2), (20.0, 20.5));
    assert_eq!(changed.cell, "B1");
}

#[test]
fn extents_are_the_union_of_both_sheets() {
    let first = numbers(&[&[1.0, 2.0, 3.0]]);
    let second = numbers(&[&[1.0], &[2.0], &[3.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(results.len(), 9);
    let positions: Vec<(u32, u32)> = results.iter().map(|r| (r.row, r.col)).collect();
    assert_eq!(positions[0], (1, 1));
    assert_eq!(positions[3], (2, 1));
    assert_eq!(positions[8], (3, 3));

    let a3 = at(&results, 3, 1);
    assert_eq!((a3.value1, a3.value2), (0.0, 3.0));
    assert_eq!(a3.similarity, Similarity::Different);
}

#[test]
fn sheets_that_start_below_a1_keep_their_positions() {
    let first = xlsx(&[&[&[Fixture::Blank], &[Fixture::Blank, Fixture::Num(5.0)]]]).unwrap();
    let second = numbers(&[&[0.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(at(&results, 2, 2).value1, 5.0);
    assert_eq!(at(&results, 1, 1).value1, 0.0);
}

#[test]
fn text_and_booleans_are_coerced() {
    let first = xlsx(&[&[&[
        Fixture::Text("12.5"),
        Fixture::Bool(true),
        Fixture::Text("n/a"),
        Fixture::Text(""),
    ]]])
    .unwrap();
    let second = numbers(&[&[12.5, 1.0, 7.0, 0.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(at(&results, 1, 1).similarity, Similarity::Identical);
    assert_eq!(at(&results, 1, 2).similarity, Similarity::Identical);

    // The unreadable text zeroes its partner too
    let zeroed = at(&results, 1, 3);
    assert_eq!((zeroed.value1, zeroed.value2), (0.0, 0.0));
    assert_eq!(zeroed.similarity, Similarity::Identical);

    assert_eq!(at(&results, 1, 4).similarity, Similarity::Identical);
}

#[test]
fn only_the_first_sheet_is_compared() {
    let first = xlsx(&[
        &[&[Fixture::Num(1.0)]],
        &[&[Fixture::Num(99.0), Fixture::Num(99.0)]],
    ])
    .unwrap();
    let second = numbers(&[&[1.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].similarity, Similarity::Identical);
}

#[test]
fn unreadable_upload_is_an_error() {
    let book = numbers(&[&[1.0]]);
    let err = compare_workbooks(&book, b"PK\x03\x04 not really a zip", DEFAULT_MAX_CELLS).unwrap_err();
    assert!(matches!(err, Error::Workbook(_)), "unexpected error: {}", err);
}

#[test]
fn dates_compare_by_serial_number() {
    // 2023-03-15 is serial 45000
    let first = xlsx(&[&[&[Fixture::Date(2023, 3, 15), Fixture::Date(2023, 3, 16)]]]).unwrap();
    let second = numbers(&[&[45000.0, 45000.0]]);
    let results = compare_workbooks(&first, &second, DEFAULT_MAX_CELLS).unwrap();

    let same_day = at(&results, 1, 1);
    assert_eq!(same_day.value1, 45000.0);
    assert_eq!(same_day.similarity, Similarity::Identical);

    let next_day = at(&results, 1, 2);
    assert_eq!(next_day.value1, 45001.0);
    assert_eq!(next_day.similarity, Similarity::Different);
}

#[test]
fn far_corner_cell_is_rejected_before_comparing() {
    let book = far_corner();
    match compare_workbooks(&book, &book, DEFAULT_MAX_CELLS) {
        Err(Error::TooManyCells { rows, cols, limit }) => {
            assert_eq!((rows, cols), (1_048_576, 16_384));
            assert_eq!(limit, DEFAULT_MAX_CELLS);
        }
        other => panic!("expected TooManyCells, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn limit_counts_the_union_of_both_sheets() {
    let first = numbers(&[&[1.0, 2.0, 3.0]]);
    let second = numbers(&[&[1.0], &[2.0]]);

    assert_eq!(compare_workbooks(&first, &second, 6).unwrap().len(), 6);
    assert!(matches!(
        compare_workbooks(&first, &second, 5),
        Err(Error::TooManyCells { rows: 2, cols: 3, limit: 5 })
    ));
}
