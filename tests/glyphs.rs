//! Host-level tests for the digit glyph table.

use shift_clock::Error;
use shift_clock::glyph::{GLYPHS, glyph, segment};

const EXPECTED: [[u8; 5]; 10] = [
    [7, 5, 5, 5, 7],
    [1, 1, 1, 1, 1],
    [7, 1, 7, 4, 7],
    [7, 1, 7, 1, 7],
    [5, 5, 7, 1, 1],
    [7, 4, 7, 1, 7],
    [4, 4, 7, 5, 7],
    [7, 1, 1, 1, 1],
    [7, 5, 7, 5, 7],
    [7, 5, 7, 1, 1],
];

#[test]
fn every_digit_and_row_matches_table() {
    for digit in 0..10_u8 {
        for row in 0..5_u8 {
            assert_eq!(
                segment(digit, row),
                Ok(EXPECTED[usize::from(digit)][usize::from(row)]),
                "digit {digit} row {row}"
            );
        }
    }
}

#[test]
fn table_has_ten_five_row_glyphs() {
    assert_eq!(GLYPHS, EXPECTED);
}

#[test]
fn out_of_range_inputs_are_rejected() {
    for digit in 10..=u8::MAX {
        assert_eq!(glyph(digit), Err(Error::DigitOutOfRange { digit }));
    }
    for row in 5..=u8::MAX {
        assert_eq!(segment(0, row), Err(Error::RowOutOfRange { row }));
    }
}

#[test]
fn errors_describe_the_bad_value() {
    assert_eq!(
        segment(11, 0).unwrap_err().to_string(),
        "Digit 11 is not a decimal digit (0-9)"
    );
    assert_eq!(
        segment(1, 7).unwrap_err().to_string(),
        "Row 7 is outside the display (0-4)"
    );
}
