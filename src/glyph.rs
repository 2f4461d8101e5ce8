//! Digit glyphs for a 3-LED-wide, 5-row matrix.
//!
//! Each glyph is five row segments, top to bottom. A segment is a 3-bit value where bit 2 is
//! the left LED and bit 0 the right LED:
//!
//! ```text
//! 2:  ###   7
//!       #   1
//!     ###   7
//!     #     4
//!     ###   7
//! ```

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::error::Error::{DigitOutOfRange, RowOutOfRange};
use crate::shared_constants::{GLYPH_COUNT, ROW_COUNT};
use crate::Result;

/// Five row segments for one digit, top row first.
pub type Glyph = [u8; ROW_COUNT];

/// Segments for digits 0-9.
pub const GLYPHS: [Glyph; GLYPH_COUNT] = [
    [0b_111, 0b_101, 0b_101, 0b_101, 0b_111], // Digit 0
    [0b_001, 0b_001, 0b_001, 0b_001, 0b_001], // Digit 1
    [0b_111, 0b_001, 0b_111, 0b_100, 0b_111], // Digit 2
    [0b_111, 0b_001, 0b_111, 0b_001, 0b_111], // Digit 3
    [0b_101, 0b_101, 0b_111, 0b_001, 0b_001], // Digit 4
    [0b_111, 0b_100, 0b_111, 0b_001, 0b_111], // Digit 5
    [0b_100, 0b_100, 0b_111, 0b_101, 0b_111], // Digit 6
    [0b_111, 0b_001, 0b_001, 0b_001, 0b_001], // Digit 7
    [0b_111, 0b_101, 0b_111, 0b_101, 0b_111], // Digit 8
    [0b_111, 0b_101, 0b_111, 0b_001, 0b_001], // Digit 9
];

/// Returns all five row segments of `digit`.
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`](crate::Error::DigitOutOfRange) if `digit` is not 0-9.
pub fn glyph(digit: u8) -> Result<&'static Glyph> {
    let Some(glyph) = GLYPHS.get(usize::from(digit)) else {
        #[cfg(feature = "defmt")]
        warn!("rejecting digit {}", digit);
        return Err(DigitOutOfRange { digit });
    };
    Ok(glyph)
}

/// Returns the 3-bit segment lit on `row` when showing `digit`.
///
/// ```
/// use shift_clock::glyph::segment;
///
/// assert_eq!(segment(2, 3), Ok(0b_100));
/// assert!(segment(10, 0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`](crate::Error::DigitOutOfRange) if `digit` is not 0-9
/// and [`Error::RowOutOfRange`](crate::Error::RowOutOfRange) if `row` is not 0-4.
pub fn segment(digit: u8, row: u8) -> Result<u8> {
    let Some(&segment) = glyph(digit)?.get(usize::from(row)) else {
        #[cfg(feature = "defmt")]
        warn!("rejecting row {}", row);
        return Err(RowOutOfRange { row });
    };
    Ok(segment)
}
