//! One row of the display as the 16 bits shifted into the register chain.
//!
//! The word holds four 4-bit cells, leftmost digit in the most significant nibble. Each cell
//! is the digit's 3-bit segment followed by a spacer bit that is always zero:
//!
//! ```text
//! bit:  15 14 13 12 | 11 10  9  8 |  7  6  5  4 |  3  2  1  0
//!       [digit 0] 0 | [digit 1] 0 | [digit 2] 0 | [digit 3] 0
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::error::Error::{IndexOutOfBounds, SegmentOutOfRange};
use crate::shared_constants::{
    CELL_WIDTH, DIGIT_COUNT, SEGMENT_MASK, SPACER_MASK, WORD_BITS, WORD_BYTES,
};
use crate::Result;

/// The 16 bits sent to the shift-register chain for one LED row.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayWord(u16);

impl DisplayWord {
    /// A row with every LED off.
    pub const BLANK: Self = Self(0);

    /// Packs four 3-bit segments, leftmost digit first.
    ///
    /// ```
    /// use shift_clock::DisplayWord;
    ///
    /// let word = DisplayWord::from_segments([0b_001, 0b_111, 0b_111, 0b_101])?;
    /// assert_eq!(word.bits(), 0b_0010_1110_1110_1010);
    /// # Ok::<(), shift_clock::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::SegmentOutOfRange`](crate::Error::SegmentOutOfRange) if a segment
    /// needs more than 3 bits.
    pub fn from_segments(segments: [u8; DIGIT_COUNT]) -> Result<Self> {
        let mut bits = 0_u16;
        for segment in segments {
            if segment > SEGMENT_MASK {
                return Err(SegmentOutOfRange { segment });
            }
            bits = (bits << CELL_WIDTH) | (u16::from(segment) << 1);
        }
        Ok(Self(bits))
    }

    /// The raw word.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// The 3-bit segment in cell `index` (0 is the leftmost digit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if `index` is not
    /// 0-3.
    pub fn digit_field(self, index: usize) -> Result<u8> {
        if index >= DIGIT_COUNT {
            return Err(IndexOutOfBounds);
        }
        Ok(self.cell(index))
    }

    /// All four segments, leftmost digit first.
    #[must_use]
    pub fn segments(self) -> [u8; DIGIT_COUNT] {
        core::array::from_fn(|index| self.cell(index))
    }

    /// Byte `index` of the word, most significant byte first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if `index` is not
    /// 0 or 1.
    pub fn byte(self, index: usize) -> Result<u8> {
        self.to_be_bytes().get(index).copied().ok_or(IndexOutOfBounds)
    }

    /// The word as bytes, most significant byte first, independent of host byte order.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; WORD_BYTES] {
        self.0.to_be_bytes()
    }

    /// True when every spacer bit is zero.
    #[must_use]
    pub const fn spacers_clear(self) -> bool {
        self.0 & SPACER_MASK == 0
    }

    /// The bits in the order they are clocked into the register chain.
    ///
    /// With [`BitOrder::MsbFirst`] the first bit shifted in ends up at the far end of the
    /// chain, so the leftmost digit lands on the last register.
    #[must_use]
    pub const fn serial_bits(self, bit_order: BitOrder) -> SerialBits {
        SerialBits {
            word: self.0,
            bit_order,
            sent: 0,
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "index < DIGIT_COUNT so the shift is at most 13, and the mask keeps 3 bits"
    )]
    fn cell(self, index: usize) -> u8 {
        let shift = (DIGIT_COUNT - 1 - index) as u32 * CELL_WIDTH + 1;
        (self.0 >> shift) as u8 & SEGMENT_MASK
    }
}

impl From<DisplayWord> for u16 {
    fn from(word: DisplayWord) -> Self {
        word.0
    }
}

/// Formats as 16 binary digits, most significant bit first.
impl fmt::Display for DisplayWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl fmt::Binary for DisplayWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Which end of a word is shifted out first.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Iterator over a word's bits in shift-out order. `true` means the data line is high.
#[derive(Debug, Clone)]
pub struct SerialBits {
    word: u16,
    bit_order: BitOrder,
    sent: usize,
}

impl Iterator for SerialBits {
    type Item = bool;

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "sent < WORD_BITS inside the branch"
    )]
    fn next(&mut self) -> Option<bool> {
        if self.sent >= WORD_BITS {
            return None;
        }
        let shift = match self.bit_order {
            BitOrder::MsbFirst => WORD_BITS - 1 - self.sent,
            BitOrder::LsbFirst => self.sent,
        };
        self.sent += 1;
        Some((self.word >> shift) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = WORD_BITS.saturating_sub(self.sent);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SerialBits {}

impl FusedIterator for SerialBits {}
