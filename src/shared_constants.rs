// The display is four digits wide and five LED rows tall. Each digit is three LEDs wide.
pub const DIGIT_COUNT: usize = 4;
pub const ROW_COUNT: usize = 5;

/// Number of distinct decimal digits in the glyph table.
pub const GLYPH_COUNT: usize = 10;

/// Width in bits of one digit's segment (one bit per LED column).
pub const SEGMENT_WIDTH: u32 = 3;
/// Largest legal segment value.
pub const SEGMENT_MASK: u8 = 0b_0111;

/// Width in bits of one digit cell: the segment plus its spacer bit.
pub const CELL_WIDTH: u32 = 4;

/// Bits in one Display Word.
pub const WORD_BITS: usize = u16::BITS as usize;
/// Bytes in one Display Word.
pub const WORD_BYTES: usize = size_of::<u16>();

/// Spacer bit of every cell (the least significant bit of each nibble).
pub const SPACER_MASK: u16 = 0b_0001_0001_0001_0001;

/// Largest value either half of the clock can show.
pub const MAX_TWO_DIGIT: u8 = 99;
