//! A full refresh of the display: one [`DisplayWord`] per LED row.
//!
//! See [`Frame`] for an example.

use core::{array, fmt, slice};

#[cfg(feature = "defmt")]
use defmt::trace;

use crate::clock_time::ClockTime;
use crate::display_word::DisplayWord;
use crate::glyph::glyph;
use crate::shared_constants::{DIGIT_COUNT, ROW_COUNT, SEGMENT_WIDTH};
use crate::Result;

/// The five words, top row first, that show one time on the display.
///
/// Frames hold no state between refreshes; build a new one each time the clock changes.
///
/// # Example
///
/// ```
/// use shift_clock::Frame;
///
/// let frame = Frame::from_hours_minutes(12, 34)?;
/// assert_eq!(frame[0].bits(), 0b_0010_1110_1110_1010);
/// assert_eq!(
///     frame.to_string(),
///     "0010111011101010\n\
///      0010001000101010\n\
///      0010111011101110\n\
///      0010100000100010\n\
///      0010111011100010\n"
/// );
/// # Ok::<(), shift_clock::Error>(())
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([DisplayWord; ROW_COUNT]);

impl Frame {
    /// A frame with every LED off.
    pub const BLANK: Self = Self([DisplayWord::BLANK; ROW_COUNT]);

    /// Wraps five already packed rows, top row first.
    pub const fn new(words: [DisplayWord; ROW_COUNT]) -> Self {
        Self(words)
    }

    /// Validates `hours` and `minutes` (0-99 each) and assembles their frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HoursOutOfRange`](crate::Error::HoursOutOfRange) or
    /// [`Error::MinutesOutOfRange`](crate::Error::MinutesOutOfRange) if a value is above 99.
    pub fn from_hours_minutes(hours: u8, minutes: u8) -> Result<Self> {
        Self::from_clock_time(ClockTime::new(hours, minutes)?)
    }

    /// Assembles the frame for an already validated time.
    ///
    /// # Errors
    ///
    /// Only fails if the glyph table were to hold a digit or segment the display cannot
    /// show.
    pub fn from_clock_time(clock_time: ClockTime) -> Result<Self> {
        Self::from_digits(clock_time.digits())
    }

    /// Assembles the frame for four decimal digits, leftmost first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`](crate::Error::DigitOutOfRange) if any digit is
    /// above 9.
    pub fn from_digits(digits: [u8; DIGIT_COUNT]) -> Result<Self> {
        #[cfg(feature = "defmt")]
        trace!("assembling frame for digits {}", digits);

        let mut glyphs = [&[0_u8; ROW_COUNT]; DIGIT_COUNT];
        for (slot, digit) in glyphs.iter_mut().zip(digits) {
            *slot = glyph(digit)?;
        }

        let mut frame = Self::BLANK;
        for (row, word) in frame.iter_mut().enumerate() {
            let mut segments = [0_u8; DIGIT_COUNT];
            for (segment, digit_glyph) in segments.iter_mut().zip(glyphs) {
                *segment = digit_glyph.get(row).copied().unwrap_or_default();
            }
            *word = DisplayWord::from_segments(segments)?;
        }
        Ok(frame)
    }

    pub fn iter(&self) -> slice::Iter<'_, DisplayWord> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, DisplayWord> {
        self.0.iter_mut()
    }

    /// Draws the frame as lit (`#`) and dark (`.`) LEDs, one text line per row, with a
    /// blank column where each spacer bit sits.
    ///
    /// ```
    /// use shift_clock::Frame;
    ///
    /// let mut preview = String::new();
    /// Frame::from_hours_minutes(12, 34)?.write_preview(&mut preview)?;
    /// assert_eq!(preview.lines().next(), Some("..# ### ### #.#"));
    /// # Ok::<(), shift_clock::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatError`](crate::Error::FormatError) if `out` fails.
    pub fn write_preview<W: fmt::Write>(&self, out: &mut W) -> Result<()> {
        for word in self {
            for (index, segment) in word.segments().into_iter().enumerate() {
                if index > 0 {
                    out.write_char(' ')?;
                }
                for column in (0..SEGMENT_WIDTH).rev() {
                    let lit = (segment >> column) & 1 == 1;
                    out.write_char(if lit { '#' } else { '.' })?;
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::BLANK
    }
}

impl TryFrom<ClockTime> for Frame {
    type Error = crate::Error;

    fn try_from(clock_time: ClockTime) -> Result<Self> {
        Self::from_clock_time(clock_time)
    }
}

/// One line of 16 binary digits per row, each followed by a newline.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Frame {
    type Item = DisplayWord;
    type IntoIter = array::IntoIter<DisplayWord, ROW_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DisplayWord;
    type IntoIter = slice::Iter<'a, DisplayWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Frame {
    type Item = &'a mut DisplayWord;
    type IntoIter = slice::IterMut<'a, DisplayWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl core::ops::Index<usize> for Frame {
    type Output = DisplayWord;

    #[expect(
        clippy::indexing_slicing,
        reason = "Bounds checking is the caller's responsibility."
    )]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn from_digits_rejects_non_decimal_digit() {
        assert_eq!(
            Frame::from_digits([1, 2, 10, 4]),
            Err(Error::DigitOutOfRange { digit: 10 })
        );
    }

    #[test]
    fn from_hours_minutes_validates_before_assembling() {
        assert_eq!(
            Frame::from_hours_minutes(12, 100),
            Err(Error::MinutesOutOfRange { minutes: 100 })
        );
    }

    #[test]
    fn all_eights_lights_every_led() {
        let frame = Frame::from_digits([8; DIGIT_COUNT]).expect("valid digits");
        let mut preview = std::string::String::new();
        frame.write_preview(&mut preview).expect("string write");
        assert_eq!(
            preview,
            "### ### ### ###\n\
             #.# #.# #.# #.#\n\
             ### ### ### ###\n\
             #.# #.# #.# #.#\n\
             ### ### ### ###\n"
        );
    }

    #[test]
    fn midnight_shows_zeros() {
        let frame = Frame::from_hours_minutes(0, 0).expect("in range");
        assert_eq!(frame[0].bits(), 0b_1110_1110_1110_1110);
        assert_eq!(frame[1].bits(), 0b_1010_1010_1010_1010);
        assert_eq!(frame[4], frame[0]);
    }

    #[test]
    fn rows_can_be_replaced_in_place() {
        let mut frame = Frame::from_hours_minutes(12, 34).expect("in range");
        for word in &mut frame {
            *word = DisplayWord::BLANK;
        }
        assert_eq!(frame, Frame::BLANK);
    }

    #[test]
    fn new_keeps_rows_in_order() {
        let assembled = Frame::from_hours_minutes(7, 5).expect("in range");
        let mut words = [DisplayWord::BLANK; ROW_COUNT];
        for (slot, word) in words.iter_mut().zip(assembled) {
            *slot = word;
        }
        assert_eq!(Frame::new(words), assembled);
        assert_eq!(Frame::new(words)[4], assembled[4]);
    }

    #[test]
    fn blank_frame_is_default() {
        assert_eq!(Frame::default(), Frame::BLANK);
        assert!(Frame::BLANK.iter().all(|word| word.bits() == 0));
    }
}
