use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display("Digit {digit} is not a decimal digit (0-9)")]
    DigitOutOfRange { digit: u8 },

    #[display("Row {row} is outside the display (0-4)")]
    RowOutOfRange { row: u8 },

    #[display("Segment {segment:#05b} does not fit in 3 bits")]
    SegmentOutOfRange { segment: u8 },

    #[display("Hours {hours} do not fit in two digits (0-99)")]
    HoursOutOfRange { hours: u8 },

    #[display("Minutes {minutes} do not fit in two digits (0-99)")]
    MinutesOutOfRange { minutes: u8 },

    #[display("Index out of bounds")]
    IndexOutOfBounds,

    #[display("Requested {size} bytes but only {available} are available")]
    SizeExceedsStorage { size: usize, available: usize },

    #[display("Bit string is full")]
    BitStringFull,

    #[display("Format error")]
    FormatError,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::FormatError
    }
}
