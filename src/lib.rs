//! Encodes a four-digit clock into the words a chain of SIPO shift registers needs to drive a
//! 5-row LED matrix.
//!
//! The pipeline is [`glyph`] (digit and row to a 3-bit segment), [`Frame`] (four digits to
//! five 16-bit [`DisplayWord`]s), and [`bit_inspector`] (any word to literal binary text).
//!
//! ```
//! use shift_clock::{Frame, bit_inspector::inspect_word};
//!
//! let frame = Frame::from_hours_minutes(12, 34)?;
//! let rows: Vec<_> = frame.into_iter().map(inspect_word).collect();
//! assert_eq!(rows[0], "0010111011101010");
//! assert_eq!(rows[4], "0010111011100010");
//! # Ok::<(), shift_clock::Error>(())
//! ```
#![cfg_attr(not(test), no_std)]

pub mod bit_inspector;
mod clock_time;
mod display_word;
mod error;
mod frame;
pub mod glyph;
pub mod shared_constants;

// Re-export commonly used items
pub use clock_time::{ClockTime, split_digits};
pub use display_word::{BitOrder, DisplayWord, SerialBits};
pub use error::{Error, Result};
pub use frame::Frame;
