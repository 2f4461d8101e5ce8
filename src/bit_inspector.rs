//! Renders raw bytes as literal `0`/`1` text for checking what will reach the registers.
//!
//! The inspector knows nothing about display layout. It takes bytes in the order they should
//! be printed (most significant first), so its output never depends on host byte order.
//! [`BigEndianBytes`] gives that view for integers and [`DisplayWord`].

use core::fmt;

use crate::display_word::DisplayWord;
use crate::error::Error::{BitStringFull, SizeExceedsStorage};
use crate::shared_constants::{WORD_BITS, WORD_BYTES};
use crate::Result;

/// Fixed-capacity text holding up to `N` rendered bits.
pub type BitString<const N: usize> = heapless::String<N>;

/// A rendered [`DisplayWord`].
pub type WordBitString = BitString<WORD_BITS>;

/// Values that can be viewed as bytes, most significant byte first.
pub trait BigEndianBytes {
    type Bytes: AsRef<[u8]>;

    fn big_endian_bytes(&self) -> Self::Bytes;
}

macro_rules! impl_big_endian_bytes {
    ($($int:ty),*) => {
        $(
            impl BigEndianBytes for $int {
                type Bytes = [u8; size_of::<$int>()];

                fn big_endian_bytes(&self) -> Self::Bytes {
                    self.to_be_bytes()
                }
            }
        )*
    };
}

impl_big_endian_bytes!(u8, u16, u32, u64);

impl BigEndianBytes for DisplayWord {
    type Bytes = [u8; WORD_BYTES];

    fn big_endian_bytes(&self) -> Self::Bytes {
        self.to_be_bytes()
    }
}

/// Writes the first `size` bytes of `bytes` as `size * 8` binary digits, each byte most
/// significant bit first.
///
/// # Errors
///
/// Returns [`Error::SizeExceedsStorage`](crate::Error::SizeExceedsStorage) if `size` is
/// larger than `bytes`, or [`Error::FormatError`](crate::Error::FormatError) if `out` fails.
pub fn write_bits<W: fmt::Write>(out: &mut W, size: usize, bytes: &[u8]) -> Result<()> {
    let value = bytes.get(..size).ok_or(SizeExceedsStorage {
        size,
        available: bytes.len(),
    })?;
    for &byte in value {
        for bit in (0..u8::BITS).rev() {
            out.write_char(if (byte >> bit) & 1 == 1 { '1' } else { '0' })?;
        }
    }
    Ok(())
}

/// Renders the first `size` bytes of `bytes` into a new [`BitString`].
///
/// ```
/// use shift_clock::bit_inspector::{BitString, render_bits};
///
/// let bits: BitString<16> = render_bits(2, &[0x2E, 0xEA])?;
/// assert_eq!(bits, "0010111011101010");
/// # Ok::<(), shift_clock::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::SizeExceedsStorage`](crate::Error::SizeExceedsStorage) if `size` is
/// larger than `bytes`, or [`Error::BitStringFull`](crate::Error::BitStringFull) if `size * 8`
/// is more than `N`.
pub fn render_bits<const N: usize>(size: usize, bytes: &[u8]) -> Result<BitString<N>> {
    if size > bytes.len() {
        return Err(SizeExceedsStorage {
            size,
            available: bytes.len(),
        });
    }
    size.checked_mul(u8::BITS as usize)
        .filter(|&bit_count| bit_count <= N)
        .ok_or(BitStringFull)?;

    let mut bit_string = BitString::new();
    write_bits(&mut bit_string, size, bytes)?;
    Ok(bit_string)
}

/// Renders every byte of `value`.
///
/// # Errors
///
/// Returns [`Error::BitStringFull`](crate::Error::BitStringFull) if the value has more than
/// `N` bits.
pub fn inspect<const N: usize, T: BigEndianBytes + ?Sized>(value: &T) -> Result<BitString<N>> {
    let owned = value.big_endian_bytes();
    let bytes = owned.as_ref();
    render_bits(bytes.len(), bytes)
}

/// Renders one display row.
#[must_use]
pub fn inspect_word(word: DisplayWord) -> WordBitString {
    // Sixteen bits always fit a `WordBitString`.
    inspect(&word).unwrap_or_default()
}
