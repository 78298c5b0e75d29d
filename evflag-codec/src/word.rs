use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A fixed-width storage unit holding one flag per bit
///
/// Implemented for the unsigned primitives whose bit count is a power of
/// two, so an identifier splits into word index and bit offset by shift
/// and mask alone.
pub trait Word:
    Copy
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
{
    const BITS: u32;
    const ZERO: Self;

    /// The word with only bit `offset` set
    fn nth(offset: u32) -> Self;

    fn write_le(self, out: &mut Vec<u8>);

    /// Reassemble a word from exactly `size_of::<Self>()` little-endian bytes
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! word_impl {
    ($($int:ty),*) => {
        $(impl Word for $int {
            const BITS: u32 = <$int>::BITS;
            const ZERO: Self = 0;

            #[inline]
            fn nth(offset: u32) -> Self {
                1 << offset
            }

            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0; std::mem::size_of::<$int>()];
                raw.copy_from_slice(bytes);
                <$int>::from_le_bytes(raw)
            }
        })*
    };
}

word_impl!(u8, u16, u32, u64);
