use std::ops::RangeInclusive;

/// Helper methods to read and write packed bit fields,
/// the index (`bit_idx`) goes from lsb to msb (right to left).
pub trait Bits: Copy {
    const WIDTH: u8;

    fn get_bit(self, bit_idx: u8) -> bool;

    fn set_bit(&mut self, bit_idx: u8, value: bool);

    /// Extracts `bits_range` and moves it back to position 0.
    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self;

    /// Replaces `bits_range` with the low bits of `value`.
    fn set_bits(&mut self, bits_range: RangeInclusive<u8>, value: Self);

    fn low_nibble(self) -> u8 {
        self.nibble(0)
    }

    fn high_nibble(self) -> u8 {
        self.nibble(1)
    }

    fn nibble(self, nth: u8) -> u8;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            const WIDTH: u8 = <$t>::BITS as u8;

            fn get_bit(self, bit_idx: u8) -> bool {
                debug_assert!(bit_idx < Self::WIDTH);
                (self >> bit_idx) & 1 == 1
            }

            fn set_bit(&mut self, bit_idx: u8, value: bool) {
                debug_assert!(bit_idx < Self::WIDTH);
                if value {
                    *self |= 1 << bit_idx;
                } else {
                    *self &= !(1 << bit_idx);
                }
            }

            fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self {
                let start = *bits_range.start();
                let length = u32::from(*bits_range.end() - start + 1);
                debug_assert!(start + length as u8 <= Self::WIDTH);

                // `length` ones moved under the requested range.
                let mask = <$t>::MAX.checked_shr(Self::WIDTH as u32 - length).unwrap_or(0);
                (self >> start) & mask
            }

            fn set_bits(&mut self, bits_range: RangeInclusive<u8>, value: Self) {
                let start = *bits_range.start();
                let length = u32::from(*bits_range.end() - start + 1);
                debug_assert!(start + length as u8 <= Self::WIDTH);

                let mask = <$t>::MAX.checked_shr(Self::WIDTH as u32 - length).unwrap_or(0);
                *self = (*self & !(mask << start)) | ((value & mask) << start);
            }

            #[allow(clippy::cast_possible_truncation)]
            fn nibble(self, nth: u8) -> u8 {
                debug_assert!(nth * 4 < Self::WIDTH);
                ((self >> (nth * 4)) & 0xF) as u8
            }
        }
    )*};
}

impl_bits!(u8, u16);
