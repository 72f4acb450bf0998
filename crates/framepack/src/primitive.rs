//! Fixed-width primitive values and their byte representations.

use crate::byte_order::ByteOrder;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value with a byte-order-aware byte representation.
///
/// Implemented for the built-in integer and floating-point types. The trait
/// is sealed: the encoder and decoder rely on `WIDTH` matching the size of
/// `Bytes` exactly, so outside implementations are not accepted.
///
/// Floating-point values convert through their IEEE 754 bit pattern, so
/// every bit of the payload survives a round trip, NaN payloads included.
pub trait Primitive: Copy + sealed::Sealed {
    /// The byte-array representation, always `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Serialized width in bytes.
    const WIDTH: usize;

    /// Converts the value into bytes laid out in the given order.
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes;

    /// Reconstructs a value from bytes laid out in the given order.
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;
}

macro_rules! impl_primitive_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
                    match order {
                        ByteOrder::Little => self.to_le_bytes(),
                        ByteOrder::Big => self.to_be_bytes(),
                    }
                }

                #[inline]
                fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
                    match order {
                        ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                        ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                    }
                }
            }
        )*
    };
}

impl_primitive_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

macro_rules! impl_primitive_float {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
                    self.to_bits().to_bytes(order)
                }

                #[inline]
                fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
                    <$ty>::from_bits(<$bits>::from_bytes(bytes, order))
                }
            }
        )*
    };
}

impl_primitive_float!(f32 => u32, f64 => u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_matches_bytes_len() {
        assert_eq!(u8::WIDTH, 1);
        assert_eq!(u16::WIDTH, 2);
        assert_eq!(u32::WIDTH, 4);
        assert_eq!(u64::WIDTH, 8);
        assert_eq!(u128::WIDTH, 16);
        assert_eq!(f32::WIDTH, 4);
        assert_eq!(f64::WIDTH, 8);
    }

    #[test]
    fn test_u16_byte_layout() {
        assert_eq!(0x0102u16.to_bytes(ByteOrder::Little), [0x02, 0x01]);
        assert_eq!(0x0102u16.to_bytes(ByteOrder::Big), [0x01, 0x02]);
    }

    #[test]
    fn test_signed_round_trip() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            for v in [i32::MIN, -1, 0, 1, i32::MAX] {
                assert_eq!(i32::from_bytes(v.to_bytes(order), order), v);
            }
        }
    }

    #[test]
    fn test_float_bit_pattern_preserved() {
        let nan = f64::from_bits(0x7ff8_dead_beef_0001);
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let back = f64::from_bytes(nan.to_bytes(order), order);
            assert_eq!(back.to_bits(), nan.to_bits());
        }
    }

    #[test]
    fn test_float_layout_matches_bits() {
        let v = 1.5f32;
        assert_eq!(v.to_bytes(ByteOrder::Big), v.to_bits().to_be_bytes());
        assert_eq!(v.to_bytes(ByteOrder::Little), v.to_bits().to_le_bytes());
    }
}
