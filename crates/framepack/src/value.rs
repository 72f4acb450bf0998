//! The typed value protocol.

use std::io::{Read, Write};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};

/// A value that can serialize itself through an [`Encoder`].
///
/// Implementations compose: a struct's `encode` calls `encode` on its
/// fields in stream order, and framed parts go through
/// [`Encoder::section`].
pub trait Encode {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError>;
}

/// A value that can reconstruct itself through a [`Decoder`].
///
/// There is no self-description in the stream: each implementation must
/// know the exact shape of the bytes at its position.
pub trait Decode: Sized {
    fn decode<R: Read>(dec: &mut Decoder<R>) -> Result<Self, DecodeError>;
}

macro_rules! impl_value_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
                    enc.push_value(*self)
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode<R: Read>(dec: &mut Decoder<R>) -> Result<Self, DecodeError> {
                    dec.pop_value()
                }
            }
        )*
    };
}

impl_value_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

/// An opaque run of bytes written verbatim.
///
/// Encode-only: the length is context the caller already carries (a
/// preceding count field, a section size), not part of the value itself.
/// The matching read is [`Decoder::pop_into`] with a caller-sized buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob<'a>(pub &'a [u8]);

impl Encode for Blob<'_> {
    #[inline]
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
        enc.push_raw(self.0)
    }
}

/// Elements back to back, no count prefix. The caller encodes the count
/// separately; the matching read is [`Decoder::pop_sequence`].
impl<T: Encode> Encode for [T] {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
        for item in self {
            item.encode(enc)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
        self.as_slice().encode(enc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_order::ByteOrder;
    use framepack_buffers::{Reader, Writer};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: u16,
        y: u16,
    }

    impl Encode for Point {
        fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
            self.x.encode(enc)?;
            self.y.encode(enc)
        }
    }

    impl Decode for Point {
        fn decode<R: Read>(dec: &mut Decoder<R>) -> Result<Self, DecodeError> {
            Ok(Point {
                x: u16::decode(dec)?,
                y: u16::decode(dec)?,
            })
        }
    }

    #[test]
    fn test_struct_round_trip() {
        let point = Point { x: 7, y: 512 };
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Big);
        point.encode(&mut enc).unwrap();
        let sink = enc.into_inner();
        let mut dec = Decoder::new(Reader::new(sink.as_slice()), ByteOrder::Big);
        assert_eq!(Point::decode(&mut dec).unwrap(), point);
    }

    #[test]
    fn test_blob_written_verbatim() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Big);
        Blob(&[1, 2, 3]).encode(&mut enc).unwrap();
        assert_eq!(enc.get_ref().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_sequence_has_no_prefix() {
        let values: Vec<u16> = vec![0x0102, 0x0304];
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Big);
        values.encode(&mut enc).unwrap();
        assert_eq!(enc.get_ref().as_slice(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_sequence_decodes_via_pop_sequence() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut dec = Decoder::new(Reader::new(&data), ByteOrder::Big);
        let values: Vec<u16> = dec.pop_sequence(2).unwrap();
        assert_eq!(values, vec![0x0102, 0x0304]);
    }
}
