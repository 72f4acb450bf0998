//! Byte-order-aware encoder over a byte sink.

use std::io::Write;

use framepack_buffers::Writer;

use crate::byte_order::ByteOrder;
use crate::error::EncodeError;
use crate::primitive::Primitive;

/// Writes typed values to a byte sink in a configurable byte order.
///
/// The encoder never flushes or closes the sink; the caller owns its
/// lifecycle. Pass `&mut sink` to keep ownership on the caller's side,
/// since `&mut W` is itself a sink.
///
/// # Example
///
/// ```
/// use framepack::{ByteOrder, Encoder};
/// use framepack_buffers::Writer;
///
/// let mut enc = Encoder::new(Writer::new(), ByteOrder::Big);
/// enc.push_value(0x0102u16).unwrap();
/// assert_eq!(enc.get_ref().as_slice(), &[0x01, 0x02]);
/// ```
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    byte_order: ByteOrder,
}

impl<W> Encoder<W> {
    /// Creates an encoder writing to `sink` in the given byte order.
    pub fn new(sink: W, order: ByteOrder) -> Self {
        Self {
            sink,
            byte_order: order,
        }
    }

    /// Returns the byte order currently in effect.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Returns a shared reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    ///
    /// Writing to the sink directly bypasses the encoder's byte-order
    /// handling.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consumes the encoder, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Runs `body` with the byte order switched to `order`, restoring the
    /// prior order afterwards.
    ///
    /// The restore happens on every exit path, early `?` returns and
    /// panics included.
    pub fn with_byte_order<T>(&mut self, order: ByteOrder, body: impl FnOnce(&mut Self) -> T) -> T {
        struct Restore<'a, W> {
            enc: &'a mut Encoder<W>,
            prior: ByteOrder,
        }

        impl<W> Drop for Restore<'_, W> {
            fn drop(&mut self) {
                self.enc.byte_order = self.prior;
            }
        }

        let prior = self.byte_order;
        self.byte_order = order;
        let guard = Restore { enc: self, prior };
        body(&mut *guard.enc)
    }
}

impl<W: Write> Encoder<W> {
    /// Writes `bytes` to the sink verbatim.
    ///
    /// The sink is called exactly once, and must accept the whole slice in
    /// that call; a partial write is
    /// [`InsufficientSpace`](EncodeError::InsufficientSpace), not a retry.
    /// An empty slice is a no-op and does not touch the sink.
    pub fn push_raw(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if bytes.is_empty() {
            return Ok(());
        }
        match self.sink.write(bytes) {
            Ok(n) if n == bytes.len() => Ok(()),
            Ok(n) if n < bytes.len() => Err(EncodeError::InsufficientSpace {
                requested: bytes.len(),
                written: n,
            }),
            Ok(n) => Err(EncodeError::UnexpectedBehavior {
                requested: bytes.len(),
                claimed: n,
            }),
            Err(e) => Err(EncodeError::Stream(e)),
        }
    }

    /// Writes a primitive value in the encoder's current byte order.
    #[inline]
    pub fn push_value<T: Primitive>(&mut self, value: T) -> Result<(), EncodeError> {
        let bytes = value.to_bytes(self.byte_order);
        self.push_raw(bytes.as_ref())
    }

    /// Writes a length-framed nested region.
    ///
    /// `body` serializes the region's content into an isolated in-memory
    /// encoder that inherits the current byte order. Once the content is
    /// complete, `header(self, buffered)` runs against the real stream with
    /// the buffered bytes in hand, so it can write an exact size prefix (or
    /// checksum the content) without a sizing pre-pass. The buffered bytes
    /// are then spliced into the stream after whatever the header wrote.
    ///
    /// The whole region is held in memory until the splice, so the cost is
    /// proportional to the body size.
    ///
    /// # Example
    ///
    /// ```
    /// use framepack::{ByteOrder, Encoder};
    /// use framepack_buffers::Writer;
    ///
    /// let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
    /// enc.section(
    ///     |enc, buffered| enc.push_value(buffered.len() as u32),
    ///     |body| body.push_value(0xAABBu16),
    /// )
    /// .unwrap();
    /// assert_eq!(enc.get_ref().as_slice(), &[2, 0, 0, 0, 0xBB, 0xAA]);
    /// ```
    pub fn section<T>(
        &mut self,
        header: impl FnOnce(&mut Self, &[u8]) -> Result<(), EncodeError>,
        body: impl FnOnce(&mut Encoder<Writer>) -> Result<T, EncodeError>,
    ) -> Result<T, EncodeError> {
        let mut nested = Encoder::new(Writer::new(), self.byte_order);
        let value = body(&mut nested)?;
        let buffered = nested.into_inner();
        header(self, buffered.as_slice())?;
        self.push_raw(buffered.as_slice())?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink double that counts write calls.
    struct CountingSink {
        calls: usize,
        bytes: Vec<u8>,
    }

    impl CountingSink {
        fn new() -> Self {
            Self {
                calls: 0,
                bytes: Vec::new(),
            }
        }
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.calls += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_push_raw_writes_verbatim() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
        enc.push_raw(&[1, 2, 3]).unwrap();
        assert_eq!(enc.get_ref().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_push_skips_sink() {
        let mut enc = Encoder::new(CountingSink::new(), ByteOrder::Little);
        enc.push_raw(&[]).unwrap();
        assert_eq!(enc.get_ref().calls, 0);
    }

    #[test]
    fn test_push_value_orders_bytes() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
        enc.push_value(0x0102u16).unwrap();
        enc.with_byte_order(ByteOrder::Big, |enc| enc.push_value(0x0102u16))
            .unwrap();
        assert_eq!(enc.get_ref().as_slice(), &[0x02, 0x01, 0x01, 0x02]);
    }

    #[test]
    fn test_order_restored_after_scope() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
        enc.with_byte_order(ByteOrder::Big, |enc| {
            assert_eq!(enc.byte_order(), ByteOrder::Big);
        });
        assert_eq!(enc.byte_order(), ByteOrder::Little);
    }

    #[test]
    fn test_section_prefixes_buffered_length() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
        enc.section(
            |enc, buffered| enc.push_value(buffered.len() as u32),
            |body| {
                body.push_raw(&[9, 8, 7])?;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(enc.get_ref().as_slice(), &[3, 0, 0, 0, 9, 8, 7]);
    }

    #[test]
    fn test_section_body_error_writes_nothing() {
        let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
        let result: Result<(), _> = enc.section(
            |enc, buffered| enc.push_value(buffered.len() as u32),
            |body| {
                body.push_raw(&[1])?;
                Err(EncodeError::InvalidValue("nope".into()))
            },
        );
        assert!(result.is_err());
        assert!(enc.get_ref().is_empty());
    }
}
