//! Byte-order-aware decoder over a byte source.

use std::io::Read;

use crate::byte_order::ByteOrder;
use crate::error::DecodeError;
use crate::primitive::Primitive;
use crate::value::Decode;

/// Upper bound on speculative preallocation for wire-supplied counts.
const SEQUENCE_PREALLOC: usize = 1024;

/// Stack scratch size for [`Decoder::discard`].
const DISCARD_SCRATCH: usize = 256;

/// What to do with the unread remainder of a bounded region once its body
/// returns successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leftover {
    /// Read and drop the remainder, leaving the source positioned at the
    /// end of the region.
    Discard,
    /// Leave the remainder in the source. The full region is still charged
    /// to the parent's budget, but the source stays positioned inside it,
    /// so this is only safe when nothing more is read through the decoder.
    Ignore,
}

/// Reads typed values from a byte source in a configurable byte order,
/// optionally limited to a byte budget.
///
/// The budget only ever decreases: every successful read is charged
/// against it, and a request that exceeds what is left fails with
/// [`InsufficientData`](DecodeError::InsufficientData) before the source
/// is touched. An unbounded decoder reads until the source runs dry.
///
/// The decoder never closes the source; the caller owns its lifecycle.
/// Pass `&mut source` to keep ownership on the caller's side, since
/// `&mut R` is itself a source.
///
/// # Example
///
/// ```
/// use framepack::{ByteOrder, Decoder};
/// use framepack_buffers::Reader;
///
/// let data = [0x01, 0x02];
/// let mut dec = Decoder::new(Reader::new(&data), ByteOrder::Big);
/// assert_eq!(dec.pop_value::<u16>().unwrap(), 0x0102);
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    source: R,
    byte_order: ByteOrder,
    remaining: Option<u64>,
}

impl<R> Decoder<R> {
    /// Creates an unbounded decoder reading from `source` in the given
    /// byte order.
    pub fn new(source: R, order: ByteOrder) -> Self {
        Self {
            source,
            byte_order: order,
            remaining: None,
        }
    }

    /// Creates a decoder that will read at most `budget` bytes.
    pub fn bounded(source: R, order: ByteOrder, budget: u64) -> Self {
        Self {
            source,
            byte_order: order,
            remaining: Some(budget),
        }
    }

    /// Returns the byte order currently in effect.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Returns the unread byte budget, or `None` if unbounded.
    #[inline]
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Returns a shared reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Reading from the source directly bypasses budget accounting.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consumes the decoder, returning the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Runs `body` with the byte order switched to `order`, restoring the
    /// prior order afterwards.
    ///
    /// The restore happens on every exit path, early `?` returns and
    /// panics included.
    pub fn with_byte_order<T>(&mut self, order: ByteOrder, body: impl FnOnce(&mut Self) -> T) -> T {
        struct Restore<'a, R> {
            dec: &'a mut Decoder<R>,
            prior: ByteOrder,
        }

        impl<R> Drop for Restore<'_, R> {
            fn drop(&mut self) {
                self.dec.byte_order = self.prior;
            }
        }

        let prior = self.byte_order;
        self.byte_order = order;
        let guard = Restore { dec: self, prior };
        body(&mut *guard.dec)
    }

    #[inline]
    fn charge(&mut self, n: u64) {
        if let Some(rem) = &mut self.remaining {
            *rem -= n;
        }
    }
}

impl<R: Read> Decoder<R> {
    /// Fills `buf` from the source.
    ///
    /// The source is called exactly once, and must fill the whole buffer in
    /// that call; a short read is
    /// [`InsufficientData`](DecodeError::InsufficientData), not a retry.
    /// The short read is still charged to the budget, since those bytes
    /// left the source. An empty buffer is a no-op and does not touch the
    /// source.
    pub fn pop_into(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        if buf.is_empty() {
            return Ok(());
        }
        let requested = buf.len() as u64;
        if let Some(rem) = self.remaining {
            if requested > rem {
                return Err(DecodeError::InsufficientData {
                    requested,
                    available: rem,
                });
            }
        }
        match self.source.read(buf) {
            Ok(n) if n == buf.len() => {
                self.charge(n as u64);
                Ok(())
            }
            Ok(0) => Err(DecodeError::NoMoreData),
            Ok(n) if n < buf.len() => {
                self.charge(n as u64);
                Err(DecodeError::InsufficientData {
                    requested,
                    available: n as u64,
                })
            }
            Ok(n) => Err(DecodeError::UnexpectedBehavior {
                requested: buf.len(),
                claimed: n,
            }),
            Err(e) => Err(DecodeError::Stream(e)),
        }
    }

    /// Reads a primitive value in the decoder's current byte order.
    #[inline]
    pub fn pop_value<T: Primitive>(&mut self) -> Result<T, DecodeError> {
        let mut bytes = T::Bytes::default();
        self.pop_into(bytes.as_mut())?;
        Ok(T::from_bytes(bytes, self.byte_order))
    }

    /// Reads `count` consecutive values, all or nothing.
    ///
    /// The first failing element aborts the whole sequence; already-decoded
    /// elements are dropped.
    pub fn pop_sequence<T: Decode>(&mut self, count: usize) -> Result<Vec<T>, DecodeError> {
        let mut values = Vec::with_capacity(count.min(SEQUENCE_PREALLOC));
        for _ in 0..count {
            values.push(T::decode(self)?);
        }
        Ok(values)
    }

    /// Consumes and drops `count` bytes.
    ///
    /// The budget is checked up front, so a `count` beyond it fails before
    /// the source is touched.
    pub fn discard(&mut self, count: u64) -> Result<(), DecodeError> {
        if count == 0 {
            return Ok(());
        }
        if let Some(rem) = self.remaining {
            if count > rem {
                return Err(DecodeError::InsufficientData {
                    requested: count,
                    available: rem,
                });
            }
        }
        let mut scratch = [0u8; DISCARD_SCRATCH];
        let mut left = count;
        while left > 0 {
            let n = left.min(DISCARD_SCRATCH as u64) as usize;
            self.pop_into(&mut scratch[..n])?;
            left -= n as u64;
        }
        Ok(())
    }

    // ---------------------------------------------------------------- framing

    /// Runs `body` against a decoder bounded to the next `count` bytes.
    ///
    /// The sub-decoder shares this decoder's source and inherits its byte
    /// order, but carries its own budget of exactly `count` bytes. If this
    /// decoder is itself bounded, the full `count` is reserved from its
    /// budget before `body` runs, whether or not `body` reads it all.
    ///
    /// After `body` succeeds, `leftover` decides what happens to the bytes
    /// it left unread. On error nothing is drained; the error propagates
    /// as-is.
    ///
    /// The sub-decoder's source type is erased to `&mut dyn Read`, so
    /// nesting sections does not stack a new decoder type per depth.
    pub fn with_sub_decoder<T>(
        &mut self,
        count: u64,
        leftover: Leftover,
        body: impl FnOnce(&mut Decoder<&mut dyn Read>) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if let Some(rem) = self.remaining {
            if count > rem {
                return Err(DecodeError::InsufficientData {
                    requested: count,
                    available: rem,
                });
            }
            self.remaining = Some(rem - count);
        }
        let mut sub: Decoder<&mut dyn Read> = Decoder {
            source: &mut self.source,
            byte_order: self.byte_order,
            remaining: Some(count),
        };
        let value = body(&mut sub)?;
        match leftover {
            Leftover::Discard => {
                if let Some(rem) = sub.remaining {
                    sub.discard(rem)?;
                }
            }
            Leftover::Ignore => {}
        }
        Ok(value)
    }

    /// Reads a length-framed nested region written by
    /// [`Encoder::section`](crate::Encoder::section).
    ///
    /// `header` reads the region's size from the stream; returning `None`
    /// means there is no region here and the whole call is a no-op
    /// returning `Ok(None)`. With `Some(size)`, `body` runs against a
    /// sub-decoder bounded to exactly `size` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use framepack::{ByteOrder, Decoder, Leftover};
    /// use framepack_buffers::Reader;
    ///
    /// let data = [3, 0, 0, 0, 9, 8, 7];
    /// let mut dec = Decoder::new(Reader::new(&data), ByteOrder::Little);
    /// let first = dec
    ///     .section(
    ///         Leftover::Discard,
    ///         |dec| Ok(Some(dec.pop_value::<u32>()? as u64)),
    ///         |body| body.pop_value::<u8>(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(first, Some(9));
    /// ```
    pub fn section<T>(
        &mut self,
        leftover: Leftover,
        header: impl FnOnce(&mut Self) -> Result<Option<u64>, DecodeError>,
        body: impl FnOnce(&mut Decoder<&mut dyn Read>) -> Result<T, DecodeError>,
    ) -> Result<Option<T>, DecodeError> {
        self.section_with(
            leftover,
            |dec| Ok(header(dec)?.map(|size| (size, ()))),
            |sub, ()| body(sub),
        )
    }

    /// Like [`section`](Decoder::section), but the header hands extra
    /// context to the body.
    ///
    /// Useful when the header carries more than a size: a type tag, flags,
    /// a version byte. Whatever `C` the header extracts is passed to `body`
    /// alongside the bounded sub-decoder.
    pub fn section_with<C, T>(
        &mut self,
        leftover: Leftover,
        header: impl FnOnce(&mut Self) -> Result<Option<(u64, C)>, DecodeError>,
        body: impl FnOnce(&mut Decoder<&mut dyn Read>, C) -> Result<T, DecodeError>,
    ) -> Result<Option<T>, DecodeError> {
        let Some((size, context)) = header(self)? else {
            return Ok(None);
        };
        let value = self.with_sub_decoder(size, leftover, |sub| body(sub, context))?;
        Ok(Some(value))
    }
}
