//! Cursor-tracking byte source over a borrowed slice.

use std::io;

/// A byte source reading from a borrowed slice.
///
/// The reader hands out as many bytes as the caller asks for (or as many as
/// remain), advancing an internal cursor; once the slice is exhausted every
/// read returns `Ok(0)`. [`position`](Reader::position) exposes how far the
/// cursor has advanced, which is what leftover-accounting tests assert on.
///
/// # Example
///
/// ```
/// use framepack_buffers::Reader;
/// use std::io::Read;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
/// let mut buf = [0u8; 2];
/// reader.read(&mut buf).unwrap();
/// assert_eq!(buf, [0x01, 0x02]);
/// assert_eq!(reader.position(), 2);
/// assert_eq!(reader.remaining(), 1);
/// ```
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over the given slice, cursor at the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl io::Read for Reader<'_> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
