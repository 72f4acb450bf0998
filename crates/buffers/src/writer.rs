//! Growable in-memory byte sink.

use std::io;

/// A growable in-memory byte sink.
///
/// Every write is accepted in full and appended to an internal buffer, so
/// `Writer` never produces partial writes or I/O errors. It is the sink the
/// encoder buffers section bodies into, and the sink of choice in tests.
///
/// # Example
///
/// ```
/// use framepack_buffers::Writer;
/// use std::io::Write;
///
/// let mut writer = Writer::new();
/// writer.write_all(&[0x01, 0x02, 0x03]).unwrap();
/// assert_eq!(writer.as_slice(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty writer with at least `capacity` bytes pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the written bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Drops all written bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Consumes the writer, returning the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl io::Write for Writer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_write_appends() {
        let mut writer = Writer::new();
        assert_eq!(writer.write(&[0x01]).unwrap(), 1);
        assert_eq!(writer.write(&[0x02, 0x03]).unwrap(), 2);
        assert_eq!(writer.as_slice(), [0x01, 0x02, 0x03]);
        assert_eq!(writer.len(), 3);
    }

    #[test]
    fn test_empty_write() {
        let mut writer = Writer::new();
        assert_eq!(writer.write(&[]).unwrap(), 0);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut writer = Writer::with_capacity(16);
        writer.write_all(&[1, 2, 3]).unwrap();
        writer.clear();
        assert!(writer.is_empty());
        writer.write_all(&[4]).unwrap();
        assert_eq!(writer.as_slice(), [4]);
    }

    #[test]
    fn test_into_vec() {
        let mut writer = Writer::new();
        writer.write_all(b"abc").unwrap();
        assert_eq!(writer.into_vec(), b"abc");
    }
}
