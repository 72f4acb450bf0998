//! Byte source fed incrementally in chunks.

use std::collections::VecDeque;
use std::io;

/// A byte source that owns a queue of chunks.
///
/// Chunks arrive via [`push`](ChunkedReader::push) — one per network frame,
/// file block, or whatever delivery unit the caller deals in — and reads
/// proceed contiguously across chunk boundaries. Consumed chunks are dropped
/// as the cursor passes them, so memory tracks the unread tail rather than
/// the whole stream.
///
/// Reading an empty queue returns `Ok(0)`, the ordinary end-of-data signal;
/// pushing more data afterwards makes the reader live again.
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    /// Cursor within the front chunk.
    pos: usize,
    /// Total unread bytes across all chunks.
    size: usize,
}

impl Default for ChunkedReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedReader {
    /// Creates a reader with no data queued.
    pub fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
            pos: 0,
            size: 0,
        }
    }

    /// Queues a chunk of data to be read after everything already queued.
    pub fn push(&mut self, chunk: Vec<u8>) {
        if chunk.is_empty() {
            return;
        }
        self.size += chunk.len();
        self.chunks.push_back(chunk);
    }

    /// Returns the number of unread bytes across all queued chunks.
    pub fn remaining(&self) -> usize {
        self.size
    }

    /// Returns `true` if no unread bytes are queued.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl io::Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut copied = 0;
        while copied < buf.len() {
            let Some(front) = self.chunks.front() else {
                break;
            };
            let available = front.len() - self.pos;
            let n = available.min(buf.len() - copied);
            buf[copied..copied + n].copy_from_slice(&front[self.pos..self.pos + n]);
            copied += n;
            self.pos += n;
            self.size -= n;
            if self.pos == front.len() {
                self.chunks.pop_front();
                self.pos = 0;
            }
        }
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read as _;

    #[test]
    fn test_read_within_chunk() {
        let mut reader = ChunkedReader::new();
        reader.push(vec![1, 2, 3]);
        let mut buf = [0u8; 2];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_read_across_chunks() {
        let mut reader = ChunkedReader::new();
        reader.push(vec![1, 2]);
        reader.push(vec![3, 4, 5]);
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_drained_then_refed() {
        let mut reader = ChunkedReader::new();
        reader.push(vec![7]);
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        reader.push(vec![8, 9]);
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], [8, 9]);
    }

    #[test]
    fn test_empty_chunks_are_dropped() {
        let mut reader = ChunkedReader::new();
        reader.push(Vec::new());
        assert!(reader.is_empty());
        let mut buf = [0u8; 1];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_consumed_chunks_are_released() {
        let mut reader = ChunkedReader::new();
        reader.push(vec![1, 2]);
        reader.push(vec![3]);
        let mut buf = [0u8; 2];
        reader.read(&mut buf).unwrap();
        // Front chunk fully consumed: only the second remains queued.
        assert_eq!(reader.chunks.len(), 1);
        assert_eq!(reader.pos, 0);
    }
}
