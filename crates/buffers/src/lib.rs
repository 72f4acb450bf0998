//! In-memory byte sinks and sources for framepack.
//!
//! This crate provides the buffer types the codec layers read from and
//! write to:
//! - [`Writer`]: a growable in-memory sink
//! - [`Reader`]: a cursor over a borrowed byte slice
//! - [`ChunkedReader`]: a source fed incrementally in owned chunks
//!
//! All three speak `std::io`, so anything written against
//! [`std::io::Read`] / [`std::io::Write`] works with them directly.
//!
//! # Example
//!
//! ```
//! use framepack_buffers::{Reader, Writer};
//! use std::io::{Read, Write};
//!
//! let mut writer = Writer::new();
//! writer.write_all(&[1, 2, 3]).unwrap();
//!
//! let mut reader = Reader::new(writer.as_slice());
//! let mut buf = [0u8; 3];
//! reader.read_exact(&mut buf).unwrap();
//! assert_eq!(buf, [1, 2, 3]);
//! ```

mod chunked;
mod reader;
mod writer;

pub use chunked::ChunkedReader;
pub use reader::Reader;
pub use writer::Writer;
