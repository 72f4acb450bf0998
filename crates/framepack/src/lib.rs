//! Byte-order-aware binary serialization with bounded section framing.
//!
//! This crate provides the encode/decode core for untagged binary formats:
//! - [`Encoder`]: writes typed values to any [`std::io::Write`] sink in a
//!   chosen [`ByteOrder`]
//! - [`Decoder`]: reads them back from any [`std::io::Read`] source, with
//!   an optional byte budget that stops every read past the limit
//! - sections: length-framed nested regions where the encoder sizes the
//!   header *after* the body is serialized, and the decoder bounds the
//!   body to exactly what the header claims
//! - [`Encode`] / [`Decode`]: the traits user-defined values implement to
//!   ride the same machinery
//!
//! There is no schema and no self-description: both sides must know the
//! exact shape of the data at every point in the stream.
//!
//! # Example
//!
//! ```
//! use framepack::{ByteOrder, Decoder, Encoder, Leftover};
//! use framepack_buffers::{Reader, Writer};
//!
//! // A record framed by a 4-byte length prefix.
//! let mut enc = Encoder::new(Writer::new(), ByteOrder::Little);
//! enc.section(
//!     |enc, buffered| enc.push_value(buffered.len() as u32),
//!     |body| {
//!         body.push_value(0x0102u16)?;
//!         body.push_value(7u8)
//!     },
//! )
//! .unwrap();
//! let bytes = enc.into_inner().into_vec();
//!
//! let mut dec = Decoder::new(Reader::new(&bytes), ByteOrder::Little);
//! let value = dec
//!     .section(
//!         Leftover::Discard,
//!         |dec| Ok(Some(dec.pop_value::<u32>()? as u64)),
//!         |body| body.pop_value::<u16>(),
//!     )
//!     .unwrap();
//! assert_eq!(value, Some(0x0102));
//! ```

mod byte_order;
mod decoder;
mod encoder;
mod error;
mod ident;
mod primitive;
mod value;

pub use byte_order::ByteOrder;
pub use decoder::{Decoder, Leftover};
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use ident::Id128;
pub use primitive::Primitive;
pub use value::{Blob, Decode, Encode};
