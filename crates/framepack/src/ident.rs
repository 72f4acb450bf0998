//! 128-bit identifiers.

use std::fmt;
use std::io::{Read, Write};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::value::{Decode, Encode};

/// A 128-bit identifier carried as its raw byte representation.
///
/// The layout is order-invariant: the same 16 bytes travel regardless of
/// the stream's byte order, so identifiers written on one host compare
/// equal when read back on any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id128([u8; 16]);

impl Id128 {
    /// Wraps 16 raw bytes as an identifier.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the identifier's bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the identifier, returning its bytes.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for Id128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Encode for Id128 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<(), EncodeError> {
        enc.push_raw(&self.0)
    }
}

impl Decode for Id128 {
    fn decode<R: Read>(dec: &mut Decoder<R>) -> Result<Self, DecodeError> {
        let mut bytes = [0u8; 16];
        dec.pop_into(&mut bytes)?;
        Ok(Self(bytes))
    }
}
