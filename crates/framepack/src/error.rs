//! Encode and decode error types.

use thiserror::Error;

/// Error raised while writing to a byte sink.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A value cannot be represented in the target encoding.
    ///
    /// Never produced by the encoder itself; reserved for
    /// [`Encode`](crate::Encode) implementations that validate their input.
    #[error("value cannot be encoded: {0}")]
    InvalidValue(String),
    /// The sink accepted fewer bytes than were given to it.
    #[error("sink accepted {written} of {requested} bytes")]
    InsufficientSpace { requested: usize, written: usize },
    /// The sink reported a write failure.
    #[error("sink error")]
    Stream(#[source] std::io::Error),
    /// The sink claimed to have written more bytes than it was given.
    #[error("sink claimed {claimed} bytes for a {requested}-byte write")]
    UnexpectedBehavior { requested: usize, claimed: usize },
}

/// Error raised while reading from a byte source.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source ended cleanly where at least one more byte was expected.
    #[error("no more data")]
    NoMoreData,
    /// The source produced fewer bytes than requested, or the request
    /// exceeded the decoder's remaining budget.
    #[error("needed {requested} bytes, only {available} available")]
    InsufficientData { requested: u64, available: u64 },
    /// Well-formed bytes whose content is invalid.
    ///
    /// Never produced by the decoder itself; reserved for
    /// [`Decode`](crate::Decode) implementations that validate what they
    /// read (discriminants, ranges, magic numbers).
    #[error("data corrupted: {0}")]
    DataCorrupted(String),
    /// The source reported a read failure.
    #[error("source error")]
    Stream(#[source] std::io::Error),
    /// The source claimed to have produced more bytes than were requested.
    #[error("source claimed {claimed} bytes for a {requested}-byte read")]
    UnexpectedBehavior { requested: usize, claimed: usize },
}
