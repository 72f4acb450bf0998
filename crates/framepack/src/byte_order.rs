//! Byte-order selection.

/// The byte order used when serializing multi-byte values.
///
/// Carried by every [`Encoder`](crate::Encoder) and
/// [`Decoder`](crate::Decoder) and applied to each primitive as it crosses
/// the byte boundary. The discriminants are stable so the order itself can
/// travel inside a stream as a single byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little = 0,
    /// Most significant byte first (network order).
    Big = 1,
}

impl ByteOrder {
    /// Reconstructs a byte order from its wire discriminant.
    ///
    /// Returns `None` for any value other than the two defined codes.
    pub fn from_code(code: u8) -> Option<ByteOrder> {
        match code {
            0 => Some(ByteOrder::Little),
            1 => Some(ByteOrder::Big),
            _ => None,
        }
    }

    /// Returns the wire discriminant for this byte order.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the byte order of the machine this code is running on.
    #[inline]
    pub const fn host() -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(ByteOrder::from_code(ByteOrder::Little.code()), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_code(ByteOrder::Big.code()), Some(ByteOrder::Big));
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ByteOrder::from_code(2), None);
        assert_eq!(ByteOrder::from_code(255), None);
    }

    #[test]
    fn test_host_matches_target_endian() {
        let expected = if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        };
        assert_eq!(ByteOrder::host(), expected);
    }
}
