//! Bencode error type.

use std::io;

use thiserror::Error;

/// Error returned by every decode and encode operation.
///
/// Decode failures are terminal for the call that produced them: no partial
/// tree is returned. Offsets count bytes consumed from the start of the
/// source.
#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("invalid prefix byte 0x{byte:02x} at offset {offset}, expected one of 'd', 'i', 'l', '0'-'9'")]
    InvalidPrefix { byte: u8, offset: usize },

    #[error("malformed byte string length: unexpected byte 0x{byte:02x} at offset {offset}")]
    MalformedLength { byte: u8, offset: usize },

    #[error("leading zeros are not allowed (offset {offset})")]
    LeadingZero { offset: usize },

    #[error("denied attempt to read {length} bytes, limit is {limit}")]
    LengthLimitExceeded { length: u64, limit: usize },

    #[error("premature end of input, missing {missing} of {expected} bytes")]
    TruncatedInput { expected: usize, missing: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("-0 is not permitted (offset {offset})")]
    NegativeZero { offset: usize },

    #[error("invalid character 0x{byte:02x} at offset {offset}")]
    InvalidCharacter { byte: u8, offset: usize },

    #[error("integer does not fit in 64 bits (offset {offset})")]
    IntegerOverflow { offset: usize },

    #[error("duplicate dictionary key {key:?} at offset {offset}")]
    DuplicateKey { key: String, offset: usize },

    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },

    #[error("source error: {0}")]
    Source(#[source] io::Error),

    #[error("sink error: {0}")]
    Sink(#[source] io::Error),
}

impl BencodeError {
    /// Returns `true` for failures of the underlying byte source or sink, as
    /// opposed to malformed input.
    pub fn is_io(&self) -> bool {
        matches!(self, BencodeError::Source(_) | BencodeError::Sink(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = BencodeError::InvalidPrefix {
            byte: b'x',
            offset: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid prefix byte 0x78 at offset 3, expected one of 'd', 'i', 'l', '0'-'9'"
        );

        let err = BencodeError::TruncatedInput {
            expected: 3,
            missing: 1,
        };
        assert_eq!(
            err.to_string(),
            "premature end of input, missing 1 of 3 bytes"
        );
    }

    #[test]
    fn io_classification() {
        let source = BencodeError::Source(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(source.is_io());
        assert!(!BencodeError::NegativeZero { offset: 1 }.is_io());
    }
}
