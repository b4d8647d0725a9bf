//! Decode error type.

use thiserror::Error;

use super::WireType;

/// Malformed wire data encountered while decoding.
///
/// Every variant describes a framing or structural violation of the byte
/// sequence; a successfully decoded empty message is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Rejected by `prost::encoding`: a truncated or overlong varint, an
    /// invalid key (field 0, wire type 6/7), or an unknown field that runs
    /// past the end of its record or closes the wrong group.
    #[error("malformed wire data: {0}")]
    Wire(#[from] prost::DecodeError),
    #[error("malformed wire data: length prefix {length} exceeds remaining {remaining} bytes")]
    LengthOverflow { length: u64, remaining: usize },
    #[error("malformed wire data: field {field} expects wire type {expected:?}, got {actual:?}")]
    WireTypeMismatch {
        field: u32,
        expected: WireType,
        actual: WireType,
    },
    #[error("malformed wire data: invalid UTF-8 in string")]
    InvalidUtf8,
    #[error("malformed wire data: nesting exceeds the decode depth limit")]
    RecursionLimit,
}

impl DecodeError {
    /// Every decode failure is a malformed-wire-data failure.
    pub fn is_malformed_wire_data(&self) -> bool {
        true
    }
}
