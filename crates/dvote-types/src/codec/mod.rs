//! Generic codecs over [`Message`] records.
//!
//! - [`binary`] - protobuf wire encode/decode
//! - [`json`] - JSON projection and permissive parsing
//! - [`partial`] - construction from partial objects
//! - [`coerce`] - the stringification rules of the permissive parser
//!
//! [`MessageExt`] bundles them as methods on every record type.

pub mod binary;
pub mod coerce;
pub mod json;
mod options;
pub mod partial;

pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH};

use bytes::BufMut;
use prost::encoding::encoded_len_varint;
use serde_json::Value;

use crate::schema::Message;
use crate::wire::{self, DecodeError};

/// Encode, decode and JSON conversions for any record type.
pub trait MessageExt: Message + Default + Sized {
    /// Encodes with insertion-ordered maps.
    fn encode_to_vec(&self) -> Vec<u8> {
        self.encode_with(&EncodeOptions::default())
    }

    fn encode_with(&self, options: &EncodeOptions) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        binary::encode(self, &mut buf, options);
        buf
    }

    /// Appends the encoding to an existing buffer.
    fn encode_to(&self, buf: &mut impl BufMut, options: &EncodeOptions) {
        binary::encode(self, buf, options);
    }

    /// Encodes prefixed with the varint byte length.
    fn encode_length_delimited(&self, options: &EncodeOptions) -> Vec<u8> {
        let len = self.encoded_len();
        let mut buf = Vec::with_capacity(len + encoded_len_varint(len as u64));
        wire::write_length(&mut buf, len);
        binary::encode(self, &mut buf, options);
        buf
    }

    fn encoded_len(&self) -> usize {
        binary::encoded_len(self)
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        binary::decode(bytes, &DecodeOptions::default())
    }

    fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        binary::decode(bytes, options)
    }

    fn decode_length_delimited(bytes: &[u8]) -> Result<Self, DecodeError> {
        binary::decode_length_delimited(bytes, &DecodeOptions::default())
    }

    fn to_json(&self) -> Value {
        json::to_json(self)
    }

    fn from_json(value: &Value) -> Self {
        json::from_json(value)
    }

    fn from_partial(value: &Value) -> Self {
        partial::from_partial(value)
    }
}

impl<M: Message + Default> MessageExt for M {}
