//! Protobuf wire format helpers over [`prost::encoding`].
//!
//! A record is a sequence of `(key, value)` entries where the key is the
//! varint `field_number << 3 | wire_type`. Only length-delimited values are
//! produced by this schema, but every wire type can be skipped so that
//! fields added by newer schema versions decode without error.
//!
//! Readers are plain byte slices advanced in place (`&mut &[u8]`), so a
//! length-delimited payload is simply a shorter slice.

mod error;

pub use error::DecodeError;
pub use prost::encoding::WireType;

use bytes::BufMut;
use prost::encoding::{self, DecodeContext};

/// Writes the key for `number` with the given wire type.
pub fn write_key(buf: &mut impl BufMut, number: u32, wire_type: WireType) {
    encoding::encode_key(number, wire_type, buf);
}

/// Size in bytes of the key for `number`.
pub fn key_len(number: u32) -> usize {
    encoding::key_len(number)
}

/// Reads a key, returning the field number and wire type.
///
/// Field number 0, keys wider than 32 bits and wire types 6/7 are rejected.
pub fn read_key(buf: &mut &[u8]) -> Result<(u32, WireType), DecodeError> {
    Ok(encoding::decode_key(buf)?)
}

/// Writes the varint length prefix of a delimited payload.
pub fn write_length(buf: &mut impl BufMut, len: usize) {
    encoding::encode_varint(len as u64, buf);
}

/// Writes a length-delimited string entry.
pub fn write_string(buf: &mut impl BufMut, number: u32, value: &str) {
    write_key(buf, number, WireType::LengthDelimited);
    write_length(buf, value.len());
    buf.put_slice(value.as_bytes());
}

/// Size of a length-delimited entry whose payload is `payload_len` bytes.
pub fn delimited_len(number: u32, payload_len: usize) -> usize {
    key_len(number) + encoding::encoded_len_varint(payload_len as u64) + payload_len
}

/// Reads a length prefix and splits that many bytes off the front of `buf`.
pub fn read_delimited<'a>(buf: &mut &'a [u8]) -> Result<&'a [u8], DecodeError> {
    let length = encoding::decode_varint(buf)?;
    let data: &'a [u8] = *buf;
    if length > data.len() as u64 {
        return Err(DecodeError::LengthOverflow {
            length,
            remaining: data.len(),
        });
    }
    let (payload, rest) = data.split_at(length as usize);
    *buf = rest;
    Ok(payload)
}

/// Reads a length-delimited UTF-8 string.
pub fn read_string(buf: &mut &[u8]) -> Result<String, DecodeError> {
    let payload = read_delimited(buf)?;
    std::str::from_utf8(payload)
        .map(str::to_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Skips the value of an entry whose key has already been read.
///
/// Entering a group counts as one level of nesting against `depth`; groups
/// nested inside a skipped group are bounded by prost's own recursion limit.
pub fn skip_field(
    buf: &mut &[u8],
    number: u32,
    wire_type: WireType,
    depth: usize,
) -> Result<(), DecodeError> {
    if wire_type == WireType::StartGroup && depth == 0 {
        return Err(DecodeError::RecursionLimit);
    }
    encoding::skip_field(wire_type, number, buf, DecodeContext::default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_layout() {
        let mut buf = Vec::new();
        write_key(&mut buf, 1, WireType::LengthDelimited);
        write_key(&mut buf, 12, WireType::LengthDelimited);
        write_key(&mut buf, 100, WireType::LengthDelimited);
        assert_eq!(buf, vec![10, 98, 0xa2, 0x06]);
        assert_eq!(key_len(15), 1);
        assert_eq!(key_len(16), 2);
        assert_eq!(key_len(100), 2);
    }

    #[test]
    fn read_key_rejects_field_zero_and_bad_wire_types() {
        for bytes in [[0x02u8], [0x0e], [0x0f]] {
            let mut buf = &bytes[..];
            assert!(matches!(read_key(&mut buf), Err(DecodeError::Wire(_))), "{bytes:?}");
        }
    }

    #[test]
    fn read_key_accepts_two_byte_keys() {
        let mut buf: &[u8] = &[0xa2, 0x06, 0xff];
        assert_eq!(read_key(&mut buf), Ok((100, WireType::LengthDelimited)));
        assert_eq!(buf, &[0xff]);
    }

    #[test]
    fn string_roundtrip() {
        let mut out = Vec::new();
        write_string(&mut out, 2, "héllo");
        assert_eq!(out.len(), delimited_len(2, "héllo".len()));
        let mut buf = &out[..];
        assert_eq!(read_key(&mut buf), Ok((2, WireType::LengthDelimited)));
        assert_eq!(read_string(&mut buf).as_deref(), Ok("héllo"));
        assert!(buf.is_empty());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut buf: &[u8] = &[0x02, 0xff, 0xfe];
        assert_eq!(read_string(&mut buf), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn length_prefix_past_end_is_rejected() {
        let mut buf: &[u8] = &[0x05, b'a', b'b'];
        assert_eq!(
            read_string(&mut buf),
            Err(DecodeError::LengthOverflow {
                length: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn read_delimited_leaves_the_rest() {
        let mut buf: &[u8] = &[0x02, 1, 2, 3];
        assert_eq!(read_delimited(&mut buf), Ok(&[1u8, 2][..]));
        assert_eq!(buf, &[3]);
    }

    #[test]
    fn skip_every_wire_type() {
        let bytes = [
            0x96, 0x01, // varint
            1, 2, 3, 4, 5, 6, 7, 8, // fixed64
            0x02, b'o', b'k', // length-delimited
            1, 2, 3, 4, // fixed32
        ];
        let mut buf = &bytes[..];
        skip_field(&mut buf, 1, WireType::Varint, 8).unwrap();
        skip_field(&mut buf, 1, WireType::SixtyFourBit, 8).unwrap();
        skip_field(&mut buf, 1, WireType::LengthDelimited, 8).unwrap();
        skip_field(&mut buf, 1, WireType::ThirtyTwoBit, 8).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn skip_group_until_matching_end() {
        // Inside group 3: field 1 varint 5, then end group 3.
        let mut buf: &[u8] = &[0x08, 0x05, 0x1c];
        skip_field(&mut buf, 3, WireType::StartGroup, 8).unwrap();
        assert!(buf.is_empty());

        // End group for field 4 inside group 3.
        let mut buf: &[u8] = &[0x24];
        assert!(matches!(
            skip_field(&mut buf, 3, WireType::StartGroup, 8),
            Err(DecodeError::Wire(_))
        ));
    }

    #[test]
    fn group_at_depth_zero_hits_the_limit() {
        let mut buf: &[u8] = &[0x1c];
        assert_eq!(
            skip_field(&mut buf, 3, WireType::StartGroup, 0),
            Err(DecodeError::RecursionLimit)
        );
    }

    #[test]
    fn stray_end_group_is_rejected() {
        let mut buf: &[u8] = &[];
        assert!(matches!(
            skip_field(&mut buf, 3, WireType::EndGroup, 8),
            Err(DecodeError::Wire(_))
        ));
    }

    #[test]
    fn skip_truncated_fixed_is_rejected() {
        let mut buf: &[u8] = &[1, 2, 3];
        assert!(matches!(
            skip_field(&mut buf, 1, WireType::ThirtyTwoBit, 8),
            Err(DecodeError::Wire(_))
        ));
    }
}
