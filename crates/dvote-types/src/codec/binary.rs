//! Schema-driven protobuf encoder and decoder.

use bytes::BufMut;
use tracing::{debug, trace};

use crate::schema::{iter_messages, FieldMut, FieldRef, Message, StringMap};
use crate::wire::{self, DecodeError, WireType};

use super::options::{DecodeOptions, EncodeOptions};

const MAP_KEY: u32 = 1;
const MAP_VALUE: u32 = 2;

/// Number of bytes [`encode`] produces for `msg`.
pub fn encoded_len(msg: &dyn Message) -> usize {
    let mut len = 0;
    for field in msg.schema().fields {
        let number = field.number;
        let Some(value) = msg.field(number) else {
            continue;
        };
        len += match value {
            FieldRef::Str(s) if s.is_empty() => 0,
            FieldRef::Str(s) => wire::delimited_len(number, s.len()),
            FieldRef::Strings(items) => items
                .iter()
                .map(|s| wire::delimited_len(number, s.len()))
                .sum(),
            FieldRef::Map(map) => map
                .iter()
                .map(|(k, v)| wire::delimited_len(number, map_entry_len(k, v)))
                .sum(),
            FieldRef::Message(slot) => slot
                .get()
                .map_or(0, |m| wire::delimited_len(number, encoded_len(m))),
            FieldRef::Messages(list) => iter_messages(list)
                .map(|m| wire::delimited_len(number, encoded_len(m)))
                .sum(),
        };
    }
    len
}

fn map_entry_len(key: &str, value: &str) -> usize {
    let mut len = 0;
    if !key.is_empty() {
        len += wire::delimited_len(MAP_KEY, key.len());
    }
    if !value.is_empty() {
        len += wire::delimited_len(MAP_VALUE, value.len());
    }
    len
}

/// Appends the entries of `msg` to `buf` in ascending field-number order.
///
/// Empty strings are not written; every list element and map entry is.
pub fn encode(msg: &dyn Message, buf: &mut impl BufMut, options: &EncodeOptions) {
    for field in msg.schema().fields {
        let number = field.number;
        let Some(value) = msg.field(number) else {
            continue;
        };
        match value {
            FieldRef::Str(s) => {
                if !s.is_empty() {
                    wire::write_string(buf, number, s);
                }
            }
            FieldRef::Strings(items) => {
                for s in items {
                    wire::write_string(buf, number, s);
                }
            }
            FieldRef::Map(map) => encode_map(buf, number, map, options),
            FieldRef::Message(slot) => {
                if let Some(m) = slot.get() {
                    encode_nested(buf, number, m, options);
                }
            }
            FieldRef::Messages(list) => {
                for m in iter_messages(list) {
                    encode_nested(buf, number, m, options);
                }
            }
        }
    }
}

fn encode_nested(buf: &mut impl BufMut, number: u32, msg: &dyn Message, options: &EncodeOptions) {
    wire::write_key(buf, number, WireType::LengthDelimited);
    wire::write_length(buf, encoded_len(msg));
    encode(msg, buf, options);
}

fn encode_map(buf: &mut impl BufMut, number: u32, map: &StringMap, options: &EncodeOptions) {
    let mut entries: Vec<(&String, &String)> = map.iter().collect();
    if options.canonical_maps {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    for (key, value) in entries {
        wire::write_key(buf, number, WireType::LengthDelimited);
        wire::write_length(buf, map_entry_len(key, value));
        if !key.is_empty() {
            wire::write_string(buf, MAP_KEY, key);
        }
        if !value.is_empty() {
            wire::write_string(buf, MAP_VALUE, value);
        }
    }
}

/// Decodes a whole buffer into a fresh record.
pub fn decode<M: Message + Default>(bytes: &[u8], options: &DecodeOptions) -> Result<M, DecodeError> {
    let mut msg = M::default();
    let mut buf = bytes;
    if let Err(err) = merge(&mut msg, &mut buf, options.max_depth) {
        debug!(record = msg.schema().name, %err, "decode failed");
        return Err(err);
    }
    Ok(msg)
}

/// Decodes a record preceded by its varint byte length.
///
/// Bytes after the framed record are left unread.
pub fn decode_length_delimited<M: Message + Default>(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<M, DecodeError> {
    let mut msg = M::default();
    let mut buf = bytes;
    let result = wire::read_delimited(&mut buf)
        .and_then(|mut body| merge(&mut msg, &mut body, options.max_depth));
    if let Err(err) = result {
        debug!(record = msg.schema().name, %err, "decode failed");
        return Err(err);
    }
    Ok(msg)
}

/// Reads entries from `buf` until it is exhausted, dispatching each to the
/// field with the same number. Numbers missing from the schema table are
/// skipped.
///
/// `depth` is how many further levels of nesting may be entered.
pub fn merge(msg: &mut dyn Message, buf: &mut &[u8], depth: usize) -> Result<(), DecodeError> {
    let schema = msg.schema();
    while !buf.is_empty() {
        let (number, wire_type) = wire::read_key(buf)?;
        let Some((field, target)) = schema.field(number).zip(msg.field_mut(number)) else {
            trace!(record = schema.name, field = number, ?wire_type, "skipping unknown field");
            wire::skip_field(buf, number, wire_type, depth)?;
            continue;
        };
        let expected = field.kind.wire_type();
        if wire_type != expected {
            return Err(DecodeError::WireTypeMismatch {
                field: number,
                expected,
                actual: wire_type,
            });
        }
        match target {
            FieldMut::Str(s) => *s = wire::read_string(buf)?,
            FieldMut::Strings(items) => items.push(wire::read_string(buf)?),
            FieldMut::Map(map) => {
                let mut body = nested(buf, depth)?;
                let (key, value) = merge_map_entry(&mut body, depth - 1)?;
                map.insert(key, value);
            }
            FieldMut::Message(slot) => {
                let mut body = nested(buf, depth)?;
                merge(slot.reset_default(), &mut body, depth - 1)?;
            }
            FieldMut::Messages(list) => {
                let mut body = nested(buf, depth)?;
                merge(list.push_default(), &mut body, depth - 1)?;
            }
        }
    }
    Ok(())
}

fn nested<'a>(buf: &mut &'a [u8], depth: usize) -> Result<&'a [u8], DecodeError> {
    if depth == 0 {
        return Err(DecodeError::RecursionLimit);
    }
    wire::read_delimited(buf)
}

fn merge_map_entry(buf: &mut &[u8], depth: usize) -> Result<(String, String), DecodeError> {
    let mut key = String::new();
    let mut value = String::new();
    while !buf.is_empty() {
        let (number, wire_type) = wire::read_key(buf)?;
        let target = match number {
            MAP_KEY => &mut key,
            MAP_VALUE => &mut value,
            _ => {
                wire::skip_field(buf, number, wire_type, depth)?;
                continue;
            }
        };
        if wire_type != WireType::LengthDelimited {
            return Err(DecodeError::WireTypeMismatch {
                field: number,
                expected: WireType::LengthDelimited,
                actual: wire_type,
            });
        }
        *target = wire::read_string(buf)?;
    }
    Ok((key, value))
}
