//! Declarative schema tables and the reflection surface the codecs drive.
//!
//! Each record type publishes a static [`MessageSchema`] listing its fields
//! (number, JSON name, kind) and implements [`Message`] to hand out a
//! reference to the storage behind each field number. The binary and JSON
//! codecs are written once against this surface instead of once per type.

use indexmap::IndexMap;

use crate::wire::WireType;

/// A locale-aware or free-form string-to-string map.
///
/// Iteration follows insertion order; equality ignores order.
pub type StringMap = IndexMap<String, String>;

/// How a field is stored and framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Singular string, omitted from the wire when empty.
    String,
    /// Unpacked list of strings, one entry per element.
    RepeatedString,
    /// Map encoded as repeated `(key = 1, value = 2)` entry records.
    StringMap,
    /// Optional nested record.
    Message(&'static MessageSchema),
    /// List of nested records, one entry per element.
    RepeatedMessage(&'static MessageSchema),
}

impl FieldKind {
    /// Wire type every entry of this field is framed with.
    pub fn wire_type(self) -> WireType {
        WireType::LengthDelimited
    }
}

/// One row of a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Wire field number. Fixed for the lifetime of the schema.
    pub number: u32,
    /// lowerCamelCase name used by the JSON projection.
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Schema table of one record type. Fields are listed in ascending
/// field-number order, which is also the encode order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchema {
    /// Fully qualified protobuf name, e.g. `dvote.types.v1.EntityReference`.
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

impl MessageSchema {
    pub fn field(&self, number: u32) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.number == number)
    }
}

/// Shared view of a field's storage.
pub enum FieldRef<'a> {
    Str(&'a str),
    Strings(&'a [String]),
    Map(&'a StringMap),
    Message(&'a dyn MessageSlot),
    Messages(&'a dyn MessageList),
}

/// Mutable view of a field's storage.
pub enum FieldMut<'a> {
    Str(&'a mut String),
    Strings(&'a mut Vec<String>),
    Map(&'a mut StringMap),
    Message(&'a mut dyn MessageSlot),
    Messages(&'a mut dyn MessageList),
}

/// A record type the generic codecs can walk.
///
/// `field` and `field_mut` must answer for every number in [`schema`] with
/// the view matching that field's [`FieldKind`], and return `None` for any
/// other number.
///
/// [`schema`]: Message::schema
pub trait Message: Send + Sync {
    fn schema(&self) -> &'static MessageSchema;
    fn field(&self, number: u32) -> Option<FieldRef<'_>>;
    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>>;
}

/// Storage of an optional nested record.
pub trait MessageSlot {
    fn get(&self) -> Option<&dyn Message>;
    /// Replaces the current value with a fresh default record and returns it.
    fn reset_default(&mut self) -> &mut dyn Message;
}

impl<M: Message + Default> MessageSlot for Option<M> {
    fn get(&self) -> Option<&dyn Message> {
        self.as_ref().map(|m| m as &dyn Message)
    }

    fn reset_default(&mut self) -> &mut dyn Message {
        self.insert(M::default())
    }
}

/// Storage of a repeated nested record.
pub trait MessageList {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&dyn Message>;
    /// Appends a default record and returns it.
    fn push_default(&mut self) -> &mut dyn Message;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: Message + Default> MessageList for Vec<M> {
    fn len(&self) -> usize {
        <[M]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Message> {
        <[M]>::get(self, index).map(|m| m as &dyn Message)
    }

    fn push_default(&mut self) -> &mut dyn Message {
        let index = <[M]>::len(self);
        self.push(M::default());
        &mut self[index]
    }
}

/// Iterates the records of a list in order.
pub fn iter_messages<'a>(list: &'a dyn MessageList) -> impl Iterator<Item = &'a dyn Message> + 'a {
    (0..list.len()).filter_map(move |i| list.get(i))
}
