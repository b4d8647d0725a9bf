//! JSON projection of records.

use serde_json::{Map, Value};

use crate::schema::{iter_messages, FieldMut, FieldRef, Message};

use super::coerce::coerce_to_string;

/// Projects a record onto a JSON object keyed by the schema field names.
///
/// Scalars are always present (empty strings included) and lists and maps
/// are always present (as `[]` / `{}` when empty). An absent nested record
/// has no key at all.
pub fn to_json(msg: &dyn Message) -> Value {
    let mut obj = Map::new();
    for field in msg.schema().fields {
        let Some(value) = msg.field(field.number) else {
            continue;
        };
        let json = match value {
            FieldRef::Str(s) => Value::String(s.to_owned()),
            FieldRef::Strings(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldRef::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
            FieldRef::Message(slot) => match slot.get() {
                Some(m) => to_json(m),
                None => continue,
            },
            FieldRef::Messages(list) => Value::Array(iter_messages(list).map(to_json).collect()),
        };
        obj.insert(field.name.to_owned(), json);
    }
    Value::Object(obj)
}

/// How string values are taken from the input tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conversion {
    /// Stringify anything (see [`coerce_to_string`]).
    Coerce,
    /// Accept only JSON strings; anything else counts as absent.
    Exact,
}

impl Conversion {
    fn string(self, value: &Value) -> Option<String> {
        match self {
            Conversion::Coerce => Some(coerce_to_string(value)),
            Conversion::Exact => value.as_str().map(str::to_owned),
        }
    }

    /// Whether `value` fills an optional record slot. The permissive parser
    /// turns any value into a default record; exact input must be an object.
    fn accepts_record(self, value: &Value) -> bool {
        match self {
            Conversion::Coerce => true,
            Conversion::Exact => value.is_object(),
        }
    }
}

/// Fills a default record from a JSON object.
///
/// Missing and `null` fields keep their defaults. A non-object input leaves
/// the record untouched; a non-array list or non-object map stays empty.
/// Under [`Conversion::Exact`] a non-object nested record stays unset.
pub(crate) fn merge_json(msg: &mut dyn Message, value: &Value, conversion: Conversion) {
    let Some(obj) = value.as_object() else {
        return;
    };
    let schema = msg.schema();
    for field in schema.fields {
        let Some(input) = obj.get(field.name).filter(|v| !v.is_null()) else {
            continue;
        };
        let Some(target) = msg.field_mut(field.number) else {
            continue;
        };
        match target {
            FieldMut::Str(s) => {
                if let Some(v) = conversion.string(input) {
                    *s = v;
                }
            }
            FieldMut::Strings(items) => {
                if let Some(array) = input.as_array() {
                    items.extend(array.iter().filter_map(|e| conversion.string(e)));
                }
            }
            FieldMut::Map(map) => {
                if let Some(entries) = input.as_object() {
                    for (k, v) in entries {
                        if let Some(v) = conversion.string(v) {
                            map.insert(k.clone(), v);
                        }
                    }
                }
            }
            FieldMut::Message(slot) => {
                if conversion.accepts_record(input) {
                    merge_json(slot.reset_default(), input, conversion);
                }
            }
            FieldMut::Messages(list) => {
                if let Some(array) = input.as_array() {
                    for element in array.iter().filter(|e| conversion.accepts_record(e)) {
                        merge_json(list.push_default(), element, conversion);
                    }
                }
            }
        }
    }
}

/// Parses loosely typed JSON into a fresh record.
///
/// Every field defaults independently when missing or `null`, and every
/// string slot accepts any JSON value through [`coerce_to_string`]. This
/// never fails.
pub fn from_json<M: Message + Default>(value: &Value) -> M {
    let mut msg = M::default();
    merge_json(&mut msg, value, Conversion::Coerce);
    msg
}
