//! Pointers to other entities.

use crate::schema::{FieldKind, FieldMut, FieldRef, FieldSchema, Message, MessageSchema};

/// Where the metadata of an entity can be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityReference {
    pub entity_id: String,
    /// Web3 gateways.
    pub entry_points: Vec<String>,
}

pub static ENTITY_REFERENCE_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityReference",
    fields: &[
        FieldSchema {
            number: 1,
            name: "entityId",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 2,
            name: "entryPoints",
            kind: FieldKind::RepeatedString,
        },
    ],
};

impl Message for EntityReference {
    fn schema(&self) -> &'static MessageSchema {
        &ENTITY_REFERENCE_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::Str(&self.entity_id)),
            2 => Some(FieldRef::Strings(&self.entry_points)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::Str(&mut self.entity_id)),
            2 => Some(FieldMut::Strings(&mut self.entry_points)),
            _ => None,
        }
    }
}
