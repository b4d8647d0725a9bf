//! Entity actions.

use crate::schema::{FieldKind, FieldMut, FieldRef, FieldSchema, Message, MessageSchema, StringMap};

/// An action an entity offers to its users.
///
/// `kind` is one of `register`, `browser` or `submitMedia`; `url` applies
/// to all three and `image_sources` only to `submitMedia`. `visible` holds
/// a URL to query or the literal `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub kind: String,
    /// Locale-aware.
    pub name: StringMap,
    pub visible: String,
    pub url: String,
    pub image_sources: Vec<ImageSource>,
    pub action_key: String,
}

// Field 6 is not assigned.
pub static ACTION_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadata.Action",
    fields: &[
        FieldSchema {
            number: 1,
            name: "type",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 2,
            name: "name",
            kind: FieldKind::StringMap,
        },
        FieldSchema {
            number: 3,
            name: "visible",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 4,
            name: "url",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 5,
            name: "imageSources",
            kind: FieldKind::RepeatedMessage(&IMAGE_SOURCE_SCHEMA),
        },
        FieldSchema {
            number: 7,
            name: "actionKey",
            kind: FieldKind::String,
        },
    ],
};

impl Message for Action {
    fn schema(&self) -> &'static MessageSchema {
        &ACTION_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        Some(match number {
            1 => FieldRef::Str(&self.kind),
            2 => FieldRef::Map(&self.name),
            3 => FieldRef::Str(&self.visible),
            4 => FieldRef::Str(&self.url),
            5 => FieldRef::Messages(&self.image_sources),
            7 => FieldRef::Str(&self.action_key),
            _ => return None,
        })
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        Some(match number {
            1 => FieldMut::Str(&mut self.kind),
            2 => FieldMut::Map(&mut self.name),
            3 => FieldMut::Str(&mut self.visible),
            4 => FieldMut::Str(&mut self.url),
            5 => FieldMut::Messages(&mut self.image_sources),
            7 => FieldMut::Str(&mut self.action_key),
            _ => return None,
        })
    }
}

/// An image the user is asked to submit (`submitMedia` actions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    pub kind: String,
    pub name: String,
    pub orientation: String,
    pub overlay: String,
    /// Locale-aware.
    pub caption: StringMap,
}

pub static IMAGE_SOURCE_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadata.Action.ImageSource",
    fields: &[
        FieldSchema {
            number: 1,
            name: "type",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 2,
            name: "name",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 3,
            name: "orientation",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 4,
            name: "overlay",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 5,
            name: "caption",
            kind: FieldKind::StringMap,
        },
    ],
};

impl Message for ImageSource {
    fn schema(&self) -> &'static MessageSchema {
        &IMAGE_SOURCE_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        Some(match number {
            1 => FieldRef::Str(&self.kind),
            2 => FieldRef::Str(&self.name),
            3 => FieldRef::Str(&self.orientation),
            4 => FieldRef::Str(&self.overlay),
            5 => FieldRef::Map(&self.caption),
            _ => return None,
        })
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        Some(match number {
            1 => FieldMut::Str(&mut self.kind),
            2 => FieldMut::Str(&mut self.name),
            3 => FieldMut::Str(&mut self.orientation),
            4 => FieldMut::Str(&mut self.overlay),
            5 => FieldMut::Map(&mut self.caption),
            _ => return None,
        })
    }
}
