//! Entity metadata records.

use crate::schema::{FieldKind, FieldMut, FieldRef, FieldSchema, Message, MessageSchema, StringMap};

use super::action::{Action, ACTION_SCHEMA};
use super::reference::{EntityReference, ENTITY_REFERENCE_SCHEMA};

/// Cache container holding any number of metadata records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMetadataStore {
    pub items: Vec<EntityMetadata>,
}

pub static ENTITY_METADATA_STORE_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadataStore",
    fields: &[FieldSchema {
        number: 1,
        name: "items",
        kind: FieldKind::RepeatedMessage(&ENTITY_METADATA_SCHEMA),
    }],
};

impl Message for EntityMetadataStore {
    fn schema(&self) -> &'static MessageSchema {
        &ENTITY_METADATA_STORE_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::Messages(&self.items)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::Messages(&mut self.items)),
            _ => None,
        }
    }
}

/// The metadata an entity publishes about itself.
///
/// `name`, `description` and `news_feed` are locale-aware: keys are language
/// codes. `meta` carries arbitrary key/values so entities can be organized
/// by custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMetadata {
    pub version: String,
    pub languages: Vec<String>,
    pub name: StringMap,
    pub description: StringMap,
    pub voting_processes: Option<VotingProcesses>,
    pub news_feed: StringMap,
    pub media: Option<Media>,
    pub actions: Vec<Action>,
    pub boot_entities: Vec<EntityReference>,
    pub fallback_boot_node_entities: Vec<EntityReference>,
    pub trusted_entities: Vec<EntityReference>,
    pub census_service_managed_entities: Vec<EntityReference>,
    pub meta: StringMap,
}

pub static ENTITY_METADATA_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadata",
    fields: &[
        FieldSchema {
            number: 1,
            name: "version",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 2,
            name: "languages",
            kind: FieldKind::RepeatedString,
        },
        FieldSchema {
            number: 3,
            name: "name",
            kind: FieldKind::StringMap,
        },
        FieldSchema {
            number: 4,
            name: "description",
            kind: FieldKind::StringMap,
        },
        FieldSchema {
            number: 5,
            name: "votingProcesses",
            kind: FieldKind::Message(&VOTING_PROCESSES_SCHEMA),
        },
        FieldSchema {
            number: 6,
            name: "newsFeed",
            kind: FieldKind::StringMap,
        },
        FieldSchema {
            number: 7,
            name: "media",
            kind: FieldKind::Message(&MEDIA_SCHEMA),
        },
        FieldSchema {
            number: 8,
            name: "actions",
            kind: FieldKind::RepeatedMessage(&ACTION_SCHEMA),
        },
        FieldSchema {
            number: 9,
            name: "bootEntities",
            kind: FieldKind::RepeatedMessage(&ENTITY_REFERENCE_SCHEMA),
        },
        FieldSchema {
            number: 10,
            name: "fallbackBootNodeEntities",
            kind: FieldKind::RepeatedMessage(&ENTITY_REFERENCE_SCHEMA),
        },
        FieldSchema {
            number: 11,
            name: "trustedEntities",
            kind: FieldKind::RepeatedMessage(&ENTITY_REFERENCE_SCHEMA),
        },
        FieldSchema {
            number: 12,
            name: "censusServiceManagedEntities",
            kind: FieldKind::RepeatedMessage(&ENTITY_REFERENCE_SCHEMA),
        },
        FieldSchema {
            number: 100,
            name: "meta",
            kind: FieldKind::StringMap,
        },
    ],
};

impl Message for EntityMetadata {
    fn schema(&self) -> &'static MessageSchema {
        &ENTITY_METADATA_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        Some(match number {
            1 => FieldRef::Str(&self.version),
            2 => FieldRef::Strings(&self.languages),
            3 => FieldRef::Map(&self.name),
            4 => FieldRef::Map(&self.description),
            5 => FieldRef::Message(&self.voting_processes),
            6 => FieldRef::Map(&self.news_feed),
            7 => FieldRef::Message(&self.media),
            8 => FieldRef::Messages(&self.actions),
            9 => FieldRef::Messages(&self.boot_entities),
            10 => FieldRef::Messages(&self.fallback_boot_node_entities),
            11 => FieldRef::Messages(&self.trusted_entities),
            12 => FieldRef::Messages(&self.census_service_managed_entities),
            100 => FieldRef::Map(&self.meta),
            _ => return None,
        })
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        Some(match number {
            1 => FieldMut::Str(&mut self.version),
            2 => FieldMut::Strings(&mut self.languages),
            3 => FieldMut::Map(&mut self.name),
            4 => FieldMut::Map(&mut self.description),
            5 => FieldMut::Message(&mut self.voting_processes),
            6 => FieldMut::Map(&mut self.news_feed),
            7 => FieldMut::Message(&mut self.media),
            8 => FieldMut::Messages(&mut self.actions),
            9 => FieldMut::Messages(&mut self.boot_entities),
            10 => FieldMut::Messages(&mut self.fallback_boot_node_entities),
            11 => FieldMut::Messages(&mut self.trusted_entities),
            12 => FieldMut::Messages(&mut self.census_service_managed_entities),
            100 => FieldMut::Map(&mut self.meta),
            _ => return None,
        })
    }
}

/// Identifiers of the entity's voting processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VotingProcesses {
    pub active: Vec<String>,
    pub ended: Vec<String>,
}

pub static VOTING_PROCESSES_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadata.VotingProcesses",
    fields: &[
        FieldSchema {
            number: 1,
            name: "active",
            kind: FieldKind::RepeatedString,
        },
        FieldSchema {
            number: 2,
            name: "ended",
            kind: FieldKind::RepeatedString,
        },
    ],
};

impl Message for VotingProcesses {
    fn schema(&self) -> &'static MessageSchema {
        &VOTING_PROCESSES_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::Strings(&self.active)),
            2 => Some(FieldRef::Strings(&self.ended)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::Strings(&mut self.active)),
            2 => Some(FieldMut::Strings(&mut self.ended)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
    pub avatar: String,
    pub header: String,
}

pub static MEDIA_SCHEMA: MessageSchema = MessageSchema {
    name: "dvote.types.v1.EntityMetadata.Media",
    fields: &[
        FieldSchema {
            number: 1,
            name: "avatar",
            kind: FieldKind::String,
        },
        FieldSchema {
            number: 2,
            name: "header",
            kind: FieldKind::String,
        },
    ],
};

impl Message for Media {
    fn schema(&self) -> &'static MessageSchema {
        &MEDIA_SCHEMA
    }

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::Str(&self.avatar)),
            2 => Some(FieldRef::Str(&self.header)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::Str(&mut self.avatar)),
            2 => Some(FieldMut::Str(&mut self.header)),
            _ => None,
        }
    }
}
