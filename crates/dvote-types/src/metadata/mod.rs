//! Record types of the `dvote.types.v1` entity metadata schema.

mod action;
mod entity;
mod reference;

pub use action::{Action, ImageSource, ACTION_SCHEMA, IMAGE_SOURCE_SCHEMA};
pub use entity::{
    EntityMetadata, EntityMetadataStore, Media, VotingProcesses, ENTITY_METADATA_SCHEMA,
    ENTITY_METADATA_STORE_SCHEMA, MEDIA_SCHEMA, VOTING_PROCESSES_SCHEMA,
};
pub use reference::{EntityReference, ENTITY_REFERENCE_SCHEMA};

/// Protobuf package every record of this module belongs to.
pub const PROTOBUF_PACKAGE: &str = "dvote.types.v1";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldMut, FieldRef, Message};

    fn records() -> Vec<Box<dyn Message>> {
        vec![
            Box::new(EntityMetadataStore::default()),
            Box::new(EntityMetadata::default()),
            Box::new(VotingProcesses::default()),
            Box::new(Media::default()),
            Box::new(Action::default()),
            Box::new(ImageSource::default()),
            Box::new(EntityReference::default()),
        ]
    }

    fn kind_matches_ref(kind: FieldKind, value: &FieldRef<'_>) -> bool {
        matches!(
            (kind, value),
            (FieldKind::String, FieldRef::Str(_))
                | (FieldKind::RepeatedString, FieldRef::Strings(_))
                | (FieldKind::StringMap, FieldRef::Map(_))
                | (FieldKind::Message(_), FieldRef::Message(_))
                | (FieldKind::RepeatedMessage(_), FieldRef::Messages(_))
        )
    }

    fn kind_matches_mut(kind: FieldKind, value: &FieldMut<'_>) -> bool {
        matches!(
            (kind, value),
            (FieldKind::String, FieldMut::Str(_))
                | (FieldKind::RepeatedString, FieldMut::Strings(_))
                | (FieldKind::StringMap, FieldMut::Map(_))
                | (FieldKind::Message(_), FieldMut::Message(_))
                | (FieldKind::RepeatedMessage(_), FieldMut::Messages(_))
        )
    }

    #[test]
    fn schema_tables_are_sorted_and_unique() {
        for record in records() {
            let schema = record.schema();
            assert!(schema.name.starts_with(PROTOBUF_PACKAGE), "{}", schema.name);
            for pair in schema.fields.windows(2) {
                assert!(
                    pair[0].number < pair[1].number,
                    "{}: {} before {}",
                    schema.name,
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn every_schema_field_has_matching_storage() {
        for mut record in records() {
            let schema = record.schema();
            for field in schema.fields {
                let value = record.field(field.number).expect(field.name);
                assert!(kind_matches_ref(field.kind, &value), "{}.{}", schema.name, field.name);
                let value = record.field_mut(field.number).expect(field.name);
                assert!(kind_matches_mut(field.kind, &value), "{}.{}", schema.name, field.name);
            }
            assert!(record.field(0).is_none());
            assert!(record.field_mut(99).is_none());
        }
    }

    #[test]
    fn nested_kinds_point_at_the_right_tables() {
        let media = ENTITY_METADATA_SCHEMA.field(7).unwrap();
        assert_eq!(media.name, "media");
        assert_eq!(media.kind, FieldKind::Message(&MEDIA_SCHEMA));
        let items = ENTITY_METADATA_STORE_SCHEMA.field(1).unwrap();
        assert_eq!(items.kind, FieldKind::RepeatedMessage(&ENTITY_METADATA_SCHEMA));
        let sources = ACTION_SCHEMA.field(5).unwrap();
        assert_eq!(sources.kind, FieldKind::RepeatedMessage(&IMAGE_SOURCE_SCHEMA));
        assert_eq!(ACTION_SCHEMA.field(7).unwrap().kind, FieldKind::String);
        assert!(ACTION_SCHEMA.field(6).is_none());
    }
}
