//! Property tests: binary and JSON round trips over arbitrary records.

use dvote_types::metadata::{
    Action, EntityMetadata, EntityMetadataStore, EntityReference, ImageSource, Media,
    VotingProcesses,
};
use dvote_types::{EncodeOptions, MessageExt, StringMap};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z0-9:/.]{1,8}", ".{0,6}"]
}

fn string_map() -> impl Strategy<Value = StringMap> {
    vec((text(), text()), 0..4).prop_map(|entries| entries.into_iter().collect())
}

fn reference() -> impl Strategy<Value = EntityReference> {
    (text(), vec(text(), 0..3)).prop_map(|(entity_id, entry_points)| EntityReference {
        entity_id,
        entry_points,
    })
}

fn image_source() -> impl Strategy<Value = ImageSource> {
    (text(), text(), text(), text(), string_map()).prop_map(
        |(kind, name, orientation, overlay, caption)| ImageSource {
            kind,
            name,
            orientation,
            overlay,
            caption,
        },
    )
}

fn action() -> impl Strategy<Value = Action> {
    (
        text(),
        string_map(),
        text(),
        text(),
        vec(image_source(), 0..2),
        text(),
    )
        .prop_map(|(kind, name, visible, url, image_sources, action_key)| Action {
            kind,
            name,
            visible,
            url,
            image_sources,
            action_key,
        })
}

fn entity_metadata() -> impl Strategy<Value = EntityMetadata> {
    let own = (
        text(),
        vec(text(), 0..3),
        string_map(),
        string_map(),
        option::of((vec(text(), 0..3), vec(text(), 0..3))),
        string_map(),
        option::of((text(), text())),
    );
    let linked = (
        vec(action(), 0..2),
        vec(reference(), 0..2),
        vec(reference(), 0..2),
        vec(reference(), 0..2),
        vec(reference(), 0..2),
        string_map(),
    );
    (own, linked).prop_map(
        |(
            (version, languages, name, description, voting, news_feed, media),
            (actions, boot, fallback, trusted, census, meta),
        )| EntityMetadata {
            version,
            languages,
            name,
            description,
            voting_processes: voting.map(|(active, ended)| VotingProcesses { active, ended }),
            news_feed,
            media: media.map(|(avatar, header)| Media { avatar, header }),
            actions,
            boot_entities: boot,
            fallback_boot_node_entities: fallback,
            trusted_entities: trusted,
            census_service_managed_entities: census,
            meta,
        },
    )
}

proptest! {
    #[test]
    fn binary_roundtrip(meta in entity_metadata()) {
        let bytes = meta.encode_to_vec();
        prop_assert_eq!(bytes.len(), meta.encoded_len());
        prop_assert_eq!(EntityMetadata::decode(&bytes).unwrap(), meta);
    }

    #[test]
    fn canonical_roundtrip(meta in entity_metadata()) {
        let bytes = meta.encode_with(&EncodeOptions::canonical());
        prop_assert_eq!(bytes.len(), meta.encoded_len());
        prop_assert_eq!(EntityMetadata::decode(&bytes).unwrap(), meta);
    }

    #[test]
    fn json_roundtrip(meta in entity_metadata()) {
        prop_assert_eq!(EntityMetadata::from_json(&meta.to_json()), meta);
    }

    #[test]
    fn partial_of_projection_is_identity(meta in entity_metadata()) {
        prop_assert_eq!(EntityMetadata::from_partial(&meta.to_json()), meta);
    }

    #[test]
    fn store_roundtrip(items in vec(entity_metadata(), 0..3)) {
        let store = EntityMetadataStore { items };
        prop_assert_eq!(EntityMetadataStore::decode(&store.encode_to_vec()).unwrap(), store);
    }

    #[test]
    fn unknown_field_does_not_change_result(meta in entity_metadata(), payload in vec(any::<u8>(), 0..8)) {
        let known = meta.encode_to_vec();
        // Field 99, length-delimited: key varint 0x9a 0x06.
        let mut with_unknown = vec![0x9a, 0x06, payload.len() as u8];
        with_unknown.extend_from_slice(&payload);
        with_unknown.extend_from_slice(&known);
        prop_assert_eq!(
            EntityMetadata::decode(&with_unknown).unwrap(),
            EntityMetadata::decode(&known).unwrap()
        );
    }

    #[test]
    fn decode_never_panics(bytes in vec(any::<u8>(), 0..64)) {
        let _ = EntityMetadata::decode(&bytes);
    }
}
