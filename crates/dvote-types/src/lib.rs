//! Protobuf wire and JSON codec for the `dvote.types.v1` entity metadata
//! schema.
//!
//! Record types live in [`metadata`]. Each one describes its fields in a
//! static [`schema::MessageSchema`] table, and the generic routines in
//! [`codec`] interpret those tables:
//!
//! - binary encode/decode in the protobuf wire format ([`wire`])
//! - projection to JSON and permissive parsing from JSON
//! - construction from partial objects
//!
//! # Example
//!
//! ```
//! use dvote_types::metadata::EntityMetadata;
//! use dvote_types::MessageExt;
//!
//! let mut meta = EntityMetadata {
//!     version: "1".into(),
//!     languages: vec!["en".into(), "es".into()],
//!     ..Default::default()
//! };
//! meta.name.insert("en".into(), "ACME".into());
//!
//! let bytes = meta.encode_to_vec();
//! let back = EntityMetadata::decode(&bytes).unwrap();
//! assert_eq!(back, meta);
//!
//! let json = meta.to_json();
//! assert_eq!(json["name"]["en"], "ACME");
//! assert_eq!(EntityMetadata::from_json(&json), meta);
//! ```

pub mod codec;
pub mod metadata;
pub mod schema;
pub mod wire;

pub use codec::{DecodeOptions, EncodeOptions, MessageExt};
pub use schema::{Message, StringMap};
pub use wire::DecodeError;
