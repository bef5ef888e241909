//! Tagged JSON codec for maps with mixed key and value types.
//!
//! Most JSON map serializers assume string keys and one value type. This
//! crate serializes mappings whose keys and values are arbitrary registered
//! types: the document header records the *main* (most frequent) key and
//! value types once, and only entries that deviate from the bulk carry their
//! own type tag. A forward-only automaton decodes the result in one pass.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use map_pack::iri::{read_iri, write_iri, Iri};
//! use map_pack::{item, HashMapping, MapDecoder, MapEncoder, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Iri, _, _>("iri", write_iri, read_iri);
//! let registry = Arc::new(registry);
//!
//! let mut map = HashMapping::default();
//! map.insert(
//!     Some(item(Iri::new("http://example.org/color"))),
//!     Some(item(Iri::new("http://example.org/green"))),
//! );
//!
//! let bytes = MapEncoder::new(registry.clone()).encode(&map).unwrap();
//! let decoded: HashMapping = MapDecoder::new(registry).decode(&bytes).unwrap();
//! assert_eq!(decoded.len(), 1);
//! ```

pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod iri;
pub mod item;
pub mod json;
mod main_class;
pub mod registry;

pub use container::{HashMapping, MapContainer, OrderedMapping};
pub use decoder::MapDecoder;
pub use encoder::{
    MapEncoder, ELEMENTS_FIELD, KEY_FIELD, KEY_TYPE_FIELD, VALUE_FIELD, VALUE_TYPE_FIELD,
};
pub use error::{MapDecodeError, MapEncodeError};
pub use item::{item, ItemBox, MapItem};
pub use registry::{LeafCodec, TypeRegistry};
