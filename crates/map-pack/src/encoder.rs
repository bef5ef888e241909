//! `MapEncoder` — serializes a mapping into the tagged document form.
//!
//! A mapping with entries `[key1 -> value1, key2 -> value2]` serializes as:
//!
//! ```text
//! { "a": "main key tag",
//!   "b": "main value tag",
//!   "c": [{
//!     "k": <key1 leaf>,
//!     "v": <value1 leaf>
//!   },{
//!     "k": <key2 leaf>,
//!     "v": <value2 leaf>
//!   }]
//! }
//! ```
//!
//! The main tags are the most frequent key and value types in the mapping.
//! An entry whose key or value type deviates from the main tag carries that
//! tag inline, before its leaf:
//!
//! ```text
//! {
//!   "a": <key tag, only if it differs from the main key tag>,
//!   "b": <value tag, only if it differs from the main value tag>,
//!   "k": <key leaf>,
//!   "v": <value leaf>
//! }
//! ```
//!
//! A null key or value is written as the JSON null literal and never carries
//! a tag, since null has no runtime type. An empty mapping is `{}`.

use std::sync::Arc;

use crate::container::MapContainer;
use crate::error::MapEncodeError;
use crate::item::MapItem;
use crate::json::JsonTokenWriter;
use crate::main_class::main_class;
use crate::registry::TypeRegistry;

pub const KEY_FIELD: &str = "k";
pub const VALUE_FIELD: &str = "v";
pub const KEY_TYPE_FIELD: &str = "a";
pub const VALUE_TYPE_FIELD: &str = "b";
pub const ELEMENTS_FIELD: &str = "c";

pub struct MapEncoder {
    registry: Arc<TypeRegistry>,
    writer: JsonTokenWriter,
}

impl MapEncoder {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            writer: JsonTokenWriter::new(),
        }
    }

    /// Encodes `map` into one tagged document.
    ///
    /// The mapping is snapshotted before anything is written: main tags need
    /// the full type census, and both passes must see the same entry order.
    pub fn encode<M: MapContainer>(&mut self, map: &M) -> Result<Vec<u8>, MapEncodeError> {
        self.writer.reset();
        self.writer.start_object();
        if map.is_empty() {
            self.writer.end_object();
            return Ok(self.writer.flush());
        }

        let registry = self.registry.clone();
        let pairs: Vec<_> = map.pairs().collect();
        let mut key_tags: Vec<Option<&str>> = Vec::with_capacity(pairs.len());
        let mut value_tags: Vec<Option<&str>> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs.iter().copied() {
            key_tags.push(match key {
                Some(item) => Some(registry.tag_of(item.as_ref())?),
                None => None,
            });
            value_tags.push(match value {
                Some(item) => Some(registry.tag_of(item.as_ref())?),
                None => None,
            });
        }
        // Nulls carry no runtime type and stay out of the census.
        let main_key = main_class(key_tags.iter().flatten().copied());
        let main_value = main_class(value_tags.iter().flatten().copied());

        if let Some(tag) = main_key {
            self.writer.field(KEY_TYPE_FIELD);
            self.writer.write_str(tag);
        }
        if let Some(tag) = main_value {
            self.writer.field(VALUE_TYPE_FIELD);
            self.writer.write_str(tag);
        }
        self.writer.field(ELEMENTS_FIELD);
        self.writer.start_array();
        for (index, (key, value)) in pairs.iter().copied().enumerate() {
            self.write_element(
                &registry,
                key.as_deref(),
                key_tags[index],
                main_key,
                value.as_deref(),
                value_tags[index],
                main_value,
            )?;
        }
        self.writer.end_array();
        self.writer.end_object();
        Ok(self.writer.flush())
    }

    #[allow(clippy::too_many_arguments)]
    fn write_element(
        &mut self,
        registry: &TypeRegistry,
        key: Option<&dyn MapItem>,
        key_tag: Option<&str>,
        main_key: Option<&str>,
        value: Option<&dyn MapItem>,
        value_tag: Option<&str>,
        main_value: Option<&str>,
    ) -> Result<(), MapEncodeError> {
        self.writer.start_object();
        if let Some(tag) = key_tag {
            if main_key != Some(tag) {
                self.writer.field(KEY_TYPE_FIELD);
                self.writer.write_str(tag);
            }
        }
        if let Some(tag) = value_tag {
            if main_value != Some(tag) {
                self.writer.field(VALUE_TYPE_FIELD);
                self.writer.write_str(tag);
            }
        }
        self.writer.field(KEY_FIELD);
        self.write_leaf(registry, key, key_tag)?;
        self.writer.field(VALUE_FIELD);
        self.write_leaf(registry, value, value_tag)?;
        self.writer.end_object();
        Ok(())
    }

    fn write_leaf(
        &mut self,
        registry: &TypeRegistry,
        item: Option<&dyn MapItem>,
        tag: Option<&str>,
    ) -> Result<(), MapEncodeError> {
        match (item, tag) {
            (Some(item), Some(tag)) => match registry.codec(tag) {
                Some(codec) => codec.write_leaf(item, &mut self.writer),
                None => Err(MapEncodeError::UnregisteredType(item.type_name())),
            },
            _ => {
                self.writer.write_null();
                Ok(())
            }
        }
    }
}
