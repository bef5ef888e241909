//! `TypeRegistry` — the statically-populated tag/type lookup.
//!
//! Replaces "load a class by its textual name": the caller registers, per
//! type tag, the pair of functions that write and read one leaf value of
//! that type. The registry answers both directions: tag to codec for the
//! decoder, and runtime `TypeId` to tag for the encoder. It is immutable once
//! populated, so it can be shared across concurrent calls behind an `Arc`.

use std::any::TypeId;
use std::collections::HashMap;

use crate::error::{MapDecodeError, MapEncodeError};
use crate::item::{ItemBox, MapItem};
use crate::json::{JsonTokenReader, JsonTokenWriter};

type LeafWriteFn =
    Box<dyn Fn(&dyn MapItem, &mut JsonTokenWriter) -> Result<(), MapEncodeError> + Send + Sync>;
type LeafReadFn =
    Box<dyn Fn(&mut JsonTokenReader<'_>) -> Result<ItemBox, MapDecodeError> + Send + Sync>;

/// The encode/decode function pair registered for one type tag.
pub struct LeafCodec {
    write_fn: LeafWriteFn,
    read_fn: LeafReadFn,
}

impl LeafCodec {
    pub(crate) fn write_leaf(
        &self,
        item: &dyn MapItem,
        writer: &mut JsonTokenWriter,
    ) -> Result<(), MapEncodeError> {
        (self.write_fn)(item, writer)
    }

    pub(crate) fn read_leaf(
        &self,
        reader: &mut JsonTokenReader<'_>,
    ) -> Result<ItemBox, MapDecodeError> {
        (self.read_fn)(reader)
    }
}

#[derive(Default)]
pub struct TypeRegistry {
    codecs: HashMap<String, LeafCodec>,
    tags: HashMap<TypeId, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the codec for `T` under `tag`.
    ///
    /// `write` must produce exactly one JSON value node and `read` must
    /// consume exactly one; beyond that the node's shape (string, object,
    /// number, array) is the codec's own business.
    pub fn register<T, W, R>(&mut self, tag: &str, write: W, read: R)
    where
        T: MapItem,
        W: Fn(&T, &mut JsonTokenWriter) -> Result<(), MapEncodeError> + Send + Sync + 'static,
        R: Fn(&mut JsonTokenReader<'_>) -> Result<T, MapDecodeError> + Send + Sync + 'static,
    {
        let owned = tag.to_string();
        let write_fn: LeafWriteFn = {
            let tag = owned.clone();
            Box::new(move |item, writer| match item.as_any().downcast_ref::<T>() {
                Some(concrete) => write(concrete, writer),
                None => Err(MapEncodeError::Leaf(format!(
                    "leaf writer for tag {:?} received a {}",
                    tag,
                    item.type_name()
                ))),
            })
        };
        let read_fn: LeafReadFn =
            Box::new(move |reader| read(reader).map(|value| Box::new(value) as ItemBox));
        self.tags.insert(TypeId::of::<T>(), owned.clone());
        self.codecs.insert(owned, LeafCodec { write_fn, read_fn });
    }

    /// Returns the tag registered for the runtime type of `item`.
    pub fn tag_of(&self, item: &dyn MapItem) -> Result<&str, MapEncodeError> {
        self.tags
            .get(&item.as_any().type_id())
            .map(String::as_str)
            .ok_or_else(|| MapEncodeError::UnregisteredType(item.type_name()))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.codecs.contains_key(tag)
    }

    pub(crate) fn codec(&self, tag: &str) -> Option<&LeafCodec> {
        self.codecs.get(tag)
    }
}
