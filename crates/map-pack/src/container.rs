//! Mapping container flavors.
//!
//! The codec never names a concrete map type: the encoder drains anything
//! implementing [`MapContainer`] and the decoder fills a fresh instance of
//! whichever implementation the caller asks for, with `Default` playing the
//! role of the mapping factory.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::item::ItemBox;

/// Hash-based mapping flavor.
pub type HashMapping = HashMap<Option<ItemBox>, Option<ItemBox>>;

/// Insertion-ordered mapping flavor.
pub type OrderedMapping = IndexMap<Option<ItemBox>, Option<ItemBox>>;

/// A mapping the codec can fill and drain.
///
/// Keys are unique; a key or value of `None` models an entry whose key or
/// value is null.
pub trait MapContainer: Default {
    fn put(&mut self, key: Option<ItemBox>, value: Option<ItemBox>);
    fn pairs(&self) -> Box<dyn Iterator<Item = (&Option<ItemBox>, &Option<ItemBox>)> + '_>;
    fn size(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl MapContainer for HashMapping {
    fn put(&mut self, key: Option<ItemBox>, value: Option<ItemBox>) {
        self.insert(key, value);
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&Option<ItemBox>, &Option<ItemBox>)> + '_> {
        Box::new(self.iter())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl MapContainer for OrderedMapping {
    fn put(&mut self, key: Option<ItemBox>, value: Option<ItemBox>) {
        self.insert(key, value);
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&Option<ItemBox>, &Option<ItemBox>)> + '_> {
        Box::new(self.iter())
    }

    fn size(&self) -> usize {
        self.len()
    }
}
