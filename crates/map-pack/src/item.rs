//! Runtime value model for mapping entries.
//!
//! Keys and values of a mapping may be instances of different Rust types, so
//! entries hold boxed [`MapItem`] trait objects. The trait bridges the
//! dynamic world back to the concrete one: `as_any` for downcasting,
//! `dyn_eq`/`dyn_hash` so trait objects can key a hash map, and the runtime
//! type name for diagnostics. Every `T: Any + Debug + Eq + Hash` is a
//! `MapItem` automatically.

use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

pub trait MapItem: Any + Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn MapItem) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Debug + Eq + Hash> MapItem for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn MapItem) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        // Items of different types never compare equal; hashing the type id
        // keeps them from colliding systematically.
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl PartialEq for dyn MapItem {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Eq for dyn MapItem {}

impl Hash for dyn MapItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state);
    }
}

/// A boxed key or value.
pub type ItemBox = Box<dyn MapItem>;

/// Boxes a value for insertion into a mapping.
pub fn item<T: MapItem>(value: T) -> ItemBox {
    Box::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_is_type_and_value_aware() {
        let a = item(String::from("x"));
        let b = item(String::from("x"));
        let c = item(String::from("y"));
        let d = item(7_i64);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn items_key_a_hash_map() {
        let mut map: HashMap<ItemBox, i32> = HashMap::new();
        map.insert(item(String::from("x")), 1);
        map.insert(item(7_i64), 2);
        assert_eq!(map.get(&item(String::from("x"))), Some(&1));
        assert_eq!(map.get(&item(7_i64)), Some(&2));
        assert_eq!(map.get(&item(8_i64)), None);
    }

    #[test]
    fn type_name_names_the_concrete_type() {
        let a = item(7_i64);
        assert_eq!(a.as_ref().type_name(), "i64");
    }
}
