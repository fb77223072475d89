//! Type definitions for VDF values.

use foldhash::fast::RandomState;
use indexmap::IndexMap;

use super::string::VdfStr;

/// A key in VDF - zero-copy when possible
pub type Key<'a> = VdfStr<'a>;

/// VDF Value - a nested map, a byte string, or a 32-bit number.
///
/// This is the closed set of value kinds the binary format can carry; the
/// encoder matches on the variant to pick the wire tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// A nested map of key-value pairs (binary tag 0x00)
    Map(Entries<'a>),
    /// A NUL-free byte string (binary tag 0x01)
    Str(VdfStr<'a>),
    /// An unsigned 32-bit integer, little-endian on the wire (binary tag 0x02)
    Number(u32),
}

impl<'a> Value<'a> {
    /// Returns `true` if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if this value is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns a reference to the map if this is a map.
    pub fn as_map(&self) -> Option<&Entries<'a>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a mutable reference to the map if this is a map.
    pub fn as_map_mut(&mut self) -> Option<&mut Entries<'a>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string if this is a string.
    pub fn as_vdf_str(&self) -> Option<&VdfStr<'a>> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw bytes if this is a string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_vdf_str().map(VdfStr::as_bytes)
    }

    /// Returns the string as `&str` if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_vdf_str()?.as_str()
    }

    /// Returns the number if this is a number.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to a nested value by key.
    ///
    /// Shorthand for `self.as_map()?.get(key)`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value<'a>> {
        self.as_map()?.get(key)
    }

    /// Traverse nested maps by path.
    ///
    /// Returns `None` if any segment doesn't exist or isn't a map.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value<'a>> {
        let mut current = self;
        for key in path {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Get a UTF-8 string at the given path.
    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        self.get_path(path)?.as_str()
    }

    /// Get a map at the given path.
    pub fn get_map(&self, path: &[&str]) -> Option<&Entries<'a>> {
        self.get_path(path)?.as_map()
    }

    /// Get a number at the given path.
    pub fn get_number(&self, path: &[&str]) -> Option<u32> {
        self.get_path(path)?.as_number()
    }

    /// Convert to an owned version (with 'static lifetime).
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Map(map) => Value::Map(map.into_owned()),
            Value::Str(s) => Value::Str(s.into_owned()),
            Value::Number(n) => Value::Number(n),
        }
    }
}

/// Entries - the contents of one VDF map.
///
/// Keys are unique; inserting an existing key replaces its value and keeps
/// its original position. Iteration follows insertion order, but equality
/// ignores order: two maps are equal when they hold the same pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entries<'a> {
    pub(crate) inner: IndexMap<Key<'a>, Value<'a>, RandomState>,
}

impl<'a> Entries<'a> {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity_and_hasher(capacity, RandomState::default()),
        }
    }

    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value<'a>> {
        self.inner.get(key.as_ref())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value<'a>> {
        self.inner.get_mut(key.as_ref())
    }

    /// Returns `true` if the map contains the given key.
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.contains_key(key.as_ref())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Returns the previous value if one existed for this key.
    pub fn insert(
        &mut self,
        key: impl Into<Key<'a>>,
        value: impl Into<Value<'a>>,
    ) -> Option<Value<'a>> {
        self.inner.insert(key.into(), value.into())
    }

    /// Removes a key from the map, keeping the order of the others.
    ///
    /// Returns the value if the key was present.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Value<'a>> {
        self.inner.shift_remove(key.as_ref())
    }

    /// Returns an iterator over the key-value pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key<'a>, Value<'a>> {
        self.inner.iter()
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &Key<'a>> {
        self.inner.keys()
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &Value<'a>> {
        self.inner.values()
    }

    /// Convert to an owned version (with 'static lifetime).
    pub fn into_owned(self) -> Entries<'static> {
        let mut owned = Entries::with_capacity(self.len());
        for (key, value) in self.inner {
            owned.inner.insert(key.into_owned(), value.into_owned());
        }
        owned
    }
}
