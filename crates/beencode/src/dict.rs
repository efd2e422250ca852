//! Dictionary node.

use std::collections::btree_map::{self, BTreeMap};

use crate::byte_string::ByteString;
use crate::node::Node;

/// A mapping from byte string keys to nodes.
///
/// Keys are unique. Entries are kept sorted by raw key bytes, so iteration
/// and encoding always follow the canonical order no matter in which order
/// keys were inserted.
///
/// # Examples
///
/// ```
/// use beencode::{Dict, Node};
///
/// let mut dict = Dict::new();
/// dict.put("spam", "eggs");
/// dict.put("cow", "moo");
///
/// assert_eq!(dict.get(b"cow").and_then(Node::as_str), Some("moo"));
/// assert_eq!(Node::from(dict).encode(), b"d3:cow3:moo4:spam4:eggse");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict(BTreeMap<ByteString, Node>);

impl Dict {
    pub fn new() -> Self {
        Dict(BTreeMap::new())
    }

    /// Associates `value` with `key`, returning the value previously stored
    /// under that key.
    pub fn put(&mut self, key: impl Into<ByteString>, value: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), value.into())
    }

    /// Alias of [`put`](Dict::put).
    pub fn insert(&mut self, key: impl Into<ByteString>, value: impl Into<Node>) -> Option<Node> {
        self.put(key, value)
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Node> {
        self.0.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Node> {
        self.0.get_mut(key.as_ref())
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &Node) -> bool {
        self.0.values().any(|v| v == value)
    }

    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Node> {
        self.0.remove(key.as_ref())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in ascending raw key order.
    pub fn iter(&self) -> btree_map::Iter<'_, ByteString, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, ByteString, Node> {
        self.0.iter_mut()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, ByteString, Node> {
        self.0.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, ByteString, Node> {
        self.0.values()
    }

    pub fn into_map(self) -> BTreeMap<ByteString, Node> {
        self.0
    }
}

impl From<BTreeMap<ByteString, Node>> for Dict {
    fn from(map: BTreeMap<ByteString, Node>) -> Self {
        Dict(map)
    }
}

impl<K: Into<ByteString>, V: Into<Node>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dict(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<ByteString>, V: Into<Node>> Extend<(K, V)> for Dict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Dict {
    type Item = (ByteString, Node);
    type IntoIter = btree_map::IntoIter<ByteString, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a ByteString, &'a Node);
    type IntoIter = btree_map::Iter<'a, ByteString, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
