//! The bencode node tree.

use std::io::Write;

use crate::byte_string::ByteString;
use crate::dict::Dict;
use crate::encoder::BencodeEncoder;
use crate::error::BencodeError;
use crate::kind::NodeKind;
use crate::list::List;

/// A bencode value.
///
/// Every container exclusively owns its children, so a `Node` is always a
/// tree. `Clone` makes a deep copy and `==` compares structurally.
///
/// # Examples
///
/// ```
/// use beencode::{Dict, List, Node};
///
/// let int: Node = 1337.into();
/// let text: Node = "spam".into();
/// let list: Node = List::from_iter(["spam", "eggs"]).into();
///
/// assert_eq!(int.as_integer(), Some(1337));
/// assert_eq!(text.as_str(), Some("spam"));
/// assert_eq!(list.encode(), b"l4:spam4:eggse");
///
/// let mut dict = Dict::new();
/// dict.put("spam", list);
/// let root = Node::from(dict);
/// assert_eq!(root.get(b"spam").and_then(Node::as_list).map(List::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A binary-safe byte string.
    Bytes(ByteString),
    /// A signed 64-bit integer.
    Integer(i64),
    /// An ordered list of nodes.
    List(List),
    /// A dictionary keyed by byte strings.
    Dict(Dict),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Bytes(_) => NodeKind::Bytes,
            Node::Integer(_) => NodeKind::Integer,
            Node::List(_) => NodeKind::List,
            Node::Dict(_) => NodeKind::Dict,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Node::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_byte_string(&self) -> Option<&ByteString> {
        match self {
            Node::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_byte_string().map(ByteString::as_bytes)
    }

    /// Returns the byte string as `&str`, if this is a byte string holding
    /// valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_byte_string()?.as_str()
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Node::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<List> {
        match self {
            Node::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Node::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Node::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_dict(self) -> Option<Dict> {
        match self {
            Node::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up `key` if this node is a dictionary.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Node> {
        self.as_dict()?.get(key)
    }

    /// Returns the canonical encoding of this node.
    pub fn encode(&self) -> Vec<u8> {
        BencodeEncoder::new().encode(self)
    }

    /// Writes the canonical encoding of this node to `sink`.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), BencodeError> {
        BencodeEncoder::new().encode_to(self, sink)
    }
}

impl From<ByteString> for Node {
    fn from(b: ByteString) -> Self {
        Node::Bytes(b)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Bytes(s.into())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Bytes(s.into())
    }
}

impl From<&[u8]> for Node {
    fn from(b: &[u8]) -> Self {
        Node::Bytes(b.into())
    }
}

impl<const N: usize> From<&[u8; N]> for Node {
    fn from(b: &[u8; N]) -> Self {
        Node::Bytes(b.into())
    }
}

impl From<Vec<u8>> for Node {
    fn from(b: Vec<u8>) -> Self {
        Node::Bytes(b.into())
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Integer(i)
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Integer(i.into())
    }
}

impl From<u32> for Node {
    fn from(i: u32) -> Self {
        Node::Integer(i.into())
    }
}

impl From<List> for Node {
    fn from(l: List) -> Self {
        Node::List(l)
    }
}

impl From<Vec<Node>> for Node {
    fn from(l: Vec<Node>) -> Self {
        Node::List(l.into())
    }
}

impl From<Dict> for Node {
    fn from(d: Dict) -> Self {
        Node::Dict(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let value = Node::Integer(42);
        assert_eq!(value.as_integer(), Some(42));
        assert!(value.as_bytes().is_none());
        assert_eq!(value.kind(), NodeKind::Integer);

        let value = Node::from("test");
        assert_eq!(value.as_str(), Some("test"));
        assert!(value.as_integer().is_none());
        assert_eq!(value.kind(), NodeKind::Bytes);

        let value = Node::from(List::new());
        assert!(value.as_list().is_some());
        assert!(value.as_dict().is_none());

        let value = Node::from(vec![0xffu8, 0xfe]);
        assert_eq!(value.as_bytes(), Some(&[0xffu8, 0xfe][..]));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn get_only_on_dicts() {
        let mut dict = Dict::new();
        dict.put("cow", "moo");
        let node = Node::from(dict);
        assert_eq!(node.get("cow").and_then(Node::as_str), Some("moo"));
        assert_eq!(node.get("missing"), None);
        assert_eq!(Node::Integer(1).get("cow"), None);
    }

    #[test]
    fn mutate_through_accessors() {
        let mut node = Node::from(Dict::new());
        if let Some(d) = node.as_dict_mut() {
            d.put("list", List::new());
        }
        if let Some(l) = node.as_dict_mut().and_then(|d| d.get_mut("list")).and_then(Node::as_list_mut) {
            l.push(1);
        }
        assert_eq!(node.encode(), b"d4:listli1eee");
    }

    #[test]
    fn structural_equality_across_kinds() {
        assert_ne!(Node::from("1"), Node::Integer(1));
        assert_eq!(Node::from(vec![Node::Integer(1)]), Node::from(List::from_iter([1])));
    }
}
