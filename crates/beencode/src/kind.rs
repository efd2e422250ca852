//! Tag bytes and dispatch from a leading byte to a node kind.

use std::fmt;

pub const DICT_PREFIX: u8 = b'd';
pub const INTEGER_PREFIX: u8 = b'i';
pub const LIST_PREFIX: u8 = b'l';
/// Terminates integers, lists and dictionaries.
pub const SUFFIX: u8 = b'e';
/// Separates a byte string's length from its payload.
pub const SEPARATOR: u8 = b':';

/// The four kinds of bencode node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Bytes,
    Integer,
    List,
    Dict,
}

impl NodeKind {
    /// Maps the first byte of an encoded node to its kind.
    ///
    /// A digit selects [`NodeKind::Bytes`]; that digit is the first digit of
    /// the length prefix. Any byte outside `d`, `i`, `l`, `0`-`9` yields
    /// `None`.
    ///
    /// ```
    /// use beencode::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_tag(b'd'), Some(NodeKind::Dict));
    /// assert_eq!(NodeKind::from_tag(b'7'), Some(NodeKind::Bytes));
    /// assert_eq!(NodeKind::from_tag(b'x'), None);
    /// ```
    pub fn from_tag(tag: u8) -> Option<NodeKind> {
        match tag {
            DICT_PREFIX => Some(NodeKind::Dict),
            INTEGER_PREFIX => Some(NodeKind::Integer),
            LIST_PREFIX => Some(NodeKind::List),
            b'0'..=b'9' => Some(NodeKind::Bytes),
            _ => None,
        }
    }

    /// The tag byte that starts an encoded node of this kind, or `None` for
    /// byte strings, which start with their length.
    pub fn prefix(self) -> Option<u8> {
        match self {
            NodeKind::Bytes => None,
            NodeKind::Integer => Some(INTEGER_PREFIX),
            NodeKind::List => Some(LIST_PREFIX),
            NodeKind::Dict => Some(DICT_PREFIX),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Bytes => "byte string",
            NodeKind::Integer => "integer",
            NodeKind::List => "list",
            NodeKind::Dict => "dictionary",
        })
    }
}
