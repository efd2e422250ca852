//! Bencode codec: byte strings, integers, lists and dictionaries.
//!
//! Decoding is strict. Leading zeros, `-0`, non-string dictionary keys,
//! truncated payloads and unknown tag bytes are rejected with a
//! [`BencodeError`] that carries the offending offset. Encoding is canonical:
//! dictionary keys are written in ascending raw byte order, so
//! `encode(&decode(x)?)` reproduces any canonical input byte for byte.
//!
//! # Example
//!
//! ```
//! use beencode::{decode, encode, Dict, Node};
//!
//! let mut dict = Dict::new();
//! dict.put("spam", "eggs");
//! dict.put("cow", "moo");
//! let bytes = encode(&Node::from(dict));
//! assert_eq!(bytes, b"d3:cow3:moo4:spam4:eggse");
//!
//! let node = decode(&bytes).unwrap();
//! assert_eq!(node.get("cow").and_then(Node::as_str), Some("moo"));
//! ```
//!
//! Reading from a stream consumes exactly one node:
//!
//! ```
//! use std::io::{Cursor, Read};
//!
//! let mut input = Cursor::new(b"i42erest".to_vec());
//! let node = beencode::decode_reader(&mut input).unwrap();
//! assert_eq!(node.as_integer(), Some(42));
//!
//! let mut rest = String::new();
//! input.read_to_string(&mut rest).unwrap();
//! assert_eq!(rest, "rest");
//! ```

mod byte_string;
mod decoder;
mod dict;
mod encoder;
mod error;
mod json;
mod list;
mod node;
mod pretty;
mod source;

pub mod kind;

use std::io::{Read, Write};

pub use byte_string::{ByteString, TextEncoding, TextError};
pub use decoder::{
    BencodeDecoder, DecoderOptions, DuplicateKeys, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STRING_LENGTH,
};
pub use dict::Dict;
pub use encoder::BencodeEncoder;
pub use error::BencodeError;
pub use json::{to_data_uri, JsonConversionError};
pub use kind::NodeKind;
pub use list::List;
pub use node::Node;
pub use source::ByteSource;

/// Decodes the node at the start of `input` with default options.
///
/// Bytes after the node are ignored; use [`decode_exact`] to reject them.
/// Containers nested more than [`DEFAULT_MAX_DEPTH`] deep fail with
/// [`BencodeError::NestingTooDeep`] even though [`encode`] accepts them; build
/// a [`BencodeDecoder`] with a larger [`DecoderOptions::max_depth`] to read
/// such trees back.
pub fn decode(input: &[u8]) -> Result<Node, BencodeError> {
    BencodeDecoder::new().decode(input)
}

/// Decodes `input`, which must contain exactly one node.
pub fn decode_exact(input: &[u8]) -> Result<Node, BencodeError> {
    BencodeDecoder::new().decode_exact(input)
}

/// Decodes one node from `reader` with default options, leaving the reader
/// positioned right after it.
pub fn decode_reader<R: Read + ?Sized>(reader: &mut R) -> Result<Node, BencodeError> {
    BencodeDecoder::new().decode_reader(reader)
}

/// Returns the canonical encoding of `node`.
pub fn encode(node: &Node) -> Vec<u8> {
    BencodeEncoder::new().encode(node)
}

/// Writes the canonical encoding of `node` to `sink`.
pub fn encode_to<W: Write + ?Sized>(node: &Node, sink: &mut W) -> Result<(), BencodeError> {
    BencodeEncoder::new().encode_to(node, sink)
}
