//! Conversion between node trees and [`serde_json::Value`].
//!
//! Bencode has no null, booleans or floats, so only integers, strings, arrays
//! and objects convert from JSON. In the other direction byte strings that
//! are not UTF-8, keys included, become `data:` URIs carrying the bytes as
//! base64.

use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::byte_string::ByteString;
use crate::dict::Dict;
use crate::encoder::BencodeEncoder;
use crate::list::List;
use crate::node::Node;

/// Error converting a JSON value into a node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonConversionError {
    #[error("JSON {0} has no bencode representation")]
    Unrepresentable(&'static str),
    #[error("JSON number {0} does not fit a 64-bit signed integer")]
    OutOfRange(String),
}

/// Convert bytes to `data:application/octet-stream;base64,...`.
pub fn to_data_uri(buf: &[u8]) -> String {
    let mut uri = String::from("data:application/octet-stream;base64,");
    uri.push_str(&base64::engine::general_purpose::STANDARD.encode(buf));
    uri
}

fn bytes_to_text(bytes: &ByteString) -> String {
    match bytes.as_str() {
        Some(s) => s.to_owned(),
        None => to_data_uri(bytes),
    }
}

impl Node {
    /// Converts the tree into JSON for inspection.
    ///
    /// Dictionary keys that are not UTF-8 become `data:` URIs, like values.
    ///
    /// ```
    /// use beencode::decode;
    /// use serde_json::json;
    ///
    /// let node = decode(b"d4:spaml1:ai7eee").unwrap();
    /// assert_eq!(node.to_json(), json!({"spam": ["a", 7]}));
    /// ```
    pub fn to_json(&self) -> Value {
        match self {
            Node::Integer(i) => Value::from(*i),
            Node::Bytes(b) => Value::String(bytes_to_text(b)),
            Node::List(l) => Value::Array(l.iter().map(Node::to_json).collect()),
            Node::Dict(d) => {
                let mut obj = Map::new();
                for (key, value) in d {
                    obj.insert(bytes_to_text(key), value.to_json());
                }
                Value::Object(obj)
            }
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = JsonConversionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Err(JsonConversionError::Unrepresentable("null")),
            Value::Bool(_) => Err(JsonConversionError::Unrepresentable("boolean")),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Node::Integer(i))
                } else if n.is_u64() {
                    Err(JsonConversionError::OutOfRange(n.to_string()))
                } else {
                    Err(JsonConversionError::Unrepresentable("float"))
                }
            }
            Value::String(s) => Ok(Node::from(s.as_str())),
            Value::Array(arr) => arr
                .iter()
                .map(Node::try_from)
                .collect::<Result<List, _>>()
                .map(Node::List),
            Value::Object(obj) => obj
                .iter()
                .map(|(k, v)| Ok((ByteString::from(k.as_str()), Node::try_from(v)?)))
                .collect::<Result<Dict, _>>()
                .map(Node::Dict),
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = JsonConversionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Node::try_from(&value)
    }
}

impl BencodeEncoder {
    /// Encodes a JSON value, with object keys in canonical order.
    ///
    /// ```
    /// use beencode::BencodeEncoder;
    /// use serde_json::json;
    ///
    /// let mut encoder = BencodeEncoder::new();
    /// let bytes = encoder.encode_json(&json!({"z": 1, "a": ["x"]})).unwrap();
    /// assert_eq!(bytes, b"d1:al1:xe1:zi1ee");
    /// ```
    pub fn encode_json(&mut self, value: &Value) -> Result<Vec<u8>, JsonConversionError> {
        let node = Node::try_from(value)?;
        Ok(self.encode(&node))
    }
}
