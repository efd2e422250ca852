//! Canonical bencode encoder.
//!
//! Wire format:
//! - Integer: `i<decimal>e`        e.g. `i42e`, `i-7e`
//! - String:  `<byte_len>:<bytes>` e.g. `5:hello`
//! - List:    `l<items>e`
//! - Dict:    `d<key-value pairs sorted by raw key bytes>e`

use std::io::Write;

use beencode_buffers::Writer;
use tracing::trace;

use crate::byte_string::ByteString;
use crate::dict::Dict;
use crate::error::BencodeError;
use crate::kind::{DICT_PREFIX, INTEGER_PREFIX, LIST_PREFIX, SEPARATOR, SUFFIX};
use crate::list::List;
use crate::node::Node;

/// Encoder holding a reusable output buffer.
///
/// Encoding a node tree cannot fail; only writing the result to an external
/// sink can.
///
/// ```
/// use beencode::{BencodeEncoder, Dict, Node};
///
/// let mut dict = Dict::new();
/// dict.put("b", 2);
/// dict.put("a", 1);
///
/// let mut encoder = BencodeEncoder::new();
/// assert_eq!(encoder.encode(&Node::from(dict)), b"d1:ai1e1:bi2ee");
/// assert_eq!(encoder.encode(&Node::Integer(-7)), b"i-7e");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BencodeEncoder {
    pub writer: Writer,
}

impl BencodeEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Returns the canonical encoding of `node`.
    pub fn encode(&mut self, node: &Node) -> Vec<u8> {
        self.writer.reset();
        self.write_any(node);
        let out = self.writer.flush();
        trace!(kind = %node.kind(), bytes = out.len(), "encoded bencode node");
        out
    }

    /// Writes the canonical encoding of `node` to `sink`.
    ///
    /// Sink failures are reported as [`BencodeError::Sink`].
    pub fn encode_to<W: Write + ?Sized>(
        &mut self,
        node: &Node,
        sink: &mut W,
    ) -> Result<(), BencodeError> {
        self.writer.reset();
        self.write_any(node);
        let result = sink
            .write_all(self.writer.pending())
            .map_err(BencodeError::Sink);
        trace!(
            kind = %node.kind(),
            bytes = self.writer.pending().len(),
            ok = result.is_ok(),
            "wrote bencode node to sink"
        );
        self.writer.reset();
        result
    }

    pub fn write_any(&mut self, node: &Node) {
        match node {
            Node::Bytes(b) => self.write_bytes(b),
            Node::Integer(i) => self.write_integer(*i),
            Node::List(l) => self.write_list(l),
            Node::Dict(d) => self.write_dict(d),
        }
    }

    pub fn write_integer(&mut self, int: i64) {
        self.writer.u8(INTEGER_PREFIX);
        self.writer.decimal(int);
        self.writer.u8(SUFFIX);
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.writer.unsigned_decimal(buf.len() as u64);
        self.writer.u8(SEPARATOR);
        self.writer.buf(buf);
    }

    pub fn write_bytes(&mut self, bytes: &ByteString) {
        self.write_bin(bytes.as_bytes());
    }

    pub fn write_list(&mut self, list: &List) {
        self.writer.u8(LIST_PREFIX);
        for item in list {
            self.write_any(item);
        }
        self.writer.u8(SUFFIX);
    }

    /// Dictionary entries come out in ascending raw key order; `Dict`
    /// iterates in that order already.
    pub fn write_dict(&mut self, dict: &Dict) {
        self.writer.u8(DICT_PREFIX);
        for (key, value) in dict {
            self.write_bytes(key);
            self.write_any(value);
        }
        self.writer.u8(SUFFIX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn encodes_each_kind() {
        let mut enc = BencodeEncoder::new();
        assert_eq!(enc.encode(&Node::Integer(1337)), b"i1337e");
        assert_eq!(enc.encode(&Node::Integer(0)), b"i0e");
        assert_eq!(enc.encode(&Node::Integer(-42)), b"i-42e");
        assert_eq!(enc.encode(&Node::from("spam")), b"4:spam");
        assert_eq!(enc.encode(&Node::from("")), b"0:");
        assert_eq!(enc.encode(&Node::from(List::new())), b"le");
        assert_eq!(enc.encode(&Node::from(Dict::new())), b"de");
    }

    #[test]
    fn binary_payload_is_not_escaped() {
        let mut enc = BencodeEncoder::new();
        let node = Node::from(vec![b'e', 0x00, b':', 0xff]);
        assert_eq!(enc.encode(&node), b"4:e\x00:\xff");
    }

    #[test]
    fn dict_keys_sorted_by_raw_bytes() {
        let mut dict = Dict::new();
        dict.put("b", 1);
        dict.put("a", 2);
        dict.put("c", 3);
        dict.put("B", 4);
        let bytes = BencodeEncoder::new().encode(&Node::from(dict));
        assert_eq!(bytes, b"d1:Bi4e1:ai2e1:bi1e1:ci3ee");
    }

    #[test]
    fn encoder_is_reusable() {
        let mut enc = BencodeEncoder::new();
        let first = enc.encode(&Node::from("first"));
        let second = enc.encode(&Node::Integer(2));
        assert_eq!(first, b"5:first");
        assert_eq!(second, b"i2e");
    }

    #[test]
    fn encode_to_sink() {
        let mut out = Vec::new();
        let node = Node::from(vec![Node::from("spam"), Node::from("eggs")]);
        BencodeEncoder::new().encode_to(&node, &mut out).unwrap();
        assert_eq!(out, b"l4:spam4:eggse");
    }

    #[test]
    fn sink_failure_is_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut enc = BencodeEncoder::new();
        let err = enc.encode_to(&Node::Integer(1), &mut Closed).unwrap_err();
        assert!(matches!(err, BencodeError::Sink(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        // A failed write leaves nothing behind for the next encode.
        assert_eq!(enc.encode(&Node::Integer(2)), b"i2e");
    }
}
