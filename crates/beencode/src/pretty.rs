//! Human-readable rendering of node trees.
//!
//! The output is for diagnostics only and has no decoder. Containers open a
//! new line per element, indented two spaces per level:
//!
//! ```text
//! {
//!   "announce" => "http://tracker.example/announce"
//!   "pieces" => <binary: 20 bytes>
//!   "tags" => [
//!     "a"
//!     13
//!   ]
//! }
//! ```

use std::fmt::{self, Write};

use crate::byte_string::ByteString;
use crate::dict::Dict;
use crate::list::List;
use crate::node::Node;

const INDENT: &str = "  ";

fn indent<W: Write>(out: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Writes `node` at nesting `level`. When `inline` is set the first line is
/// not indented because it continues a line already started (a dictionary
/// value after `=>`).
fn write_node<W: Write>(out: &mut W, node: &Node, level: usize, inline: bool) -> fmt::Result {
    if !inline {
        indent(out, level)?;
    }
    match node {
        Node::Integer(i) => write!(out, "{i}"),
        Node::Bytes(b) => write_bytes(out, b),
        Node::List(l) => write_list(out, l, level),
        Node::Dict(d) => write_dict(out, d, level),
    }
}

fn write_bytes<W: Write>(out: &mut W, bytes: &ByteString) -> fmt::Result {
    match bytes.as_str() {
        Some(s) => write!(out, "\"{}\"", s.escape_debug()),
        None => write!(out, "<binary: {} bytes>", bytes.len()),
    }
}

fn write_list<W: Write>(out: &mut W, list: &List, level: usize) -> fmt::Result {
    out.write_str("[\n")?;
    for item in list {
        write_node(out, item, level + 1, false)?;
        out.write_char('\n')?;
    }
    indent(out, level)?;
    out.write_char(']')
}

fn write_dict<W: Write>(out: &mut W, dict: &Dict, level: usize) -> fmt::Result {
    out.write_str("{\n")?;
    for (key, value) in dict {
        indent(out, level + 1)?;
        write_bytes(out, key)?;
        out.write_str(" => ")?;
        write_node(out, value, level + 1, true)?;
        out.write_char('\n')?;
    }
    indent(out, level)?;
    out.write_char('}')
}

impl Node {
    /// Renders the node in the indented diagnostic form; same as
    /// `to_string()`.
    pub fn to_pretty_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0, false)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bytes(f, self)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self, 0)
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dict(f, self, 0)
    }
}
