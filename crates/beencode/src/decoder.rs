//! Recursive-descent bencode decoder.

use std::io::Read;

use beencode_buffers::{Reader, StreamReader};
use tracing::{debug, trace};

use crate::byte_string::ByteString;
use crate::dict::Dict;
use crate::error::BencodeError;
use crate::kind::{NodeKind, SEPARATOR, SUFFIX};
use crate::list::List;
use crate::node::Node;
use crate::source::ByteSource;

/// Default cap on a single byte string's declared length (32 MiB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 32 * 1024 * 1024;

/// Default cap on how many containers may be nested inside each other.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Payloads are read in steps of this size, so a declared length is only
/// backed by memory as the bytes actually arrive.
const READ_CHUNK: usize = 64 * 1024;

/// What to do when a dictionary repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the value that appears last.
    #[default]
    LastWins,
    /// Fail with [`BencodeError::DuplicateKey`].
    Reject,
}

/// Decoder limits and policies.
///
/// ```
/// use beencode::{BencodeDecoder, DecoderOptions, DuplicateKeys};
///
/// let options = DecoderOptions::new()
///     .with_max_string_length(1024)
///     .with_duplicate_keys(DuplicateKeys::Reject);
/// let decoder = BencodeDecoder::with_options(options);
/// assert!(decoder.decode(b"d1:ai1e1:ai2ee").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Largest byte string length accepted, in bytes.
    pub max_string_length: usize,
    /// Deepest container nesting accepted.
    pub max_depth: usize,
    /// How a key repeated within one dictionary is handled.
    pub duplicate_keys: DuplicateKeys,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}

/// Stateless bencode decoder.
///
/// The options are fixed when the decoder is built, so they cannot change
/// in the middle of a parse. A decoder can be shared between threads; every
/// call works only on the source it is handed.
///
/// Each `decode*` call reads exactly one top-level node and leaves the
/// source positioned right after it.
#[derive(Debug, Clone, Default)]
pub struct BencodeDecoder {
    options: DecoderOptions,
}

impl BencodeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes the node at the start of `input`. Bytes after it are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<Node, BencodeError> {
        let mut reader = Reader::new(input);
        self.decode_source(&mut reader)
    }

    /// Decodes `input`, which must hold exactly one node.
    pub fn decode_exact(&self, input: &[u8]) -> Result<Node, BencodeError> {
        let mut reader = Reader::new(input);
        let node = self.decode_source(&mut reader)?;
        if !reader.is_empty() {
            return Err(BencodeError::TrailingData { offset: reader.x });
        }
        Ok(node)
    }

    /// Decodes one node from an [`io::Read`](std::io::Read) source.
    ///
    /// Nothing past the end of the node is read from `reader`.
    pub fn decode_reader<R: Read + ?Sized>(&self, reader: &mut R) -> Result<Node, BencodeError> {
        let mut stream = StreamReader::new(reader);
        self.decode_source(&mut stream)
    }

    /// Decodes one node from any [`ByteSource`].
    pub fn decode_source<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Node, BencodeError> {
        let start = source.position();
        let node = self.read_any(source, 0)?;
        trace!(
            kind = %node.kind(),
            bytes = source.position() - start,
            "decoded bencode node"
        );
        Ok(node)
    }

    fn next<S: ByteSource + ?Sized>(&self, src: &mut S) -> Result<u8, BencodeError> {
        let offset = src.position();
        src.next_byte()
            .map_err(BencodeError::Source)?
            .ok_or(BencodeError::UnexpectedEnd { offset })
    }

    /// Reads one tag byte and dispatches on it.
    fn read_any<S: ByteSource + ?Sized>(
        &self,
        src: &mut S,
        depth: usize,
    ) -> Result<Node, BencodeError> {
        let offset = src.position();
        let tag = self.next(src)?;
        self.read_tagged(src, tag, offset, depth)
    }

    /// `depth` counts the containers enclosing the node being read.
    fn read_tagged<S: ByteSource + ?Sized>(
        &self,
        src: &mut S,
        tag: u8,
        offset: usize,
        depth: usize,
    ) -> Result<Node, BencodeError> {
        match NodeKind::from_tag(tag) {
            Some(NodeKind::Dict) => self.read_dict(src, depth).map(Node::Dict),
            Some(NodeKind::Integer) => self.read_integer(src).map(Node::Integer),
            Some(NodeKind::List) => self.read_list(src, depth).map(Node::List),
            Some(NodeKind::Bytes) => self.read_bytes(src, tag).map(Node::Bytes),
            None => Err(BencodeError::InvalidPrefix { byte: tag, offset }),
        }
    }

    fn enter(&self, depth: usize) -> Result<(), BencodeError> {
        if depth >= self.options.max_depth {
            debug!(limit = self.options.max_depth, "rejecting over-nested input");
            return Err(BencodeError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Reads `<digits>e` after the `i` tag.
    fn read_integer<S: ByteSource + ?Sized>(&self, src: &mut S) -> Result<i64, BencodeError> {
        let start = src.position();
        let mut seen_minus = false;
        let mut seen_digit = false;
        let mut leading_zero_only = false;
        let mut magnitude: u64 = 0;

        loop {
            let offset = src.position();
            let byte = self.next(src)?;
            match byte {
                SUFFIX if seen_digit => break,
                SUFFIX => return Err(BencodeError::UnexpectedEnd { offset }),
                b'0'..=b'9' => {
                    if leading_zero_only {
                        return Err(BencodeError::LeadingZero { offset });
                    }
                    if !seen_digit && byte == b'0' {
                        leading_zero_only = true;
                    }
                    seen_digit = true;
                    magnitude = magnitude
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(u64::from(byte - b'0')))
                        .ok_or(BencodeError::IntegerOverflow { offset: start })?;
                }
                b'-' if !seen_minus && !seen_digit => seen_minus = true,
                _ => return Err(BencodeError::InvalidCharacter { byte, offset }),
            }
        }

        if !seen_minus {
            return i64::try_from(magnitude)
                .map_err(|_| BencodeError::IntegerOverflow { offset: start });
        }
        if magnitude == 0 {
            return Err(BencodeError::NegativeZero { offset: start });
        }
        0i64.checked_sub_unsigned(magnitude)
            .ok_or(BencodeError::IntegerOverflow { offset: start })
    }

    /// Reads `<length>:<payload>`; `first` is the length digit that was
    /// consumed as the tag.
    fn read_bytes<S: ByteSource + ?Sized>(
        &self,
        src: &mut S,
        first: u8,
    ) -> Result<ByteString, BencodeError> {
        let mut length = u64::from(first - b'0');
        self.check_length(length)?;

        loop {
            let offset = src.position();
            let byte = self.next(src)?;
            match byte {
                SEPARATOR => break,
                b'0'..=b'9' if first == b'0' => {
                    return Err(BencodeError::LeadingZero { offset });
                }
                b'0'..=b'9' => {
                    length = length
                        .saturating_mul(10)
                        .saturating_add(u64::from(byte - b'0'));
                    self.check_length(length)?;
                }
                _ => return Err(BencodeError::MalformedLength { byte, offset }),
            }
        }

        let length = usize::try_from(length).map_err(|_| BencodeError::LengthLimitExceeded {
            length,
            limit: self.options.max_string_length,
        })?;

        let mut data = Vec::with_capacity(length.min(READ_CHUNK));
        while data.len() < length {
            let filled = data.len();
            let step = (length - filled).min(READ_CHUNK);
            data.resize(filled + step, 0);
            let n = src
                .read_into(&mut data[filled..])
                .map_err(BencodeError::Source)?;
            if n < step {
                return Err(BencodeError::TruncatedInput {
                    expected: length,
                    missing: length - filled - n,
                });
            }
        }
        Ok(ByteString::from(data))
    }

    fn check_length(&self, length: u64) -> Result<(), BencodeError> {
        let limit = self.options.max_string_length;
        if length > limit as u64 {
            debug!(length, limit, "rejecting byte string over the length limit");
            return Err(BencodeError::LengthLimitExceeded { length, limit });
        }
        Ok(())
    }

    /// Reads list elements after the `l` tag until the `e` terminator.
    fn read_list<S: ByteSource + ?Sized>(
        &self,
        src: &mut S,
        depth: usize,
    ) -> Result<List, BencodeError> {
        self.enter(depth)?;
        let mut list = List::new();
        loop {
            let offset = src.position();
            let tag = self.next(src)?;
            if tag == SUFFIX {
                return Ok(list);
            }
            list.push(self.read_tagged(src, tag, offset, depth + 1)?);
        }
    }

    /// Reads key/value pairs after the `d` tag until the `e` terminator.
    fn read_dict<S: ByteSource + ?Sized>(
        &self,
        src: &mut S,
        depth: usize,
    ) -> Result<Dict, BencodeError> {
        self.enter(depth)?;
        let mut dict = Dict::new();
        loop {
            let offset = src.position();
            let tag = self.next(src)?;
            if tag == SUFFIX {
                return Ok(dict);
            }
            if !tag.is_ascii_digit() {
                return Err(BencodeError::InvalidCharacter { byte: tag, offset });
            }
            let key = self.read_bytes(src, tag)?;
            if self.options.duplicate_keys == DuplicateKeys::Reject && dict.contains_key(&key) {
                let key = key.to_string_lossy();
                debug!(%key, offset, "rejecting duplicate dictionary key");
                return Err(BencodeError::DuplicateKey { key, offset });
            }
            let value = self.read_any(src, depth + 1)?;
            dict.put(key, value);
        }
    }
}
