//! Byte string node.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str;

use thiserror::Error;

/// Character encodings accepted by [`ByteString::from_text`] and
/// [`ByteString::to_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1: one byte per character, U+0000 to U+00FF only.
    Latin1,
}

/// Error converting between text and a [`ByteString`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("character {ch:?} at index {index} cannot be encoded as {encoding:?}")]
    Unmappable {
        ch: char,
        index: usize,
        encoding: TextEncoding,
    },
    #[error("byte string is not valid {0:?}")]
    Malformed(TextEncoding),
}

/// An immutable sequence of raw bytes.
///
/// Bencode strings are binary-safe and carry no encoding. Equality and
/// ordering compare the raw bytes lexicographically, which is also the order
/// dictionary keys are written in.
///
/// Borrowed input is always copied on construction, so a `ByteString` never
/// shares its storage with the caller.
///
/// # Examples
///
/// ```
/// use beencode::{ByteString, TextEncoding};
///
/// let spam = ByteString::from("spam");
/// assert_eq!(spam.as_bytes(), b"spam");
/// assert_eq!(spam.as_str(), Some("spam"));
///
/// let wide = ByteString::from_text("hi", TextEncoding::Utf16Be).unwrap();
/// assert_eq!(wide.as_bytes(), &[0, b'h', 0, b'i']);
/// assert_eq!(wide.to_text(TextEncoding::Utf16Be).unwrap(), "hi");
///
/// assert!(ByteString::from("a") < ByteString::from("b"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString(Box<[u8]>);

impl ByteString {
    /// Creates a byte string holding a copy of `data`.
    pub fn new(data: impl AsRef<[u8]>) -> Self {
        ByteString(data.as_ref().into())
    }

    /// Encodes `text` with the given character encoding.
    pub fn from_text(text: &str, encoding: TextEncoding) -> Result<Self, TextError> {
        let bytes = match encoding {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            TextEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            TextEncoding::Latin1 => text
                .chars()
                .enumerate()
                .map(|(index, ch)| {
                    u8::try_from(u32::from(ch)).map_err(|_| TextError::Unmappable {
                        ch,
                        index,
                        encoding,
                    })
                })
                .collect::<Result<Vec<u8>, _>>()?,
        };
        Ok(ByteString(bytes.into_boxed_slice()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the bytes as `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        str::from_utf8(&self.0).ok()
    }

    /// Decodes the bytes with the given character encoding.
    pub fn to_text(&self, encoding: TextEncoding) -> Result<String, TextError> {
        let malformed = || TextError::Malformed(encoding);
        match encoding {
            TextEncoding::Utf8 => self.as_str().map(str::to_owned).ok_or_else(malformed),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                if self.0.len() % 2 != 0 {
                    return Err(malformed());
                }
                let units = self.0.chunks_exact(2).map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if encoding == TextEncoding::Utf16Le {
                        u16::from_le_bytes(pair)
                    } else {
                        u16::from_be_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| malformed())
            }
            TextEncoding::Latin1 => Ok(self.0.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Decodes the bytes as UTF-8, replacing invalid sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0.into_vec()
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "ByteString({s:?})"),
            None => write!(f, "ByteString({:?})", &self.0),
        }
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for ByteString {
    fn from(data: &[u8]) -> Self {
        ByteString::new(data)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(data: &[u8; N]) -> Self {
        ByteString::new(data)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        ByteString::new(s)
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        ByteString(s.into_bytes().into_boxed_slice())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(data: Vec<u8>) -> Self {
        ByteString(data.into_boxed_slice())
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        *self.0 == **other
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        *self.0 == *other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        *self.0 == *other.as_bytes()
    }
}
