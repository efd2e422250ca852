//! Byte slice reader with cursor tracking.

use crate::BufferError;

/// A reader over a borrowed byte slice.
///
/// The cursor `x` only moves forward, and [`try_u8`](Reader::try_u8) does not
/// move it when it fails.
///
/// # Example
///
/// ```
/// use beencode_buffers::Reader;
///
/// let data = b"4:spam";
/// let mut reader = Reader::new(data);
///
/// assert_eq!(reader.try_u8(), Ok(b'4'));
/// assert_eq!(reader.try_u8(), Ok(b':'));
/// assert_eq!(reader.buf_up_to(10), b"spam");
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` once every byte up to `end` has been consumed.
    pub fn is_empty(&self) -> bool {
        self.x >= self.end
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if n > self.size() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads up to `size` bytes, returning fewer only when the buffer runs
    /// out.
    pub fn buf_up_to(&mut self, size: usize) -> &'a [u8] {
        let x = self.x;
        let end = x + size.min(self.size());
        self.x = end;
        &self.uint8[x..end]
    }
}
