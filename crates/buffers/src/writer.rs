//! Growable output buffer.

/// A byte buffer writer that grows as needed and can be flushed repeatedly.
///
/// Everything written since the last [`flush`](Writer::flush) (or
/// [`reset`](Writer::reset)) is the pending output.
///
/// # Example
///
/// ```
/// use beencode_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.decimal(4);
/// writer.u8(b':');
/// writer.buf(b"spam");
/// assert_eq!(writer.flush(), b"4:spam");
/// assert!(writer.pending().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    /// The underlying byte buffer; everything in it is pending output.
    pub uint8: Vec<u8>,
    /// Spare capacity reserved whenever the buffer has to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size (4 KiB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with a custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(alloc_size),
            alloc_size,
        }
    }

    /// Ensures at least `capacity` more bytes can be written without
    /// reallocating.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let spare = self.uint8.capacity() - self.uint8.len();
        if spare < capacity {
            self.uint8.reserve(capacity.max(self.alloc_size));
        }
    }

    /// Drops any pending output.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the pending output and starts a new one.
    ///
    /// The allocation is kept for the next encode.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8.clone();
        self.uint8.clear();
        result
    }

    /// The bytes written since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.uint8
    }

    /// Writes one byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8.push(val);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.ensure_capacity(buf.len());
        self.uint8.extend_from_slice(buf);
    }

    /// Writes the base-10 representation of a signed integer, with a leading
    /// `-` for negative values.
    pub fn decimal(&mut self, val: i64) {
        if val < 0 {
            self.u8(b'-');
        }
        self.unsigned_decimal(val.unsigned_abs());
    }

    /// Writes the base-10 representation of an unsigned integer.
    pub fn unsigned_decimal(&mut self, mut val: u64) {
        let mut digits = [0u8; 20];
        let mut i = digits.len();
        loop {
            i -= 1;
            digits[i] = b'0' + (val % 10) as u8;
            val /= 10;
            if val == 0 {
                break;
            }
        }
        self.buf(&digits[i..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(b'l');
        writer.u8(b'e');
        assert_eq!(writer.flush(), b"le");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut writer = Writer::new();
        writer.buf(b"partial");
        writer.reset();
        writer.buf(b"ok");
        assert_eq!(writer.flush(), b"ok");
    }

    #[test]
    fn test_decimal() {
        let mut writer = Writer::new();
        writer.decimal(0);
        writer.u8(b' ');
        writer.decimal(1337);
        writer.u8(b' ');
        writer.decimal(-42);
        assert_eq!(writer.flush(), b"0 1337 -42");
    }

    #[test]
    fn test_decimal_extremes() {
        let mut writer = Writer::new();
        writer.decimal(i64::MIN);
        assert_eq!(writer.flush(), i64::MIN.to_string().as_bytes());
        writer.decimal(i64::MAX);
        assert_eq!(writer.flush(), i64::MAX.to_string().as_bytes());
        writer.unsigned_decimal(u64::MAX);
        assert_eq!(writer.flush(), u64::MAX.to_string().as_bytes());
    }

    #[test]
    fn test_grows_past_alloc_size() {
        let mut writer = Writer::with_alloc_size(2);
        writer.buf(&[7u8; 100]);
        assert_eq!(writer.pending().len(), 100);
        assert_eq!(writer.flush(), vec![7u8; 100]);
    }
}
