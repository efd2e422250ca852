//! Unbuffered byte reader over an [`io::Read`] source.

use std::io::{self, ErrorKind, Read};

/// Reads bytes from an [`io::Read`] source one request at a time.
///
/// Unlike [`io::BufReader`], nothing is read ahead: after a call returns, the
/// wrapped source has been advanced by exactly the bytes handed back to the
/// caller. Wrap the source in a `BufReader` yourself (and pass `&mut` to it)
/// when per-byte reads are too expensive.
///
/// End of data is reported as `Ok(None)` or a short count, never as an error;
/// `Err` is always a failure of the underlying source.
///
/// # Example
///
/// ```
/// use beencode_buffers::StreamReader;
///
/// let mut reader = StreamReader::new(&b"4:spam"[..]);
/// assert_eq!(reader.try_u8().unwrap(), Some(b'4'));
/// assert_eq!(reader.position(), 1);
/// ```
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    /// Number of bytes consumed so far.
    x: usize,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, x: 0 }
    }

    /// Number of bytes consumed from the source so far.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Reads one byte, or `None` at end of data.
    pub fn try_u8(&mut self) -> io::Result<Option<u8>> {
        let mut octet = [0u8; 1];
        match self.fill(&mut octet)? {
            0 => Ok(None),
            _ => Ok(Some(octet[0])),
        }
    }

    /// Fills `dst` from the source.
    ///
    /// Returns the number of bytes copied, which is less than `dst.len()` only
    /// if the source reached end of data. Interrupted reads are retried.
    pub fn fill(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < dst.len() {
            match self.inner.read(&mut dst[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.x += n;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `step` bytes per `read` call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::ConnectionReset, "peer went away"))
        }
    }

    #[test]
    fn test_try_u8_until_end() {
        let mut reader = StreamReader::new(&b"ab"[..]);
        assert_eq!(reader.try_u8().unwrap(), Some(b'a'));
        assert_eq!(reader.try_u8().unwrap(), Some(b'b'));
        assert_eq!(reader.try_u8().unwrap(), None);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_fill_across_short_reads() {
        let mut source = Trickle {
            data: b"hello world",
            step: 3,
            interrupted: false,
        };
        let mut reader = StreamReader::new(&mut source);
        let mut dst = [0u8; 5];
        assert_eq!(reader.fill(&mut dst).unwrap(), 5);
        assert_eq!(&dst, b"hello");
        assert_eq!(reader.position(), 5);
        assert_eq!(source.data, b" world");
    }

    #[test]
    fn test_fill_short_at_end() {
        let mut reader = StreamReader::new(&b"ab"[..]);
        let mut dst = [0u8; 4];
        assert_eq!(reader.fill(&mut dst).unwrap(), 2);
        assert_eq!(&dst[..2], b"ab");
    }

    #[test]
    fn test_source_error_passes_through() {
        let mut reader = StreamReader::new(Broken);
        let err = reader.try_u8().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionReset);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_no_read_ahead() {
        let data = b"i1ei2e".to_vec();
        let mut cursor = io::Cursor::new(data);
        {
            let mut reader = StreamReader::new(&mut cursor);
            let mut dst = [0u8; 3];
            reader.fill(&mut dst).unwrap();
        }
        assert_eq!(cursor.position(), 3);
    }
}
