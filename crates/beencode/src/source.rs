//! Byte sources the decoder can read from.

use std::io::{self, Read};

use beencode_buffers::{Reader, StreamReader};

/// Where the decoder pulls bytes from.
///
/// End of data and I/O failure are kept apart: running out of bytes is
/// `Ok(None)` or a short count, while `Err` always means the source itself
/// failed and is reported as [`BencodeError::Source`](crate::BencodeError::Source).
pub trait ByteSource {
    /// Reads the next byte, or `None` at end of data.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Fills as much of `dst` as the source can provide, returning the count.
    /// A count below `dst.len()` means end of data.
    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize>;

    /// Bytes consumed so far.
    fn position(&self) -> usize;
}

impl ByteSource for Reader<'_> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.try_u8().ok())
    }

    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        let src = self.buf_up_to(dst.len());
        dst[..src.len()].copy_from_slice(src);
        Ok(src.len())
    }

    fn position(&self) -> usize {
        self.x
    }
}

impl<R: Read> ByteSource for StreamReader<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.try_u8()
    }

    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        self.fill(dst)
    }

    fn position(&self) -> usize {
        StreamReader::position(self)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }

    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        (**self).read_into(dst)
    }

    fn position(&self) -> usize {
        (**self).position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: ByteSource>(mut source: S) -> (Vec<u8>, usize) {
        let mut out = Vec::new();
        while let Some(b) = source.next_byte().unwrap() {
            out.push(b);
        }
        (out, source.position())
    }

    #[test]
    fn slice_and_stream_sources_agree() {
        let data = b"l4:spame";
        assert_eq!(drain(Reader::new(data)), (data.to_vec(), 8));
        assert_eq!(drain(StreamReader::new(&data[..])), (data.to_vec(), 8));
    }

    #[test]
    fn read_into_reports_short_count() {
        let mut reader = Reader::new(b"ab");
        let mut dst = [0u8; 3];
        assert_eq!(reader.read_into(&mut dst).unwrap(), 2);
        assert_eq!(&dst[..2], b"ab");
        assert_eq!(ByteSource::position(&reader), 2);
    }
}
