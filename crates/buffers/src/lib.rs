//! Byte cursors used by the `beencode` codec.
//!
//! - [`Reader`] walks a borrowed byte slice with bounds-checked reads.
//! - [`StreamReader`] pulls bytes from any [`std::io::Read`] without reading
//!   ahead, so the wrapped source is left positioned exactly after the last
//!   byte that was asked for.
//! - [`Writer`] is an auto-growing output buffer that can be flushed and
//!   reused between encodes.
//!
//! # Example
//!
//! ```
//! use beencode_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(b'i');
//! writer.decimal(42);
//! writer.u8(b'e');
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.try_u8(), Ok(b'i'));
//! assert_eq!(reader.buf_up_to(2), b"42");
//! ```

mod reader;
mod stream_reader;
mod writer;

pub use reader::Reader;
pub use stream_reader::StreamReader;
pub use writer::Writer;

use thiserror::Error;

/// Error returned by the bounds-checked [`Reader`] methods.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("end of buffer")]
    EndOfBuffer,
}
