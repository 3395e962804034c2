//! Binary codec for the page layer of a Parquet-compatible columnar format.
//!
//! This crate covers the byte-exact part of the format: packing typed values
//! into the physical layout pages use on disk (bit-packed booleans, fixed
//! width integers and floats, fixed-point decimals, length-prefixed byte
//! strings, unsigned varints), and the typed page-header model that maps to
//! and from the compact metadata records surrounding page data.
//!
//! Compression, file layout and the metadata protocol's own framing happen
//! around this layer, not inside it.

#[macro_use]
mod errors;

mod encodings;
mod endianess;

pub mod page;
pub mod read;
pub mod write;

pub use encodings::Encoding;
pub use errors::{Error, Result};

/// Byte order applied to every multi-byte value written or read.
///
/// Chosen once per writer/reader instance and never changed mid-stream. The
/// format itself is little-endian; big-endian exists for diagnostics and for
/// readers of foreign buffers.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn is_native(&self) -> bool {
        match self {
            ByteOrder::LittleEndian => endianess::is_native_little_endian(),
            ByteOrder::BigEndian => !endianess::is_native_little_endian(),
        }
    }
}

/// Number of bytes a writer has emitted so far.
///
/// Grows monotonically with every write; after any sequence of writes it
/// equals the exact length of the underlying buffer.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize,
    serde::Deserialize,
)]
pub struct DataSize(u64);

impl DataSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    pub(crate) fn add_bytes(&mut self, bytes: u64) {
        self.0 += bytes;
    }
}
