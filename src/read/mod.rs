//! APIs to decode typed values back out of a page's physical byte layout.
pub(crate) mod reader;

pub use reader::BinaryBufferReader;

use bytes::Bytes;

use crate::errors::Result;

/// The decode side of the codec, exactly symmetric with
/// [`crate::write::BinaryWriter`].
///
/// Each operation advances the cursor by the number of bytes the paired
/// write consumed. Running out of bytes surfaces
/// [`crate::Error::UnexpectedEndOfData`]; nothing is silently truncated.
pub trait BinaryReader {
    /// Cursor offset from the start of the buffer, in bytes.
    fn position(&self) -> usize;

    /// Bytes left between the cursor and the end of the buffer.
    fn remaining(&self) -> usize;

    /// `count` raw bytes, zero-copy.
    fn read_bytes(&mut self, count: usize) -> Result<Bytes>;

    /// `count` bits, LSB first within each byte; consumes whole bytes
    /// including any zero padding.
    fn read_bits(&mut self, count: usize) -> Result<Vec<bool>>;

    fn read_booleans(&mut self, count: usize) -> Result<Vec<bool>>;

    /// Fixed-point decimals scaled back by `10^scale`.
    fn read_decimals(
        &mut self,
        count: usize,
        byte_length: usize,
        scale: u8,
    ) -> Result<Vec<f64>>;

    /// The unscaled two's-complement integers behind a decimal column, for
    /// consumers that stay in fixed point.
    fn read_unscaled_decimals(&mut self, count: usize, byte_length: usize) -> Result<Vec<i128>>;

    fn read_doubles(&mut self, count: usize) -> Result<Vec<f64>>;

    fn read_floats(&mut self, count: usize) -> Result<Vec<f32>>;

    fn read_ints32(&mut self, count: usize) -> Result<Vec<i32>>;

    fn read_ints64(&mut self, count: usize) -> Result<Vec<i64>>;

    /// `count` length-prefixed strings.
    fn read_strings(&mut self, count: usize) -> Result<Vec<String>>;

    /// `count` unsigned varints. A continuation chain longer than 5 bytes or
    /// overflowing 32 bits surfaces [`crate::Error::MalformedVarInt`].
    fn read_var_ints32(&mut self, count: usize) -> Result<Vec<u32>>;
}
