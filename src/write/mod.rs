//! APIs to encode typed values into a page's physical byte layout.
pub(crate) mod writer;

pub use writer::BinaryBufferWriter;

use crate::errors::Result;
use crate::DataSize;

/// The encode side of the codec.
///
/// Every operation appends to the owned buffer and grows the size counter by
/// exactly the number of bytes emitted. Apart from decimals, which carry a
/// representability contract, no operation fails: malformed caller input is a
/// contract violation, not a runtime error to recover from.
pub trait BinaryWriter {
    /// Appends raw bytes verbatim.
    fn append(&mut self, buffer: &[u8]);

    /// Total bytes emitted so far. Always equal to the buffer length.
    fn length(&self) -> DataSize;

    /// Packs bits into bytes, LSB first within each byte. A final partial
    /// byte is padded with zero bits.
    fn write_bits(&mut self, bits: &[bool]);

    /// Booleans as 0/1 bits, same packing and padding as [`Self::write_bits`].
    fn write_booleans(&mut self, values: &[bool]);

    /// Single bytes, verbatim.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Fixed-width decimals: each value is scaled by `10^scale` to an exact
    /// fixed-point integer and emitted as `byte_length` two's-complement
    /// bytes in the configured byte order.
    ///
    /// Fails with [`crate::Error::PrecisionLoss`] when a scaled value does
    /// not fit `precision` digits or `byte_length` bytes.
    fn write_decimals(
        &mut self,
        values: &[f64],
        byte_length: usize,
        precision: u8,
        scale: u8,
    ) -> Result<()>;

    /// IEEE-754 binary64, 8 bytes per value.
    fn write_doubles(&mut self, values: &[f64]);

    /// IEEE-754 binary32, 4 bytes per value.
    fn write_floats(&mut self, values: &[f32]);

    /// Two's-complement 4-byte integers.
    fn write_ints32(&mut self, values: &[i32]);

    /// Two's-complement 8-byte integers.
    fn write_ints64(&mut self, values: &[i64]);

    /// Each string as a 4-byte unsigned length prefix followed by its raw
    /// bytes.
    fn write_strings(&mut self, values: &[&str]);

    /// Unsigned varints, 7 data bits per byte with a continuation high bit;
    /// 1 to 5 bytes per value over the 32-bit range.
    fn write_var_ints32(&mut self, values: &[u32]);
}
