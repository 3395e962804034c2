use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use bytes::Bytes;

use crate::errors::{Error, Result};
use crate::read::BinaryReader;
use crate::ByteOrder;

/// Longest continuation chain a 32-bit varint may occupy.
const MAX_VARINT32_BYTES: usize = 5;

/// Decodes typed values from a read-only byte view, advancing a cursor.
///
/// The view is a [`Bytes`] handle, so slicing one page out of a larger file
/// buffer costs nothing. Short-lived: one instance per page or metadata
/// block.
#[derive(Debug, Clone)]
pub struct BinaryBufferReader {
    buffer: Bytes,
    position: usize,
    byte_order: ByteOrder,
}

// Mirror of the writer's fast/swap split: memcpy through bytemuck when the
// configured order matches the machine, byteorder swap otherwise.
macro_rules! read_fixed {
    ($self:ident, $count:ident, $t:ty, $size:literal, $read_into:ident) => {{
        let byte_order = $self.byte_order;
        let chunk = $self.take($count * $size)?;
        let mut values = vec![<$t>::default(); $count];
        if byte_order.is_native() {
            bytemuck::cast_slice_mut(&mut values).copy_from_slice(chunk);
        } else {
            match byte_order {
                ByteOrder::LittleEndian => LittleEndian::$read_into(chunk, &mut values),
                ByteOrder::BigEndian => BigEndian::$read_into(chunk, &mut values),
            }
        }
        Ok(values)
    }};
}

impl BinaryBufferReader {
    pub fn new(buffer: impl Into<Bytes>, byte_order: ByteOrder) -> Self {
        Self {
            buffer: buffer.into(),
            position: 0,
            byte_order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Borrows the next `count` bytes and advances the cursor past them.
    fn take(&mut self, count: usize) -> Result<&[u8]> {
        let remaining = self.buffer.len() - self.position;
        if remaining < count {
            return Err(Error::UnexpectedEndOfData {
                position: self.position,
                requested: count,
                remaining,
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    fn take_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
}

impl BinaryReader for BinaryBufferReader {
    fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    fn read_bytes(&mut self, count: usize) -> Result<Bytes> {
        let start = self.position;
        self.take(count)?;
        Ok(self.buffer.slice(start..start + count))
    }

    fn read_bits(&mut self, count: usize) -> Result<Vec<bool>> {
        let chunk = self.take((count + 7) / 8)?;
        Ok((0..count)
            .map(|i| chunk[i / 8] >> (i % 8) & 1 == 1)
            .collect())
    }

    fn read_booleans(&mut self, count: usize) -> Result<Vec<bool>> {
        self.read_bits(count)
    }

    fn read_decimals(&mut self, count: usize, byte_length: usize, scale: u8) -> Result<Vec<f64>> {
        let factor = 10f64.powi(scale as i32);
        Ok(self
            .read_unscaled_decimals(count, byte_length)?
            .into_iter()
            .map(|unscaled| unscaled as f64 / factor)
            .collect())
    }

    fn read_unscaled_decimals(&mut self, count: usize, byte_length: usize) -> Result<Vec<i128>> {
        assert!((1..=16).contains(&byte_length));

        let byte_order = self.byte_order;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let chunk = self.take(byte_length)?;
            let mut be = [0u8; 16];
            match byte_order {
                ByteOrder::BigEndian => be[16 - byte_length..].copy_from_slice(chunk),
                ByteOrder::LittleEndian => {
                    for (slot, byte) in be[16 - byte_length..].iter_mut().zip(chunk.iter().rev()) {
                        *slot = *byte;
                    }
                }
            }
            // sign extension from the most significant emitted byte
            if be[16 - byte_length] & 0x80 != 0 {
                for slot in be[..16 - byte_length].iter_mut() {
                    *slot = 0xFF;
                }
            }
            values.push(i128::from_be_bytes(be));
        }
        Ok(values)
    }

    fn read_doubles(&mut self, count: usize) -> Result<Vec<f64>> {
        read_fixed!(self, count, f64, 8, read_f64_into)
    }

    fn read_floats(&mut self, count: usize) -> Result<Vec<f32>> {
        read_fixed!(self, count, f32, 4, read_f32_into)
    }

    fn read_ints32(&mut self, count: usize) -> Result<Vec<i32>> {
        read_fixed!(self, count, i32, 4, read_i32_into)
    }

    fn read_ints64(&mut self, count: usize) -> Result<Vec<i64>> {
        read_fixed!(self, count, i64, 8, read_i64_into)
    }

    fn read_strings(&mut self, count: usize) -> Result<Vec<String>> {
        let byte_order = self.byte_order;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let prefix = self.take(4)?;
            let length = match byte_order {
                ByteOrder::LittleEndian => LittleEndian::read_u32(prefix),
                ByteOrder::BigEndian => BigEndian::read_u32(prefix),
            } as usize;
            let bytes = self.take(length)?;
            values.push(String::from_utf8(bytes.to_vec())?);
        }
        Ok(values)
    }

    fn read_var_ints32(&mut self, count: usize) -> Result<Vec<u32>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let mut value = 0u64;
            let mut shift = 0;
            let mut terminated = false;
            for _ in 0..MAX_VARINT32_BYTES {
                let byte = self.take_byte()?;
                value |= ((byte & 0x7F) as u64) << shift;
                shift += 7;
                if byte & 0x80 == 0 {
                    terminated = true;
                    break;
                }
            }
            if !terminated || value > u32::MAX as u64 {
                return Err(Error::MalformedVarInt {
                    max_bytes: MAX_VARINT32_BYTES,
                });
            }
            values.push(value as u32);
        }
        Ok(values)
    }
}
