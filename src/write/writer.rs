use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use num::ToPrimitive;

use crate::errors::{Error, Result};
use crate::write::BinaryWriter;
use crate::{ByteOrder, DataSize};

/// Encodes typed values into a growable byte buffer.
///
/// Short-lived: one instance per page or metadata block, used for one
/// contiguous sequence of writes and then taken apart with
/// [`BinaryBufferWriter::into_inner`].
#[derive(Debug)]
pub struct BinaryBufferWriter {
    buffer: Vec<u8>,
    byte_order: ByteOrder,
    length: DataSize,
}

// Fixed-width primitives take a memcpy fast path when the configured order
// matches the machine, and a byteorder swap path otherwise.
macro_rules! write_fixed {
    ($self:ident, $values:ident, $size:literal, $write_into:ident) => {{
        if $self.byte_order.is_native() {
            $self.buffer.extend_from_slice(bytemuck::cast_slice($values));
        } else {
            let start = $self.buffer.len();
            $self.buffer.resize(start + $values.len() * $size, 0);
            match $self.byte_order {
                ByteOrder::LittleEndian => {
                    LittleEndian::$write_into($values, &mut $self.buffer[start..])
                }
                ByteOrder::BigEndian => {
                    BigEndian::$write_into($values, &mut $self.buffer[start..])
                }
            }
        }
        $self.length.add_bytes(($values.len() * $size) as u64);
    }};
}

impl BinaryBufferWriter {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self::with_capacity(byte_order, 0)
    }

    pub fn with_capacity(byte_order: ByteOrder, capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            byte_order,
            length: DataSize::default(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl BinaryWriter for BinaryBufferWriter {
    fn append(&mut self, buffer: &[u8]) {
        self.buffer.extend_from_slice(buffer);
        self.length.add_bytes(buffer.len() as u64);
    }

    fn length(&self) -> DataSize {
        self.length
    }

    fn write_bits(&mut self, bits: &[bool]) {
        let mut byte = 0u8;
        let mut bit_index = 0;

        for &bit in bits {
            if bit {
                byte |= 1 << bit_index;
            }

            bit_index += 1;

            if bit_index == 8 {
                self.buffer.push(byte);
                self.length.add_bytes(1);
                byte = 0;
                bit_index = 0;
            }
        }

        // remaining bits that don't fill a byte, padded with zeros
        if bit_index > 0 {
            self.buffer.push(byte);
            self.length.add_bytes(1);
        }
    }

    fn write_booleans(&mut self, values: &[bool]) {
        self.write_bits(values);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
        self.length.add_bytes(bytes.len() as u64);
    }

    fn write_decimals(
        &mut self,
        values: &[f64],
        byte_length: usize,
        precision: u8,
        scale: u8,
    ) -> Result<()> {
        assert!((1..=16).contains(&byte_length));

        let factor = 10f64.powi(scale as i32);
        let digits_bound = 10u128.pow(precision as u32);

        for &value in values {
            let precision_loss = || Error::PrecisionLoss {
                value,
                precision,
                scale,
                byte_length,
            };

            let unscaled = (value * factor)
                .round()
                .to_i128()
                .ok_or_else(precision_loss)?;
            if unscaled.unsigned_abs() >= digits_bound || !fits(unscaled, byte_length) {
                return Err(precision_loss());
            }

            let be = unscaled.to_be_bytes();
            match self.byte_order {
                ByteOrder::BigEndian => self.buffer.extend_from_slice(&be[16 - byte_length..]),
                ByteOrder::LittleEndian => {
                    self.buffer.extend(be[16 - byte_length..].iter().rev())
                }
            }
            self.length.add_bytes(byte_length as u64);
        }
        Ok(())
    }

    fn write_doubles(&mut self, values: &[f64]) {
        write_fixed!(self, values, 8, write_f64_into)
    }

    fn write_floats(&mut self, values: &[f32]) {
        write_fixed!(self, values, 4, write_f32_into)
    }

    fn write_ints32(&mut self, values: &[i32]) {
        write_fixed!(self, values, 4, write_i32_into)
    }

    fn write_ints64(&mut self, values: &[i64]) {
        write_fixed!(self, values, 8, write_i64_into)
    }

    fn write_strings(&mut self, values: &[&str]) {
        for string in values {
            let mut prefix = [0u8; 4];
            match self.byte_order {
                ByteOrder::LittleEndian => LittleEndian::write_u32(&mut prefix, string.len() as u32),
                ByteOrder::BigEndian => BigEndian::write_u32(&mut prefix, string.len() as u32),
            }
            self.buffer.extend_from_slice(&prefix);
            self.buffer.extend_from_slice(string.as_bytes());
            self.length.add_bytes(4 + string.len() as u64);
        }
    }

    fn write_var_ints32(&mut self, values: &[u32]) {
        for &value in values {
            let mut value = value;
            loop {
                let mut byte = (value & 0x7F) as u8;
                value >>= 7;
                if value != 0 {
                    byte |= 0x80;
                }
                self.buffer.push(byte);
                self.length.add_bytes(1);
                if value == 0 {
                    break;
                }
            }
        }
    }
}

/// Whether `value` is representable as `byte_length` two's-complement bytes.
fn fits(value: i128, byte_length: usize) -> bool {
    if byte_length >= 16 {
        return true;
    }
    let bits = byte_length as u32 * 8;
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << (bits - 1)) - 1;
    (min..=max).contains(&value)
}
