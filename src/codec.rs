//! Primitive MQTT wire writers.
//!
//! Every multi-byte integer is written big-endian. Strings and binary data
//! carry a two byte length prefix unless written with one of the `_raw`
//! variants, whose length is implied by the enclosing packet.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Error;

/// Largest length a two byte length prefix can express.
pub const MAX_LENGTH_PREFIXED: usize = u16::MAX as usize;

pub trait Encoder {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()>;
}

/// Append-only byte sink used for one encode pass.
///
/// Bytes are never rewritten once appended, so a length prefix is produced
/// by encoding the prefixed block into its own `Writer` first and measuring it.
#[derive(Debug, Default)]
pub struct Writer {
    buffer: BytesMut,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn write_byte(&mut self, b: u8) {
        self.buffer.put_u8(b);
    }

    pub fn write_u8(&mut self, i: u8) {
        self.buffer.put_u8(i);
    }

    pub fn write_u16(&mut self, i: u16) {
        self.buffer.put_u16(i);
    }

    pub fn write_u32(&mut self, i: u32) {
        self.buffer.put_u32(i);
    }

    /// Reserves room for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    pub fn write_binary(&mut self, data: &[u8]) -> crate::Result<()> {
        if data.len() > MAX_LENGTH_PREFIXED {
            return Err(Error::BinaryTooLong { len: data.len() });
        }

        self.write_u16(data.len() as u16);
        self.buffer.put_slice(data);
        Ok(())
    }

    pub fn write_string(&mut self, text: &str) -> crate::Result<()> {
        if text.len() > MAX_LENGTH_PREFIXED {
            return Err(Error::StringTooLong { len: text.len() });
        }

        self.write_u16(text.len() as u16);
        self.buffer.put_slice(text.as_bytes());
        Ok(())
    }

    pub fn write_string_raw(&mut self, text: &str) {
        self.buffer.put_slice(text.as_bytes());
    }

    pub fn write_bytes_raw(&mut self, data: &[u8]) {
        self.buffer.put_slice(data);
    }

    pub fn write_variable(&mut self, value: u32) -> crate::Result<()> {
        VariableByteInteger(value).encode(self)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

fn encode_var_byte_integer(value: u32, writer: &mut Writer) {
    let mut x = value;

    loop {
        let mut encoded_byte: u8 = (x % 128) as u8;
        x /= 128;

        if x > 0 {
            encoded_byte |= 0b1000_0000;
        }

        writer.write_byte(encoded_byte);

        if x == 0 {
            break;
        }
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct VariableByteInteger(pub u32);

impl VariableByteInteger {
    pub const MAX: u32 = 268_435_455;

    pub fn encoded_size(&self) -> crate::Result<usize> {
        let size = match self.0 {
            0..=127 => 1,
            128..=16383 => 2,
            16384..=2097151 => 3,
            2097152..=268435455 => 4,
            v => return Err(Error::VariableByteIntegerOutOfRange(v.into())),
        };

        Ok(size)
    }
}

impl TryFrom<usize> for VariableByteInteger {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value > Self::MAX as usize {
            return Err(Error::VariableByteIntegerOutOfRange(value as u64));
        }

        Ok(VariableByteInteger(value as u32))
    }
}

impl Encoder for VariableByteInteger {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        if self.0 > Self::MAX {
            return Err(Error::VariableByteIntegerOutOfRange(self.0.into()));
        }

        encode_var_byte_integer(self.0, writer);
        Ok(())
    }
}

/// Encodes `value` as a standalone Variable Byte Integer, e.g. a remaining
/// length computed by packet assembly code.
pub fn encode_variable_byte_integer(value: u32) -> crate::Result<Bytes> {
    let mut writer = Writer::with_capacity(4);
    VariableByteInteger(value).encode(&mut writer)?;

    Ok(writer.freeze())
}

impl Encoder for u8 {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_u8(*self);
        Ok(())
    }
}

impl Encoder for u16 {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_u16(*self);
        Ok(())
    }
}

impl Encoder for u32 {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_u32(*self);
        Ok(())
    }
}

impl Encoder for bool {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_u8(*self as u8);
        Ok(())
    }
}

impl Encoder for str {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_string(self)
    }
}

impl Encoder for String {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_string(self)
    }
}

impl Encoder for Bytes {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_binary(self)
    }
}

impl<T> Encoder for Option<T>
where
    T: Encoder,
{
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        match self {
            Some(v) => v.encode(writer),
            None => Ok(()),
        }
    }
}

impl<T> Encoder for Vec<T>
where
    T: Encoder,
{
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        for e in self {
            e.encode(writer)?;
        }

        Ok(())
    }
}
