//! Wire primitives: tags, base-128 varints, zigzag, fixed-width little-endian values.
//!
//! Everything here is bit-exact protobuf encoding. Scalars move between the wire and
//! message slots as raw `u64` bit patterns (see [`Value::to_bits`](crate::value::Value::to_bits)).

use crate::descriptor::ScalarType;
use byteorder::{ByteOrder, LittleEndian};

/// Longest valid varint encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub fn from_bits(bits: u32) -> Option<WireType> {
        Some(match bits {
            0 => WireType::Varint,
            1 => WireType::Fixed64,
            2 => WireType::LengthDelimited,
            3 => WireType::StartGroup,
            4 => WireType::EndGroup,
            5 => WireType::Fixed32,
            _ => return None,
        })
    }
}

/// Runtime decode failure. Fields decoded before the failure are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated input")]
    Truncated,
    #[error("malformed varint")]
    MalformedVarint,
    #[error("field {field}: wire type mismatch (expected {expected:?}, found {found:?})")]
    WireTypeMismatch {
        field: u32,
        expected: WireType,
        found: WireType,
    },
    #[error("invalid tag {0:#x}")]
    InvalidTag(u32),
}

/// Tag = `(field_number << 3) | wire_type`.
pub const fn make_tag(number: u32, wire_type: WireType) -> u32 {
    (number << 3) | wire_type as u32
}

/// Split a raw tag; rejects field number 0 and wire types 6 and 7.
pub fn split_tag(tag: u32) -> Result<(u32, WireType), DecodeError> {
    let number = tag >> 3;
    match WireType::from_bits(tag & 7) {
        Some(wt) if number != 0 => Ok((number, wt)),
        _ => Err(DecodeError::InvalidTag(tag)),
    }
}

pub const fn varint_len(mut v: u64) -> usize {
    let mut n = 1;
    while v >= 0x80 {
        v >>= 7;
        n += 1;
    }
    n
}

pub fn zigzag_encode32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

pub fn zigzag_decode32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

pub fn zigzag_encode64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

pub fn zigzag_decode64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

/// Bounded reader over an input slice.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        WireReader { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.buf[start..self.pos]
    }

    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for i in 0..MAX_VARINT_LEN {
            let b = *self.buf.get(self.pos).ok_or(DecodeError::Truncated)?;
            self.pos += 1;
            // The 10th byte may only carry the top bit of a u64.
            if i == MAX_VARINT_LEN - 1 && b > 1 {
                return Err(DecodeError::MalformedVarint);
            }
            value |= ((b & 0x7f) as u64) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::MalformedVarint)
    }

    pub fn read_tag(&mut self) -> Result<u32, DecodeError> {
        let v = self.read_varint()?;
        u32::try_from(v).map_err(|_| DecodeError::InvalidTag(v as u32))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::Truncated);
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_fixed64(&mut self) -> Result<u64, DecodeError> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Decode one scalar into its slot bit pattern.
    pub fn read_scalar(&mut self, scalar: ScalarType) -> Result<u64, DecodeError> {
        Ok(match scalar {
            ScalarType::Int32 | ScalarType::Enum => self.read_varint()? as u32 as u64,
            ScalarType::Uint32 => self.read_varint()? as u32 as u64,
            ScalarType::Int64 | ScalarType::Uint64 => self.read_varint()?,
            ScalarType::Sint32 => zigzag_decode32(self.read_varint()? as u32) as u32 as u64,
            ScalarType::Sint64 => zigzag_decode64(self.read_varint()?) as u64,
            ScalarType::Bool => (self.read_varint()? != 0) as u64,
            ScalarType::Fixed32 | ScalarType::Sfixed32 | ScalarType::Float => self.read_fixed32()? as u64,
            ScalarType::Fixed64 | ScalarType::Sfixed64 | ScalarType::Double => self.read_fixed64()?,
        })
    }
}

/// Value to put on the wire as a varint for a slot bit pattern.
fn varint_payload(scalar: ScalarType, bits: u64) -> u64 {
    match scalar {
        // Negative int32/enum values are sign-extended to 64 bits (10 bytes on the wire).
        ScalarType::Int32 | ScalarType::Enum => bits as u32 as i32 as i64 as u64,
        ScalarType::Sint32 => zigzag_encode32(bits as u32 as i32) as u64,
        ScalarType::Sint64 => zigzag_encode64(bits as i64),
        _ => bits,
    }
}

/// Encoded length of a scalar value (without its tag).
pub fn scalar_len(scalar: ScalarType, bits: u64) -> usize {
    match scalar.wire_type() {
        WireType::Fixed32 => 4,
        WireType::Fixed64 => 8,
        _ => varint_len(varint_payload(scalar, bits)),
    }
}

/// Writer into a caller-sized slice. Callers size the slice with `byte_size` first;
/// writing past the end panics.
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        WireWriter { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn write_varint(&mut self, mut v: u64) {
        while v >= 0x80 {
            self.buf[self.pos] = (v as u8) | 0x80;
            self.pos += 1;
            v >>= 7;
        }
        self.buf[self.pos] = v as u8;
        self.pos += 1;
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    pub fn write_scalar(&mut self, scalar: ScalarType, bits: u64) {
        match scalar.wire_type() {
            WireType::Fixed32 => {
                LittleEndian::write_u32(&mut self.buf[self.pos..self.pos + 4], bits as u32);
                self.pos += 4;
            }
            WireType::Fixed64 => {
                LittleEndian::write_u64(&mut self.buf[self.pos..self.pos + 8], bits);
                self.pos += 8;
            }
            _ => self.write_varint(varint_payload(scalar, bits)),
        }
    }
}

/// Append a varint to a growable buffer.
pub fn push_varint(out: &mut Vec<u8>, mut v: u64) {
    while v >= 0x80 {
        out.push((v as u8) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}
