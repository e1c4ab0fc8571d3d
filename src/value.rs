//! Runtime scalar values (codec representation) and the effective state of a field.

use crate::descriptor::ScalarType;

/// A single scalar field value.
///
/// Inside a [`Message`](crate::codec::Message) every value is stored as a raw `u64`
/// bit pattern; `Value` is the typed form at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    Bool(bool),
    F32(f32),
    F64(f64),
    /// Open enum: any `i32` is accepted, named or not.
    Enum(i32),
}

impl Value {
    /// The zero value of a scalar type.
    pub fn zero(scalar: ScalarType) -> Value {
        Value::from_bits(scalar, 0)
    }

    /// Rebuild a typed value from a slot's raw bit pattern.
    pub fn from_bits(scalar: ScalarType, bits: u64) -> Value {
        match scalar {
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => {
                Value::I32(bits as u32 as i32)
            }
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => Value::I64(bits as i64),
            ScalarType::Uint32 | ScalarType::Fixed32 => Value::U32(bits as u32),
            ScalarType::Uint64 | ScalarType::Fixed64 => Value::U64(bits),
            ScalarType::Bool => Value::Bool(bits != 0),
            ScalarType::Float => Value::F32(f32::from_bits(bits as u32)),
            ScalarType::Double => Value::F64(f64::from_bits(bits)),
            ScalarType::Enum => Value::Enum(bits as u32 as i32),
        }
    }

    /// Raw bit pattern stored in a slot. Zero iff the value is the type's zero
    /// (`-0.0` is not zero: its sign bit is set).
    pub fn to_bits(self) -> u64 {
        match self {
            Value::I32(x) | Value::Enum(x) => x as u32 as u64,
            Value::I64(x) => x as u64,
            Value::U32(x) => x as u64,
            Value::U64(x) => x,
            Value::Bool(x) => x as u64,
            Value::F32(x) => x.to_bits() as u64,
            Value::F64(x) => x.to_bits(),
        }
    }

    pub fn is_zero(self) -> bool {
        self.to_bits() == 0
    }

    /// True if this value can be stored in a field of type `scalar`.
    pub fn fits(self, scalar: ScalarType) -> bool {
        matches!(
            (self, scalar),
            (
                Value::I32(_),
                ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32
            ) | (
                Value::I64(_),
                ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64
            ) | (Value::U32(_), ScalarType::Uint32 | ScalarType::Fixed32)
                | (Value::U64(_), ScalarType::Uint64 | ScalarType::Fixed64)
                | (Value::Bool(_), ScalarType::Bool)
                | (Value::F32(_), ScalarType::Float)
                | (Value::F64(_), ScalarType::Double)
                | (Value::Enum(_), ScalarType::Enum)
        )
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Value::I32(x) | Value::Enum(x) => Some(x as i64),
            Value::I64(x) => Some(x),
            Value::U32(x) => Some(x as i64),
            Value::U64(x) => x.try_into().ok(),
            Value::Bool(x) => Some(x as i64),
            _ => None,
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        match self {
            Value::U32(x) => Some(x as u64),
            Value::U64(x) => Some(x),
            Value::I32(x) | Value::Enum(x) => x.try_into().ok(),
            Value::I64(x) => x.try_into().ok(),
            Value::Bool(x) => Some(x as u64),
            _ => None,
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            Value::F32(x) => Some(x as f64),
            Value::F64(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(x) => Some(x),
            _ => None,
        }
    }
}

/// Effective state of a field, derived from its presence bit and raw slot value.
///
/// A field can be present yet equal to zero; for implicit-presence fields that
/// state is not written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Absent,
    PresentZero,
    PresentNonZero,
}

impl FieldState {
    pub fn from_parts(has_bit: bool, bits: u64) -> FieldState {
        match (has_bit, bits) {
            (false, _) => FieldState::Absent,
            (true, 0) => FieldState::PresentZero,
            (true, _) => FieldState::PresentNonZero,
        }
    }

    pub fn is_present(self) -> bool {
        self != FieldState::Absent
    }
}
