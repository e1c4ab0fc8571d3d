//! Runtime side of the foreign-call boundary.
//!
//! Emitted `extern "C"` thunks are one-liners into this module. Only raw pointers,
//! lengths, primitives and [`ThunkStatus`] cross the boundary; message handles are
//! `*mut c_void` pointing at a heap-allocated `Message<'static>`.
//!
//! # Safety
//!
//! Every `unsafe fn` here requires `msg` (and `src`/`other`) to be a live handle
//! returned by [`new_message`] and not yet passed to [`delete_message`], with no other
//! reference to the same instance alive for the duration of the call.

use crate::codec::{DispatchTable, Message};
use crate::descriptor::ScalarType;
use crate::value::Value;
use crate::wire::{DecodeError, WireType};
use std::ffi::c_void;

/// Plain-data decode result. `code` 0 means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThunkStatus {
    pub code: u32,
    /// Field number for wire-type mismatches, raw tag for invalid tags.
    pub field: u32,
    pub expected: u8,
    pub found: u8,
}

impl ThunkStatus {
    pub const OK: ThunkStatus = ThunkStatus {
        code: 0,
        field: 0,
        expected: 0,
        found: 0,
    };
    const TRUNCATED: u32 = 1;
    const MALFORMED_VARINT: u32 = 2;
    const WIRE_TYPE_MISMATCH: u32 = 3;
    const INVALID_TAG: u32 = 4;

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    pub fn from_result(r: Result<(), DecodeError>) -> ThunkStatus {
        match r {
            Ok(()) => ThunkStatus::OK,
            Err(e) => ThunkStatus::from_error(e),
        }
    }

    pub fn from_error(e: DecodeError) -> ThunkStatus {
        let (code, field, expected, found) = match e {
            DecodeError::Truncated => (Self::TRUNCATED, 0, 0, 0),
            DecodeError::MalformedVarint => (Self::MALFORMED_VARINT, 0, 0, 0),
            DecodeError::WireTypeMismatch { field, expected, found } => {
                (Self::WIRE_TYPE_MISMATCH, field, expected as u8, found as u8)
            }
            DecodeError::InvalidTag(tag) => (Self::INVALID_TAG, tag, 0, 0),
        };
        ThunkStatus {
            code,
            field,
            expected,
            found,
        }
    }

    /// Back to a `Result` on the calling side.
    pub fn into_result(self) -> Result<(), DecodeError> {
        let wire = |b: u8| WireType::from_bits(b as u32).unwrap_or(WireType::Varint);
        match self.code {
            0 => Ok(()),
            Self::TRUNCATED => Err(DecodeError::Truncated),
            Self::MALFORMED_VARINT => Err(DecodeError::MalformedVarint),
            Self::WIRE_TYPE_MISMATCH => Err(DecodeError::WireTypeMismatch {
                field: self.field,
                expected: wire(self.expected),
                found: wire(self.found),
            }),
            _ => Err(DecodeError::InvalidTag(self.field)),
        }
    }
}

/// Primitive that can cross the boundary as a field value.
pub trait ScalarBits: Copy {
    fn into_value(self, scalar: ScalarType) -> Value;
    fn from_value(v: Value) -> Self;
}

macro_rules! into_plain {
    (i32, $x:expr) => { Value::I32($x) };
    (i64, $x:expr) => { Value::I64($x) };
    (u32, $x:expr) => { Value::U32($x) };
    (u64, $x:expr) => { Value::U64($x) };
    (f32, $x:expr) => { Value::F32($x) };
    (f64, $x:expr) => { Value::F64($x) };
}

macro_rules! scalar_bits {
    ($t:ident, $($variant:ident),+) => {
        impl ScalarBits for $t {
            fn into_value(self, scalar: ScalarType) -> Value {
                match scalar {
                    ScalarType::Enum => Value::Enum(self as i32),
                    _ => into_plain!($t, self),
                }
            }
            fn from_value(v: Value) -> Self {
                match v {
                    $(Value::$variant(x) => x as $t,)+
                    _ => <$t>::default(),
                }
            }
        }
    };
}

scalar_bits!(i32, I32, Enum);
scalar_bits!(i64, I64);
scalar_bits!(u32, U32);
scalar_bits!(u64, U64);
scalar_bits!(f32, F32);
scalar_bits!(f64, F64);

impl ScalarBits for bool {
    fn into_value(self, _scalar: ScalarType) -> Value {
        Value::Bool(self)
    }
    fn from_value(v: Value) -> Self {
        v.as_bool().unwrap_or(false)
    }
}

unsafe fn message<'a>(msg: *mut c_void) -> &'a mut Message<'static> {
    debug_assert!(!msg.is_null(), "null message handle");
    &mut *(msg as *mut Message<'static>)
}

unsafe fn message_ref<'a>(msg: *mut c_void) -> &'a Message<'static> {
    debug_assert!(!msg.is_null(), "null message handle");
    &*(msg as *const Message<'static>)
}

pub fn new_message(table: &'static DispatchTable) -> *mut c_void {
    Box::into_raw(Box::new(Message::new(table))) as *mut c_void
}

/// # Safety
/// See the module docs. `msg` is invalid after this call.
pub unsafe fn delete_message(msg: *mut c_void) {
    if !msg.is_null() {
        drop(Box::from_raw(msg as *mut Message<'static>));
    }
}

/// # Safety
/// See the module docs.
pub unsafe fn clear(msg: *mut c_void) {
    message(msg).clear();
}

/// # Safety
/// See the module docs.
pub unsafe fn byte_size(msg: *mut c_void) -> usize {
    message_ref(msg).byte_size()
}

/// Returns the number of bytes written, or -1 if `out_len` is too small.
///
/// # Safety
/// See the module docs; `out` must be valid for `out_len` bytes of writes.
pub unsafe fn serialize(msg: *mut c_void, out: *mut u8, out_len: usize) -> isize {
    let m = message_ref(msg);
    let out: &mut [u8] = if out_len == 0 {
        &mut []
    } else {
        std::slice::from_raw_parts_mut(out, out_len)
    };
    match m.serialize_into(out) {
        Ok(n) => n as isize,
        Err(_) => -1,
    }
}

/// # Safety
/// See the module docs; `data` must be valid for `len` bytes of reads (or null with `len == 0`).
pub unsafe fn parse(msg: *mut c_void, data: *const u8, len: usize) -> ThunkStatus {
    let bytes: &[u8] = if len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len)
    };
    ThunkStatus::from_result(message(msg).parse(bytes))
}

/// # Safety
/// See the module docs. Self-merge aborts.
pub unsafe fn merge(dst: *mut c_void, src: *mut c_void) {
    assert!(dst != src, "merge: self-merge through thunk");
    let src = message_ref(src);
    message(dst).merge_from(src);
}

/// # Safety
/// See the module docs.
pub unsafe fn swap(a: *mut c_void, b: *mut c_void) {
    if a == b {
        return;
    }
    message(a).swap(message(b));
}

/// # Safety
/// See the module docs.
pub unsafe fn get<T: ScalarBits>(msg: *mut c_void, slot: usize) -> T {
    T::from_value(message_ref(msg).get_slot(slot))
}

/// # Safety
/// See the module docs.
pub unsafe fn set<T: ScalarBits>(msg: *mut c_void, slot: usize, value: T) {
    let m = message(msg);
    let scalar = m.table().entry_for_slot(slot).scalar;
    m.set_slot(slot, value.into_value(scalar));
}

/// # Safety
/// See the module docs.
pub unsafe fn has(msg: *mut c_void, slot: usize) -> bool {
    message_ref(msg).has_slot(slot)
}

/// # Safety
/// See the module docs.
pub unsafe fn clear_field(msg: *mut c_void, slot: usize) {
    message(msg).clear_slot(slot);
}
