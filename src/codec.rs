//! Table-driven message codec.
//!
//! A [`DispatchTable`] describes one message type: its field entries in ascending tag
//! order, the slot each field lives in, and a direct-index fast table for small field
//! numbers. Tables are built once per type and shared read-only by every instance.
//!
//! A [`Message`] is one instance: a presence word, one `u64` slot per field (raw bit
//! pattern), an unknown-field buffer and a cached byte size. All operations are
//! defined purely on those slots, so they behave the same whether the instance is
//! owned outright or lives in an [`Arena`](crate::arena::Arena).
//!
//! Serialization rule: a field is written iff its presence bit is set and, for
//! implicit-presence fields, its raw value is non-zero. Explicit-presence fields are
//! written whenever present, including present-zero.

use crate::arena::ArenaId;
use crate::descriptor::{MessageDescriptor, Presence, ScalarType};
use crate::value::{FieldState, Value};
use crate::walk::skip_field;
use crate::wire::{self, make_tag, split_tag, varint_len, DecodeError, WireReader, WireWriter};
use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Field numbers below this bound are dispatched through a direct-index table.
pub const FAST_TABLE_LEN: usize = 32;
const NO_ENTRY: u8 = u8::MAX;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("Unknown field {number} in {message}")]
    UnknownField { message: String, number: u32 },
    #[error("Type mismatch: field {number} is {expected}")]
    TypeMismatch { number: u32, expected: &'static str },
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("Decode: {0}")]
    Decode(#[from] DecodeError),
}

/// One dispatch table entry: everything needed to decode, size and encode a field
/// without consulting the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub name: Cow<'static, str>,
    pub number: u32,
    pub tag: u32,
    pub tag_len: u8,
    pub scalar: ScalarType,
    pub presence: Presence,
    /// Index into the instance's slot storage (declaration order).
    pub slot: u16,
    /// Bit index in the presence word.
    pub has_bit: u8,
    /// Returned by accessors while the presence bit is clear.
    pub default_bits: u64,
}

impl FieldEntry {
    /// `const` so generated code can build its entries as a `static` array.
    pub const fn new(
        name: &'static str,
        number: u32,
        scalar: ScalarType,
        presence: Presence,
        slot: u16,
    ) -> Self {
        let tag = make_tag(number, scalar.wire_type());
        FieldEntry {
            name: Cow::Borrowed(name),
            number,
            tag,
            tag_len: varint_len(tag as u64) as u8,
            scalar,
            presence,
            slot,
            has_bit: slot as u8,
            default_bits: 0,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, bits: u64) -> Self {
        self.default_bits = bits;
        self
    }

    fn mask(&self) -> u64 {
        1u64 << self.has_bit
    }
}

/// Frozen per-type dispatch table.
#[derive(Clone, PartialEq)]
pub struct DispatchTable {
    full_name: Cow<'static, str>,
    /// Ascending field number (= ascending tag) order.
    entries: Box<[FieldEntry]>,
    /// Slot index → entry index.
    by_slot: Box<[u8]>,
    /// Field number → entry index, `NO_ENTRY` if absent.
    fast: [u8; FAST_TABLE_LEN],
}

impl DispatchTable {
    /// Build a table from entries in any order. Slots must be `0..entries.len()`.
    pub fn new(full_name: impl Into<Cow<'static, str>>, entries: impl Into<Vec<FieldEntry>>) -> Self {
        let mut entries: Vec<FieldEntry> = entries.into();
        entries.sort_by_key(|e| e.number);
        debug_assert!(
            entries.windows(2).all(|w| w[0].number != w[1].number),
            "duplicate field number in dispatch table"
        );
        debug_assert!(entries.len() <= crate::descriptor::MAX_FIELDS_PER_MESSAGE);

        let mut by_slot = vec![0u8; entries.len()];
        let mut fast = [NO_ENTRY; FAST_TABLE_LEN];
        for (i, e) in entries.iter().enumerate() {
            by_slot[e.slot as usize] = i as u8;
            if (e.number as usize) < FAST_TABLE_LEN {
                fast[e.number as usize] = i as u8;
            }
        }
        DispatchTable {
            full_name: full_name.into(),
            entries: entries.into_boxed_slice(),
            by_slot: by_slot.into_boxed_slice(),
            fast,
        }
    }

    /// Lay out a validated message descriptor: slots in declaration order.
    pub fn from_descriptor(desc: &MessageDescriptor) -> Self {
        let entries: Vec<FieldEntry> = desc
            .fields
            .iter()
            .enumerate()
            .map(|(slot, f)| {
                let tag = make_tag(f.number, f.scalar.wire_type());
                FieldEntry {
                    name: Cow::Owned(f.name.clone()),
                    number: f.number,
                    tag,
                    tag_len: varint_len(tag as u64) as u8,
                    scalar: f.scalar,
                    presence: f.presence,
                    slot: slot as u16,
                    has_bit: slot as u8,
                    default_bits: f.default.map(Value::to_bits).unwrap_or(0),
                }
            })
            .collect();
        DispatchTable::new(desc.full_name.clone(), entries)
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Entries in ascending tag order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// Fast path for small field numbers, binary search above.
    #[inline]
    pub fn lookup(&self, number: u32) -> Option<&FieldEntry> {
        if (number as usize) < FAST_TABLE_LEN {
            match self.fast[number as usize] {
                NO_ENTRY => None,
                i => Some(&self.entries[i as usize]),
            }
        } else {
            self.entries
                .binary_search_by_key(&number, |e| e.number)
                .ok()
                .map(|i| &self.entries[i])
        }
    }

    pub fn entry_for_slot(&self, slot: usize) -> &FieldEntry {
        &self.entries[self.by_slot[slot] as usize]
    }

    pub fn entry_by_name(&self, name: &str) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn same_layout(&self, other: &DispatchTable) -> bool {
        std::ptr::eq(self, other) || self == other
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("full_name", &self.full_name)
            .field("fields", &self.entries.len())
            .finish()
    }
}

/// How an instance's storage is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// Freed when the instance is dropped.
    Owned,
    /// Freed in bulk when the arena is dropped or reset.
    Arena(ArenaId),
}

const SIZE_UNSET: usize = usize::MAX;

/// Byte size remembered between `byte_size` and the following serialize.
/// Atomic so that shared readers may compute it concurrently.
struct CachedSize(AtomicUsize);

impl CachedSize {
    fn new() -> Self {
        CachedSize(AtomicUsize::new(SIZE_UNSET))
    }

    fn get(&self) -> Option<usize> {
        match self.0.load(Ordering::Relaxed) {
            SIZE_UNSET => None,
            n => Some(n),
        }
    }

    fn set(&self, n: usize) {
        self.0.store(n, Ordering::Relaxed);
    }

    fn invalidate(&self) {
        self.0.store(SIZE_UNSET, Ordering::Relaxed);
    }
}

/// One message instance.
pub struct Message<'t> {
    table: &'t DispatchTable,
    has_bits: u64,
    slots: Box<[u64]>,
    unknown: Vec<u8>,
    cached_size: CachedSize,
    allocation: Allocation,
}

impl<'t> Message<'t> {
    /// New owned instance: all slots zero, all presence bits clear.
    pub fn new(table: &'t DispatchTable) -> Self {
        Message::with_allocation(table, Allocation::Owned)
    }

    pub(crate) fn with_allocation(table: &'t DispatchTable, allocation: Allocation) -> Self {
        Message {
            table,
            has_bits: 0,
            slots: vec![0u64; table.slot_count()].into_boxed_slice(),
            unknown: Vec::new(),
            cached_size: CachedSize::new(),
            allocation,
        }
    }

    pub fn table(&self) -> &'t DispatchTable {
        self.table
    }

    pub fn allocation(&self) -> Allocation {
        self.allocation
    }

    pub(crate) fn set_allocation(&mut self, allocation: Allocation) {
        self.allocation = allocation;
    }

    pub fn has_bits(&self) -> u64 {
        self.has_bits
    }

    /// Raw bytes of fields not in the table, in the order they were parsed.
    pub fn unknown_fields(&self) -> &[u8] {
        &self.unknown
    }

    // ---- field access ----

    fn entry(&self, number: u32) -> Result<&'t FieldEntry, CodecError> {
        self.table.lookup(number).ok_or_else(|| CodecError::UnknownField {
            message: self.table.full_name().to_string(),
            number,
        })
    }

    fn read(&self, e: &FieldEntry) -> Value {
        let bits = if self.has_bits & e.mask() != 0 {
            self.slots[e.slot as usize]
        } else {
            e.default_bits
        };
        Value::from_bits(e.scalar, bits)
    }

    fn store(&mut self, e: &FieldEntry, bits: u64) {
        self.slots[e.slot as usize] = bits;
        self.has_bits |= e.mask();
        self.cached_size.invalidate();
    }

    fn unset(&mut self, e: &FieldEntry) {
        self.slots[e.slot as usize] = 0;
        self.has_bits &= !e.mask();
        self.cached_size.invalidate();
    }

    /// Value of a field, or its default while absent. `None` for unknown numbers.
    pub fn get(&self, number: u32) -> Option<Value> {
        self.table.lookup(number).map(|e| self.read(e))
    }

    pub fn set(&mut self, number: u32, value: Value) -> Result<(), CodecError> {
        let e = self.entry(number)?;
        if !value.fits(e.scalar) {
            return Err(CodecError::TypeMismatch {
                number,
                expected: e.scalar.keyword(),
            });
        }
        self.store(e, value.to_bits());
        Ok(())
    }

    pub fn has(&self, number: u32) -> bool {
        self.table
            .lookup(number)
            .is_some_and(|e| self.has_bits & e.mask() != 0)
    }

    pub fn clear_field(&mut self, number: u32) -> Result<(), CodecError> {
        let e = self.entry(number)?;
        self.unset(e);
        Ok(())
    }

    pub fn field_state(&self, number: u32) -> Option<FieldState> {
        self.table
            .lookup(number)
            .map(|e| FieldState::from_parts(self.has_bits & e.mask() != 0, self.slots[e.slot as usize]))
    }

    /// Slot-indexed getter used by generated code.
    #[doc(hidden)]
    pub fn get_slot(&self, slot: usize) -> Value {
        self.read(self.table.entry_for_slot(slot))
    }

    /// Slot-indexed setter used by generated code; the generator guarantees the type.
    #[doc(hidden)]
    pub fn set_slot(&mut self, slot: usize, value: Value) {
        let e = self.table.entry_for_slot(slot);
        debug_assert!(value.fits(e.scalar), "{}: wrong value type for slot {}", self.table.full_name(), slot);
        self.store(e, value.to_bits());
    }

    #[doc(hidden)]
    pub fn has_slot(&self, slot: usize) -> bool {
        self.has_bits & self.table.entry_for_slot(slot).mask() != 0
    }

    #[doc(hidden)]
    pub fn clear_slot(&mut self, slot: usize) {
        let e = self.table.entry_for_slot(slot);
        self.unset(e);
    }

    // ---- codec operations ----

    fn emits(&self, e: &FieldEntry) -> bool {
        if self.has_bits & e.mask() == 0 {
            return false;
        }
        match e.presence {
            Presence::Explicit => true,
            Presence::Implicit => self.slots[e.slot as usize] != 0,
        }
    }

    /// Reset to the freshly-constructed state and drop unknown fields. Idempotent.
    pub fn clear(&mut self) {
        if self.has_bits != 0 {
            self.slots.fill(0);
        }
        self.has_bits = 0;
        self.unknown.clear();
        self.cached_size.invalidate();
    }

    /// `clear` followed by [`merge_from_bytes`](Self::merge_from_bytes).
    pub fn parse(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.clear();
        self.merge_from_bytes(bytes)
    }

    /// Decode `bytes` on top of the current contents (last value wins).
    ///
    /// On error, fields decoded before the failing one are kept; the failing field
    /// is never half-written.
    pub fn merge_from_bytes(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.cached_size.invalidate();
        let table = self.table;
        let mut r = WireReader::new(bytes);
        while !r.is_empty() {
            let start = r.position();
            let (number, wire_type) = split_tag(r.read_tag()?)?;
            match table.lookup(number) {
                Some(e) => {
                    let expected = e.scalar.wire_type();
                    if wire_type != expected {
                        return Err(DecodeError::WireTypeMismatch {
                            field: number,
                            expected,
                            found: wire_type,
                        });
                    }
                    let bits = r.read_scalar(e.scalar)?;
                    self.slots[e.slot as usize] = bits;
                    self.has_bits |= e.mask();
                }
                None => {
                    skip_field(&mut r, number, wire_type)?;
                    let raw = r.since(start);
                    tracing::trace!(
                        message = %table.full_name(),
                        field = number,
                        len = raw.len(),
                        "preserving unknown field"
                    );
                    self.unknown.extend_from_slice(raw);
                }
            }
        }
        Ok(())
    }

    /// Encoded size; cached until the next mutation.
    pub fn byte_size(&self) -> usize {
        let known: usize = self
            .table
            .entries()
            .iter()
            .filter(|e| self.emits(e))
            .map(|e| e.tag_len as usize + wire::scalar_len(e.scalar, self.slots[e.slot as usize]))
            .sum();
        let size = known + self.unknown.len();
        self.cached_size.set(size);
        size
    }

    /// Size computed by the last `byte_size` call, if nothing changed since.
    pub fn cached_size(&self) -> Option<usize> {
        self.cached_size.get()
    }

    fn write_to(&self, w: &mut WireWriter<'_>) {
        for e in self.table.entries().iter().filter(|e| self.emits(e)) {
            w.write_varint(e.tag as u64);
            w.write_scalar(e.scalar, self.slots[e.slot as usize]);
        }
        w.write_bytes(&self.unknown);
    }

    /// Write into a caller-sized buffer; returns the number of bytes written.
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, CodecError> {
        let needed = self.cached_size().unwrap_or_else(|| self.byte_size());
        if out.len() < needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }
        let mut w = WireWriter::new(out);
        self.write_to(&mut w);
        Ok(w.position())
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_size()];
        let mut w = WireWriter::new(&mut out);
        self.write_to(&mut w);
        debug_assert_eq!(w.position(), out.len());
        out
    }

    /// Copy every field of `src` that would be serialized, OR in its presence word and
    /// append its unknown fields. Both instances must be of the same message type.
    pub fn merge_from(&mut self, src: &Message<'_>) {
        debug_assert!(
            !std::ptr::eq(self as *const Self as *const (), src as *const Message<'_> as *const ()),
            "merge_from: self-merge"
        );
        assert!(
            self.table.same_layout(src.table),
            "merge_from: {} <- {}",
            self.table.full_name(),
            src.table.full_name()
        );
        for e in src.table.entries().iter().filter(|e| src.emits(e)) {
            self.slots[e.slot as usize] = src.slots[e.slot as usize];
        }
        self.has_bits |= src.has_bits;
        self.unknown.extend_from_slice(&src.unknown);
        self.cached_size.invalidate();
    }

    /// Exchange contents with another instance of the same type. Storage buffers are
    /// swapped, not copied; each instance keeps its own allocation mode.
    pub fn swap(&mut self, other: &mut Message<'t>) {
        assert!(
            self.table.same_layout(other.table),
            "swap: {} <-> {}",
            self.table.full_name(),
            other.table.full_name()
        );
        std::mem::swap(&mut self.has_bits, &mut other.has_bits);
        std::mem::swap(&mut self.slots, &mut other.slots);
        std::mem::swap(&mut self.unknown, &mut other.unknown);
        let mine = self.cached_size.0.load(Ordering::Relaxed);
        let theirs = other.cached_size.0.swap(mine, Ordering::Relaxed);
        self.cached_size.0.store(theirs, Ordering::Relaxed);
    }
}

impl Clone for Message<'_> {
    /// Clones are always owned, whatever the source's allocation mode.
    fn clone(&self) -> Self {
        let cached_size = CachedSize::new();
        if let Some(n) = self.cached_size.get() {
            cached_size.set(n);
        }
        Message {
            table: self.table,
            has_bits: self.has_bits,
            slots: self.slots.clone(),
            unknown: self.unknown.clone(),
            cached_size,
            allocation: Allocation::Owned,
        }
    }
}

impl PartialEq for Message<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.table.same_layout(other.table)
            && self.has_bits == other.has_bits
            && self.slots == other.slots
            && self.unknown == other.unknown
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("type", &self.table.full_name())
            .field("has_bits", &format_args!("{:#x}", self.has_bits))
            .field("slots", &self.slots)
            .field("unknown_len", &self.unknown.len())
            .field("allocation", &self.allocation)
            .finish()
    }
}

impl Drop for Message<'_> {
    fn drop(&mut self) {
        debug_assert!(
            !matches!(self.allocation, Allocation::Arena(_)),
            "arena-owned {} dropped outside its arena",
            self.table.full_name()
        );
    }
}
