//! Zero-copy walk over wire bytes.
//!
//! This module provides **structure-only** traversal: it advances a byte position by
//! following tags and wire types without consulting any dispatch table and without
//! decoding values. The codec uses [`skip_field`] to capture unknown fields verbatim;
//! the same walker answers "how many fields / is this well formed" questions cheaply.
//!
//! | Use case | Prefer |
//! |----------|--------|
//! | Raw extent of one field after its tag | [`skip_field`] |
//! | Iterate `(number, wire type, bytes)` | [`FieldWalker`] |
//! | Check a buffer is structurally valid | [`validate_wire`] |
//! | Full decode into slots | [codec](crate::codec) |

use crate::wire::{split_tag, DecodeError, WireReader, WireType};

/// Groups nested deeper than this are rejected instead of recursing further.
const MAX_GROUP_DEPTH: usize = 64;

/// Skip the value of a field whose tag has just been read. On return the reader is
/// positioned after the value (after the matching end-group tag for groups).
pub fn skip_field(r: &mut WireReader<'_>, number: u32, wire_type: WireType) -> Result<(), DecodeError> {
    skip_field_at_depth(r, number, wire_type, 0)
}

fn skip_field_at_depth(
    r: &mut WireReader<'_>,
    number: u32,
    wire_type: WireType,
    depth: usize,
) -> Result<(), DecodeError> {
    match wire_type {
        WireType::Varint => {
            r.read_varint()?;
        }
        WireType::Fixed64 => {
            r.read_bytes(8)?;
        }
        WireType::Fixed32 => {
            r.read_bytes(4)?;
        }
        WireType::LengthDelimited => {
            let len = r.read_varint()?;
            let len = usize::try_from(len).map_err(|_| DecodeError::Truncated)?;
            r.read_bytes(len)?;
        }
        WireType::StartGroup => {
            if depth >= MAX_GROUP_DEPTH {
                return Err(DecodeError::InvalidTag(crate::wire::make_tag(number, wire_type)));
            }
            loop {
                if r.is_empty() {
                    return Err(DecodeError::Truncated);
                }
                let tag = r.read_tag()?;
                let (inner, inner_wt) = split_tag(tag)?;
                if inner_wt == WireType::EndGroup {
                    if inner != number {
                        return Err(DecodeError::InvalidTag(tag));
                    }
                    break;
                }
                skip_field_at_depth(r, inner, inner_wt, depth + 1)?;
            }
        }
        // A stray end-group at the top level has no matching start.
        WireType::EndGroup => {
            return Err(DecodeError::InvalidTag(crate::wire::make_tag(number, wire_type)));
        }
    }
    Ok(())
}

/// One field as seen by the walker: number, wire type and the full raw bytes
/// (tag included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub number: u32,
    pub wire_type: WireType,
    pub bytes: &'a [u8],
    pub offset: usize,
}

/// Iterator over the top-level fields of a message buffer. Stops after the first error.
#[derive(Debug, Clone)]
pub struct FieldWalker<'a> {
    reader: WireReader<'a>,
    failed: bool,
}

impl<'a> FieldWalker<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        FieldWalker {
            reader: WireReader::new(bytes),
            failed: false,
        }
    }

    pub fn position(&self) -> usize {
        self.reader.position()
    }
}

impl<'a> Iterator for FieldWalker<'a> {
    type Item = Result<RawField<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let start = self.reader.position();
        let step = (|| -> Result<RawField<'a>, DecodeError> {
            let (number, wire_type) = split_tag(self.reader.read_tag()?)?;
            skip_field(&mut self.reader, number, wire_type)?;
            Ok(RawField {
                number,
                wire_type,
                bytes: self.reader.since(start),
                offset: start,
            })
        })();
        if step.is_err() {
            self.failed = true;
        }
        Some(step)
    }
}

/// Number of top-level fields in a well-formed buffer.
pub fn message_field_count(bytes: &[u8]) -> Result<usize, DecodeError> {
    FieldWalker::new(bytes).try_fold(0, |n, f| f.map(|_| n + 1))
}

/// Check a buffer is a structurally valid sequence of fields.
pub fn validate_wire(bytes: &[u8]) -> Result<(), DecodeError> {
    message_field_count(bytes).map(|_| ())
}
