//! Text dump of a message instance.
//!
//! One line per set field in tag order (`name (number): value`), enum values shown by
//! name when a pool is available, then a summary of preserved unknown fields.

use crate::codec::Message;
use crate::descriptor::{DescriptorPool, ScalarType};
use crate::value::{FieldState, Value};
use crate::walk::FieldWalker;
use std::fmt::Write as _;

/// Format a scalar value for display. Floats keep a decimal point.
pub fn format_scalar(v: &Value) -> String {
    match v {
        Value::I32(x) | Value::Enum(x) => x.to_string(),
        Value::I64(x) => x.to_string(),
        Value::U32(x) => x.to_string(),
        Value::U64(x) => x.to_string(),
        Value::Bool(x) => x.to_string(),
        Value::F32(x) => format!("{:?}", x),
        Value::F64(x) => format!("{:?}", x),
    }
}

fn enum_name<'p>(pool: Option<&'p DescriptorPool>, message: &Message<'_>, number: u32, value: i32) -> Option<&'p str> {
    let pool = pool?;
    let field = pool.find_message(message.table().full_name())?.field_by_number(number)?;
    pool.find_enum(field.enum_type.as_deref()?)?.value_name(value)
}

/// Multi-line dump of `message`. Absent fields are skipped; present-zero fields are
/// shown with a `(zero)` marker.
pub fn format_message(message: &Message<'_>, pool: Option<&DescriptorPool>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {{", message.table().full_name());
    for e in message.table().entries() {
        let state = message.field_state(e.number).unwrap_or(FieldState::Absent);
        if state == FieldState::Absent {
            continue;
        }
        let Some(value) = message.get(e.number) else {
            continue;
        };
        let mut text = format_scalar(&value);
        if let (ScalarType::Enum, Value::Enum(n)) = (e.scalar, value) {
            if let Some(name) = enum_name(pool, message, e.number, n) {
                text = format!("{} ({})", name, n);
            }
        }
        let marker = if state == FieldState::PresentZero { " (zero)" } else { "" };
        let _ = writeln!(out, "  {} ({}): {}{}", e.name, e.number, text, marker);
    }
    let unknown = message.unknown_fields();
    if !unknown.is_empty() {
        let numbers: Vec<String> = FieldWalker::new(unknown)
            .filter_map(Result::ok)
            .map(|f| f.number.to_string())
            .collect();
        let _ = writeln!(
            out,
            "  unknown: {} bytes, fields [{}]",
            unknown.len(),
            numbers.join(", ")
        );
    }
    out.push('}');
    out
}
