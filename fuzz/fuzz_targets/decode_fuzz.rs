//! Decode fuzz target: arbitrary bytes into a message with one field of every scalar type.
//! Decoding must not panic, and whatever decodes must re-encode to bytes that decode
//! to an equal message.
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;
#[cfg(fuzzing)]
use protobind::{DispatchTable, FieldEntry, Message, Presence, ScalarType};
#[cfg(fuzzing)]
use std::sync::LazyLock;

#[cfg(fuzzing)]
static TABLE: LazyLock<DispatchTable> = LazyLock::new(|| {
    use ScalarType::*;
    let scalars = [
        Int32, Int64, Uint32, Uint64, Sint32, Sint64, Bool, Enum, Fixed32, Fixed64, Sfixed32, Sfixed64, Float,
        Double,
    ];
    let entries: Vec<FieldEntry> = scalars
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let presence = if i % 2 == 0 { Presence::Implicit } else { Presence::Explicit };
            FieldEntry::new("f", i as u32 + 1, s, presence, i as u16)
        })
        .collect();
    DispatchTable::new("fuzz.All", entries)
});

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let mut m = Message::new(&TABLE);
    if m.parse(data).is_err() {
        return;
    }
    let bytes = m.serialize();
    assert_eq!(bytes.len(), m.byte_size());
    let mut back = Message::new(&TABLE);
    back.parse(&bytes).expect("re-encoded message must decode");
    assert_eq!(back.serialize(), bytes);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
