//! # protobind: table-driven protobuf codec and binding generator
//!
//! Two halves share one codec engine:
//!
//! - **Runtime**: per-message [`DispatchTable`]s drive parse, serialize, byte size,
//!   clear, merge and swap over a compact instance ([`Message`]: presence word, one
//!   `u64` slot per field, unknown-field buffer).
//! - **Generator**: from a validated [`DescriptorPool`], emits one Rust module per
//!   schema file plus a `generated.rs` entry point. Bindings either wrap [`Message`]
//!   directly (`kind=same`) or reach it through `extern "C"` thunks (`kind=native`).
//!
//! ## Field types
//!
//! Scalars only: `int32`, `int64`, `uint32`, `uint64`, `sint32`, `sint64`, `bool`,
//! enums, `fixed32`, `fixed64`, `sfixed32`, `sfixed64`, `float`, `double`. Presence is
//! explicit (`optional`, proto2) or implicit (proto3 default).
//!
//! ## Example
//!
//! ```
//! use protobind::{DispatchTable, FieldEntry, Message, Presence, ScalarType, Value};
//!
//! let table = DispatchTable::new(
//!     "demo.Duration",
//!     vec![
//!         FieldEntry::new("seconds", 1, ScalarType::Int64, Presence::Implicit, 0),
//!         FieldEntry::new("nanos", 2, ScalarType::Int32, Presence::Implicit, 1),
//!     ],
//! );
//! let mut msg = Message::new(&table);
//! msg.set(1, Value::I64(150)).unwrap();
//! assert_eq!(msg.serialize(), [0x08, 0x96, 0x01]);
//! ```

pub mod arena;
pub mod codec;
pub mod crate_mapping;
pub mod descriptor;
pub mod dump;
mod emit;
pub mod frame;
pub mod generator;
pub mod naming;
pub mod parser;
pub mod thunk;
pub mod value;
pub mod version;
pub mod walk;
pub mod wire;

pub use arena::{Arena, ArenaId, ArenaMessage};
pub use codec::{Allocation, CodecError, DispatchTable, FieldEntry, Message, FAST_TABLE_LEN};
pub use descriptor::{
    DescriptorError, DescriptorPool, EnumDescriptor, FieldDescriptor, FileDescriptor, MessageDescriptor,
    Presence, ScalarType, Syntax,
};
pub use frame::{decode_delimited_stream, encode_delimited_stream, StreamDecodeResult};
pub use generator::{generate_unit, GenError, GeneratedFiles, GeneratorContext, Options, RuntimeKind};
pub use parser::{parse_schema, SchemaError};
pub use thunk::ThunkStatus;
pub use value::{FieldState, Value};
pub use wire::{DecodeError, WireType};

/// Items referenced by generated code only.
#[doc(hidden)]
pub mod __internal {
    pub use crate::thunk::ScalarBits;
    pub use crate::version::assert_compatible_gencode_version;
}
