//! Delimited message streams: a sequence of messages, each prefixed by its byte
//! length as a varint.
//!
//! A message whose body fails to decode is removed (its bytes are still consumed, so
//! decoding carries on with the next one). A broken length prefix ends the stream.

use crate::codec::{DispatchTable, Message};
use crate::wire::{push_varint, DecodeError, WireReader};

/// Result of decoding a stream: the messages that decoded and those that were removed.
#[derive(Debug)]
pub struct StreamDecodeResult<'t> {
    pub messages: Vec<DecodedMessage<'t>>,
    pub removed: Vec<RemovedMessage>,
}

#[derive(Debug)]
pub struct DecodedMessage<'t> {
    pub message: Message<'t>,
    /// Byte range of the body (without the length prefix).
    pub byte_range: (usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemovedMessage {
    pub byte_range: (usize, usize),
    pub reason: DecodeError,
}

/// Decode every length-prefixed message in `bytes` as `table`'s type.
pub fn decode_delimited_stream<'t>(
    table: &'t DispatchTable,
    bytes: &[u8],
) -> Result<StreamDecodeResult<'t>, DecodeError> {
    let mut messages = Vec::new();
    let mut removed = Vec::new();
    let mut r = WireReader::new(bytes);

    while !r.is_empty() {
        let len = r.read_varint()?;
        let len = usize::try_from(len).map_err(|_| DecodeError::Truncated)?;
        let start = r.position();
        let body = r.read_bytes(len)?;
        let byte_range = (start, start + len);

        let mut message = Message::new(table);
        match message.parse(body) {
            Ok(()) => messages.push(DecodedMessage { message, byte_range }),
            Err(reason) => {
                tracing::warn!(
                    message = %table.full_name(),
                    start = byte_range.0,
                    end = byte_range.1,
                    %reason,
                    "removing message that failed to decode"
                );
                removed.push(RemovedMessage { byte_range, reason });
            }
        }
    }

    Ok(StreamDecodeResult { messages, removed })
}

/// Encode messages as a delimited stream.
pub fn encode_delimited_stream<'a, 't: 'a>(messages: impl IntoIterator<Item = &'a Message<'t>>) -> Vec<u8> {
    let mut out = Vec::new();
    for m in messages {
        let body = m.serialize();
        push_varint(&mut out, body.len() as u64);
        out.extend_from_slice(&body);
    }
    out
}

/// Re-encode a decoded stream with only the messages that decoded.
pub fn encode_compliant_only(result: &StreamDecodeResult<'_>) -> Vec<u8> {
    encode_delimited_stream(result.messages.iter().map(|d| &d.message))
}
