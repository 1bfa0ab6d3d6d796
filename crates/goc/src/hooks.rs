//! User capability protocols.
//!
//! A type may bypass the derived walk by advertising one of three codec
//! capabilities per direction. The entry points probe them in priority
//! order (streaming first, then buffered, then generic binary) and the
//! first match wins. A type advertises a capability by overriding the
//! matching probe on its [`crate::Wire`] impl.
//!
//! Probing happens at the entry points only: a hook-capable value nested
//! inside a struct or container is encoded structurally.

use crate::buf::WriteBuf;
use crate::cursor::ReadCursor;
use crate::error::{DecodeResult, EncodeResult};

/// Protocol label for [`StreamEncode`], as reported by hook failures.
pub const STREAM_ENCODE: &str = "stream-encode";
/// Protocol label for [`BufferEncode`], as reported by hook failures.
pub const BUFFER_ENCODE: &str = "buffer-encode";
/// Protocol label for [`MarshalBinary`], as reported by hook failures.
pub const MARSHAL_BINARY: &str = "marshal-binary";
/// Protocol label for [`StreamDecode`], as reported by hook failures.
pub const STREAM_DECODE: &str = "stream-decode";
/// Protocol label for [`BufferDecode`], as reported by hook failures.
pub const BUFFER_DECODE: &str = "buffer-decode";
/// Protocol label for [`UnmarshalBinary`], as reported by hook failures.
pub const UNMARSHAL_BINARY: &str = "unmarshal-binary";

/// Streaming encode capability: the type writes itself to the sink.
pub trait StreamEncode {
    /// Writes the wire form of `self` into `dst`.
    fn encode_to(&self, dst: &mut WriteBuf) -> EncodeResult<()>;
}

/// Buffered encode capability: the type produces a contiguous byte vector,
/// which the dispatcher writes to the sink.
pub trait BufferEncode {
    /// Returns the wire form of `self`.
    fn encode_buffer(&self) -> EncodeResult<Vec<u8>>;
}

/// Generic binary marshal capability, lowest-priority encode hook.
pub trait MarshalBinary {
    /// Returns the binary form of `self`.
    fn marshal_binary(&self) -> EncodeResult<Vec<u8>>;
}

/// Streaming decode capability: the type reads itself from the source.
pub trait StreamDecode {
    /// Populates `self` from `src`.
    fn decode_from(&mut self, src: &mut ReadCursor<'_>) -> DecodeResult<()>;
}

/// Buffered decode capability: the dispatcher reads the source to
/// end-of-stream and hands the bytes over.
pub trait BufferDecode {
    /// Populates `self` from a contiguous buffer.
    fn decode_buffer(&mut self, buf: &[u8]) -> DecodeResult<()>;
}

/// Generic binary unmarshal capability, lowest-priority decode hook.
pub trait UnmarshalBinary {
    /// Populates `self` from its binary form.
    fn unmarshal_binary(&mut self, data: &[u8]) -> DecodeResult<()>;
}

crate::assert_obj_safe!(StreamEncode, BufferEncode, MarshalBinary, StreamDecode, BufferDecode, UnmarshalBinary);
