use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::hooks::{BufferDecode, BufferEncode, MarshalBinary, StreamDecode, StreamEncode, UnmarshalBinary};
use crate::shape::Shape;
use crate::{ReadCursor, WriteCursor};

/// A type belonging to the closed wire universe.
///
/// `Wire` ties the two codec directions together and adds what the entry
/// points need on top: the static [`Shape`] consulted by the indirection
/// walker and the method hash, the slice specialization hooks that give
/// fixed-width scalars their contiguous bulk path, and the capability
/// probes of the user-hook dispatch.
///
/// Every method has a default; scalar impls override the slice hooks,
/// hook-capable types override the probes, and `#[derive(Wire)]` fills in
/// the rest for user structs.
pub trait Wire: Encode + Decode {
    /// Static descriptor of this type.
    const SHAPE: &'static Shape;

    /// Encodes a run of elements back to back, without a length prefix.
    ///
    /// Fixed-width scalars override this with a single contiguous byte
    /// copy; the default recurses element by element.
    fn encode_slice(items: &[Self], dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        for (index, item) in items.iter().enumerate() {
            item.encode(dst)
                .map_err(|e| EncodeError::for_element(Self::SHAPE.name, index, e))?;
        }

        Ok(())
    }

    /// Decodes a run of `len` elements, without a length prefix.
    ///
    /// Fixed-width scalars override this with a single contiguous byte
    /// copy; the default recurses element by element.
    fn decode_slice(len: usize, src: &mut ReadCursor<'_>) -> DecodeResult<Vec<Self>> {
        // The length prefix is untrusted input: cap the pre-allocation by
        // what the source could possibly hold.
        let mut items = Vec::with_capacity(core::cmp::min(len, src.len()));

        for index in 0..len {
            items.push(Self::decode(src).map_err(|e| DecodeError::for_element(Self::SHAPE.name, index, e))?);
        }

        Ok(items)
    }

    /// Computes the encoded size of a run of elements, without a length prefix.
    fn slice_size(items: &[Self]) -> usize {
        items.iter().map(Encode::size).sum()
    }

    /// Streaming encode probe; `Some` advertises the capability.
    fn as_stream_encode(&self) -> Option<&dyn StreamEncode> {
        None
    }

    /// Buffered encode probe; `Some` advertises the capability.
    fn as_buffer_encode(&self) -> Option<&dyn BufferEncode> {
        None
    }

    /// Generic binary marshal probe; `Some` advertises the capability.
    fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
        None
    }

    /// Returns a default instance for the decode hooks to populate.
    ///
    /// Types advertising any decode capability must override this
    /// (typically with `Some(Self::default())`); the entry point skips the
    /// decode probes entirely while it returns `None`.
    fn decode_recipient() -> Option<Self> {
        None
    }

    /// Streaming decode probe; `Some` advertises the capability.
    fn as_stream_decode(&mut self) -> Option<&mut dyn StreamDecode> {
        None
    }

    /// Buffered decode probe; `Some` advertises the capability.
    fn as_buffer_decode(&mut self) -> Option<&mut dyn BufferDecode> {
        None
    }

    /// Generic binary unmarshal probe; `Some` advertises the capability.
    fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
        None
    }
}
