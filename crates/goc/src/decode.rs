use crate::cursor::ReadCursor;
use crate::error::{DecodeError, DecodeResult};
use crate::shape::indirections;
use crate::wire::Wire;

/// A value that can be decoded from its wire form.
///
/// Decoded values are always owned: the decoder allocates whatever
/// container storage the declared type calls for.
pub trait Decode: Sized {
    /// Decodes an instance of `Self` from the given source.
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self>;
}

/// Decodes a value of type `T` from a byte slice.
pub fn decode<T>(src: &[u8]) -> DecodeResult<T>
where
    T: Wire,
{
    let mut cursor = ReadCursor::new(src);
    decode_from(&mut cursor)
}

/// Decodes a value of type `T` from a `ReadCursor`.
///
/// This is the codec entry point: the pointer chain of `T` is validated
/// first, then the capability hooks are probed in priority order
/// (streaming, buffered, generic binary) against a mutable default
/// recipient, and only when none matches does the value go through its
/// derived [`Decode`] impl.
///
/// The recipient is handed to hooks by mutable reference, so a hook always
/// receives an addressable target.
pub fn decode_from<T>(src: &mut ReadCursor<'_>) -> DecodeResult<T>
where
    T: Wire,
{
    indirections(T::SHAPE)?;

    if let Some(mut recipient) = T::decode_recipient() {
        if decode_via_hooks(&mut recipient, src)? {
            return Ok(recipient);
        }
    }

    T::decode(src)
}

/// Runs the first matching decode capability on `recipient`.
///
/// Returns `true` when a hook consumed the source. The buffered and generic
/// binary protocols read the source to end-of-stream before handing the
/// bytes over, so they must not be mixed with streaming hooks across the
/// encode/decode sides of one type.
fn decode_via_hooks<T>(recipient: &mut T, src: &mut ReadCursor<'_>) -> DecodeResult<bool>
where
    T: Wire,
{
    if let Some(hook) = recipient.as_stream_decode() {
        hook.decode_from(src)
            .map_err(|e| DecodeError::hook_failed(crate::hooks::STREAM_DECODE, e))?;
        return Ok(true);
    }

    if let Some(hook) = recipient.as_buffer_decode() {
        let remaining = src.read_remaining();
        hook.decode_buffer(remaining)
            .map_err(|e| DecodeError::hook_failed(crate::hooks::BUFFER_DECODE, e))?;
        return Ok(true);
    }

    if let Some(hook) = recipient.as_unmarshal_binary() {
        let remaining = src.read_remaining();
        hook.unmarshal_binary(remaining)
            .map_err(|e| DecodeError::hook_failed(crate::hooks::UNMARSHAL_BINARY, e))?;
        return Ok(true);
    }

    Ok(false)
}

/// Decodes a value of type `T` from a `ReadCursor` without probing hooks.
pub fn decode_cursor<T>(src: &mut ReadCursor<'_>) -> DecodeResult<T>
where
    T: Decode,
{
    T::decode(src)
}
