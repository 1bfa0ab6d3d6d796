use crate::buf::WriteBuf;
use crate::cursor::WriteCursor;
use crate::error::{EncodeError, EncodeResult};
use crate::shape::indirections;
use crate::wire::Wire;

/// A value that can be encoded into its wire form.
///
/// Impls must produce exactly [`size`](Encode::size) bytes; the entry
/// points reserve that many up front and treat any mismatch as a bug.
///
/// This trait is object-safe and may be used in a dynamic context.
pub trait Encode {
    /// Encodes this value in-place using the provided `WriteCursor`.
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()>;

    /// Returns the unqualified name of the encoded type.
    fn name(&self) -> &'static str;

    /// Computes the encoded size in bytes for this value.
    fn size(&self) -> usize;
}

crate::assert_obj_safe!(Encode);

/// Encodes `value` into a freshly allocated byte vector.
///
/// The result length always equals `value.size()`.
pub fn encode<T>(value: &T) -> EncodeResult<Vec<u8>>
where
    T: Wire,
{
    let mut buf = WriteBuf::new();
    encode_to(value, &mut buf)?;
    Ok(buf.into_vec())
}

/// Encodes `value` into `buf`, growing it as needed, and returns the number
/// of bytes written.
///
/// This is the codec entry point: the pointer chain of `T` is validated
/// first, then the capability hooks are probed in priority order
/// (streaming, buffered, generic binary), and only when none matches does
/// the value go through its derived [`Encode`] impl.
pub fn encode_to<T>(value: &T, buf: &mut WriteBuf) -> EncodeResult<usize>
where
    T: Wire,
{
    indirections(T::SHAPE)?;

    if let Some(hook) = value.as_stream_encode() {
        let before = buf.filled_len();
        hook.encode_to(buf)
            .map_err(|e| EncodeError::hook_failed(crate::hooks::STREAM_ENCODE, e))?;
        return Ok(buf.filled_len() - before);
    }

    if let Some(hook) = value.as_buffer_encode() {
        let encoded = hook
            .encode_buffer()
            .map_err(|e| EncodeError::hook_failed(crate::hooks::BUFFER_ENCODE, e))?;
        buf.write_slice(&encoded);
        return Ok(encoded.len());
    }

    if let Some(hook) = value.as_marshal_binary() {
        let encoded = hook
            .marshal_binary()
            .map_err(|e| EncodeError::hook_failed(crate::hooks::MARSHAL_BINARY, e))?;
        buf.write_slice(&encoded);
        return Ok(encoded.len());
    }

    let size = value.size();
    let dst = buf.unfilled_to(size);
    let mut cursor = WriteCursor::new(dst);
    value.encode(&mut cursor)?;

    let written = cursor.pos();
    debug_assert_eq!(written, size);
    buf.advance(written);

    Ok(written)
}

/// Encodes the given value in-place using the provided `WriteCursor`,
/// without probing hooks.
pub fn encode_cursor<T>(value: &T, dst: &mut WriteCursor<'_>) -> EncodeResult<()>
where
    T: Encode + ?Sized,
{
    value.encode(dst)
}

/// Computes the encoded size in bytes for the given value.
pub fn size<T>(value: &T) -> usize
where
    T: Encode + ?Sized,
{
    value.size()
}
