//! Sequence impls: `Vec<T>` slices and `[T; N]` arrays.
//!
//! Both carry a `u32` element count, and a count of zero ends the
//! encoding. Arrays have a statically known length, so the decoder
//! validates the prefix against `N` instead of trusting it.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeError, DecodeErrorKind, DecodeResult, EncodeResult, OtherErr as _};
use crate::shape::{Kind, Shape};
use crate::wire::Wire;
use crate::{cast_length, ensure_size};

impl<T: Wire> Encode for Vec<T> {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "Vec", in: dst, size: 4);
        dst.write_u32(cast_length!("len", self.len())?);

        if self.is_empty() {
            return Ok(());
        }

        T::encode_slice(self, dst)
    }

    fn name(&self) -> &'static str {
        "Vec"
    }

    fn size(&self) -> usize {
        4 + T::slice_size(self)
    }
}

impl<T: Wire> Decode for Vec<T> {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "Vec", in: src, size: 4);
        let len = src.read_u32() as usize;

        if len == 0 {
            return Ok(Vec::new());
        }

        T::decode_slice(len, src)
    }
}

impl<T: Wire> Wire for Vec<T> {
    const SHAPE: &'static Shape = &Shape::sequence("Vec", Kind::Slice, core::mem::size_of::<Vec<T>>(), T::SHAPE);
}

impl<T: Wire, const N: usize> Encode for [T; N] {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "array", in: dst, size: 4);
        dst.write_u32(cast_length!("array", "len", N)?);

        if N == 0 {
            return Ok(());
        }

        T::encode_slice(self.as_slice(), dst)
    }

    fn name(&self) -> &'static str {
        "array"
    }

    fn size(&self) -> usize {
        4 + T::slice_size(self)
    }
}

impl<T: Wire, const N: usize> Decode for [T; N] {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "array", in: src, size: 4);
        let got = src.read_u32() as usize;

        if got != N {
            return Err(DecodeError::new(
                "array",
                DecodeErrorKind::LengthMismatch { expected: N, got },
            ));
        }

        let items = T::decode_slice(N, src)?;

        items
            .try_into()
            .map_err(|_| DecodeError::other("array", "element count changed during decode"))
    }
}

impl<T: Wire, const N: usize> Wire for [T; N] {
    const SHAPE: &'static Shape = &Shape::sequence("array", Kind::Array, core::mem::size_of::<[T; N]>(), T::SHAPE);
}
