//! Pointer indirection.
//!
//! A `Box<T>` encodes as its pointee: the wire form carries no indirection
//! at all, and arbitrary chains collapse to the terminal value. The shape
//! still records every layer so the indirection walker sees the real
//! chain.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeResult, EncodeResult};
use crate::shape::Shape;
use crate::wire::Wire;

impl<T: Wire> Encode for Box<T> {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        (**self).encode(dst)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<T: Wire> Decode for Box<T> {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        Ok(Box::new(T::decode(src)?))
    }
}

impl<T: Wire> Wire for Box<T> {
    const SHAPE: &'static Shape = &Shape::pointer("Box", core::mem::size_of::<Box<T>>(), T::SHAPE);
}
