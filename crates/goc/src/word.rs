//! Word-sized integer impls.
//!
//! `usize` and `isize` change width across hosts, so the wire form carries
//! a one-byte size tag (4 or 8) followed by the payload at that width. The
//! decoder accepts either tag and fails when the value does not fit the
//! local word.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeError, DecodeErrorKind, DecodeResult, EncodeResult};
use crate::shape::{Kind, Shape};
use crate::wire::Wire;
use crate::{ensure_size, invalid_field_err};

/// In-memory width of the platform word, and therefore the size tag value.
pub const WORD_SIZE: usize = core::mem::size_of::<usize>();

const WORD_TAG: u8 = WORD_SIZE as u8;

impl Encode for usize {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "usize", in: dst, size: 1 + WORD_SIZE);
        dst.write_u8(WORD_TAG);

        #[cfg(target_pointer_width = "64")]
        dst.write_u64(*self as u64);

        #[cfg(target_pointer_width = "32")]
        dst.write_u32(*self as u32);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "usize"
    }

    fn size(&self) -> usize {
        1 + WORD_SIZE
    }
}

impl Decode for usize {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "usize", in: src, size: 1);

        match src.read_u8() {
            4 => {
                ensure_size!(ctx: "usize", in: src, size: 4);
                Ok(src.read_u32() as usize)
            }
            8 => {
                ensure_size!(ctx: "usize", in: src, size: 8);
                usize::try_from(src.read_u64())
                    .map_err(|_| invalid_field_err("usize", "value", "does not fit the platform word"))
            }
            got => Err(DecodeError::new("usize", DecodeErrorKind::SizeTagUnknown { got })),
        }
    }
}

impl Wire for usize {
    const SHAPE: &'static Shape = &Shape::scalar("usize", Kind::Uint, WORD_SIZE);
}

impl Encode for isize {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "isize", in: dst, size: 1 + WORD_SIZE);
        dst.write_u8(WORD_TAG);

        #[cfg(target_pointer_width = "64")]
        dst.write_i64(*self as i64);

        #[cfg(target_pointer_width = "32")]
        dst.write_i32(*self as i32);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "isize"
    }

    fn size(&self) -> usize {
        1 + WORD_SIZE
    }
}

impl Decode for isize {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "isize", in: src, size: 1);

        match src.read_u8() {
            4 => {
                ensure_size!(ctx: "isize", in: src, size: 4);
                Ok(src.read_i32() as isize)
            }
            8 => {
                ensure_size!(ctx: "isize", in: src, size: 8);
                isize::try_from(src.read_i64())
                    .map_err(|_| invalid_field_err("isize", "value", "does not fit the platform word"))
            }
            got => Err(DecodeError::new("isize", DecodeErrorKind::SizeTagUnknown { got })),
        }
    }
}

impl Wire for isize {
    const SHAPE: &'static Shape = &Shape::scalar("isize", Kind::Int, WORD_SIZE);
}
