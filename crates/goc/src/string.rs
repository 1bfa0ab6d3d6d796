use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeError, EncodeError, EncodeErrorKind, EncodeResult};
use crate::error::{DecodeResult, InvalidFieldErr as _};
use crate::shape::{Kind, Shape};
use crate::wire::Wire;
use crate::{cast_length, ensure_size};

/// Longest encodable string, in bytes.
pub const MAX_STRING_LEN: usize = i32::MAX as usize;

impl Encode for String {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        let len = self.len();

        if len > MAX_STRING_LEN {
            return Err(EncodeError::new("String", EncodeErrorKind::StringTooLong { len }));
        }

        ensure_size!(ctx: "String", in: dst, size: 4 + len);
        dst.write_u32(cast_length!("String", "len", len)?);
        dst.write_slice(self.as_bytes());

        Ok(())
    }

    fn name(&self) -> &'static str {
        "String"
    }

    fn size(&self) -> usize {
        4 + self.len()
    }
}

impl Decode for String {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "String", in: src, size: 4);
        let len = src.read_u32() as usize;

        if len == 0 {
            return Ok(String::new());
        }

        ensure_size!(ctx: "String", in: src, size: len);
        let bytes = src.read_slice(len);

        String::from_utf8(bytes.to_vec())
            .map_err(|e| DecodeError::invalid_field("String", "bytes", "invalid UTF-8").with_source(e))
    }
}

impl Wire for String {
    const SHAPE: &'static Shape = &Shape::scalar("String", Kind::Str, core::mem::size_of::<String>());
}
