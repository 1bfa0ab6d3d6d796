use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::shape::Shape;
use crate::wire::Wire;
use crate::{cast_length, ensure_size};

impl<K, V, S> Encode for HashMap<K, V, S>
where
    K: Wire,
    V: Wire,
{
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "HashMap", in: dst, size: 4);
        dst.write_u32(cast_length!("HashMap", "len", self.len())?);

        // Iteration order is unspecified; the decoder reinserts, so no
        // ordering is observable on the other side.
        for (key, value) in self {
            key.encode(dst).map_err(|e| EncodeError::for_map_key("HashMap", e))?;
            value.encode(dst).map_err(|e| EncodeError::for_map_value("HashMap", e))?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "HashMap"
    }

    fn size(&self) -> usize {
        4 + self.iter().map(|(key, value)| key.size() + value.size()).sum::<usize>()
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Wire + Eq + Hash,
    V: Wire,
    S: BuildHasher + Default,
{
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "HashMap", in: src, size: 4);
        let len = src.read_u32() as usize;

        // The pair count is untrusted input: cap the pre-allocation by what
        // the source could possibly hold.
        let mut map = HashMap::with_capacity_and_hasher(core::cmp::min(len, src.len()), S::default());

        for _ in 0..len {
            let key = K::decode(src).map_err(|e| DecodeError::for_map_key("HashMap", e))?;
            let value = V::decode(src).map_err(|e| DecodeError::for_map_value("HashMap", e))?;
            map.insert(key, value);
        }

        Ok(map)
    }
}

impl<K, V, S> Wire for HashMap<K, V, S>
where
    K: Wire + Eq + Hash,
    V: Wire,
    S: BuildHasher + Default,
{
    const SHAPE: &'static Shape = &Shape::map("HashMap", core::mem::size_of::<Self>());
}
