//! Method-identity hashing.
//!
//! A method is identified by its request/response type pair. The hash
//! input concatenates the unqualified type names with the in-memory size
//! of each type as a big-endian `u32`, so a caller whose types merely
//! *look* like the callee's (same names, different field widths) still
//! lands on a different method.
//!
//! Because word-sized integers change `size_of` across architectures, two
//! peers with different word widths compute different hashes for the same
//! logical types and will refuse to talk. This is deliberate: such peers
//! would disagree on the wire layout anyway.

use goc::Wire;

const FNV_OFFSET_BASIS: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
const FNV_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// FNV-1a over the full 128-bit state.
///
/// The `fnv` crate on the registry only ships the 64-bit variant, so the
/// 128-bit fold lives here; constants per the FNV reference.
fn fnv1a_128(data: &[u8]) -> u128 {
    data.iter()
        .fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ u128::from(*byte)).wrapping_mul(FNV_PRIME))
}

/// Derives the stable method identity for a request/response type pair.
///
/// Returns the 128-bit FNV-1a digest of
/// `name(Req) + be_u32(size_of(Req)) + name(Res) + be_u32(size_of(Res))`
/// as a 32-character lowercase hex string.
#[must_use]
pub fn method_hash<Req, Res>() -> String
where
    Req: Wire,
    Res: Wire,
{
    let mut input = Vec::with_capacity(Req::SHAPE.name.len() + Res::SHAPE.name.len() + 8);

    input.extend_from_slice(Req::SHAPE.name.as_bytes());
    input.extend_from_slice(&(Req::SHAPE.mem_size as u32).to_be_bytes());
    input.extend_from_slice(Res::SHAPE.name.as_bytes());
    input.extend_from_slice(&(Res::SHAPE.mem_size as u32).to_be_bytes());

    format!("{:032x}", fnv1a_128(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(fnv1a_128(b""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn known_vector() {
        // fnv1a-128("a"), cross-checked against Go's hash/fnv.
        assert_eq!(fnv1a_128(b"a"), 0xd228_cb69_6f1a_8caf_7891_2b70_4e4a_8964);
    }

    #[test]
    fn digest_is_32_lowercase_hex_chars() {
        let digest = method_hash::<u32, u64>();
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
