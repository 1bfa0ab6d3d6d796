//! Fixed-width scalar impls and their contiguous bulk paths.
//!
//! On the wire a scalar is exactly its little-endian in-memory
//! representation. Slices of scalars override the `Wire` slice hooks with a
//! single byte copy: `bytemuck` provides the guarded reinterpretation on
//! little-endian hosts, and big-endian hosts fall back to per-element
//! writes so the stream stays little-endian.

use bytemuck::{Pod, Zeroable};

use crate::cursor::{ReadCursor, WriteCursor};
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{DecodeResult, EncodeResult};
use crate::shape::{Kind, Shape};
use crate::wire::Wire;
use crate::ensure_size;

macro_rules! impl_fixed_scalar {
    ($ty:ty, $kind:expr, $width:expr, $read:ident, $write:ident) => {
        impl Encode for $ty {
            fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
                ensure_size!(in: dst, size: $width);
                dst.$write(*self);
                Ok(())
            }

            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn size(&self) -> usize {
                $width
            }
        }

        impl Decode for $ty {
            fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
                ensure_size!(in: src, size: $width);
                Ok(src.$read())
            }
        }

        impl Wire for $ty {
            const SHAPE: &'static Shape = &Shape::scalar(stringify!($ty), $kind, core::mem::size_of::<$ty>());

            fn encode_slice(items: &[Self], dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
                ensure_size!(ctx: stringify!($ty), in: dst, size: items.len() * $width);

                #[cfg(target_endian = "little")]
                dst.write_slice(bytemuck::cast_slice(items));

                #[cfg(target_endian = "big")]
                for item in items {
                    dst.$write(*item);
                }

                Ok(())
            }

            fn decode_slice(len: usize, src: &mut ReadCursor<'_>) -> DecodeResult<Vec<Self>> {
                let Some(byte_len) = len.checked_mul($width) else {
                    return Err(crate::NotEnoughBytesErr::not_enough_bytes(stringify!($ty), src.len(), usize::MAX));
                };
                ensure_size!(ctx: stringify!($ty), in: src, size: byte_len);

                #[cfg(target_endian = "little")]
                {
                    let mut items = vec![<$ty>::default(); len];
                    bytemuck::cast_slice_mut(items.as_mut_slice()).copy_from_slice(src.read_slice(byte_len));
                    Ok(items)
                }

                #[cfg(target_endian = "big")]
                {
                    let mut items = Vec::with_capacity(len);
                    for _ in 0..len {
                        items.push(src.$read());
                    }
                    Ok(items)
                }
            }

            fn slice_size(items: &[Self]) -> usize {
                items.len() * $width
            }
        }
    };
}

impl_fixed_scalar!(i8, Kind::I8, 1, read_i8, write_i8);
impl_fixed_scalar!(i16, Kind::I16, 2, read_i16, write_i16);
impl_fixed_scalar!(i32, Kind::I32, 4, read_i32, write_i32);
impl_fixed_scalar!(i64, Kind::I64, 8, read_i64, write_i64);
impl_fixed_scalar!(u8, Kind::U8, 1, read_u8, write_u8);
impl_fixed_scalar!(u16, Kind::U16, 2, read_u16, write_u16);
impl_fixed_scalar!(u32, Kind::U32, 4, read_u32, write_u32);
impl_fixed_scalar!(u64, Kind::U64, 8, read_u64, write_u64);
impl_fixed_scalar!(f32, Kind::F32, 4, read_f32, write_f32);
impl_fixed_scalar!(f64, Kind::F64, 8, read_f64, write_f64);

impl Encode for bool {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "bool", in: dst, size: 1);
        dst.write_u8(u8::from(*self));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bool"
    }

    fn size(&self) -> usize {
        1
    }
}

impl Decode for bool {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_size!(ctx: "bool", in: src, size: 1);
        Ok(src.read_u8() != 0)
    }
}

impl Wire for bool {
    const SHAPE: &'static Shape = &Shape::scalar("bool", Kind::Bool, 1);

    fn encode_slice(items: &[Self], dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_size!(ctx: "bool", in: dst, size: items.len());
        dst.write_slice(bytemuck::cast_slice(items));
        Ok(())
    }

    fn decode_slice(len: usize, src: &mut ReadCursor<'_>) -> DecodeResult<Vec<Self>> {
        ensure_size!(ctx: "bool", in: src, size: len);
        Ok(src.read_slice(len).iter().map(|byte| *byte != 0).collect())
    }

    fn slice_size(items: &[Self]) -> usize {
        items.len()
    }
}

/// Complex number made of two `f32` halves, encoded real part first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Complex64 {
    /// Real part.
    pub re: f32,
    /// Imaginary part.
    pub im: f32,
}

impl Complex64 {
    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// Complex number made of two `f64` halves, encoded real part first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Complex128 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex128 {
    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

macro_rules! impl_complex {
    ($ty:ty, $kind:expr, $width:expr, $read:ident, $write:ident) => {
        impl Encode for $ty {
            fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
                ensure_size!(ctx: stringify!($ty), in: dst, size: $width);
                dst.$write(self.re);
                dst.$write(self.im);
                Ok(())
            }

            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn size(&self) -> usize {
                $width
            }
        }

        impl Decode for $ty {
            fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
                ensure_size!(ctx: stringify!($ty), in: src, size: $width);
                let re = src.$read();
                let im = src.$read();
                Ok(Self { re, im })
            }
        }

        impl Wire for $ty {
            const SHAPE: &'static Shape = &Shape::scalar(stringify!($ty), $kind, core::mem::size_of::<$ty>());

            fn encode_slice(items: &[Self], dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
                ensure_size!(ctx: stringify!($ty), in: dst, size: items.len() * $width);

                #[cfg(target_endian = "little")]
                dst.write_slice(bytemuck::cast_slice(items));

                #[cfg(target_endian = "big")]
                for item in items {
                    dst.$write(item.re);
                    dst.$write(item.im);
                }

                Ok(())
            }

            fn decode_slice(len: usize, src: &mut ReadCursor<'_>) -> DecodeResult<Vec<Self>> {
                let Some(byte_len) = len.checked_mul($width) else {
                    return Err(crate::NotEnoughBytesErr::not_enough_bytes(stringify!($ty), src.len(), usize::MAX));
                };
                ensure_size!(ctx: stringify!($ty), in: src, size: byte_len);

                #[cfg(target_endian = "little")]
                {
                    let mut items = vec![<$ty>::default(); len];
                    bytemuck::cast_slice_mut(items.as_mut_slice()).copy_from_slice(src.read_slice(byte_len));
                    Ok(items)
                }

                #[cfg(target_endian = "big")]
                {
                    let mut items = Vec::with_capacity(len);
                    for _ in 0..len {
                        let re = src.$read();
                        let im = src.$read();
                        items.push(Self { re, im });
                    }
                    Ok(items)
                }
            }

            fn slice_size(items: &[Self]) -> usize {
                items.len() * $width
            }
        }
    };
}

impl_complex!(Complex64, Kind::Complex64, 8, read_f32, write_f32);
impl_complex!(Complex128, Kind::Complex128, 16, read_f64, write_f64);
