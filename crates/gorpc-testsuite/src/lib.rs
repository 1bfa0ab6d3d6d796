//! Shared fixtures for the integration tests.
//!
//! The message types mirror the kinds the wire universe supports: plain
//! structs, nesting, indirection, and one type per capability protocol.

use goc::{
    BufferDecode, BufferEncode, Decode, DecodeResult, Encode, EncodeResult, MarshalBinary, ReadCursor, Shape,
    StreamDecode, StreamEncode, UnmarshalBinary, Wire, WriteBuf, WriteCursor,
};

/// Scenario struct: one fixed-width field followed by one variable one.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Record {
    pub a: i64,
    pub b: String,
}

/// Exercises every scalar kind plus nesting in one aggregate.
#[derive(Wire, Debug, Clone, PartialEq, Default)]
pub struct Kitchen {
    pub flag: bool,
    pub i8: i8,
    pub i16: i16,
    pub i32: i32,
    pub i64: i64,
    pub u8: u8,
    pub u16: u16,
    pub u32: u32,
    pub u64: u64,
    pub f32: f32,
    pub f64: f64,
    pub c64: goc::Complex64,
    pub c128: goc::Complex128,
    pub word: usize,
    pub iword: isize,
    pub text: String,
    pub inner: Inner,
}

/// Nested struct member of [`Kitchen`].
#[derive(Wire, Debug, Clone, PartialEq, Default)]
pub struct Inner {
    pub a: i64,
    pub b: String,
}

/// Tuple struct fixture.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Pair(pub u16, pub u16);

/// Unit struct fixture: encodes to zero bytes.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Nothing;

/// Generic struct fixture.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub tag: u8,
    pub value: T,
}

/// RPC request mirroring the reference client/server exchange.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct AuthRequest {
    pub id: u64,
    pub password: String,
}

/// RPC response mirroring the reference client/server exchange.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl gorpc::Validate for AuthRequest {
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.password.is_empty(), "password must not be empty");
        Ok(())
    }
}

impl gorpc::Validate for AuthResponse {
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.email.contains('@'), "email must contain '@'");
        Ok(())
    }
}

/// Hash fixture: 8 bytes wide.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Ping {
    pub a: u64,
}

/// Hash fixture: 8 bytes wide.
#[derive(Wire, Debug, Clone, PartialEq)]
pub struct Pong {
    pub b: u64,
}

/// Hash fixtures sharing names with the top-level ones but twice as wide.
pub mod wide {
    use goc::Wire;

    /// Same name as [`super::Ping`], different in-memory size.
    #[derive(Wire, Debug, Clone, PartialEq)]
    pub struct Ping {
        pub a: u64,
        pub b: u64,
    }
}

/// A type that is nothing but a pointer to itself.
///
/// Its shape is a one-node pointer cycle, so both entry points must refuse
/// it before ever invoking the codec methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct Looper;

static LOOPER_SHAPE: Shape = Shape::pointer("Looper", 8, &LOOPER_SHAPE);

impl Encode for Looper {
    fn encode(&self, _dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        unreachable!("the indirection walker rejects Looper before dispatch")
    }

    fn name(&self) -> &'static str {
        "Looper"
    }

    fn size(&self) -> usize {
        0
    }
}

impl Decode for Looper {
    fn decode(_src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        unreachable!("the indirection walker rejects Looper before dispatch")
    }
}

impl Wire for Looper {
    const SHAPE: &'static Shape = &LOOPER_SHAPE;
}

/// Streaming-capable type: frames its payload as a magic byte followed by
/// the raw bytes, bypassing the structural length-prefixed form.
#[derive(Wire, Debug, Clone, PartialEq, Default)]
pub struct Framed {
    pub payload: Vec<u8>,
}

pub const FRAMED_MAGIC: u8 = 0xF7;

impl StreamEncode for Framed {
    fn encode_to(&self, dst: &mut WriteBuf) -> EncodeResult<()> {
        dst.write_u8(FRAMED_MAGIC);
        dst.write_slice(&self.payload);
        Ok(())
    }
}

impl StreamDecode for Framed {
    fn decode_from(&mut self, src: &mut ReadCursor<'_>) -> DecodeResult<()> {
        goc::ensure_size!(ctx: "Framed", in: src, size: 1);
        let magic = src.read_u8();

        if magic != FRAMED_MAGIC {
            return Err(goc::invalid_field_err("Framed", "magic", "unexpected leading byte"));
        }

        self.payload = src.read_remaining().to_vec();
        Ok(())
    }
}

impl Framed {
    /// Wraps into the form that advertises the streaming capability; bare
    /// `Framed` values keep the structural form the derive generated.
    pub fn hooked(self) -> Hooked {
        Hooked(self)
    }
}

/// Wrapper advertising the streaming capability of [`Framed`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hooked(pub Framed);

impl Encode for Hooked {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        self.0.encode(dst)
    }

    fn name(&self) -> &'static str {
        "Hooked"
    }

    fn size(&self) -> usize {
        self.0.size()
    }
}

impl Decode for Hooked {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        Ok(Self(Framed::decode(src)?))
    }
}

impl Wire for Hooked {
    const SHAPE: &'static Shape = &Shape::strukt("Hooked", core::mem::size_of::<Hooked>());

    fn as_stream_encode(&self) -> Option<&dyn StreamEncode> {
        Some(&self.0)
    }

    fn decode_recipient() -> Option<Self> {
        Some(Self::default())
    }

    fn as_stream_decode(&mut self) -> Option<&mut dyn StreamDecode> {
        Some(&mut self.0)
    }
}

/// Buffered-capability type: its wire form is the raw payload bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Opaque(pub Vec<u8>);

impl BufferEncode for Opaque {
    fn encode_buffer(&self) -> EncodeResult<Vec<u8>> {
        Ok(self.0.clone())
    }
}

impl BufferDecode for Opaque {
    fn decode_buffer(&mut self, buf: &[u8]) -> DecodeResult<()> {
        self.0 = buf.to_vec();
        Ok(())
    }
}

impl Encode for Opaque {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        self.0.encode(dst)
    }

    fn name(&self) -> &'static str {
        "Opaque"
    }

    fn size(&self) -> usize {
        self.0.size()
    }
}

impl Decode for Opaque {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        Ok(Self(Vec::decode(src)?))
    }
}

impl Wire for Opaque {
    const SHAPE: &'static Shape = &Shape::strukt("Opaque", core::mem::size_of::<Opaque>());

    fn as_buffer_encode(&self) -> Option<&dyn BufferEncode> {
        Some(self)
    }

    fn decode_recipient() -> Option<Self> {
        Some(Self::default())
    }

    fn as_buffer_decode(&mut self) -> Option<&mut dyn BufferDecode> {
        Some(self)
    }
}

/// Generic-binary-capability type whose marshal hook always fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Broken;

impl MarshalBinary for Broken {
    fn marshal_binary(&self) -> EncodeResult<Vec<u8>> {
        Err(goc::other_err("Broken", "marshal always fails"))
    }
}

impl UnmarshalBinary for Broken {
    fn unmarshal_binary(&mut self, _data: &[u8]) -> DecodeResult<()> {
        Err(goc::other_err("Broken", "unmarshal always fails"))
    }
}

impl Encode for Broken {
    fn encode(&self, _dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Broken"
    }

    fn size(&self) -> usize {
        0
    }
}

impl Decode for Broken {
    fn decode(_src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        Ok(Self)
    }
}

impl Wire for Broken {
    const SHAPE: &'static Shape = &Shape::strukt("Broken", 0);

    fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
        Some(self)
    }

    fn decode_recipient() -> Option<Self> {
        Some(Self)
    }

    fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
        Some(self)
    }
}
