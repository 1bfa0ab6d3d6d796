//! Typed binary wire codec for the `application/goc` format.
//!
//! Values are encoded into a compact little-endian stream with no type
//! tags: reader and writer must agree on the declared type out-of-band
//! (the RPC layer enforces this with a method-identity hash). The closed
//! universe of supported kinds covers fixed-width scalars, word-sized
//! integers, strings, sequences, maps, structs and pointer chains; user
//! types opt in with `#[derive(Wire)]` or take over entirely through the
//! capability hooks.
//!
//! Encoding and decoding are pure and stateless per call: any number of
//! threads may run the codec concurrently against distinct sinks and
//! sources without synchronization.

mod macros;

mod boxed;
mod buf;
mod cursor;
mod decode;
mod encode;
mod error;
mod hooks;
mod map;
mod scalar;
mod seq;
mod shape;
mod string;
mod wire;
mod word;

// Flat API hierarchy of traits and types

pub use self::buf::*;
pub use self::cursor::*;
pub use self::decode::*;
pub use self::encode::*;
pub use self::error::*;
pub use self::hooks::*;
pub use self::scalar::{Complex128, Complex64};
pub use self::shape::*;
pub use self::string::MAX_STRING_LEN;
pub use self::wire::*;
pub use self::word::WORD_SIZE;

/// Derives [`Wire`] (with its [`Encode`] and [`Decode`] supertraits) for a
/// struct, encoding the fields in declared order.
pub use goc_derive::Wire;
