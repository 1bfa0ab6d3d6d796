//! Static type descriptors and the pointer-indirection walker.
//!
//! Trait dispatch already fixes the wire layout of every [`crate::Wire`]
//! type at compile time; the [`Shape`] graph retains the little runtime
//! type identity the codec still needs: the unqualified type name and
//! in-memory size feeding the RPC method hash, and the pointer chain the
//! indirection walker validates before any bytes move.

use core::fmt;

/// The closed universe of kinds the wire codec supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// One byte, zero is false, any non-zero byte is true.
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer, little-endian.
    I16,
    /// Signed 32-bit integer, little-endian.
    I32,
    /// Signed 64-bit integer, little-endian.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer, little-endian.
    U16,
    /// Unsigned 32-bit integer, little-endian.
    U32,
    /// Unsigned 64-bit integer, little-endian.
    U64,
    /// IEEE-754 single, transferred as its little-endian bit pattern.
    F32,
    /// IEEE-754 double, transferred as its little-endian bit pattern.
    F64,
    /// Two `f32` halves, real then imaginary.
    Complex64,
    /// Two `f64` halves, real then imaginary.
    Complex128,
    /// Word-sized signed integer: one-byte size tag, then the payload.
    Int,
    /// Word-sized unsigned integer: one-byte size tag, then the payload.
    Uint,
    /// Length-prefixed UTF-8 byte sequence.
    Str,
    /// Fixed-length homogeneous sequence.
    Array,
    /// Variable-length homogeneous sequence.
    Slice,
    /// Unordered key/value pairs.
    Map,
    /// Named, ordered, statically typed fields.
    Struct,
    /// One level of indirection over the element shape.
    Pointer,
}

impl Kind {
    /// Encoded width of a fixed-width scalar kind, `None` for everything else.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::I64 | Self::U64 | Self::F64 | Self::Complex64 => Some(8),
            Self::Complex128 => Some(16),
            _ => None,
        }
    }
}

/// Static description of a wire type.
///
/// Shapes form a `'static` graph: pointer shapes link to their pointee, and
/// a self-referential `static` produces a pure pointer cycle, which
/// [`indirections`] rejects.
#[derive(Debug)]
pub struct Shape {
    /// Unqualified type name.
    pub name: &'static str,
    /// Kind of the described type.
    pub kind: Kind,
    /// In-memory size of the described type on this host.
    pub mem_size: usize,
    /// Pointee or element shape, where the kind has one.
    pub element: Option<&'static Shape>,
}

impl Shape {
    /// Describes a scalar or string type.
    #[must_use]
    pub const fn scalar(name: &'static str, kind: Kind, mem_size: usize) -> Self {
        Self {
            name,
            kind,
            mem_size,
            element: None,
        }
    }

    /// Describes a struct type.
    #[must_use]
    pub const fn strukt(name: &'static str, mem_size: usize) -> Self {
        Self {
            name,
            kind: Kind::Struct,
            mem_size,
            element: None,
        }
    }

    /// Describes a sequence (array or slice) over `element`.
    #[must_use]
    pub const fn sequence(name: &'static str, kind: Kind, mem_size: usize, element: &'static Shape) -> Self {
        Self {
            name,
            kind,
            mem_size,
            element: Some(element),
        }
    }

    /// Describes a map type.
    #[must_use]
    pub const fn map(name: &'static str, mem_size: usize) -> Self {
        Self {
            name,
            kind: Kind::Map,
            mem_size,
            element: None,
        }
    }

    /// Describes one level of pointer indirection over `element`.
    #[must_use]
    pub const fn pointer(name: &'static str, mem_size: usize, element: &'static Shape) -> Self {
        Self {
            name,
            kind: Kind::Pointer,
            mem_size,
            element: Some(element),
        }
    }
}

/// Error returned when a type is nothing but a cycle of pointers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecursivePointerError {
    type_name: &'static str,
}

impl RecursivePointerError {
    /// Name of the offending type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for RecursivePointerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot represent recursive pointer type {}", self.type_name)
    }
}

impl core::error::Error for RecursivePointerError {}

/// Counts the pointer layers that must be stripped from `shape` to reach a
/// non-pointer base shape, and returns that base alongside the count.
///
/// A type that is just a cycle of pointers (such as `type T = *T`) carries
/// no concrete data and cannot be represented on the wire. Cycle detection
/// per Knuth, Vol 2, Section 3.1, Ex 6, pp 539-540: a second shape walks
/// the chain at half speed, and the base shape lapping it means a cycle.
pub fn indirections(shape: &'static Shape) -> Result<(usize, &'static Shape), RecursivePointerError> {
    let mut base = shape;
    let mut slow = shape; // walks half as fast as `base`
    let mut levels = 0_usize;

    while base.kind == Kind::Pointer {
        let Some(element) = base.element else {
            break;
        };
        base = element;

        if core::ptr::eq(base, slow) {
            // base shape lapped the slow shape: recursive pointer type
            return Err(RecursivePointerError {
                type_name: base.name,
            });
        }

        if levels % 2 == 0 {
            slow = match slow.element {
                Some(element) => element,
                // unreachable: `slow` trails `base` inside the pointer prefix
                None => break,
            };
        }

        levels += 1;
    }

    Ok((levels, base))
}
