//! Helper macros for wire encoding and decoding.
//!
//! The error constructors go through the [`crate::NotEnoughBytesErr`] /
//! [`crate::InvalidFieldErr`] traits so the same macro works inside both
//! `Encode` and `Decode` impls; the concrete error type is picked up from
//! the surrounding function’s return type.

/// Returns early with a "not enough bytes" error when `$buf` holds fewer
/// than `$expected` bytes.
#[macro_export]
macro_rules! ensure_size {
    (ctx: $ctx:expr, in: $buf:ident, size: $expected:expr) => {{
        let received = $buf.len();
        let expected = $expected;
        if !(received >= expected) {
            return Err($crate::NotEnoughBytesErr::not_enough_bytes($ctx, received, expected));
        }
    }};
    (in: $buf:ident, size: $expected:expr) => {{
        $crate::ensure_size!(ctx: <Self as $crate::Wire>::SHAPE.name, in: $buf, size: $expected)
    }};
}

/// Converts a length with `try_into`, failing with an "invalid field" error
/// when the value does not fit the target type.
#[macro_export]
macro_rules! cast_length {
    ($ctx:expr, $field:expr, $len:expr) => {{
        $len.try_into()
            .map_err(|_| $crate::invalid_field_err::<$crate::EncodeError>($ctx, $field, "too many elements"))
    }};
    ($field:expr, $len:expr) => {{
        $crate::cast_length!(<Self as $crate::Wire>::SHAPE.name, $field, $len)
    }};
}

/// Asserts that the traits support dynamic dispatch.
///
/// From <https://docs.rs/static_assertions/1.1.0/src/static_assertions/assert_obj_safe.rs.html#72-76>
#[macro_export]
macro_rules! assert_obj_safe {
    ($($xs:path),+ $(,)?) => {
        $(const _: Option<&dyn $xs> = None;)+
    };
}
