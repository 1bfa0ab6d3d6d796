use core::fmt;

use crate::shape::RecursivePointerError;

/// A result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// A result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

type Source = Box<dyn core::error::Error + Send + Sync>;

/// Kinds of errors that can occur while encoding a value.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum EncodeErrorKind {
    /// The sink is too small for the bytes about to be produced.
    ///
    /// Only reachable when an [`crate::Encode::encode`] impl produces more
    /// bytes than its [`crate::Encode::size`] advertised.
    NotEnoughBytes {
        /// The number of bytes available in the sink.
        received: usize,
        /// The number of bytes required.
        expected: usize,
    },
    /// A string longer than `2^31 - 1` bytes cannot be represented on the wire.
    StringTooLong {
        /// Byte length of the offending string.
        len: usize,
    },
    /// The type is a pure cycle of pointers and carries no value to encode.
    RecursivePointer {
        /// Name of the offending type.
        type_name: &'static str,
    },
    /// A user capability raised an error; the cause is attached as source.
    HookFailed {
        /// Which capability protocol failed.
        protocol: &'static str,
    },
    /// A field in the value being encoded is invalid.
    InvalidField {
        /// The name of the invalid field.
        field: &'static str,
        /// The reason why the field is considered invalid.
        reason: &'static str,
    },
    /// Layer context: the error originates from a named struct field.
    Field {
        /// Declared field name.
        name: &'static str,
    },
    /// Layer context: the error originates from a sequence element.
    Element {
        /// Zero-based element index.
        index: usize,
    },
    /// Layer context: the error originates from a map key.
    MapKey,
    /// Layer context: the error originates from a map value.
    MapValue,
    /// Any other error that doesn’t fit the above categories.
    Other {
        /// A description of the error.
        description: &'static str,
    },
}

impl fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughBytes { received, expected } => write!(
                f,
                "sink too small: {received} bytes available, {expected} bytes required"
            ),
            Self::StringTooLong { len } => {
                write!(f, "string of {len} bytes exceeds the maximum encodable length")
            }
            Self::RecursivePointer { type_name } => {
                write!(f, "cannot represent recursive pointer type {type_name}")
            }
            Self::HookFailed { protocol } => write!(f, "{protocol} hook failed"),
            Self::InvalidField { field, reason } => write!(f, "invalid `{field}`: {reason}"),
            Self::Field { name } => write!(f, "encoding field `{name}`"),
            Self::Element { index } => write!(f, "encoding element {index}"),
            Self::MapKey => write!(f, "encoding map key"),
            Self::MapValue => write!(f, "encoding map value"),
            Self::Other { description } => write!(f, "{description}"),
        }
    }
}

/// Kinds of errors that can occur while decoding a stream.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum DecodeErrorKind {
    /// The source ended before the declared value did.
    NotEnoughBytes {
        /// The number of bytes actually available.
        received: usize,
        /// The number of bytes expected.
        expected: usize,
    },
    /// A word-sized integer carried a size tag other than 4 or 8.
    SizeTagUnknown {
        /// The tag byte that was read.
        got: u8,
    },
    /// A length prefix disagrees with the statically declared length.
    LengthMismatch {
        /// Length declared by the type.
        expected: usize,
        /// Length found on the wire.
        got: usize,
    },
    /// The type is a pure cycle of pointers and carries no value to decode.
    RecursivePointer {
        /// Name of the offending type.
        type_name: &'static str,
    },
    /// A user capability raised an error; the cause is attached as source.
    HookFailed {
        /// Which capability protocol failed.
        protocol: &'static str,
    },
    /// A decoded field violates its type’s requirements.
    InvalidField {
        /// The name of the invalid field.
        field: &'static str,
        /// The reason why the field is considered invalid.
        reason: &'static str,
    },
    /// Layer context: the error originates from a named struct field.
    Field {
        /// Declared field name.
        name: &'static str,
    },
    /// Layer context: the error originates from a sequence element.
    Element {
        /// Zero-based element index.
        index: usize,
    },
    /// Layer context: the error originates from a map key.
    MapKey,
    /// Layer context: the error originates from a map value.
    MapValue,
    /// Any other error that doesn’t fit the above categories.
    Other {
        /// A description of the error.
        description: &'static str,
    },
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughBytes { received, expected } => write!(
                f,
                "not enough bytes provided to decode: received {received} bytes, expected {expected} bytes"
            ),
            Self::SizeTagUnknown { got } => write!(f, "unknown word size tag ({got})"),
            Self::LengthMismatch { expected, got } => {
                write!(f, "length prefix {got} does not match declared length {expected}")
            }
            Self::RecursivePointer { type_name } => {
                write!(f, "cannot represent recursive pointer type {type_name}")
            }
            Self::HookFailed { protocol } => write!(f, "{protocol} hook failed"),
            Self::InvalidField { field, reason } => write!(f, "invalid `{field}`: {reason}"),
            Self::Field { name } => write!(f, "decoding field `{name}`"),
            Self::Element { index } => write!(f, "decoding element {index}"),
            Self::MapKey => write!(f, "decoding map key"),
            Self::MapValue => write!(f, "decoding map value"),
            Self::Other { description } => write!(f, "{description}"),
        }
    }
}

macro_rules! define_error {
    ($error:ident, $kind:ident, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Carries a static context string naming the layer that failed, a
        /// kind, and an optional boxed cause. Layer-context kinds
        /// ([`Field`](Self::kind), `Element`, `MapKey`, `MapValue`) chain the
        /// inner error as their source, so [`report`](Self::report) prints
        /// the full path down to the leaf failure.
        #[derive(Debug)]
        pub struct $error {
            context: &'static str,
            kind: $kind,
            source: Option<Source>,
        }

        impl $error {
            /// Creates a new error with the given context and kind.
            #[cold]
            #[must_use]
            pub fn new(context: &'static str, kind: $kind) -> Self {
                Self {
                    context,
                    kind,
                    source: None,
                }
            }

            /// Attaches an underlying cause to this error.
            #[cold]
            #[must_use]
            pub fn with_source<E>(mut self, source: E) -> Self
            where
                E: core::error::Error + Send + Sync + 'static,
            {
                self.source = Some(Box::new(source));
                self
            }

            /// Returns the context string identifying the failing layer.
            pub fn context(&self) -> &'static str {
                self.context
            }

            /// Returns the error kind.
            pub fn kind(&self) -> &$kind {
                &self.kind
            }

            /// Creates a hook-failure error for the given capability protocol.
            #[cold]
            #[must_use]
            pub fn hook_failed(protocol: &'static str, cause: Self) -> Self {
                Self::new(protocol, $kind::HookFailed { protocol }).with_source(cause)
            }

            /// Wraps `inner` with the name of the struct field it was reached through.
            #[cold]
            #[must_use]
            pub fn for_field(context: &'static str, name: &'static str, inner: Self) -> Self {
                Self::new(context, $kind::Field { name }).with_source(inner)
            }

            /// Wraps `inner` with the index of the sequence element it was reached through.
            #[cold]
            #[must_use]
            pub fn for_element(context: &'static str, index: usize, inner: Self) -> Self {
                Self::new(context, $kind::Element { index }).with_source(inner)
            }

            /// Wraps `inner` as originating from a map key.
            #[cold]
            #[must_use]
            pub fn for_map_key(context: &'static str, inner: Self) -> Self {
                Self::new(context, $kind::MapKey).with_source(inner)
            }

            /// Wraps `inner` as originating from a map value.
            #[cold]
            #[must_use]
            pub fn for_map_value(context: &'static str, inner: Self) -> Self {
                Self::new(context, $kind::MapValue).with_source(inner)
            }

            /// Returns an object that formats this error along with its whole source chain.
            pub fn report(&self) -> ErrorReport<'_> {
                ErrorReport(self)
            }
        }

        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[{}] {}", self.context, self.kind)
            }
        }

        impl core::error::Error for $error {
            fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
                // NOTE: can’t use Option::as_deref here because of type inference
                if let Some(e) = &self.source {
                    Some(e.as_ref())
                } else {
                    None
                }
            }
        }

        impl From<RecursivePointerError> for $error {
            fn from(e: RecursivePointerError) -> Self {
                Self::new(
                    "indirection",
                    $kind::RecursivePointer {
                        type_name: e.type_name(),
                    },
                )
            }
        }

        impl NotEnoughBytesErr for $error {
            fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self {
                Self::new(context, $kind::NotEnoughBytes { received, expected })
            }
        }

        impl InvalidFieldErr for $error {
            fn invalid_field(context: &'static str, field: &'static str, reason: &'static str) -> Self {
                Self::new(context, $kind::InvalidField { field, reason })
            }
        }

        impl OtherErr for $error {
            fn other(context: &'static str, description: &'static str) -> Self {
                Self::new(context, $kind::Other { description })
            }
        }
    };
}

define_error!(
    EncodeError,
    EncodeErrorKind,
    "An error produced while encoding a value."
);
define_error!(
    DecodeError,
    DecodeErrorKind,
    "An error produced while decoding a stream."
);

/// Formats an error together with its whole source chain.
pub struct ErrorReport<'a>(&'a (dyn core::error::Error + 'static));

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut next_source = self.0.source();

        while let Some(e) = next_source {
            write!(f, ", caused by: {e}")?;
            next_source = e.source();
        }

        Ok(())
    }
}

/// Trait for creating "not enough bytes" errors.
///
/// Implemented by both [`EncodeError`] and [`DecodeError`] so the
/// [`crate::ensure_size!`] macro works on either side of the codec.
pub trait NotEnoughBytesErr {
    /// Creates a new "not enough bytes" error.
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self;
}

/// Trait for creating "invalid field" errors on either side of the codec.
pub trait InvalidFieldErr {
    /// Creates a new "invalid field" error.
    fn invalid_field(context: &'static str, field: &'static str, reason: &'static str) -> Self;
}

/// Trait for creating catch-all errors on either side of the codec.
pub trait OtherErr {
    /// Creates a new error from a description.
    fn other(context: &'static str, description: &'static str) -> Self;
}

/// Helper function to create an "invalid field" error.
pub fn invalid_field_err<T: InvalidFieldErr>(context: &'static str, field: &'static str, reason: &'static str) -> T {
    T::invalid_field(context, field, reason)
}

/// Helper function to create a catch-all error.
pub fn other_err<T: OtherErr>(context: &'static str, description: &'static str) -> T {
    T::other(context, description)
}
