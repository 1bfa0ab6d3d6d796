//! Minimalist typed RPC over HTTP, framed with the [`goc`] wire codec.
//!
//! A method is a request/response type pair: its identity is a 128-bit
//! FNV-1a hash over the type names and in-memory sizes, used both as the
//! request path and as a header the server checks before decoding a byte.
//! Bodies travel as `application/goc`, the compact little-endian format
//! the codec crate produces.
//!
//! The server mounts one `POST /<method-hash>` route per registered
//! handler; the client encodes, posts and decodes a single pair per call.

mod client;
mod error;
mod handler;
mod hash;
mod server;
mod validation;

pub use self::client::{Client, ClientBuilder};
pub use self::error::{ClientError, Error, HandlerError, HandlerResult, ServerError};
pub use self::handler::Handler;
pub use self::hash::method_hash;
pub use self::server::Server;
pub use self::validation::{validated, Validate};

/// Media type of goc-encoded request and response bodies.
pub const MIME_TYPE: &str = "application/goc";

/// Header carrying the method-identity hash of a call.
pub const HEADER_METHOD_HASH: &str = "x-method-hash";
