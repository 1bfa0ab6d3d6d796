//! Optional request/response validation.
//!
//! Validation runs outside the codec: the server side wraps a handler with
//! [`validated`], the client side goes through
//! [`Client::call_validated`](crate::Client::call_validated). Either way
//! the messages themselves stay plain wire types.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context as _;

use crate::error::HandlerResult;

/// A message that can check its own invariants.
pub trait Validate {
    /// Returns an error when the message violates its invariants.
    fn validate(&self) -> anyhow::Result<()>;
}

type BoxedCall<Res> = Pin<Box<dyn Future<Output = HandlerResult<Res>> + Send>>;

/// Handler middleware validating the request before the inner handler runs
/// and the response before it is encoded.
///
/// Takes a handler function and returns a new one suitable for
/// [`Server::register`](crate::Server::register).
pub fn validated<Req, Res, F, Fut>(next: F) -> impl Fn(Req) -> BoxedCall<Res> + Clone + Send + Sync + 'static
where
    F: Fn(Req) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult<Res>> + Send + 'static,
    Req: Validate + Send + 'static,
    Res: Validate,
{
    move |req: Req| {
        let next = next.clone();

        let call: BoxedCall<Res> = Box::pin(async move {
            req.validate().context("invalid request")?;

            let res = next(req).await?;

            res.validate().context("invalid response")?;

            Ok(res)
        });

        call
    }
}
