//! Per-method request handling.
//!
//! Each registered method owns one HTTP route. The request gauntlet runs
//! in a fixed order (media type, accept, method-identity hash, body
//! decode), and every gate failure maps to its own status code so a
//! misconfigured caller can tell what it got wrong.

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::header::{ACCEPT, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse as _, Response};
use goc::Wire;
use tracing::{debug, warn};

use crate::error::{HandlerError, HandlerResult};
use crate::{HEADER_METHOD_HASH, MIME_TYPE};

const ERR_INVALID_CONTENT_TYPE: &str = "Invalid Content-Type header value";
const ERR_INVALID_ACCEPT: &str = "Invalid Accept header value";
const ERR_MISSING_METHOD_HASH: &str = "Missing X-Method-Hash header";
const ERR_INVALID_METHOD_HASH: &str = "Invalid X-Method-Hash header value";
const ERR_REQUEST: &str = "Error decoding request";
const ERR_RESPONSE: &str = "Error encoding response";

/// A generic RPC handler taking any request and returning any response.
///
/// Implemented for every async function and closure from `Req` to
/// [`HandlerResult<Res>`]; middleware like
/// [`validated`](crate::validated) composes by returning a new such
/// function.
pub trait Handler<Req, Res>: Send + Sync + 'static {
    /// Handles one decoded request.
    fn call(&self, req: Req) -> impl Future<Output = HandlerResult<Res>> + Send;
}

impl<Req, Res, F, Fut> Handler<Req, Res> for F
where
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult<Res>> + Send,
{
    fn call(&self, req: Req) -> impl Future<Output = HandlerResult<Res>> + Send {
        self(req)
    }
}

/// Runs the gate chain and the user handler for one request.
pub(crate) async fn handle_call<Req, Res, H>(handler: Arc<H>, hash: Arc<str>, headers: HeaderMap, body: Bytes) -> Response
where
    Req: Wire,
    Res: Wire,
    H: Handler<Req, Res>,
{
    // Only requests carrying and accepting the goc media type are served.
    if header_value(&headers, CONTENT_TYPE.as_str()) != Some(MIME_TYPE) {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, ERR_INVALID_CONTENT_TYPE).into_response();
    }

    if header_value(&headers, ACCEPT.as_str()) != Some(MIME_TYPE) {
        return (StatusCode::NOT_ACCEPTABLE, ERR_INVALID_ACCEPT).into_response();
    }

    // The request must name this handler's method identity.
    match header_value(&headers, HEADER_METHOD_HASH) {
        None => return (StatusCode::BAD_REQUEST, ERR_MISSING_METHOD_HASH).into_response(),
        Some(got) if got != &*hash => {
            debug!(expected = %hash, got, "method hash mismatch");
            return (StatusCode::FORBIDDEN, ERR_INVALID_METHOD_HASH).into_response();
        }
        Some(_) => {}
    }

    let req = match goc::decode::<Req>(&body) {
        Ok(req) => req,
        Err(e) => {
            debug!(method = %hash, error = %e.report(), "failed to decode request");
            return (StatusCode::BAD_REQUEST, ERR_REQUEST).into_response();
        }
    };

    let res = match handler.call(req).await {
        Ok(res) => res,
        Err(HandlerError::Typed(e)) => {
            let status = StatusCode::from_u16(e.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, e.text).into_response();
        }
        Err(HandlerError::Other(e)) => {
            warn!(method = %hash, error = %e, "handler failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let encoded = match goc::encode(&res) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(method = %hash, error = %e.report(), "failed to encode response");
            return (StatusCode::INTERNAL_SERVER_ERROR, ERR_RESPONSE).into_response();
        }
    };

    (
        StatusCode::OK,
        [
            (CONTENT_TYPE.as_str(), MIME_TYPE),
            (HEADER_METHOD_HASH, &*hash),
            (X_CONTENT_TYPE_OPTIONS.as_str(), "nosniff"),
        ],
        encoded,
    )
        .into_response()
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
