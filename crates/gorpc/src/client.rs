use std::marker::PhantomData;

use goc::Wire;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::error::ClientError;
use crate::hash::method_hash;
use crate::validation::Validate;
use crate::{HEADER_METHOD_HASH, MIME_TYPE};

/// Typed RPC client for a single method.
///
/// A client is pinned to one request/response type pair: the method
/// identity is derived at construction and baked into both the request
/// path and the `X-Method-Hash` header. Cancellation follows async
/// semantics: dropping a [`call`](Client::call) future aborts the
/// in-flight request, and no retries are attempted.
pub struct Client<Req, Res> {
    http: reqwest::Client,
    url: String,
    hash: String,
    _types: PhantomData<fn(Req) -> Res>,
}

impl<Req, Res> Client<Req, Res>
where
    Req: Wire,
    Res: Wire,
{
    /// Creates a client calling the method at `addr` with default options.
    #[must_use]
    pub fn new(addr: &str) -> Self {
        Self::builder(addr).build()
    }

    /// Starts building a client with custom options.
    #[must_use]
    pub fn builder(addr: &str) -> ClientBuilder<Req, Res> {
        ClientBuilder {
            addr: addr.to_owned(),
            http: None,
            _types: PhantomData,
        }
    }

    /// Returns the method identity this client calls.
    #[must_use]
    pub fn method_hash(&self) -> &str {
        &self.hash
    }

    /// Encodes `req`, POSTs it to the method endpoint, and decodes the
    /// response.
    pub async fn call(&self, req: &Req) -> Result<Res, ClientError> {
        let body = goc::encode(req).map_err(ClientError::Encode)?;

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, MIME_TYPE)
            .header(ACCEPT, MIME_TYPE)
            .header(HEADER_METHOD_HASH, self.hash.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let text = response.text().await.unwrap_or_default();
            debug!(method = %self.hash, %status, "call rejected");
            return Err(ClientError::Status { status, text });
        }

        let body = response.bytes().await?;

        goc::decode::<Res>(&body).map_err(ClientError::Decode)
    }

    /// Same as [`call`](Client::call), with both messages checked against
    /// their own invariants around the exchange.
    pub async fn call_validated(&self, req: &Req) -> Result<Res, ClientError>
    where
        Req: Validate,
        Res: Validate,
    {
        req.validate().map_err(ClientError::InvalidRequest)?;

        let res = self.call(req).await?;

        res.validate().map_err(ClientError::InvalidResponse)?;

        Ok(res)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder<Req, Res> {
    addr: String,
    http: Option<reqwest::Client>,
    _types: PhantomData<fn(Req) -> Res>,
}

impl<Req, Res> ClientBuilder<Req, Res>
where
    Req: Wire,
    Res: Wire,
{
    /// Uses a caller-provided HTTP client instead of a fresh one, e.g. to
    /// share a connection pool across method clients.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the client.
    #[must_use]
    pub fn build(self) -> Client<Req, Res> {
        let hash = method_hash::<Req, Res>();
        let url = format!("{}/{}", self.addr.trim_end_matches('/'), hash);

        Client {
            http: self.http.unwrap_or_default(),
            url,
            hash,
            _types: PhantomData,
        }
    }
}
