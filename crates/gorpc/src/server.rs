use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;
use goc::Wire;
use rand::Rng as _;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::handler::{handle_call, Handler};
use crate::hash::method_hash;

/// Ephemeral port range used when no port is configured, per RFC 6335.
const EPHEMERAL_PORTS: core::ops::RangeInclusive<u16> = 49152..=65535;

/// RPC server hosting one HTTP route per registered method.
///
/// Methods are mounted at `POST /<method-hash>`; everything about a
/// server's surface is derived from the request/response type pairs it was
/// registered with. The listen port is fixed at construction so clients
/// can be pointed at [`port`](Server::port) before the server starts, and
/// [`serve`](Server::serve) consumes the server, so registering against a
/// running server is unrepresentable.
pub struct Server {
    router: Router,
    port: u16,
}

impl Server {
    /// Creates a server listening on `port`.
    ///
    /// A configuration of zero or less picks a port uniformly at random
    /// from the ephemeral range [49152, 65535], as does any value that is
    /// not a valid port number.
    #[must_use]
    pub fn new(port: i32) -> Self {
        let port = match u16::try_from(port) {
            Ok(port) if port > 0 => port,
            _ => rand::thread_rng().gen_range(EPHEMERAL_PORTS),
        };

        Self {
            router: Router::new(),
            port,
        }
    }

    /// Returns the port this server listens on.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Registers `handler` under the method identity of its
    /// request/response pair.
    ///
    /// # Panics
    ///
    /// Panics when a handler for the same method identity is already
    /// registered, mirroring the duplicate-route behavior of the HTTP
    /// router underneath.
    pub fn register<Req, Res, H>(&mut self, handler: H)
    where
        Req: Wire + Send + 'static,
        Res: Wire + Send + 'static,
        H: Handler<Req, Res>,
    {
        let hash: Arc<str> = method_hash::<Req, Res>().into();
        debug!(method = %hash, "registering handler");

        let handler = Arc::new(handler);
        let path = format!("/{hash}");

        let route = move |headers: HeaderMap, body: Bytes| {
            let handler = Arc::clone(&handler);
            let hash = Arc::clone(&hash);
            async move { handle_call::<Req, Res, H>(handler, hash, headers, body).await }
        };

        self.router = core::mem::take(&mut self.router).route(&path, post(route));
    }

    /// Binds the listen socket and serves requests until the process ends.
    pub async fn serve(self) -> Result<(), ServerError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Binds the listen socket and serves requests until `shutdown`
    /// completes, then drains gracefully.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port));
        let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;

        info!(port = self.port, "gorpc server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }
}
