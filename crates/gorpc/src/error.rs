use reqwest::StatusCode;

/// Typed RPC error a handler may return to drive the HTTP reply.
///
/// The server relays `code` and `text` verbatim as the response status and
/// body; every other handler failure becomes a plain 500.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} {text}")]
pub struct Error {
    /// HTTP status code to reply with.
    pub code: u16,
    /// Response body text.
    pub text: String,
}

impl Error {
    /// Creates a typed RPC error.
    pub fn new(code: u16, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
}

/// Failure of a server-side handler invocation.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// A typed error relayed verbatim as HTTP status and body.
    #[error(transparent)]
    Typed(#[from] Error),
    /// Any other failure, reported as a 500 with the error text.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type returned by RPC handlers.
pub type HandlerResult<Res> = Result<Res, HandlerError>;

/// Failure of a client call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Encoding the request failed.
    #[error("encoding request")]
    Encode(#[source] goc::EncodeError),
    /// Decoding the response body failed.
    #[error("decoding response")]
    Decode(#[source] goc::DecodeError),
    /// The underlying HTTP request failed.
    #[error("sending request")]
    Transport(#[from] reqwest::Error),
    /// The server replied with a non-success status.
    #[error("http error: {status}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Response body text, as sent by the server.
        text: String,
    },
    /// The request failed local validation before it was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(anyhow::Error),
    /// The decoded response failed local validation.
    #[error("invalid response: {0}")]
    InvalidResponse(anyhow::Error),
}

/// Failure of the RPC server itself.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Binding the listen socket failed.
    #[error("binding listener")]
    Bind(#[source] std::io::Error),
    /// The HTTP host returned an error while serving.
    #[error("serving connections")]
    Serve(#[source] std::io::Error),
}
