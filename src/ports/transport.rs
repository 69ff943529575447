//! Touca server transport port definition.

use thiserror::Error;

use crate::domain::ToucaError;

/// HTTP method used by the resolution stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Raw response of a transport request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self { status, body: body.into() }
    }
}

/// Failure to complete a request at all.
///
/// Resolution stages translate these into the error catalog; they never reach
/// callers directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request was issued before `configure` succeeded.
    #[error("Transport is not configured")]
    NotConfigured,

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Request did not produce a response.
    #[error("HTTP request failed: {0}")]
    Http(String),
}

/// Port for authenticated calls to the Touca server.
pub trait Transport {
    /// Authenticate against `api_url` with `api_key`.
    ///
    /// Fails with `AuthInvalidKey` or `AuthInvalidResponse` when the server
    /// rejects the handshake.
    fn configure(&mut self, api_url: &str, api_key: &str) -> Result<(), ToucaError>;

    /// Send a request to `path`, relative to the configured API URL.
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, TransportError>;
}
