//! Touca server transport implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::domain::ToucaError;
use crate::ports::{Method, Response, Transport, TransportError};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const SIGNIN_PATH: &str = "/client/signin";

/// HTTP client for the Touca server API.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
    token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct SigninResponse {
    token: String,
}

impl HttpTransport {
    /// Create an unconfigured transport with the default request timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("touca-client-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, api_url: None, api_key: None, token: None })
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, TransportError> {
        let base = self.api_url.as_deref().ok_or(TransportError::NotConfigured)?;
        let url = format!("{}{}", base, path);
        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut request = self.client.request(method, &url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body.to_string());
        }

        let response = request.send().map_err(|e| TransportError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| TransportError::Http(e.to_string()))?;
        tracing::debug!(url = %url, status, "Touca server responded");
        Ok(Response { status, body })
    }
}

impl Transport for HttpTransport {
    fn configure(&mut self, api_url: &str, api_key: &str) -> Result<(), ToucaError> {
        if self.token.is_some()
            && self.api_url.as_deref() == Some(api_url)
            && self.api_key.as_deref() == Some(api_key)
        {
            return Ok(());
        }

        Url::parse(api_url).map_err(|_| ToucaError::invalid("api_url"))?;
        self.api_url = Some(api_url.trim_end_matches('/').to_string());
        self.api_key = Some(api_key.to_string());
        self.token = None;

        let payload = json!({ "key": api_key }).to_string();
        let response = self.send(Method::Post, SIGNIN_PATH, Some(&payload)).map_err(|e| {
            tracing::warn!(error = %e, "Authentication request failed");
            ToucaError::AuthServerDown
        })?;

        match response.status {
            200 => {}
            401 => return Err(ToucaError::AuthInvalidKey),
            _ => return Err(ToucaError::AuthInvalidResponse),
        }

        let parsed: SigninResponse =
            serde_json::from_str(&response.body).map_err(|_| ToucaError::AuthInvalidResponse)?;
        self.token = Some(parsed.token);
        tracing::debug!(api_url = api_url, "Authenticated with Touca server");
        Ok(())
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, TransportError> {
        self.send(method, path, body)
    }
}
