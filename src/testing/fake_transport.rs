use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ToucaError;
use crate::ports::{Method, Response, Transport, TransportError};

/// Request observed by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

/// Scripted transport for testing without a server.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<(Method, String), Response>,
    configure_error: Option<ToucaError>,
    configured: RefCell<Vec<(String, String)>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert((method, path.to_string()), Response::new(status, body));
        self
    }

    pub fn with_configure_error(mut self, error: ToucaError) -> Self {
        self.configure_error = Some(error);
        self
    }

    /// Server that reports itself ready.
    pub fn ready() -> Self {
        Self::new().with_response(Method::Get, "/platform", 200, r#"{"ready": true}"#)
    }

    pub fn configured(&self) -> Vec<(String, String)> {
        self.configured.borrow().clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_body(&self, method: Method, path: &str) -> Option<String> {
        self.requests
            .borrow()
            .iter()
            .find(|r| r.method == method && r.path == path)
            .and_then(|r| r.body.clone())
    }
}

impl Transport for FakeTransport {
    fn configure(&mut self, api_url: &str, api_key: &str) -> Result<(), ToucaError> {
        self.configured.borrow_mut().push((api_url.to_string(), api_key.to_string()));
        match &self.configure_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.map(str::to_string),
        });
        self.responses
            .get(&(method, path.to_string()))
            .cloned()
            .ok_or_else(|| TransportError::Http(format!("no route for {} {}", method.as_str(), path)))
    }
}
