//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — a [`Transport`] implementation supplied by the
//! host executes the actual round trip. This keeps the client logic
//! deterministic and lets tests script responses without a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values move freely between
//! the controller and the host.

use crate::error::SyncError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods and handed to a [`Transport`] for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then passed to `ApiClient::parse_*` methods
/// for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round trip. Exactly one network exchange per call; no
/// retries, no client-side timeout beyond the transport's own defaults.
///
/// A transport failure (connectivity, DNS, interrupted body) surfaces as
/// `SyncError::Network`. Non-success statuses are NOT errors at this layer;
/// they come back as data so the parse step owns status interpretation.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, SyncError>;
}
