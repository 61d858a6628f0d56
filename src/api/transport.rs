//! HTTP transport seam.
//!
//! The client never talks to the network directly. It hands an [`HttpRequest`]
//! to a [`Transport`] and gets back the raw status, reason phrase and body.
//! [`ReqwestTransport`] is the production implementation; tests inject stubs.

#[cfg(feature = "http")]
use std::time::Duration;

use crate::api::error::ApiResult;

/// HTTP method used by the v1 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// An outbound request, fully assembled (URL includes any query string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST carrying a form-encoded body.
    pub fn post_form(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: Some(body.into()),
        }
    }
}

/// Raw response as seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    /// A response with the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: canonical_reason(status).to_string(),
            body: body.into(),
        }
    }

    /// Success in the sense of the exchange's reference clients: any status
    /// below 400.
    pub fn is_ok(&self) -> bool {
        self.status < 400
    }
}

/// Blocking "send request, get status + body" capability.
///
/// Implementations enforce their own deadline; a timeout must surface as an
/// error rather than a response. No retries happen above this seam.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

fn canonical_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

// ============================================================================
// reqwest implementation
// ============================================================================

/// [`Transport`] backed by a blocking reqwest client.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    /// Create a transport whose every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { http_client })
    }
}

#[cfg(feature = "http")]
impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.http_client.get(&request.url),
            Method::Post => self.http_client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
