//! HTTP transport abstraction.
//!
//! Every network operation in the SDK goes through the [`Transport`] trait:
//! exactly one HTTP request per call, no retries, no caching. The trait exists
//! so higher layers (token exchange, messaging, attachments) can be exercised
//! against test doubles without touching the network.
//!
//! The production implementation is [`ReqwestTransport`].
//!
//! # Examples
//!
//! ```no_run
//! use works_bot_sdk::transport::{FetchRequest, ReqwestTransport, Transport};
//!
//! # async fn example() -> Result<(), works_bot_sdk::HttpError> {
//! let transport = ReqwestTransport::new()?;
//! let response = transport
//!     .fetch(FetchRequest::get("https://www.worksapis.com/v1.0/bots"))
//!     .await?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Method;

use crate::error::{HttpError, ParseError};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("works-bot-sdk/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single outbound HTTP request.
///
/// Built with the [`get`](FetchRequest::get)/[`post`](FetchRequest::post)
/// constructors and chained setters.
///
/// # Examples
///
/// ```
/// use works_bot_sdk::transport::FetchRequest;
/// use bytes::Bytes;
///
/// let request = FetchRequest::post("https://example.com/upload")
///     .bearer("token")
///     .content_type("application/json")
///     .body(Bytes::from_static(b"{}"));
/// assert_eq!(request.url(), "https://example.com/upload");
/// ```
#[derive(Debug, Clone)]
pub struct FetchRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    content_type: Option<String>,
    follow_redirects: bool,
}

impl FetchRequest {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            content_type: None,
            follow_redirects: false,
        }
    }

    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a bearer `Authorization` header.
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Set the request body.
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the `Content-Type` of the request body.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Follow redirects instead of returning the redirect response.
    ///
    /// Off by default: a 3xx answer is then returned as a normal
    /// [`FetchResponse`] so the caller can read its `Location` header.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether redirects will be followed.
    pub fn follows_redirects(&self) -> bool {
        self.follow_redirects
    }
}

/// Uniform result of a [`Transport::fetch`] call.
///
/// Header names are stored lowercased; lookups through
/// [`header`](FetchResponse::header) are case-insensitive.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl FetchResponse {
    /// Create a response envelope. Header names are lowercased on insert.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Look up a response header, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// All response headers (lowercased names).
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The raw body bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response, returning the raw body bytes.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// The body as text (lossy for non-UTF-8 payloads).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_slice(&self.body).map_err(ParseError::from)
    }
}

/// Capability to perform exactly one HTTP request.
///
/// Statuses 200 and 201 are successes. A 3xx answer is also returned (not
/// raised) when the request did not ask to follow redirects, since the
/// redirect itself is then the expected result. Everything else fails fast
/// with [`HttpError::Status`] carrying the textual body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return the uniform response envelope.
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, HttpError>;
}

/// Production transport backed by [`reqwest`].
///
/// Holds two pre-built clients: one that never follows redirects (the
/// default) and one that does, selected per request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    no_redirect: reqwest::Client,
    follow: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout and user agent.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let no_redirect = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(HttpError::Transport)?;
        let follow = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(HttpError::Transport)?;
        Ok(Self {
            no_redirect,
            follow,
        })
    }

    fn build_headers(request: &FetchRequest) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::new();
        for (name, value) in &request.headers {
            let name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidRequest {
                    message: format!("invalid header name {name:?}: {e}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidRequest {
                message: format!("invalid header value for {name}: {e}"),
            })?;
            map.insert(name, value);
        }
        if let Some(content_type) = &request.content_type {
            let value =
                HeaderValue::from_str(content_type).map_err(|e| HttpError::InvalidRequest {
                    message: format!("invalid content type: {e}"),
                })?;
            map.insert(CONTENT_TYPE, value);
        }
        Ok(map)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, HttpError> {
        let client = if request.follow_redirects {
            &self.follow
        } else {
            &self.no_redirect
        };

        let headers = Self::build_headers(&request)?;
        let mut builder = client
            .request(request.method.clone(), &request.url)
            .headers(headers);
        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(HttpError::Transport)?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(HttpError::Transport)?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status,
            "request completed"
        );

        let redirect_expected = !request.follow_redirects && (300..400).contains(&status);
        if !matches!(status, 200 | 201) && !redirect_expected {
            return Err(HttpError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(FetchResponse::new(status, headers, body))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
