//! Outgoing HTTP request description, executed by the external services layer

use hyperswitch_masking::{ErasedMaskSerialize, Maskable};
use serde::{Deserialize, Serialize};

/// Header collection of an outgoing request; sensitive values stay masked in logs
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP method of an outgoing request
#[allow(missing_docs)]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Body of an outgoing request
pub enum RequestContent {
    /// JSON body, serialized with secrets masked when logged
    Json(Box<dyn ErasedMaskSerialize + Send>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

/// An outgoing HTTP request
#[derive(Debug)]
pub struct Request {
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// HTTP method
    pub method: Method,
    /// Optional body
    pub body: Option<RequestContent>,
}

impl Request {
    /// Creates a new request with the specified HTTP method and URL.
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the body of the request
    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    headers: Headers,
    method: Method,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    /// Creates a GET request builder without URL
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(256),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the URL
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends the given headers
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the body
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    /// Finalizes the request
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
