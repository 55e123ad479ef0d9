//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe one POST round-trip as plain data. The core builds an
//! `HttpRequest` and interprets an `HttpResponse` without ever touching the
//! network; the host executes the actual I/O through a [`Transport`].
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! a transport and back without lifetime concerns.

use crate::error::TransportError;

/// HTTP method for a request. The echo protocol only ever posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `EchoClient::build_send`. The host is responsible for executing
/// it and returning the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// `status_text` is the reason phrase (`"Internal Server Error"`), empty when
/// the transport does not know one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes an `HttpRequest` against the network.
///
/// Implementations must hand non-2xx responses back as `Ok` data; only a
/// failure to complete the round-trip is a `TransportError`.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn success_covers_whole_2xx_range() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Post,
            url: "http://localhost:1234".to_string(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: None,
        };
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("accept"), None);
    }
}
