//! Stateless request builder and response parser for the echo server.
//!
//! # Design
//! `EchoClient` holds only the target URL and the `BodyEncoding` and carries
//! no mutable state between calls. A send is split into `build_send`, which
//! produces an `HttpRequest`, and `parse_send`, which consumes an
//! `HttpResponse`. `dispatch` glues the two around a `Transport` for callers
//! that don't need the split.

use crate::error::SendError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::BodyEncoding;

#[derive(Debug, Clone)]
pub struct EchoClient {
    server_url: String,
    encoding: BodyEncoding,
}

impl EchoClient {
    /// The URL is posted to as given.
    pub fn new(server_url: &str, encoding: BodyEncoding) -> Self {
        Self {
            server_url: server_url.to_string(),
            encoding,
        }
    }

    /// Build the POST for `message`.
    ///
    /// Rejects a message that is empty after trimming. The message itself is
    /// sent untrimmed.
    pub fn build_send(&self, message: &str) -> Result<HttpRequest, SendError> {
        if message.trim().is_empty() {
            return Err(SendError::EmptyMessage);
        }
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.server_url.clone(),
            headers: vec![(
                "content-type".to_string(),
                self.encoding.content_type().to_string(),
            )],
            body: Some(self.encoding.encode_body(message)),
        })
    }

    /// Turn the server's reply into display text.
    pub fn parse_send(&self, response: HttpResponse) -> Result<String, SendError> {
        check_status(&response)?;
        Ok(self.encoding.display_body(&response.body))
    }

    /// Build, execute and parse in one step.
    pub fn dispatch<T: Transport>(&self, message: &str, transport: &mut T) -> Result<String, SendError> {
        let request = self.build_send(message)?;
        let response = transport.execute(request)?;
        self.parse_send(response)
    }
}

/// Map non-2xx status codes to `SendError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), SendError> {
    if response.is_success() {
        return Ok(());
    }
    Err(SendError::Http {
        status: response.status,
        status_text: response.status_text.clone(),
    })
}
