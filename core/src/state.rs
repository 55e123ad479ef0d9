//! View state for an interactive echo session.
//!
//! # Design
//! `UiState` is the whole state a front end renders: the URL and message
//! inputs, the last response or error, and the in-flight flag. It is only
//! mutated through the send flow (validate, clear, send, then show the
//! response or the error). The flow is split into `begin_send` and
//! `complete_send` so a host can run the round-trip itself and render the
//! in-flight state in between; `send` does all of it in one call.

use crate::client::EchoClient;
use crate::error::{SendError, TransportError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{BodyEncoding, ClientConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub url: String,
    pub message: String,
    pub encoding: BodyEncoding,
    response: String,
    error: String,
    /// Encoding of the request in flight; `None` when idle.
    in_flight: Option<BodyEncoding>,
}

impl UiState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.server_url.clone(),
            message: config.message.clone(),
            encoding: config.encoding,
            ..Self::default()
        }
    }

    /// Display text of the last successful send, empty if none.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Error text of the last failed send, empty if none.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// True between `begin_send` and `complete_send`.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn client(&self) -> EchoClient {
        EchoClient::new(&self.url, self.encoding)
    }

    /// Start a send of the current message.
    ///
    /// Returns `None` without touching the state while a send is already in
    /// flight. Returns `None` with the validation error set if the message is
    /// blank. Otherwise clears the previous outcome, marks the state as
    /// loading and returns the request for the host to execute.
    pub fn begin_send(&mut self) -> Option<HttpRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        match self.client().build_send(&self.message) {
            Ok(request) => {
                self.error.clear();
                self.response.clear();
                self.in_flight = Some(self.encoding);
                Some(request)
            }
            Err(e) => {
                self.show_error(&e);
                None
            }
        }
    }

    /// Finish the send started by `begin_send` with the host's outcome.
    ///
    /// The reply is shown with the encoding the request went out with, even
    /// if `encoding` or `url` were edited in the meantime.
    pub fn complete_send(&mut self, outcome: Result<HttpResponse, TransportError>) {
        let encoding = self.in_flight.take().unwrap_or(self.encoding);
        let result = outcome
            .map_err(SendError::from)
            .and_then(|response| EchoClient::new(&self.url, encoding).parse_send(response));
        match result {
            Ok(text) => {
                self.response = text;
                self.error.clear();
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Run the whole send flow through `transport`.
    ///
    /// Returns whether the send produced a response.
    pub fn send<T: Transport>(&mut self, transport: &mut T) -> bool {
        let Some(request) = self.begin_send() else {
            return false;
        };
        let outcome = transport.execute(request);
        self.complete_send(outcome);
        self.error.is_empty()
    }

    fn show_error(&mut self, e: &SendError) {
        self.response.clear();
        self.error = if e.is_validation() {
            e.to_string()
        } else {
            format!("error: {e}")
        };
    }
}
