//! Synchronous client core for the echo test server.
//!
//! # Overview
//! Builds the POST that carries a message to the echo server and turns the
//! reply into display text, without touching the network (host-does-IO
//! pattern). The host executes the round-trip through a [`Transport`].
//!
//! # Design
//! - `EchoClient` is stateless; it holds only the URL and `BodyEncoding`.
//! - A send is split into `build_send` (produces request) and `parse_send`
//!   (consumes response), so the I/O boundary is explicit.
//! - `UiState` layers the URL/message inputs, last response or error and the
//!   in-flight flag on top of the client for interactive front ends.
//! - `decode_response` strips the echo prefix and percent-decodes the rest,
//!   returning the body untouched when it can't.

pub mod client;
pub mod decode;
pub mod error;
pub mod http;
pub mod percent;
pub mod state;
pub mod types;

pub use client::EchoClient;
pub use decode::{decode_response, DISPLAY_PREFIX, ECHO_PREFIX};
pub use error::{ConfigError, SendError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use percent::{decode_component, encode_component};
pub use state::UiState;
pub use types::{BodyEncoding, ClientConfig, DEFAULT_MESSAGE, DEFAULT_SERVER_URL};
