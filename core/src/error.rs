//! Error types for the echo client.
//!
//! # Design
//! `SendError` covers everything a send can surface to the user: the
//! pre-flight validation failure, a non-2xx status, and a transport failure.
//! Percent-decoding failures never appear here; the decoder recovers from
//! them by returning the raw body.

use std::fmt;

/// Errors returned by `EchoClient` and recorded by `UiState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The message was empty or whitespace-only. Nothing was sent.
    EmptyMessage,

    /// The server answered with a non-2xx status.
    Http { status: u16, status_text: String },

    /// The request could not complete (unreachable host, refused
    /// connection, broken stream). Carries the underlying message.
    Transport(String),
}

impl SendError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SendError::EmptyMessage)
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::EmptyMessage => write!(f, "please enter a message"),
            SendError::Http {
                status,
                status_text,
            } => {
                write!(f, "HTTP {status}: {status_text}")
            }
            SendError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SendError {}

/// A failure reported by a `Transport` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl fmt::Display) -> Self {
        TransportError(msg.to_string())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportError {}

impl From<TransportError> for SendError {
    fn from(e: TransportError) -> Self {
        SendError::Transport(e.0)
    }
}

/// The client configuration could not be parsed.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "invalid client config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
