//! Request-shaping policy and client configuration.
//!
//! # Design
//! The form-encoded and plain-text ways of posting a message differ only in
//! content type, body shape, and whether the echo is decoded. They are one
//! client parameterized by `BodyEncoding`, not two code paths.

use serde::{Deserialize, Serialize};

use crate::decode::decode_response;
use crate::error::ConfigError;
use crate::percent::encode_component;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:1234";
pub const DEFAULT_MESSAGE: &str = "Hello from Rust!";

/// How a message is put on the wire and how the reply is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    /// `message=<percent-encoded>` as `application/x-www-form-urlencoded`;
    /// the echoed body is decoded for display.
    #[default]
    Form,
    /// The message verbatim as `text/plain`; the echoed body is shown as-is.
    Plain,
}

impl BodyEncoding {
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::Form => "application/x-www-form-urlencoded",
            BodyEncoding::Plain => "text/plain",
        }
    }

    pub fn encode_body(&self, message: &str) -> String {
        match self {
            BodyEncoding::Form => format!("message={}", encode_component(message)),
            BodyEncoding::Plain => message.to_string(),
        }
    }

    pub fn display_body(&self, body: &str) -> String {
        match self {
            BodyEncoding::Form => decode_response(body),
            BodyEncoding::Plain => body.to_string(),
        }
    }
}

impl std::str::FromStr for BodyEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "form" => Ok(BodyEncoding::Form),
            "plain" => Ok(BodyEncoding::Plain),
            other => Err(format!("unknown body encoding: {other} (expected form or plain)")),
        }
    }
}

/// Starting values for a client session. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub message: String,
    pub encoding: BodyEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            encoding: BodyEncoding::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
