//! Turns a raw echo response body into display text.

use crate::percent::decode_component;

/// Prefix the echo server puts in front of a form-encoded message it echoes.
pub const ECHO_PREFIX: &str = "echo: message=";

/// Prefix kept in the display text once the message has been decoded.
pub const DISPLAY_PREFIX: &str = "echo: ";

/// Decode an echoed form body for display.
///
/// `"echo: message=Hello%20World"` becomes `"echo: Hello World"`. Bodies
/// without the echo prefix, and bodies whose remainder is not well-formed
/// percent-encoding, come back unchanged.
pub fn decode_response(body: &str) -> String {
    let Some(encoded) = body.strip_prefix(ECHO_PREFIX) else {
        return body.to_string();
    };
    match decode_component(encoded) {
        Some(message) => format!("{DISPLAY_PREFIX}{message}"),
        None => body.to_string(),
    }
}
