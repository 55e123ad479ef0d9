//! URI-component percent-encoding on top of `pct-str`.
//!
//! The component rules leave ASCII alphanumerics and `- _ . ! ~ * ' ( )`
//! literal and encode everything else as the `%XX` escapes of its UTF-8
//! bytes. Decoding accepts either hex case and rejects truncated escapes,
//! non-hex digits, and byte sequences that are not valid UTF-8.

use pct_str::{PctStr, PctString};

/// Encoder for a single URI component, such as a form field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriComponent;

impl pct_str::Encoder for UriComponent {
    fn encode(&self, c: char) -> bool {
        !(c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')'))
    }
}

/// Percent-encode `input` as a URI component.
pub fn encode_component(input: &str) -> String {
    PctString::encode(input.chars(), UriComponent).into_string()
}

/// Percent-decode `input`, or `None` if it is not well-formed.
///
/// The decoded bytes must be canonical UTF-8: overlong forms, surrogates and
/// code points above U+10FFFF are rejected. `+` is left as-is.
pub fn decode_component(input: &str) -> Option<String> {
    let pct = PctStr::new(input).ok()?;
    String::from_utf8(pct.bytes().collect()).ok()
}
