// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unicode escape sequence codec.

use std::sync::OnceLock;

use regex::Regex;

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

static UNICODE_LITERAL_RE: OnceLock<Regex> = OnceLock::new();

/// Matches `\uXXXX` and `\u{X...}` escape sequences.
fn unicode_literal_re() -> &'static Regex {
    UNICODE_LITERAL_RE
        .get_or_init(|| Regex::new(r"\\u(?:([0-9a-fA-F]{4})|\{([0-9a-fA-F]+)\})").unwrap())
}

/// Unicode codec: each character <-> its `\uXXXX` escape.
///
/// Code points that need more than four hex digits encode as `\u{X...}`.
/// Decode scans the whole input for escapes and concatenates them; text
/// between escapes is ignored, and an input with no escapes at all decodes
/// to an empty buffer.
pub struct UnicodeCodec;

impl Codec for UnicodeCodec {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        let mut out = String::with_capacity(text.len() * 6);
        for c in text.chars() {
            let code = c as u32;
            if code > 0xffff {
                out.push_str(&format!("\\u{{{code:x}}}"));
            } else {
                out.push_str(&format!("\\u{code:04x}"));
            }
        }
        Ok(out)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        let mut out = String::new();
        for caps in unicode_literal_re().captures_iter(text) {
            let digits = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let code = u32::from_str_radix(digits, 16)
                .map_err(|_| CodecError::malformed(self.name(), "escape value out of range"))?;
            let c = char::from_u32(code).ok_or_else(|| {
                CodecError::malformed(
                    self.name(),
                    format!("\\u{{{code:x}}} is not a valid code point"),
                )
            })?;
            out.push(c);
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bmp() {
        assert_eq!(UnicodeCodec.encode(b"AB").unwrap(), "\\u0041\\u0042");
        assert_eq!(
            UnicodeCodec.encode("\u{20ac}".as_bytes()).unwrap(),
            "\\u20ac"
        );
    }

    #[test]
    fn test_encode_astral_uses_braces() {
        assert_eq!(
            UnicodeCodec.encode("\u{1f600}".as_bytes()).unwrap(),
            "\\u{1f600}"
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(UnicodeCodec.decode(b"\\u0041\\u0042").unwrap(), b"AB");
        assert_eq!(
            UnicodeCodec.decode(b"\\u{1f600}").unwrap(),
            "\u{1f600}".as_bytes()
        );
    }

    #[test]
    fn test_decode_ignores_surrounding_text() {
        assert_eq!(UnicodeCodec.decode(b"x \\u0041 y \\u0042 z").unwrap(), b"AB");
    }

    #[test]
    fn test_decode_no_escapes_yields_empty() {
        assert_eq!(UnicodeCodec.decode(b"plain text").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_invalid_code_point() {
        // surrogate
        assert!(UnicodeCodec.decode(b"\\ud800").is_err());
        // beyond U+10FFFF
        assert!(UnicodeCodec.decode(b"\\u{110000}").is_err());
    }

    #[test]
    fn test_round_trip_single_code_point() {
        let input = "\u{20ac}".as_bytes();
        let encoded = UnicodeCodec.encode(input).unwrap();
        assert_eq!(UnicodeCodec.decode(encoded.as_bytes()).unwrap(), input);
    }
}
