// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! HTML entity codec.

use super::{input_text, Codec};
use crate::core::Result;

/// HTML codec: escapes text-content special characters on encode and decodes
/// named and numeric character references.
pub struct HtmlCodec;

impl Codec for HtmlCodec {
    fn name(&self) -> &'static str {
        "html"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        Ok(html_escape::encode_text(text).into_owned())
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        Ok(html_escape::decode_html_entities(text)
            .into_owned()
            .into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            HtmlCodec.encode(b"<a href=\"x\">&</a>").unwrap(),
            "&lt;a href=\"x\"&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(HtmlCodec.decode(b"&lt;b&gt;&amp;&lt;/b&gt;").unwrap(), b"<b>&</b>");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(HtmlCodec.decode(b"&#65;&#x42;").unwrap(), b"AB");
    }

    #[test]
    fn test_decode_plain_text_unchanged() {
        assert_eq!(HtmlCodec.decode(b"plain text").unwrap(), b"plain text");
    }

    #[test]
    fn test_round_trip() {
        let input = b"1 < 2 && \"quote\"";
        let encoded = HtmlCodec.encode(input).unwrap();
        assert_eq!(HtmlCodec.decode(encoded.as_bytes()).unwrap(), input);
    }
}
