// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Percent-encoding (URI component) codec.

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// URI codec: percent-encodes the input text per RFC 3986.
///
/// Decode rejects malformed percent sequences instead of passing them
/// through, matching strict URI-component semantics.
pub struct UriCodec;

impl UriCodec {
    /// Every `%` must be followed by exactly two hex digits.
    fn validate_percent_sequences(&self, text: &str) -> Result<()> {
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let valid = bytes.len() >= i + 3
                    && bytes[i + 1].is_ascii_hexdigit()
                    && bytes[i + 2].is_ascii_hexdigit();
                if !valid {
                    return Err(CodecError::malformed(
                        self.name(),
                        format!("malformed percent sequence at offset {i}"),
                    ));
                }
                i += 3;
            } else {
                i += 1;
            }
        }
        Ok(())
    }
}

impl Codec for UriCodec {
    fn name(&self) -> &'static str {
        "uri"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        Ok(urlencoding::encode(text).into_owned())
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        self.validate_percent_sequences(text)?;
        let decoded = urlencoding::decode(text)
            .map_err(|_| CodecError::malformed(self.name(), "decoded bytes are not valid UTF-8"))?;
        Ok(decoded.into_owned().into_bytes())
    }
}
