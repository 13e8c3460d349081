// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON string-literal codec.

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// JSON codec: quotes the input text as a JSON string literal.
///
/// Decode accepts only a JSON string value; other JSON documents (numbers,
/// arrays, objects) are rejected.
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        serde_json::to_string(text).map_err(|e| CodecError::malformed(self.name(), e.to_string()))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        let decoded: String = serde_json::from_str(text)
            .map_err(|e| CodecError::malformed(self.name(), e.to_string()))?;
        Ok(decoded.into_bytes())
    }
}
