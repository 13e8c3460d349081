// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Lowercase hex codec.

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// Hex codec: two lowercase hex digits per byte.
///
/// Decode strips ASCII whitespace first, so dump-style input with spaces and
/// newlines parses directly.
pub struct HexCodec;

impl Codec for HexCodec {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(hex::encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        let stripped: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if stripped.len() % 2 != 0 {
            return Err(CodecError::malformed(self.name(), "odd number of digits"));
        }
        hex::decode(&stripped).map_err(|e| CodecError::malformed(self.name(), e.to_string()))
    }
}
