// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Character code codec.

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// Char code codec: a single character <-> its decimal Unicode code point.
///
/// Encode only applies to inputs that are exactly one character; anything
/// else is not applicable rather than malformed.
pub struct CharCodeCodec;

impl Codec for CharCodeCodec {
    fn name(&self) -> &'static str {
        "char code"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok((c as u32).to_string()),
            _ => Err(CodecError::not_applicable(
                self.name(),
                "input is not exactly one character",
            )),
        }
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        let code: u32 = text
            .trim()
            .parse()
            .map_err(|_| CodecError::malformed(self.name(), "not an integer"))?;
        let c = char::from_u32(code).ok_or_else(|| {
            CodecError::malformed(self.name(), format!("{code} is not a valid code point"))
        })?;
        Ok(c.to_string().into_bytes())
    }
}
