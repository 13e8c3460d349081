// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Standard base64 codec.

use base64::prelude::*;

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// Base64 codec using the standard alphabet with padding.
pub struct Base64Codec;

impl Codec for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(BASE64_STANDARD.encode(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        BASE64_STANDARD
            .decode(text)
            .map_err(|e| CodecError::malformed(self.name(), e.to_string()))
    }
}
