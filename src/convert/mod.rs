// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion pipeline.
//!
//! Runs every registered codec over an input buffer and collects the
//! candidate encodings/decodings:
//! - [`convert`] - Run the global registry over a buffer
//! - [`convert_with`] - Run a caller-supplied registry
//! - [`ConversionResult`] - Per-codec outcome, one entry per codec
//!
//! Both directions of each codec are attempted independently; a failure in
//! either becomes an absent value without affecting the other codecs. The
//! result sequence is total: one entry per codec, in registry order.

pub mod filter;

use serde::Serialize;
use tracing::debug;

use crate::codec::{global_registry, Codec, CodecRegistry};

pub use filter::{is_presentable_bytes, is_presentable_text};

/// Outcome of running one codec over an input buffer.
///
/// `None` marks a direction that failed or was not attempted, as opposed to
/// an empty-but-successful result.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Codec name, unique within the registry.
    pub name: &'static str,
    /// Text produced by the codec's encode direction.
    pub encoded: Option<String>,
    /// Bytes produced by the codec's decode direction.
    pub decoded: Option<Vec<u8>>,
}

impl ConversionResult {
    /// Encoded text, if presentable against the given input.
    ///
    /// A value is presentable when it is non-empty and differs from the
    /// input, which suppresses trivial identity round-trips.
    pub fn presentable_encoded(&self, input: &[u8]) -> Option<&str> {
        self.encoded
            .as_deref()
            .filter(|text| is_presentable_text(text, input))
    }

    /// Decoded bytes, if presentable against the given input.
    pub fn presentable_decoded(&self, input: &[u8]) -> Option<&[u8]> {
        self.decoded
            .as_deref()
            .filter(|bytes| is_presentable_bytes(bytes, input))
    }
}

/// Run every codec in the global registry over the input buffer.
///
/// An empty input yields an empty result sequence; no codec is attempted.
pub fn convert(input: &[u8]) -> Vec<ConversionResult> {
    convert_with(global_registry(), input)
}

/// Run every codec in the given registry over the input buffer.
pub fn convert_with(registry: &CodecRegistry, input: &[u8]) -> Vec<ConversionResult> {
    if input.is_empty() {
        return Vec::new();
    }

    registry
        .codecs()
        .map(|codec: &dyn Codec| {
            let encoded = match codec.encode(input) {
                Ok(text) => Some(text),
                Err(e) => {
                    debug!(codec = codec.name(), error = %e, "encode failed");
                    None
                }
            };
            let decoded = match codec.decode(input) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    debug!(codec = codec.name(), error = %e, "decode failed");
                    None
                }
            };
            ConversionResult {
                name: codec.name(),
                encoded,
                decoded,
            }
        })
        .collect()
}
