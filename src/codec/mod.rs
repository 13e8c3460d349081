// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec implementations and the codec registry.
//!
//! This module provides the built-in codecs, one per module:
//! - [`base64`] - Standard base64
//! - [`hex`] - Lowercase hex pairs
//! - [`uri`] - Percent-encoding
//! - [`html`] - HTML entities
//! - [`json`] - JSON string literals
//! - [`charcode`] - Single character <-> code point
//! - [`unicode`] - `\uXXXX` escape sequences
//! - [`unixtime`] - Epoch seconds <-> date text
//! - [`registry`] - Ordered codec registry
//!
//! Every codec is a pure function pair over an in-memory buffer. Encode and
//! decode are independently fallible and are not guaranteed to be inverses
//! for malformed inputs.

pub mod base64;
pub mod charcode;
pub mod hex;
pub mod html;
pub mod json;
pub mod registry;
pub mod unicode;
pub mod unixtime;
pub mod uri;

pub use self::base64::Base64Codec;
pub use self::charcode::CharCodeCodec;
pub use self::hex::HexCodec;
pub use self::html::HtmlCodec;
pub use self::json::JsonCodec;
pub use self::registry::{global_registry, CodecRegistry};
pub use self::unicode::UnicodeCodec;
pub use self::unixtime::UnixTimeCodec;
pub use self::uri::UriCodec;

use crate::core::{CodecError, Result};

/// A named pair of transforms between a byte buffer and a text representation.
///
/// Codecs never mutate the input; they produce new buffers or text. Both
/// directions may fail independently, and a registry of codecs may be shared
/// across threads without locking.
pub trait Codec: Send + Sync {
    /// Unique, stable codec name (registry display order is insertion order).
    fn name(&self) -> &'static str;

    /// Encode raw bytes into this codec's text representation.
    fn encode(&self, input: &[u8]) -> Result<String>;

    /// Decode this codec's text representation back into raw bytes.
    ///
    /// The input buffer is interpreted as UTF-8 text first for codecs whose
    /// wire form is textual.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Interpret the input buffer as UTF-8 text for a text-interpreting codec.
pub(crate) fn input_text<'a>(codec: &str, input: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(input).map_err(|_| CodecError::invalid_utf8(codec))
}
