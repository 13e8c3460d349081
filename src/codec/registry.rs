// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ordered codec registry.
//!
//! The registry holds the fixed catalog of codecs. Insertion order is
//! semantically meaningful (it is the display/priority order of conversion
//! candidates), so the registry is an ordered list rather than a map.
//!
//! # Example
//!
//! ```
//! use transcodec::codec::{Codec, CodecRegistry};
//!
//! let registry = CodecRegistry::with_builtins();
//! let codec = registry.get("base64").unwrap();
//! assert_eq!(codec.encode(b"hello").unwrap(), "aGVsbG8=");
//! ```

use std::sync::OnceLock;

use super::{
    Base64Codec, CharCodeCodec, Codec, HexCodec, HtmlCodec, JsonCodec, UnicodeCodec,
    UnixTimeCodec, UriCodec,
};

/// Registry holding codecs in a fixed, stable order.
///
/// Read-only after construction; may be shared across threads without
/// coordination.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl CodecRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the full built-in catalog.
    ///
    /// Order: base64, hex, uri, html, json, char code, unicode, unixtime.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Base64Codec));
        registry.register(Box::new(HexCodec));
        registry.register(Box::new(UriCodec));
        registry.register(Box::new(HtmlCodec));
        registry.register(Box::new(JsonCodec));
        registry.register(Box::new(CharCodeCodec));
        registry.register(Box::new(UnicodeCodec));
        registry.register(Box::new(UnixTimeCodec));
        registry
    }

    /// Append a codec to the registry.
    ///
    /// Codecs are displayed in the order they are registered.
    pub fn register(&mut self, codec: Box<dyn Codec>) {
        self.codecs.push(codec);
    }

    /// Look up a codec by name.
    pub fn get(&self, name: &str) -> Option<&dyn Codec> {
        self.codecs
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Iterate the registered codecs in order.
    pub fn codecs(&self) -> impl Iterator<Item = &dyn Codec> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    /// Get all registered codec names, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|c| c.name()).collect()
    }

    /// Get the number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

/// Global codec registry with the built-in catalog.
///
/// This is a convenience singleton for the common case. For a custom catalog,
/// create a `CodecRegistry` instance directly.
static GLOBAL_REGISTRY: OnceLock<CodecRegistry> = OnceLock::new();

/// Get the global codec registry.
pub fn global_registry() -> &'static CodecRegistry {
    GLOBAL_REGISTRY.get_or_init(CodecRegistry::with_builtins)
}
