// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Transcodec
//!
//! Text/binary transcoding toolkit.
//!
//! This library provides a fixed catalog of named, bidirectional byte/text
//! codecs and the tooling around them:
//! - **Codecs** (base64, hex, uri, html, json, char code, unicode, unixtime)
//!   in the [`codec`](crate::codec) module
//! - **Conversion pipeline** that runs every codec over an input buffer in
//!   [`convert`](crate::convert)
//! - **Hex dump** formatting for binary inspection in [`dump`](crate::dump)
//!
//! ## Architecture
//!
//! - `codec/` - The `Codec` trait, one module per built-in codec, and the
//!   ordered `CodecRegistry`
//! - `convert/` - The total conversion pipeline and presentability filtering
//! - `dump/` - Hex dump formatter and buffer statistics
//! - `core/` - Error taxonomy shared by all codecs
//!
//! Every operation is a pure function over an in-memory buffer; the registry
//! is read-only after initialization and shareable across threads.
//!
//! ## Example: Converting a buffer
//!
//! ```rust
//! let results = transcodec::convert(b"68656c6c6f");
//!
//! // one entry per registered codec, in registry order
//! assert_eq!(results.len(), 8);
//!
//! let hex = results.iter().find(|r| r.name == "hex").unwrap();
//! assert_eq!(hex.decoded.as_deref(), Some(&b"hello"[..]));
//! ```
//!
//! ## Example: Single codec by name
//!
//! ```rust
//! use transcodec::{global_registry, Codec};
//!
//! let codec = global_registry().get("base64").unwrap();
//! assert_eq!(codec.encode(b"hello").unwrap(), "aGVsbG8=");
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, Result};

// Codec implementations and registry
pub mod codec;

pub use codec::{global_registry, Codec, CodecRegistry};

// Conversion pipeline
pub mod convert;

pub use convert::{convert, convert_with, ConversionResult};

// Buffer inspection
pub mod dump;

pub use dump::{hexdump, BufferStats};
